//! Flag registry — sass program names, flags, and option-key translation.

use crate::config::OptionValue;

/// The compiler binary.
pub const COMPILER_PROGRAM: &str = "sass";
/// Runner used when `bundle_exec` is set.
pub const WRAPPER_PROGRAM: &str = "bundle";
/// Arguments placed before everything else when running through the wrapper.
pub const WRAPPER_ARGS: [&str; 2] = ["exec", "sass"];

/// Disables the implicit `--update` sass applies to multi-file invocations.
pub const FORCE_FLAG: &str = "--force";
pub const UPDATE_FLAG: &str = "--update";
/// Treat input as SCSS, used for plain `.css` sources.
pub const SCSS_FLAG: &str = "--scss";
pub const CHECK_FLAG: &str = "--check";

/// Option keys owned by the task itself, in flag form. Never forwarded.
const RESERVED: [&str; 6] = ["bundle-exec", "banner", "update", "force", "f", "check"];

/// Translate an option key to its sass flag.
///
/// `load_path` and `loadPath` both become `--load-path`; single-letter keys
/// become short flags (`t` → `-t`).
pub fn flag_name(key: &str) -> String {
    let kebab = to_kebab(key);
    if kebab.chars().count() == 1 {
        format!("-{}", kebab)
    } else {
        format!("--{}", kebab)
    }
}

/// Whether `key` names a task option rather than a sass option.
pub fn is_reserved(key: &str) -> bool {
    let kebab = to_kebab(key);
    RESERVED.contains(&kebab.as_str())
}

/// Render one passthrough option as sass arguments.
pub fn option_args(key: &str, value: &OptionValue) -> Vec<String> {
    let flag = flag_name(key);
    let mut args = Vec::new();
    push_value(&mut args, &flag, value);
    args
}

fn push_value(args: &mut Vec<String>, flag: &str, value: &OptionValue) {
    match value {
        OptionValue::Bool(true) => args.push(flag.to_string()),
        OptionValue::Bool(false) => {}
        OptionValue::Integer(n) => {
            args.push(flag.to_string());
            args.push(n.to_string());
        }
        OptionValue::Float(n) => {
            args.push(flag.to_string());
            args.push(n.to_string());
        }
        OptionValue::Text(s) => {
            args.push(flag.to_string());
            args.push(s.clone());
        }
        OptionValue::List(items) => {
            for item in items {
                push_value(args, flag, item);
            }
        }
    }
}

fn to_kebab(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, c) in key.chars().enumerate() {
        if c == '_' {
            out.push('-');
        } else if c.is_ascii_uppercase() {
            if i > 0 && !out.ends_with('-') {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
