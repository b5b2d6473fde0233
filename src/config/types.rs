use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::batch::FileMapping;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub options: Options,
    /// Source-to-destination mappings, in compile order.
    #[serde(default)]
    pub files: Vec<FileMapping>,
}

/// Task options. Anything not listed here is forwarded to sass as a flag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Options {
    /// Run sass through `bundle exec`.
    #[serde(default, alias = "bundleExec")]
    pub bundle_exec: bool,
    /// Text prepended to every compiled file.
    #[serde(default)]
    pub banner: Option<String>,
    /// Only recompile files whose sources changed.
    #[serde(default)]
    pub update: bool,
    /// Accepted for compatibility; full recompiles are already forced
    /// whenever `update` is off.
    #[serde(default, alias = "f")]
    pub force: bool,
    /// Syntax-check sources instead of compiling them.
    #[serde(default)]
    pub check: bool,
    /// Extra sass options (e.g. `style = "compressed"` → `--style compressed`).
    #[serde(flatten)]
    pub passthrough: BTreeMap<String, OptionValue>,
}

/// Value of a passthrough option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// `true` → bare flag, `false` → omitted.
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    /// Flag repeated once per element.
    List(Vec<OptionValue>),
}
