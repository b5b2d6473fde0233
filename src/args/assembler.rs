//! Argument assembler — all sass args in one place.

use std::collections::BTreeMap;

use crate::args::registry::{
    is_reserved, option_args, FORCE_FLAG, SCSS_FLAG, UPDATE_FLAG, WRAPPER_ARGS,
};
use crate::batch::{Mode, Syntax};
use crate::config::{OptionValue, Options};

/// Builder for arguments passed to one sass invocation.
#[derive(Debug, Clone)]
pub struct ArgAssembler {
    args: Vec<String>,
}

impl ArgAssembler {
    /// Start with an empty arg list.
    pub fn new() -> Self {
        Self { args: Vec::new() }
    }

    /// `exec sass` when running through the bundler wrapper.
    pub fn with_wrapper(mut self, use_wrapper: bool) -> Self {
        if use_wrapper {
            self.args.extend(WRAPPER_ARGS.iter().map(|s| s.to_string()));
        }
        self
    }

    /// `--force` unless the task runs in update mode.
    ///
    /// sass switches to update semantics on its own when given several
    /// files, so full recompiles have to be requested explicitly.
    pub fn with_force(mut self, update_mode: bool) -> Self {
        if !update_mode {
            self.args.push(FORCE_FLAG.into());
        }
        self
    }

    /// Forwarded sass options. Reserved task keys are skipped.
    pub fn with_passthrough(mut self, options: &BTreeMap<String, OptionValue>) -> Self {
        for (key, value) in options {
            if is_reserved(key) {
                continue;
            }
            self.args.extend(option_args(key, value));
        }
        self
    }

    /// `--update` for the update batches.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        if mode == Mode::Update {
            self.args.push(UPDATE_FLAG.into());
        }
        self
    }

    /// `--scss` for plain css sources.
    pub fn with_syntax(mut self, syntax: Syntax) -> Self {
        if syntax == Syntax::Alternate {
            self.args.push(SCSS_FLAG.into());
        }
        self
    }

    /// Add arbitrary extra arguments.
    pub fn with_extra<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(extra.into_iter().map(Into::into));
        self
    }

    /// Build the final argument list.
    pub fn build(self) -> Vec<String> {
        self.args
    }
}

impl Default for ArgAssembler {
    fn default() -> Self {
        Self::new()
    }
}

/// Arguments for one batch invocation, file arguments excluded.
///
/// Order: wrapper args, `--force`, passthrough options, `--update`, `--scss`.
pub fn build_args(options: &Options, use_wrapper: bool, mode: Mode, syntax: Syntax) -> Vec<String> {
    ArgAssembler::new()
        .with_wrapper(use_wrapper)
        .with_force(options.update)
        .with_passthrough(&options.passthrough)
        .with_mode(mode)
        .with_syntax(syntax)
        .build()
}
