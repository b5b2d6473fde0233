//! Pipeline — turns a batch into a ready-to-spawn invocation.

use std::path::{Path, PathBuf};

use crate::args::assembler::{build_args, ArgAssembler};
use crate::args::registry::CHECK_FLAG;
use crate::batch::{BatchKey, FileMapping};
use crate::config::Options;

/// Fully resolved arguments for one external process call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationSpec {
    /// Resolved path of `sass`, or `bundle` in wrapper mode.
    pub executable: PathBuf,
    /// Wrapper arguments (`exec sass`), empty without the wrapper.
    pub pre_args: Vec<String>,
    /// Mode flags and forwarded sass options.
    pub passthrough_args: Vec<String>,
    /// One `source:destination` per mapping, or bare sources when checking.
    pub file_args: Vec<String>,
}

impl InvocationSpec {
    /// Invocation compiling `batch` under `key`.
    pub fn for_batch(
        options: &Options,
        executable: &Path,
        key: BatchKey,
        batch: &[FileMapping],
    ) -> Self {
        Self {
            executable: executable.to_path_buf(),
            pre_args: wrapper_args(options),
            passthrough_args: build_args(options, false, key.mode(), key.syntax()),
            file_args: batch.iter().map(FileMapping::to_arg).collect(),
        }
    }

    /// Invocation syntax-checking a single source.
    pub fn for_check(options: &Options, executable: &Path, source: &Path) -> Self {
        let passthrough_args = ArgAssembler::new()
            .with_passthrough(&options.passthrough)
            .with_extra([CHECK_FLAG])
            .build();

        Self {
            executable: executable.to_path_buf(),
            pre_args: wrapper_args(options),
            passthrough_args,
            file_args: vec![source.display().to_string()],
        }
    }

    /// Every argument after the executable, in order.
    pub fn args(&self) -> Vec<String> {
        self.pre_args
            .iter()
            .chain(&self.passthrough_args)
            .chain(&self.file_args)
            .cloned()
            .collect()
    }

    /// Human-readable command line, for logging.
    pub fn command_line(&self) -> String {
        let mut line = self.executable.display().to_string();
        for arg in self.args() {
            line.push(' ');
            line.push_str(&arg);
        }
        line
    }
}

fn wrapper_args(options: &Options) -> Vec<String> {
    ArgAssembler::new().with_wrapper(options.bundle_exec).build()
}
