//! Shared test utilities: a recording fake sass and canned resolvers.

#![allow(dead_code)]

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use sassbatch::args::InvocationSpec;
use sassbatch::process::{Invoker, ProcessError, Resolver};

/// What the fake compiler does with each destination on success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    /// Write [`compiled`] output, like sass would.
    Write,
    /// Leave the destination as is, like `--update` on an up-to-date file.
    Keep,
    /// Remove the destination, so post-processing has nothing to read.
    Delete,
}

/// How a scripted invocation fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    /// sass ran and exited with this code.
    Exit(i32),
    /// The process could not be started at all.
    Spawn,
}

/// Fake sass that records every invocation.
pub struct RecordingInvoker {
    pub calls: Vec<InvocationSpec>,
    fail_at: Option<(usize, Failure)>,
    output: Output,
}

impl RecordingInvoker {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            fail_at: None,
            output: Output::Write,
        }
    }

    /// Exit with `code` on the `call`-th invocation (0-based).
    pub fn failing_at(call: usize, code: i32) -> Self {
        Self {
            fail_at: Some((call, Failure::Exit(code))),
            ..Self::new()
        }
    }

    /// Fail to spawn on the `call`-th invocation (0-based).
    pub fn spawn_failing_at(call: usize) -> Self {
        Self {
            fail_at: Some((call, Failure::Spawn)),
            ..Self::new()
        }
    }

    pub fn with_output(mut self, output: Output) -> Self {
        self.output = output;
        self
    }
}

impl Invoker for RecordingInvoker {
    fn invoke(&mut self, spec: &InvocationSpec) -> Result<(), ProcessError> {
        let index = self.calls.len();
        self.calls.push(spec.clone());

        let program = spec.executable.display().to_string();
        match self.fail_at {
            Some((call, Failure::Exit(code))) if call == index => {
                return Err(ProcessError::Exit { program, code });
            }
            Some((call, Failure::Spawn)) if call == index => {
                return Err(ProcessError::Spawn {
                    program,
                    source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
                });
            }
            _ => {}
        }

        for arg in &spec.file_args {
            if let Some((source, destination)) = arg.rsplit_once(':') {
                match self.output {
                    Output::Write => fs::write(destination, compiled(Path::new(source))).unwrap(),
                    Output::Keep => {}
                    Output::Delete => fs::remove_file(destination).unwrap(),
                }
            }
        }
        Ok(())
    }
}

/// Content the fake compiler writes for `source`.
pub fn compiled(source: &Path) -> String {
    format!("/* compiled from {} */\nbody{{margin:0}}\n", source.display())
}

/// Resolves every name to `/usr/local/bin/<name>`.
pub struct FixedResolver;

impl Resolver for FixedResolver {
    fn resolve(&self, name: &str) -> Result<PathBuf, String> {
        Ok(PathBuf::from("/usr/local/bin").join(name))
    }
}

/// Resolves nothing.
pub struct EmptyPath;

impl Resolver for EmptyPath {
    fn resolve(&self, _name: &str) -> Result<PathBuf, String> {
        Err("cannot find binary path".into())
    }
}

/// Write `content` to `path`, creating parent directories.
pub fn touch(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}
