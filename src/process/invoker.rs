//! Spawning sass.

use std::process::{Command, Stdio};

use thiserror::Error;

use crate::args::InvocationSpec;

/// Failure of a single sass invocation.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("Failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Exited with error code {code}")]
    Exit { program: String, code: i32 },

    #[error("'{program}' was terminated by a signal")]
    Terminated { program: String },
}

/// Runs one invocation to completion.
pub trait Invoker {
    fn invoke(&mut self, spec: &InvocationSpec) -> Result<(), ProcessError>;
}

/// Spawns the real process with inherited stdio so compiler output is live.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemInvoker;

impl Invoker for SystemInvoker {
    fn invoke(&mut self, spec: &InvocationSpec) -> Result<(), ProcessError> {
        let program = spec.executable.display().to_string();
        tracing::debug!("Command: {}", spec.command_line());

        let status = Command::new(&spec.executable)
            .args(spec.args())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| ProcessError::Spawn {
                program: program.clone(),
                source,
            })?;

        if status.success() {
            return Ok(());
        }

        match status.code() {
            Some(code) => Err(ProcessError::Exit { program, code }),
            None => Err(ProcessError::Terminated { program }),
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn shell(script: &str) -> InvocationSpec {
        InvocationSpec {
            executable: PathBuf::from("/bin/sh"),
            pre_args: vec!["-c".into(), script.into(), "sh".into()],
            passthrough_args: Vec::new(),
            file_args: vec!["a.scss:a.css".into()],
        }
    }

    #[test]
    fn zero_exit_is_success() {
        assert!(SystemInvoker.invoke(&shell("exit 0")).is_ok());
    }

    #[test]
    fn nonzero_exit_carries_code() {
        let err = SystemInvoker.invoke(&shell("exit 3")).unwrap_err();
        assert!(matches!(err, ProcessError::Exit { code: 3, .. }));
        assert_eq!(err.to_string(), "Exited with error code 3");
    }

    #[test]
    fn file_args_reach_the_process() {
        assert!(SystemInvoker
            .invoke(&shell("test \"$1\" = a.scss:a.css"))
            .is_ok());
    }

    #[test]
    fn missing_binary_is_spawn_error() {
        let spec = InvocationSpec {
            executable: PathBuf::from("/definitely/not/here/sass"),
            pre_args: Vec::new(),
            passthrough_args: Vec::new(),
            file_args: Vec::new(),
        };
        let err = SystemInvoker.invoke(&spec).unwrap_err();
        assert!(matches!(err, ProcessError::Spawn { .. }));
    }
}
