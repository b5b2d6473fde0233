//! Executable lookup on PATH.

use std::path::PathBuf;

use thiserror::Error;

use crate::args::{COMPILER_PROGRAM, WRAPPER_PROGRAM};
use crate::config::Options;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("{hint}\n'{name}' not found: {reason}")]
    NotFound {
        name: String,
        hint: &'static str,
        reason: String,
    },
}

/// Finds executables by name.
pub trait Resolver {
    fn resolve(&self, name: &str) -> Result<PathBuf, String>;
}

/// Looks executables up on `PATH`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathResolver;

impl Resolver for PathResolver {
    fn resolve(&self, name: &str) -> Result<PathBuf, String> {
        which::which(name).map_err(|e| e.to_string())
    }
}

/// Resolve the program the task spawns: `bundle` in wrapper mode, else `sass`.
pub fn resolve_compiler(
    options: &Options,
    resolver: &dyn Resolver,
) -> Result<PathBuf, ResolveError> {
    let (name, hint) = if options.bundle_exec {
        (
            WRAPPER_PROGRAM,
            "bundle_exec option set but no Bundler executable found in your PATH.",
        )
    } else {
        (
            COMPILER_PROGRAM,
            "You need to have Ruby and Sass installed and in your PATH for this task to work.",
        )
    };

    let path = resolver
        .resolve(name)
        .map_err(|reason| ResolveError::NotFound {
            name: name.to_string(),
            hint,
            reason,
        })?;
    tracing::debug!("Using {} at {}", name, path.display());
    Ok(path)
}
