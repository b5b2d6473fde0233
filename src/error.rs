//! Run-level errors.
//!
//! A missing source file is not an error: it is reported as a warning by the
//! classifier and the run continues. Everything here stops the run.

use std::path::PathBuf;

use thiserror::Error;

use crate::banner::BannerError;
use crate::process::{ProcessError, ResolveError};

/// Errors that abort a task run.
#[derive(Debug, Error)]
pub enum TaskError {
    /// sass (or bundle) is not on PATH; nothing was run.
    #[error(transparent)]
    MissingExecutable(#[from] ResolveError),

    /// A batch invocation failed; later batches were not run.
    #[error(transparent)]
    Process(#[from] ProcessError),

    /// A compiled file could not be updated with the banner.
    #[error(transparent)]
    PostProcess(#[from] BannerError),

    #[error("Failed to create placeholder '{path}': {source}")]
    Placeholder {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Syntax check failed for {} file(s)", .failed.len())]
    CheckFailed { failed: Vec<PathBuf> },
}
