//! Syntax-check mode: `sass --check` per source, nothing written.

use std::path::{Path, PathBuf};

use crate::args::InvocationSpec;
use crate::batch::{is_partial, FileMapping};
use crate::config::Options;
use crate::error::TaskError;
use crate::process::invoker::{Invoker, ProcessError};

/// Check every existing, non-partial source in `mappings`.
///
/// All sources are checked even after a failure, so one run reports every
/// broken file. Spawn failures stop immediately since nothing else can run.
/// Returns the number of files checked.
pub fn check_sources(
    options: &Options,
    executable: &Path,
    mappings: &[FileMapping],
    invoker: &mut dyn Invoker,
    exists: impl Fn(&Path) -> bool,
) -> Result<usize, TaskError> {
    let sources = checkable_sources(mappings, &exists);
    let mut failed: Vec<PathBuf> = Vec::new();

    for source in &sources {
        let spec = InvocationSpec::for_check(options, executable, source);
        match invoker.invoke(&spec) {
            Ok(()) => tracing::debug!("{} is valid", source.display()),
            Err(e @ ProcessError::Spawn { .. }) => return Err(e.into()),
            Err(e) => {
                tracing::warn!("{}: {}", source.display(), e);
                failed.push(source.clone());
            }
        }
    }

    if failed.is_empty() {
        tracing::info!("{} file(s) passed the syntax check", sources.len());
        Ok(sources.len())
    } else {
        Err(TaskError::CheckFailed { failed })
    }
}

/// Existing, non-partial sources, deduplicated, in input order.
fn checkable_sources(mappings: &[FileMapping], exists: &impl Fn(&Path) -> bool) -> Vec<PathBuf> {
    let mut sources: Vec<PathBuf> = Vec::new();
    for mapping in mappings {
        if !exists(mapping.source.as_path()) {
            tracing::warn!("Source file \"{}\" not found.", mapping.source.display());
            continue;
        }
        if is_partial(&mapping.source) || sources.contains(&mapping.source) {
            continue;
        }
        sources.push(mapping.source.clone());
    }
    sources
}
