//! Task entry point: setup, classification, and the batch run.

use std::fs;
use std::path::{Path, PathBuf};

use crate::batch::classify;
use crate::config::Config;
use crate::error::TaskError;
use crate::process::{check_sources, resolve_compiler, Invoker, Resolver, RunSummary, Runner};

/// What a successful task did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome {
    Compiled {
        summary: RunSummary,
        /// Classifier warnings (missing sources).
        warnings: Vec<String>,
    },
    /// Syntax-check mode; nothing was compiled.
    Checked { files: usize },
}

/// Run the task described by `config`.
///
/// The executable is resolved first; if that fails nothing else happens.
/// In check mode control passes to the syntax checker and no destination
/// is touched.
pub fn run_task(
    config: &Config,
    resolver: &dyn Resolver,
    invoker: &mut dyn Invoker,
) -> Result<TaskOutcome, TaskError> {
    let options = &config.options;
    let executable = resolve_compiler(options, resolver)?;

    if options.check {
        let files = check_sources(options, &executable, &config.files, invoker, Path::is_file)?;
        return Ok(TaskOutcome::Checked { files });
    }

    let classified = classify(&config.files, options.update, Path::is_file);
    create_placeholders(&classified.placeholders)?;

    let summary = Runner::new(options, &executable, invoker).run(&classified.batches)?;
    Ok(TaskOutcome::Compiled {
        summary,
        warnings: classified.warnings,
    })
}

/// Create empty destination files, and their directories, ahead of sass.
fn create_placeholders(paths: &[PathBuf]) -> Result<(), TaskError> {
    for path in paths {
        let placeholder_err = |source: std::io::Error| TaskError::Placeholder {
            path: path.clone(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(placeholder_err)?;
        }
        fs::write(path, "").map_err(placeholder_err)?;
    }
    Ok(())
}
