//! Runs the batches in order and post-processes what they produce.

use std::path::{Path, PathBuf};

use crate::args::InvocationSpec;
use crate::banner::{apply_banner, has_banner};
use crate::batch::{Batches, Mode};
use crate::config::Options;
use crate::error::TaskError;
use crate::process::invoker::Invoker;

/// Outcome of a successful run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of sass processes spawned.
    pub invocations: usize,
    /// Destinations written, in the order they were post-processed.
    pub produced: Vec<PathBuf>,
}

/// Sequences one sass invocation per non-empty batch.
///
/// Batches run strictly one after another. The first failure ends the run;
/// banners already written by earlier batches stay in place.
pub struct Runner<'a, I: Invoker + ?Sized> {
    options: &'a Options,
    executable: &'a Path,
    invoker: &'a mut I,
}

impl<'a, I: Invoker + ?Sized> Runner<'a, I> {
    pub fn new(options: &'a Options, executable: &'a Path, invoker: &'a mut I) -> Self {
        Self {
            options,
            executable,
            invoker,
        }
    }

    pub fn run(&mut self, batches: &Batches) -> Result<RunSummary, TaskError> {
        let mut summary = RunSummary::default();

        for (key, batch) in batches.iter() {
            if batch.is_empty() {
                continue;
            }

            let spec = InvocationSpec::for_batch(self.options, self.executable, key, batch);
            tracing::info!("Compiling {} file(s) ({})", batch.len(), key);

            if let Err(e) = self.invoker.invoke(&spec) {
                tracing::debug!("Batch {} failed: {}", key, e);
                return Err(e.into());
            }
            summary.invocations += 1;

            for mapping in batch {
                if let Some(banner) = &self.options.banner {
                    if key.mode() == Mode::Update && has_banner(&mapping.destination, banner)? {
                        tracing::debug!("{} is up to date, banner kept", mapping.destination.display());
                    } else {
                        apply_banner(&mapping.destination, banner)?;
                    }
                }
                tracing::info!("File {} created.", mapping.destination.display());
                summary.produced.push(mapping.destination.clone());
            }
        }

        Ok(summary)
    }
}
