//! Banner injection for compiled files.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Separator between the banner and the compiled output.
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

#[derive(Debug, Error)]
pub enum BannerError {
    #[error("Failed to read '{path}' to add banner: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write banner to '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Prepend `banner` and a line separator to `destination`.
///
/// The existing bytes are kept untouched after the separator.
pub fn apply_banner(destination: &Path, banner: &str) -> Result<(), BannerError> {
    tracing::debug!("Writing CSS banner for {}", destination.display());

    let existing = fs::read(destination).map_err(|e| BannerError::Read {
        path: destination.to_path_buf(),
        source: e,
    })?;

    let mut content = Vec::with_capacity(banner.len() + LINE_SEPARATOR.len() + existing.len());
    content.extend_from_slice(banner.as_bytes());
    content.extend_from_slice(LINE_SEPARATOR.as_bytes());
    content.extend_from_slice(&existing);

    fs::write(destination, content).map_err(|e| BannerError::Write {
        path: destination.to_path_buf(),
        source: e,
    })
}

/// Whether `destination` already opens with `banner` and the line separator.
///
/// `--update` leaves up-to-date files alone, so their banner from an earlier
/// run is still in place.
pub fn has_banner(destination: &Path, banner: &str) -> Result<bool, BannerError> {
    let existing = fs::read(destination).map_err(|e| BannerError::Read {
        path: destination.to_path_buf(),
        source: e,
    })?;

    let prefix = [banner.as_bytes(), LINE_SEPARATOR.as_bytes()].concat();
    Ok(existing.starts_with(&prefix))
}
