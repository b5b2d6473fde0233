//! Batch classifier — file mappings → four batches.

use std::path::{Path, PathBuf};

use crate::batch::{BatchKey, Batches, FileMapping, Mode, Syntax};

/// Sources whose file name starts with this are partials and never compiled directly.
pub const PARTIAL_PREFIX: char = '_';

/// Extension of sass output. Sources with this extension go through `--scss`.
pub const COMPILED_EXTENSION: &str = "css";

/// Result of classifying file mappings.
#[derive(Debug, Clone, Default)]
pub struct ClassifyResult {
    pub batches: Batches,
    /// Destinations that do not exist yet and need an empty placeholder
    /// before sass runs, in input order.
    pub placeholders: Vec<PathBuf>,
    /// Warnings produced during classification (e.g., missing sources).
    pub warnings: Vec<String>,
}

/// Sort mappings into batches.
///
/// `exists` answers whether a path currently exists on disk. It is asked
/// about each source and, for compiled mappings, its destination.
pub fn classify<F>(mappings: &[FileMapping], update: bool, exists: F) -> ClassifyResult
where
    F: Fn(&Path) -> bool,
{
    let mut result = ClassifyResult::default();

    for mapping in mappings {
        if !exists(mapping.source.as_path()) {
            let warning = format!("Source file \"{}\" not found.", mapping.source.display());
            tracing::warn!("{}", warning);
            result.warnings.push(warning);
            continue;
        }

        if is_partial(&mapping.source) {
            tracing::debug!("Skipping partial {}", mapping.source.display());
            continue;
        }

        let destination_exists = exists(mapping.destination.as_path());

        // A destination sass has never written must be compiled in full,
        // otherwise `--update` leaves an empty file behind.
        let mode = if update && destination_exists {
            Mode::Update
        } else {
            Mode::Fresh
        };

        let key = BatchKey::new(mode, syntax_of(mapping));
        result.batches.push(key, mapping.clone());

        if !destination_exists && !result.placeholders.contains(&mapping.destination) {
            result.placeholders.push(mapping.destination.clone());
        }
    }

    result
}

/// Whether `source` is a partial (`_name.scss`), which sass only imports.
pub fn is_partial(source: &Path) -> bool {
    source
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with(PARTIAL_PREFIX))
}

fn syntax_of(mapping: &FileMapping) -> Syntax {
    let is_css = mapping
        .source
        .extension()
        .is_some_and(|ext| ext == COMPILED_EXTENSION);
    if is_css {
        Syntax::Alternate
    } else {
        Syntax::Native
    }
}
