//! File mappings and the four compile batches they are sorted into.

mod classifier;

pub use classifier::{classify, is_partial, ClassifyResult, COMPILED_EXTENSION, PARTIAL_PREFIX};

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One source file and the destination sass should write it to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileMapping {
    #[serde(rename = "src")]
    pub source: PathBuf,
    #[serde(rename = "dest")]
    pub destination: PathBuf,
}

impl FileMapping {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }

    /// Parse a `SRC:DEST` pair.
    ///
    /// Splits on the last `:` that is not part of a drive prefix such as
    /// `C:\` or `C:/`, so drive letters survive on either side.
    pub fn parse(pair: &str) -> Option<Self> {
        let at = pair
            .rmatch_indices(':')
            .map(|(i, _)| i)
            .find(|&i| !is_drive_colon(pair, i))
            .or_else(|| pair.rfind(':'))?;
        let (source, destination) = (&pair[..at], &pair[at + 1..]);
        if source.is_empty() || destination.is_empty() {
            return None;
        }
        Some(Self::new(source, destination))
    }

    /// Positional argument form understood by sass (`source:destination`).
    pub fn to_arg(&self) -> String {
        format!("{}:{}", self.source.display(), self.destination.display())
    }
}

/// A drive colon follows a lone letter at the start of a path and precedes a separator.
fn is_drive_colon(pair: &str, at: usize) -> bool {
    let bytes = pair.as_bytes();
    let letter = at >= 1 && bytes[at - 1].is_ascii_alphabetic();
    let starts_path = at == 1 || (at >= 2 && bytes[at - 2] == b':');
    let separator = matches!(bytes.get(at + 1), Some(b'\\' | b'/'));
    letter && starts_path && separator
}

/// Whether sass recompiles from scratch or only when the source changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Fresh,
    Update,
}

/// Input syntax of a mapping's source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Syntax {
    /// Default sass input.
    Native,
    /// Plain `.css` sources, fed through `--scss`.
    Alternate,
}

/// Identifies one of the four batches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BatchKey {
    FreshNative,
    FreshAlternate,
    UpdateNative,
    UpdateAlternate,
}

impl BatchKey {
    /// Order in which batches are handed to sass.
    pub const ORDER: [BatchKey; 4] = [
        BatchKey::FreshNative,
        BatchKey::FreshAlternate,
        BatchKey::UpdateNative,
        BatchKey::UpdateAlternate,
    ];

    pub fn new(mode: Mode, syntax: Syntax) -> Self {
        match (mode, syntax) {
            (Mode::Fresh, Syntax::Native) => BatchKey::FreshNative,
            (Mode::Fresh, Syntax::Alternate) => BatchKey::FreshAlternate,
            (Mode::Update, Syntax::Native) => BatchKey::UpdateNative,
            (Mode::Update, Syntax::Alternate) => BatchKey::UpdateAlternate,
        }
    }

    pub fn mode(self) -> Mode {
        match self {
            BatchKey::FreshNative | BatchKey::FreshAlternate => Mode::Fresh,
            BatchKey::UpdateNative | BatchKey::UpdateAlternate => Mode::Update,
        }
    }

    pub fn syntax(self) -> Syntax {
        match self {
            BatchKey::FreshNative | BatchKey::UpdateNative => Syntax::Native,
            BatchKey::FreshAlternate | BatchKey::UpdateAlternate => Syntax::Alternate,
        }
    }

    fn index(self) -> usize {
        match self {
            BatchKey::FreshNative => 0,
            BatchKey::FreshAlternate => 1,
            BatchKey::UpdateNative => 2,
            BatchKey::UpdateAlternate => 3,
        }
    }
}

impl fmt::Display for BatchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BatchKey::FreshNative => "fresh/native",
            BatchKey::FreshAlternate => "fresh/scss",
            BatchKey::UpdateNative => "update/native",
            BatchKey::UpdateAlternate => "update/scss",
        };
        f.write_str(name)
    }
}

/// The four batches, each keeping its mappings in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Batches {
    slots: [Vec<FileMapping>; 4],
}

impl Batches {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: BatchKey, mapping: FileMapping) {
        self.slots[key.index()].push(mapping);
    }

    pub fn get(&self, key: BatchKey) -> &[FileMapping] {
        &self.slots[key.index()]
    }

    /// All batches in execution order, empty ones included.
    pub fn iter(&self) -> impl Iterator<Item = (BatchKey, &[FileMapping])> + '_ {
        BatchKey::ORDER.into_iter().map(move |key| (key, self.get(key)))
    }

    /// Total number of mappings across all batches.
    pub fn len(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Vec::is_empty)
    }
}
