//! Filesystem index source.
//!
//! Reads one JSON artifact per page kind from an index directory:
//! `class.json`, `interface.json`, `function.json`, and so on. Each file
//! holds an array of [`EntryRecord`]s.

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::definition_type::DefinitionType;
use crate::entry::EntryRecord;
use crate::source::{IndexError, IndexSource};

/// Index source backed by a directory of JSON artifacts.
#[derive(Debug)]
pub struct FsIndexSource {
    index_dir: PathBuf,
}

impl FsIndexSource {
    /// Create a source reading from `index_dir`.
    #[must_use]
    pub fn new(index_dir: PathBuf) -> Self {
        Self { index_dir }
    }

    /// Artifact path for a kind.
    #[must_use]
    pub fn artifact_path(&self, kind: DefinitionType) -> PathBuf {
        self.index_dir.join(format!("{}.json", kind.url_segment()))
    }
}

impl IndexSource for FsIndexSource {
    fn load(&self, kind: DefinitionType) -> Result<Vec<EntryRecord>, IndexError> {
        let path = self.artifact_path(kind);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(kind = %kind, path = %path.display(), "No index artifact");
                return Ok(Vec::new());
            }
            Err(source) => return Err(IndexError::Io { path, source }),
        };

        serde_json::from_str(&content).map_err(|source| IndexError::Parse { path, source })
    }
}
