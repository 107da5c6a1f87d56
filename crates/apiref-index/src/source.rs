//! Index source trait and error types.
//!
//! An [`IndexSource`] hands out the raw records of one page kind, in the
//! order the build pipeline ingested them. Validation and caching happen in
//! [`ApiIndex`](crate::ApiIndex); sources only read.

use std::path::PathBuf;

use crate::definition_type::DefinitionType;
use crate::entry::EntryRecord;

/// Error loading or validating index artifacts.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// Artifact exists but cannot be read.
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Artifact is not valid JSON of the expected shape.
    #[error("Invalid index artifact {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Two entries of one kind share a name.
    #[error("Duplicate {kind} entry: {name}")]
    DuplicateEntry { kind: DefinitionType, name: String },
    /// Two methods of one entry share a name.
    #[error("Duplicate method {method} in {parent}")]
    DuplicateMethod { parent: String, method: String },
    /// Method record names a different parent than the entry holding it.
    #[error("Method {method} belongs to {owner}, found under {parent}")]
    ForeignMethod {
        method: String,
        owner: String,
        parent: String,
    },
    /// Methods attached to a kind that cannot own them.
    #[error("{kind} {name} cannot have methods")]
    UnexpectedMethods { kind: DefinitionType, name: String },
    /// Stored URL path differs from the canonical one.
    #[error("URL mismatch for {name}: stored {stored}, expected {expected}")]
    UrlMismatch {
        name: String,
        stored: String,
        expected: String,
    },
    /// Kind has no index of its own.
    #[error("{0} has no index of its own")]
    NotAPageKind(DefinitionType),
}

/// Backend for persisted index artifacts.
pub trait IndexSource: Send + Sync {
    /// Load every record of `kind`, in ingestion order.
    ///
    /// A kind without an artifact has no entries and yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if the artifact exists but cannot be read or parsed.
    fn load(&self, kind: DefinitionType) -> Result<Vec<EntryRecord>, IndexError>;
}
