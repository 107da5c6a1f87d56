//! Pre-rendered content store.
//!
//! Content fragments are produced by the build pipeline and keyed by the
//! `htmlPath` of their index entry. The store only checks for and hands out
//! fragments; it never interprets them.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

/// Error reading a content fragment.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// No fragment stored under this reference.
    #[error("Content not found: {0}")]
    NotFound(String),
    /// Reference is not a plain relative path.
    #[error("Invalid content reference: {0}")]
    InvalidPath(String),
    /// Fragment exists but cannot be read.
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Lookup of pre-rendered content by reference.
pub trait ContentStore: Send + Sync {
    /// Whether a fragment exists for `content_ref`.
    ///
    /// Returns `false` on errors (treats errors as "doesn't exist").
    fn exists(&self, content_ref: &str) -> bool;

    /// Read the fragment stored under `content_ref`.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if the fragment is missing or unreadable.
    fn read(&self, content_ref: &str) -> Result<String, ContentError>;
}

/// Content store backed by a directory of HTML fragments.
#[derive(Debug)]
pub struct FsContentStore {
    content_dir: PathBuf,
}

impl FsContentStore {
    /// Create a store rooted at `content_dir`.
    #[must_use]
    pub fn new(content_dir: PathBuf) -> Self {
        Self { content_dir }
    }

    /// Resolve a reference to a file path under the content directory.
    ///
    /// Only plain relative paths are accepted; `..`, absolute paths and
    /// prefixes are rejected.
    fn resolve(&self, content_ref: &str) -> Result<PathBuf, ContentError> {
        let relative = Path::new(content_ref);
        let is_plain = !content_ref.is_empty()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
        if !is_plain {
            return Err(ContentError::InvalidPath(content_ref.to_owned()));
        }
        Ok(self.content_dir.join(relative))
    }
}

impl ContentStore for FsContentStore {
    fn exists(&self, content_ref: &str) -> bool {
        self.resolve(content_ref).is_ok_and(|path| path.is_file())
    }

    fn read(&self, content_ref: &str) -> Result<String, ContentError> {
        let path = self.resolve(content_ref)?;
        std::fs::read_to_string(&path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                ContentError::NotFound(content_ref.to_owned())
            } else {
                ContentError::Io { path, source }
            }
        })
    }
}

/// In-memory content store.
#[derive(Debug, Default)]
pub struct MemoryContentStore {
    fragments: HashMap<String, String>,
}

impl MemoryContentStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fragment.
    #[must_use]
    pub fn with_fragment(
        mut self,
        content_ref: impl Into<String>,
        html: impl Into<String>,
    ) -> Self {
        self.fragments.insert(content_ref.into(), html.into());
        self
    }
}

impl ContentStore for MemoryContentStore {
    fn exists(&self, content_ref: &str) -> bool {
        self.fragments.contains_key(content_ref)
    }

    fn read(&self, content_ref: &str) -> Result<String, ContentError> {
        self.fragments
            .get(content_ref)
            .cloned()
            .ok_or_else(|| ContentError::NotFound(content_ref.to_owned()))
    }
}
