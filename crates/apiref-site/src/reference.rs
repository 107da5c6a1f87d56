//! Shared reference context.
//!
//! [`Reference`] owns everything request handling reads: the API index, the
//! navigation tree and the content store. It is built once at startup and
//! handed to handlers as `Arc<Reference>`.
//!
//! # Thread Safety
//!
//! `Reference` is designed for concurrent access without external locking:
//! - The index loads each kind once behind its own guard (see [`ApiIndex`])
//! - The navigation tree is built once under `nav_lock` with double-checked
//!   locking and read lock-free afterwards
//! - Nothing is mutated after construction

use std::sync::{Arc, Mutex, OnceLock};

use apiref_index::{ApiIndex, IndexError, IndexSource};

use crate::content::{ContentError, ContentStore};
use crate::nav::NavNode;
use crate::resolver::{self, PageRequest, Resolution, ResolveError};

/// Configuration for [`Reference`].
#[derive(Clone, Debug)]
pub struct ReferenceConfig {
    /// Label of the first breadcrumb.
    pub site_name: String,
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            site_name: "Hack".to_owned(),
        }
    }
}

/// Read-only context for resolving reference pages.
pub struct Reference {
    index: ApiIndex,
    content: Arc<dyn ContentStore>,
    site_name: String,
    nav: OnceLock<NavNode>,
    /// Serializes navigation tree builds.
    nav_lock: Mutex<()>,
}

impl Reference {
    /// Create a reference over an index source and a content store.
    ///
    /// Nothing is loaded until first use or [`warm_up`](Self::warm_up).
    #[must_use]
    pub fn new(
        source: Arc<dyn IndexSource>,
        content: Arc<dyn ContentStore>,
        config: ReferenceConfig,
    ) -> Self {
        Self {
            index: ApiIndex::new(source),
            content,
            site_name: config.site_name,
            nav: OnceLock::new(),
            nav_lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn index(&self) -> &ApiIndex {
        &self.index
    }

    #[must_use]
    pub fn content(&self) -> &dyn ContentStore {
        self.content.as_ref()
    }

    #[must_use]
    pub fn site_name(&self) -> &str {
        &self.site_name
    }

    /// Full navigation tree, built on first access.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if an index needed by the tree cannot be loaded.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn navigation(&self) -> Result<&NavNode, IndexError> {
        // Fast path: tree built
        if let Some(nav) = self.nav.get() {
            return Ok(nav);
        }

        let _guard = self.nav_lock.lock().unwrap();

        // Double-check after acquiring lock
        if let Some(nav) = self.nav.get() {
            return Ok(nav);
        }

        let nav = NavNode::build(&self.index)?;
        tracing::info!(nodes = nav.descendant_count(), "Built navigation tree");

        Ok(self.nav.get_or_init(|| nav))
    }

    /// Navigation tree if it has been built already.
    pub(crate) fn built_navigation(&self) -> Option<&NavNode> {
        self.nav.get()
    }

    /// Load every index and build the navigation tree now.
    ///
    /// Returns the total number of indexed definitions.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if any artifact cannot be loaded.
    pub fn warm_up(&self) -> Result<usize, IndexError> {
        let total = self.index.preload()?;
        self.navigation()?;
        Ok(total)
    }

    /// Resolve a page request.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::MissingParameter`] or
    /// [`ResolveError::InvalidDefinitionType`] for malformed requests,
    /// [`ResolveError::NotFound`] for unknown names, methods or content, and
    /// [`ResolveError::Index`] if artifacts cannot be loaded.
    pub fn resolve(&self, request: &PageRequest) -> Result<Resolution, ResolveError> {
        resolver::resolve(self, request)
    }

    /// Read the pre-rendered fragment behind a content reference.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if the fragment is missing or unreadable.
    pub fn read_content(&self, content_ref: &str) -> Result<String, ContentError> {
        self.content.read(content_ref)
    }
}
