//! Application state.
//!
//! Shared state for all request handlers.

use std::sync::Arc;

use apiref_site::Reference;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Resolution context (index, navigation, content).
    pub(crate) reference: Arc<Reference>,
    /// Application version for cache invalidation.
    pub(crate) version: String,
}
