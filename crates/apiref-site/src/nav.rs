//! Sidebar navigation tree.
//!
//! The tree is a forest under a single `Reference` root:
//! - one node per page kind, in [`DefinitionType::PAGE_KINDS`] order
//! - under each kind, its entries in index ingestion order
//! - under class-like entries, their methods in ingestion order
//!
//! Sibling labels are unique (kind labels, entry names within a kind, method
//! names within a parent), so a label chain identifies at most one node.

use apiref_index::{ApiIndex, DefinitionType, IndexEntry, IndexError, MethodIndexEntry, url};
use serde::Serialize;

use crate::breadcrumbs::REFERENCE_LABEL;

/// Navigation tree node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavNode {
    /// Display label.
    pub label: String,
    /// Link target path.
    pub url: String,
    /// Child nodes in display order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavNode>,
}

impl NavNode {
    /// Build the full tree from the index.
    ///
    /// Loads every page kind that is not loaded yet.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if any kind's index cannot be loaded.
    pub fn build(index: &ApiIndex) -> Result<Self, IndexError> {
        let mut kinds = Vec::with_capacity(DefinitionType::PAGE_KINDS.len());
        for kind in DefinitionType::PAGE_KINDS {
            let kind_index = index.index_for(kind)?;
            kinds.push(Self {
                label: kind_index.kind().label().to_owned(),
                url: url::path_for_kind(kind_index.kind()),
                children: kind_index.entries().iter().map(Self::from_entry).collect(),
            });
        }

        Ok(Self {
            label: REFERENCE_LABEL.to_owned(),
            url: url::REFERENCE_ROOT.to_owned(),
            children: kinds,
        })
    }

    fn from_entry(entry: &IndexEntry) -> Self {
        Self {
            label: entry.name.clone(),
            url: entry.url_path.clone(),
            children: entry
                .methods
                .iter()
                .map(|method| Self {
                    label: method.name.clone(),
                    url: method.url_path.clone(),
                    children: Vec::new(),
                })
                .collect(),
        }
    }

    /// Direct child by label.
    #[must_use]
    pub fn child(&self, label: &str) -> Option<&NavNode> {
        self.children.iter().find(|c| c.label == label)
    }

    /// Node reached by following `path` labels down from this node.
    #[must_use]
    pub fn find<S: AsRef<str>>(&self, path: &[S]) -> Option<&NavNode> {
        path.iter()
            .try_fold(self, |node, label| node.child(label.as_ref()))
    }

    /// Whether `path` denotes an existing chain below this node.
    #[must_use]
    pub fn contains_path<S: AsRef<str>>(&self, path: &[S]) -> bool {
        self.find(path).is_some()
    }

    /// Total number of nodes below this one.
    #[must_use]
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|c| 1 + c.descendant_count())
            .sum()
    }
}

/// Labels identifying a page's node, starting below the tree root.
///
/// `[kind label, entry name]`, plus the method name for method pages.
#[must_use]
pub fn active_nav_path(
    kind: DefinitionType,
    root: &IndexEntry,
    method: Option<&MethodIndexEntry>,
) -> Vec<String> {
    let mut path = vec![kind.label().to_owned(), root.name.clone()];
    if let Some(method) = method {
        path.push(method.name.clone());
    }
    path
}
