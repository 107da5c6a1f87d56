//! Mock index source for testing.
//!
//! Provides [`MockIndexSource`] for unit testing without build artifacts.

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::definition_type::DefinitionType;
use crate::entry::{EntryRecord, MethodRecord};
use crate::source::{IndexError, IndexSource};
use crate::url;

/// In-memory index source.
///
/// Records get canonical URL paths computed with the URL builder, so
/// everything added through the builder methods passes index validation.
/// Counts loads to let tests observe caching.
///
/// # Example
///
/// ```ignore
/// use apiref_index::{DefinitionType, MockIndexSource};
///
/// let source = MockIndexSource::new()
///     .with_entry(DefinitionType::Class, "MyClass")
///     .with_method(DefinitionType::Class, "MyClass", "myMethod");
/// ```
#[derive(Debug, Default)]
pub struct MockIndexSource {
    records: RwLock<HashMap<DefinitionType, Vec<EntryRecord>>>,
    loads: AtomicUsize,
}

impl MockIndexSource {
    /// Create an empty mock source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry with a canonical URL and a derived content reference.
    ///
    /// # Panics
    ///
    /// Panics if `kind` is not a page kind or the internal lock is poisoned.
    #[must_use]
    pub fn with_entry(self, kind: DefinitionType, name: &str) -> Self {
        let url_path = url::path_for(kind, name).unwrap();
        self.with_record(
            kind,
            EntryRecord {
                name: name.to_owned(),
                url_path,
                html_path: format!("{kind}.{name}.html"),
                methods: Vec::new(),
            },
        )
    }

    /// Add a method to a previously added class-like entry.
    ///
    /// # Panics
    ///
    /// Panics if the parent entry was not added first, if `kind` is not
    /// class-like, or the internal lock is poisoned.
    #[must_use]
    pub fn with_method(self, kind: DefinitionType, class_name: &str, method: &str) -> Self {
        {
            let mut records = self.records.write().unwrap();
            let parent = records
                .get_mut(&kind)
                .and_then(|entries| entries.iter_mut().find(|e| e.name == class_name))
                .unwrap();
            parent.methods.push(MethodRecord {
                name: method.to_owned(),
                class_name: class_name.to_owned(),
                class_type: kind,
                url_path: url::path_for_method(kind, class_name, method).unwrap(),
                html_path: format!("{kind}.{class_name}.{method}.html"),
            });
        }
        self
    }

    /// Add a raw record as-is.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_record(self, kind: DefinitionType, record: EntryRecord) -> Self {
        self.records
            .write()
            .unwrap()
            .entry(kind)
            .or_default()
            .push(record);
        self
    }

    /// Number of [`IndexSource::load`] calls served so far.
    #[must_use]
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

impl IndexSource for MockIndexSource {
    fn load(&self, kind: DefinitionType) -> Result<Vec<EntryRecord>, IndexError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .records
            .read()
            .unwrap()
            .get(&kind)
            .cloned()
            .unwrap_or_default())
    }
}
