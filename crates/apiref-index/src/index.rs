//! Per-kind API index with build-once loading.
//!
//! # Thread Safety
//!
//! [`ApiIndex`] is shared across request handlers without external locking:
//! - Each page kind has a `OnceLock` slot read lock-free once filled
//! - A `Mutex<()>` serializes loads, so concurrent first requests for a kind
//!   run exactly one load and observe the same result
//! - Failed loads leave the slot empty; the error goes to the caller

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use crate::definition_type::DefinitionType;
use crate::entry::{EntryRecord, IndexEntry};
use crate::source::{IndexError, IndexSource};

/// Entries of one kind, in ingestion order, with name lookup.
#[derive(Debug)]
pub struct KindIndex {
    kind: DefinitionType,
    entries: Vec<IndexEntry>,
    by_name: HashMap<String, usize>,
}

impl KindIndex {
    /// Validate records and build the name lookup.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::DuplicateEntry`] if two records share a name, or
    /// any validation error from [`IndexEntry::from_record`].
    pub fn from_records(
        kind: DefinitionType,
        records: Vec<EntryRecord>,
    ) -> Result<Self, IndexError> {
        let mut entries = Vec::with_capacity(records.len());
        let mut by_name = HashMap::with_capacity(records.len());

        for record in records {
            let entry = IndexEntry::from_record(kind, record)?;
            if by_name.contains_key(&entry.name) {
                return Err(IndexError::DuplicateEntry {
                    kind,
                    name: entry.name,
                });
            }
            by_name.insert(entry.name.clone(), entries.len());
            entries.push(entry);
        }

        Ok(Self {
            kind,
            entries,
            by_name,
        })
    }

    /// Kind of every entry in this index.
    #[must_use]
    pub fn kind(&self) -> DefinitionType {
        self.kind
    }

    /// Entry by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&IndexEntry> {
        self.by_name.get(name).map(|&i| &self.entries[i])
    }

    /// Entries in ingestion order.
    #[must_use]
    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Read-only API index over every page kind.
pub struct ApiIndex {
    source: Arc<dyn IndexSource>,
    slots: [OnceLock<KindIndex>; DefinitionType::PAGE_KINDS.len()],
    /// Serializes artifact loads.
    load_lock: Mutex<()>,
}

impl ApiIndex {
    /// Create an index reading artifacts from `source` on first use.
    #[must_use]
    pub fn new(source: Arc<dyn IndexSource>) -> Self {
        Self {
            source,
            slots: Default::default(),
            load_lock: Mutex::new(()),
        }
    }

    /// Index for one page kind, loading it on first access.
    ///
    /// Uses double-checked locking:
    /// 1. Fast path: return the filled slot
    /// 2. Slow path: acquire `load_lock`, recheck, then load and validate
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::NotAPageKind`] for [`DefinitionType::Method`],
    /// or the source/validation error if loading fails.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn index_for(&self, kind: DefinitionType) -> Result<&KindIndex, IndexError> {
        let slot = self.slot(kind).ok_or(IndexError::NotAPageKind(kind))?;

        // Fast path: already loaded
        if let Some(index) = slot.get() {
            return Ok(index);
        }

        let _guard = self.load_lock.lock().unwrap();

        // Double-check after acquiring lock
        if let Some(index) = slot.get() {
            return Ok(index);
        }

        let records = self.source.load(kind)?;
        let index = KindIndex::from_records(kind, records)?;
        tracing::info!(kind = %kind, entries = index.len(), "Loaded API index");

        Ok(slot.get_or_init(|| index))
    }

    /// Look up an entry by kind and exact name.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if the kind's index cannot be loaded.
    pub fn lookup(
        &self,
        kind: DefinitionType,
        name: &str,
    ) -> Result<Option<&IndexEntry>, IndexError> {
        Ok(self.index_for(kind)?.get(name))
    }

    /// Load every page kind now.
    ///
    /// Returns the total number of entries across all kinds.
    ///
    /// # Errors
    ///
    /// Returns the first [`IndexError`] encountered.
    pub fn preload(&self) -> Result<usize, IndexError> {
        let mut total = 0;
        for kind in DefinitionType::PAGE_KINDS {
            total += self.index_for(kind)?.len();
        }
        Ok(total)
    }

    fn slot(&self, kind: DefinitionType) -> Option<&OnceLock<KindIndex>> {
        DefinitionType::PAGE_KINDS
            .iter()
            .position(|&k| k == kind)
            .map(|i| &self.slots[i])
    }
}

#[cfg(test)]
mod tests {
    // Ensure ApiIndex is Send + Sync for use with Arc
    static_assertions::assert_impl_all!(super::ApiIndex: Send, Sync);

    use std::thread;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::mock::MockIndexSource;

    fn create_index(source: MockIndexSource) -> (Arc<MockIndexSource>, ApiIndex) {
        let source = Arc::new(source);
        let index = ApiIndex::new(Arc::clone(&source) as Arc<dyn IndexSource>);
        (source, index)
    }

    #[test]
    fn test_lookup_returns_entry_of_requested_kind() {
        let (_, index) = create_index(
            MockIndexSource::new()
                .with_entry(DefinitionType::Function, "strlen")
                .with_entry(DefinitionType::Class, "MyClass"),
        );

        let entry = index
            .lookup(DefinitionType::Function, "strlen")
            .unwrap()
            .unwrap();

        assert_eq!(entry.name, "strlen");
        assert_eq!(entry.kind, DefinitionType::Function);
        assert_eq!(entry.url_path, "/reference/function/strlen/");
    }

    #[test]
    fn test_lookup_miss_returns_none() {
        let (_, index) =
            create_index(MockIndexSource::new().with_entry(DefinitionType::Class, "A"));

        assert!(index.lookup(DefinitionType::Class, "B").unwrap().is_none());
        assert!(index.lookup(DefinitionType::Interface, "A").unwrap().is_none());
    }

    #[test]
    fn test_index_for_loads_once() {
        let (source, index) =
            create_index(MockIndexSource::new().with_entry(DefinitionType::Class, "A"));

        index.index_for(DefinitionType::Class).unwrap();
        index.index_for(DefinitionType::Class).unwrap();
        index.lookup(DefinitionType::Class, "A").unwrap();

        assert_eq!(source.load_count(), 1);
    }

    #[test]
    fn test_concurrent_first_access_loads_once() {
        let (source, index) =
            create_index(MockIndexSource::new().with_entry(DefinitionType::Class, "A"));

        thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    let kind_index = index.index_for(DefinitionType::Class).unwrap();
                    assert_eq!(kind_index.len(), 1);
                });
            }
        });

        assert_eq!(source.load_count(), 1);
    }

    #[test]
    fn test_index_for_method_kind_fails() {
        let (_, index) = create_index(MockIndexSource::new());

        let err = index.index_for(DefinitionType::Method).unwrap_err();

        assert!(matches!(err, IndexError::NotAPageKind(DefinitionType::Method)));
    }

    #[test]
    fn test_entries_keep_ingestion_order() {
        let (_, index) = create_index(
            MockIndexSource::new()
                .with_entry(DefinitionType::Function, "zeta")
                .with_entry(DefinitionType::Function, "alpha")
                .with_entry(DefinitionType::Function, "mid"),
        );

        let names: Vec<_> = index
            .index_for(DefinitionType::Function)
            .unwrap()
            .entries()
            .iter()
            .map(|e| e.name.as_str())
            .collect();

        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_duplicate_entry_fails_load() {
        let (_, index) = create_index(
            MockIndexSource::new()
                .with_entry(DefinitionType::Class, "A")
                .with_entry(DefinitionType::Class, "A"),
        );

        let err = index.index_for(DefinitionType::Class).unwrap_err();

        assert!(matches!(err, IndexError::DuplicateEntry { .. }), "{err:?}");
    }

    #[test]
    fn test_failed_load_is_not_cached() {
        let (source, index) = create_index(
            MockIndexSource::new()
                .with_entry(DefinitionType::Class, "A")
                .with_entry(DefinitionType::Class, "A"),
        );

        assert!(index.index_for(DefinitionType::Class).is_err());
        assert!(index.index_for(DefinitionType::Class).is_err());

        assert_eq!(source.load_count(), 2);
    }

    #[test]
    fn test_preload_counts_all_kinds() {
        let (source, index) = create_index(
            MockIndexSource::new()
                .with_entry(DefinitionType::Class, "A")
                .with_entry(DefinitionType::Trait, "T")
                .with_entry(DefinitionType::Function, "f"),
        );

        let total = index.preload().unwrap();

        assert_eq!(total, 3);
        assert_eq!(source.load_count(), DefinitionType::PAGE_KINDS.len());
    }
}
