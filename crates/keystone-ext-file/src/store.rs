//! In-memory property store.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::RwLock;

use keystone_core::{PropertyId, PropertyRecord};
use keystone_traits::error::TraitError;
use keystone_traits::source::{PropertyFilter, PropertySource};

// =============================================================================
// IN-MEMORY PROPERTY STORE
// =============================================================================

/// One dataset: records keyed by id, each tagged with its insertion sequence.
#[derive(Default)]
struct Generation {
    records: DashMap<PropertyId, (u64, PropertyRecord)>,
    next_seq: AtomicU64,
}

impl Generation {
    fn insert(&self, record: PropertyRecord) -> Option<PropertyRecord> {
        match self.records.entry(record.id.clone()) {
            Entry::Occupied(mut entry) => Some(std::mem::replace(&mut entry.get_mut().1, record)),
            Entry::Vacant(entry) => {
                let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
                entry.insert((seq, record));
                None
            }
        }
    }
}

/// In-memory property store.
///
/// Single-record writes go through a [`DashMap`]. [`replace_all`] builds the
/// new dataset off to the side and swaps it in whole, so a reader sees either
/// the old contents or the new ones, never a mix. Listings come back in
/// insertion order; replacing a record keeps its original position.
///
/// [`replace_all`]: Self::replace_all
pub struct InMemoryPropertyStore {
    current: RwLock<Arc<Generation>>,
}

impl InMemoryPropertyStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Arc::default()),
        }
    }

    /// Create a store holding `records`, in order.
    pub fn from_records(records: impl IntoIterator<Item = PropertyRecord>) -> Self {
        let store = Self::new();
        store.replace_all(records);
        store
    }

    fn generation(&self) -> Arc<Generation> {
        Arc::clone(&self.current.read())
    }

    /// Insert or replace a record. Returns the replaced record, if any.
    ///
    /// An insert racing a [`replace_all`](Self::replace_all) may land in the
    /// outgoing dataset and be dropped with it.
    pub fn insert(&self, record: PropertyRecord) -> Option<PropertyRecord> {
        self.generation().insert(record)
    }

    /// Replace the whole contents with `records` in one step.
    pub fn replace_all(&self, records: impl IntoIterator<Item = PropertyRecord>) {
        let next = Generation::default();
        for record in records {
            next.insert(record);
        }
        *self.current.write() = Arc::new(next);
    }

    /// Every record in insertion order.
    pub fn snapshot(&self) -> Vec<PropertyRecord> {
        let generation = self.generation();
        let mut entries: Vec<(u64, PropertyRecord)> =
            generation.records.iter().map(|r| r.value().clone()).collect();
        entries.sort_by_key(|(seq, _)| *seq);
        entries.into_iter().map(|(_, record)| record).collect()
    }

    /// Look up one record.
    pub fn get(&self, id: &PropertyId) -> Option<PropertyRecord> {
        self.generation().records.get(id).map(|r| r.value().1.clone())
    }

    /// Get total count of records.
    pub fn len(&self) -> usize {
        self.generation().records.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.generation().records.is_empty()
    }

    /// Clear all records.
    pub fn clear(&self) {
        *self.current.write() = Arc::default();
    }
}

impl Default for InMemoryPropertyStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PropertySource for InMemoryPropertyStore {
    async fn get_all(&self) -> Result<Vec<PropertyRecord>, TraitError> {
        Ok(self.snapshot())
    }

    async fn get_by_id(&self, id: &PropertyId) -> Result<Option<PropertyRecord>, TraitError> {
        Ok(self.get(id))
    }

    async fn search(&self, filter: &PropertyFilter) -> Result<Vec<PropertyRecord>, TraitError> {
        let mut records = self.snapshot();
        records.retain(|r| filter.matches(r));
        Ok(records)
    }
}
