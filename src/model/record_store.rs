//! Deduplicating accumulator of fetched records.
//!
//! Keyed by [`RecordId`], ordered by first insertion. Re-inserting an id replaces its
//! value in place; records are never evicted.

use crate::model::{Record, RecordId};
use indexmap::IndexMap;

/// Ordered map from id to record; no two entries share an id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: IndexMap<RecordId, Record>,
}

impl RecordStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a page of incoming records into a copy of this store.
    ///
    /// Known ids are replaced in place (position unchanged); new ids are appended in
    /// incoming order. `self` is left untouched.
    pub fn merge(&self, incoming: impl IntoIterator<Item = Record>) -> RecordStore {
        let mut merged = self.clone();
        for record in incoming {
            // IndexMap::insert keeps the slot of an existing key
            merged.records.insert(record.id, record);
        }
        merged
    }

    /// Number of distinct ids.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True before anything has been merged.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Stored value for `id`.
    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.get(&id)
    }

    /// Whether `id` has been merged.
    pub fn contains(&self, id: RecordId) -> bool {
        self.records.contains_key(&id)
    }

    /// Records in first-insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Ids in first-insertion order.
    pub fn ids(&self) -> impl Iterator<Item = RecordId> + '_ {
        self.records.keys().copied()
    }

    /// Owned copy of the records in first-insertion order.
    pub fn to_vec(&self) -> Vec<Record> {
        self.records.values().cloned().collect()
    }
}

impl FromIterator<Record> for RecordStore {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        RecordStore::new().merge(iter)
    }
}
