//! In-memory cache of loaded cutter table partitions
//!
//! Tables are static, so entries live for the lifetime of the cache with no
//! eviction. Two concurrent misses may both load the same partition; the
//! later insert just replaces identical data.

use dashmap::DashMap;
use std::sync::Arc;

use crate::models::ReferenceEntry;

#[derive(Default)]
pub struct PartitionCache {
    tables: DashMap<String, Arc<Vec<ReferenceEntry>>>,
}

impl PartitionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, partition: &str) -> Option<Arc<Vec<ReferenceEntry>>> {
        self.tables.get(partition).map(|entry| Arc::clone(entry.value()))
    }

    pub fn insert(&self, partition: &str, entries: Vec<ReferenceEntry>) -> Arc<Vec<ReferenceEntry>> {
        let table = Arc::new(entries);
        self.tables.insert(partition.to_string(), Arc::clone(&table));
        table
    }

    pub fn contains(&self, partition: &str) -> bool {
        self.tables.contains_key(partition)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
