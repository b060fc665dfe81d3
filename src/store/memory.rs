//! In-memory configuration store

use super::{ConfigStore, ResourceData};
use crate::error::StoreError;
use std::collections::HashMap;

/// Map-backed store, useful for embedding and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryConfigStore {
    resources: HashMap<String, ResourceData>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style variant of [`insert`](Self::insert).
    pub fn with_resource<I, K, V>(mut self, name: &str, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.insert(name, entries);
        self
    }

    /// Store a resource, replacing any existing one with the same name.
    pub fn insert<I, K, V>(&mut self, name: &str, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let data = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.resources.insert(name.to_string(), data);
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

impl ConfigStore for MemoryConfigStore {
    fn fetch(&self, name: &str) -> Result<ResourceData, StoreError> {
        self.resources
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }
}
