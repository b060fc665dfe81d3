//! Sled persistence for configuration resources

use super::{validate_resource_name, ConfigStore, ResourceData};
use crate::error::StoreError;
use bincode;
use sled;
use std::path::Path;

/// Sled-based implementation of ConfigStore
///
/// Each resource is stored under its name as a bincode-encoded [`ResourceData`].
pub struct SledConfigStore {
    db: sled::Db,
}

impl SledConfigStore {
    /// Open (or create) a store at the given directory
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let db = sled::open(path)
            .map_err(|e| StoreError::Backend(format!("Failed to open sled database: {}", e)))?;
        Ok(Self { db })
    }

    /// Store a resource, replacing any existing body.
    pub fn put(&self, name: &str, data: &ResourceData) -> Result<(), StoreError> {
        validate_resource_name(name)?;
        let value = bincode::serialize(data).map_err(|e| {
            StoreError::Backend(format!("Failed to serialize resource '{}': {}", name, e))
        })?;
        self.db
            .insert(name.as_bytes(), value)
            .map_err(|e| StoreError::Backend(format!("Failed to put resource '{}': {}", name, e)))?;
        Ok(())
    }

    /// Names of all stored resources, in key order
    pub fn names(&self) -> Result<Vec<String>, StoreError> {
        let mut names = Vec::new();
        for item in self.db.iter() {
            let (key, _) = item
                .map_err(|e| StoreError::Backend(format!("Failed to iterate store: {}", e)))?;
            names.push(String::from_utf8_lossy(&key).into_owned());
        }
        Ok(names)
    }

    /// Flush all pending writes to disk
    pub fn flush(&self) -> Result<(), StoreError> {
        self.db
            .flush()
            .map_err(|e| StoreError::Backend(format!("Failed to flush database: {}", e)))?;
        Ok(())
    }
}

impl ConfigStore for SledConfigStore {
    fn fetch(&self, name: &str) -> Result<ResourceData, StoreError> {
        validate_resource_name(name)?;
        match self
            .db
            .get(name.as_bytes())
            .map_err(|e| StoreError::Backend(format!("Failed to get resource '{}': {}", name, e)))?
        {
            Some(value) => bincode::deserialize(&value).map_err(|e| {
                StoreError::Backend(format!("Failed to deserialize resource '{}': {}", name, e))
            }),
            None => Err(StoreError::NotFound(name.to_string())),
        }
    }
}
