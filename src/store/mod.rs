//! Configuration Resource Store
//!
//! Lookup service for named configuration resources. Each resource is a flat map of
//! dot-namespaced keys to raw string values. Stores must report a missing resource as
//! [`StoreError::NotFound`] so callers can tell absence apart from access failures.

pub mod directory;
pub mod memory;
pub mod persistence;

pub use directory::DirectoryConfigStore;
pub use memory::MemoryConfigStore;
pub use persistence::SledConfigStore;

use crate::error::StoreError;
use std::collections::BTreeMap;

/// Key/value body of a stored configuration resource
pub type ResourceData = BTreeMap<String, String>;

/// Named configuration resource lookup
pub trait ConfigStore {
    /// Fetch the resource called `name`.
    fn fetch(&self, name: &str) -> Result<ResourceData, StoreError>;
}

impl<S: ConfigStore + ?Sized> ConfigStore for &S {
    fn fetch(&self, name: &str) -> Result<ResourceData, StoreError> {
        (**self).fetch(name)
    }
}

impl<S: ConfigStore + ?Sized> ConfigStore for Box<S> {
    fn fetch(&self, name: &str) -> Result<ResourceData, StoreError> {
        (**self).fetch(name)
    }
}

/// Reject resource names that could escape a store's namespace.
pub(crate) fn validate_resource_name(name: &str) -> Result<(), StoreError> {
    if name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\')
        || name.contains('\0')
    {
        return Err(StoreError::Backend(format!(
            "invalid resource name '{}'",
            name
        )));
    }
    Ok(())
}
