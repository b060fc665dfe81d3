//! Directory-backed configuration store: one `<name>.toml` file per resource.
//!
//! Nested tables flatten into dot-namespaced keys, so
//!
//! ```toml
//! workercount = 3
//!
//! [metrics]
//! enable = "true"
//! ```
//!
//! yields `workercount = "3"` and `metrics.enable = "true"`.

use super::{validate_resource_name, ConfigStore, ResourceData};
use crate::error::StoreError;
use std::path::{Path, PathBuf};
use toml::{Table, Value};
use tracing::debug;

pub struct DirectoryConfigStore {
    root: PathBuf,
}

impl DirectoryConfigStore {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// File backing the resource called `name`.
    pub fn resource_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.toml", name))
    }
}

impl ConfigStore for DirectoryConfigStore {
    fn fetch(&self, name: &str) -> Result<ResourceData, StoreError> {
        validate_resource_name(name)?;
        let path = self.resource_path(name);

        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "Config resource file not found");
                return Err(StoreError::NotFound(name.to_string()));
            }
            Err(e) => return Err(StoreError::IoError(e)),
        };

        let table: Table = contents.parse().map_err(|e| {
            StoreError::Backend(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        let mut data = ResourceData::new();
        flatten(None, &table, &mut data)?;
        Ok(data)
    }
}

fn flatten(prefix: Option<&str>, table: &Table, out: &mut ResourceData) -> Result<(), StoreError> {
    for (name, value) in table {
        let key = match prefix {
            Some(prefix) => format!("{}.{}", prefix, name),
            None => name.clone(),
        };
        let text = match value {
            Value::Table(nested) => {
                flatten(Some(&key), nested, out)?;
                continue;
            }
            Value::String(s) => s.clone(),
            Value::Integer(i) => i.to_string(),
            // Debug keeps the fraction (`3.0`), so floats never read as integers.
            Value::Float(f) => format!("{:?}", f),
            Value::Boolean(b) => b.to_string(),
            Value::Datetime(d) => d.to_string(),
            Value::Array(_) => {
                return Err(StoreError::Backend(format!(
                    "Unsupported array value for key '{}'",
                    key
                )))
            }
        };
        if out.contains_key(&key) {
            return Err(StoreError::Backend(format!("Duplicate key '{}'", key)));
        }
        out.insert(key, text);
    }
    Ok(())
}
