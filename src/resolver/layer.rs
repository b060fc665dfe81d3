//! Stored configuration layers: which resources are read, in what order, and how a missing
//! resource is treated.

use crate::cluster::{ClusterOverlay, KeyResolver, DEFAULT_CONFIG_NAME};
use crate::error::{ClusterError, StoreError};
use crate::store::ConfigStore;
use tracing::debug;

/// What to do when a layer's resource does not exist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingPolicy {
    /// Skip the layer
    Allow,
    /// Fail with [`ClusterError::NamedConfigNotFound`]
    Fail,
}

/// A stored resource merged on top of the compiled-in defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    pub resource: String,
    pub missing: MissingPolicy,
}

impl Layer {
    /// Stored layers for a resolve, lowest priority first.
    ///
    /// The shared `default` resource is always consulted and may be absent. A target other
    /// than `default` adds a second layer that must exist.
    pub fn plan(target: Option<&str>) -> Vec<Layer> {
        let mut layers = vec![Layer {
            resource: DEFAULT_CONFIG_NAME.to_string(),
            missing: MissingPolicy::Allow,
        }];
        if let Some(name) = target.filter(|n| !n.is_empty() && *n != DEFAULT_CONFIG_NAME) {
            layers.push(Layer {
                resource: name.to_string(),
                missing: MissingPolicy::Fail,
            });
        }
        layers
    }

    /// Fetch and parse this layer. `Ok(None)` means the resource is absent and allowed to be.
    pub fn read(
        &self,
        store: &dyn ConfigStore,
        keys: &dyn KeyResolver,
    ) -> Result<Option<ClusterOverlay>, ClusterError> {
        match store.fetch(&self.resource) {
            Ok(data) => {
                debug!(resource = %self.resource, keys = data.len(), "Read config layer");
                ClusterOverlay::from_resource(&self.resource, &data, keys).map(Some)
            }
            Err(StoreError::NotFound(_)) => match self.missing {
                MissingPolicy::Allow => {
                    debug!(resource = %self.resource, "Optional config layer not present");
                    Ok(None)
                }
                MissingPolicy::Fail => Err(ClusterError::NamedConfigNotFound(self.resource.clone())),
            },
            Err(e) => Err(ClusterError::ClientOperation {
                resource: self.resource.clone(),
                message: e.to_string(),
            }),
        }
    }
}
