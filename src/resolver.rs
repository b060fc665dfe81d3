//! Config Resolver
//!
//! Produces a validated cluster configuration by layering, lowest priority first:
//!
//! 1. the compiled-in defaults
//! 2. the shared `default` resource (optional)
//! 3. the resource named by the caller's override (required when requested)
//! 4. the caller's explicit override fields
//!
//! The first error at any step aborts the resolve and is returned unchanged.

mod layer;

pub use layer::{Layer, MissingPolicy};

use crate::cluster::{ClusterConfig, ClusterOverlay, FlatKeyResolver, KeyResolver, DEFAULT_CONFIG_NAME};
use crate::error::ClusterError;
use crate::store::ConfigStore;
use tracing::debug;

pub struct ConfigResolver {
    defaults: ClusterConfig,
    keys: Box<dyn KeyResolver>,
}

impl Default for ConfigResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigResolver {
    /// Resolver using the compiled-in defaults and the flat key layout
    pub fn new() -> Self {
        Self {
            defaults: ClusterConfig::default(),
            keys: Box::new(FlatKeyResolver),
        }
    }

    /// Replace the base configuration every resolve starts from.
    pub fn with_defaults(mut self, defaults: ClusterConfig) -> Self {
        self.defaults = defaults;
        self
    }

    /// Replace how resource keys map onto configuration fields.
    pub fn with_key_resolver<K: KeyResolver + 'static>(mut self, keys: K) -> Self {
        self.keys = Box::new(keys);
        self
    }

    pub fn defaults(&self) -> &ClusterConfig {
        &self.defaults
    }

    /// Resolve the configuration selected by `explicit` against `store`.
    ///
    /// `explicit.name` picks the per-cluster resource; an absent or empty name resolves
    /// the defaults only. The returned configuration carries the requested name, or
    /// `default` when none was given.
    pub fn resolve(
        &self,
        explicit: Option<&ClusterOverlay>,
        store: &dyn ConfigStore,
    ) -> Result<ClusterConfig, ClusterError> {
        let target = explicit.and_then(ClusterOverlay::target_name);
        let mut config = self.defaults.clone();

        for layer in Layer::plan(target) {
            if let Some(overlay) = layer.read(store, self.keys.as_ref())? {
                config.apply(&overlay);
            }
        }

        if let Some(overlay) = explicit {
            config.apply(overlay);
        }
        config.name = target.unwrap_or(DEFAULT_CONFIG_NAME).to_string();

        config.validate()?;
        debug!(
            name = %config.name,
            master_count = config.master_count,
            worker_count = config.worker_count,
            "Resolved cluster configuration"
        );
        Ok(config)
    }
}

/// Resolve with the compiled-in defaults and the flat key layout.
pub fn resolve(
    explicit: Option<&ClusterOverlay>,
    store: &dyn ConfigStore,
) -> Result<ClusterConfig, ClusterError> {
    ConfigResolver::new().resolve(explicit, store)
}
