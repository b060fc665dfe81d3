//! Cluster Configuration Model
//!
//! The resolved cluster configuration, its compiled-in defaults, and the overlay type each
//! configuration layer contributes. Overlay fields are optional: `None` leaves the lower
//! layer untouched, `Some` always wins (including zero and empty values).

mod key;

pub use key::{ConfigKey, Field, FlatKeyResolver, KeyResolver};

use crate::error::ClusterError;
use crate::store::ResourceData;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Name of the shared override resource consulted for every cluster
pub const DEFAULT_CONFIG_NAME: &str = "default";

const DEFAULT_CARBON_IMAGE: &str = "docker.io/tmckay/carbon";
const DEFAULT_GRAPHITE_IMAGE: &str = "docker.io/tmckay/graphite";
const DEFAULT_SCORPIONSTARE_IMAGE: &str = "docker.io/tmckay/scorpionstare";

/// Metrics sidecar settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsConfig {
    pub enable: String,
    pub carbon: String,
    pub graphite: String,
}

/// Scorpion Stare sidecar settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorpionStareConfig {
    pub enable: String,
    pub image: String,
}

/// Fully resolved cluster configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterConfig {
    /// Resource name this configuration was requested under
    pub name: String,
    pub master_count: i64,
    pub worker_count: i64,
    pub spark_master_config: String,
    pub spark_worker_config: String,
    pub metrics: MetricsConfig,
    pub scorpion_stare: ScorpionStareConfig,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enable: String::new(),
            carbon: DEFAULT_CARBON_IMAGE.to_string(),
            graphite: DEFAULT_GRAPHITE_IMAGE.to_string(),
        }
    }
}

impl Default for ScorpionStareConfig {
    fn default() -> Self {
        Self {
            enable: String::new(),
            image: DEFAULT_SCORPIONSTARE_IMAGE.to_string(),
        }
    }
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_CONFIG_NAME.to_string(),
            master_count: 1,
            worker_count: 1,
            spark_master_config: String::new(),
            spark_worker_config: String::new(),
            metrics: MetricsConfig::default(),
            scorpion_stare: ScorpionStareConfig::default(),
        }
    }
}

impl ClusterConfig {
    /// Merge every set field of `overlay` onto this configuration.
    ///
    /// The overlay's `name` is not applied; naming is decided by the resolver.
    pub fn apply(&mut self, overlay: &ClusterOverlay) {
        fn set<T: Clone>(dst: &mut T, src: &Option<T>) {
            if let Some(value) = src {
                *dst = value.clone();
            }
        }

        set(&mut self.master_count, &overlay.master_count);
        set(&mut self.worker_count, &overlay.worker_count);
        set(&mut self.spark_master_config, &overlay.spark_master_config);
        set(&mut self.spark_worker_config, &overlay.spark_worker_config);
        set(&mut self.metrics.enable, &overlay.metrics.enable);
        set(&mut self.metrics.carbon, &overlay.metrics.carbon);
        set(&mut self.metrics.graphite, &overlay.metrics.graphite);
        set(&mut self.scorpion_stare.enable, &overlay.scorpion_stare.enable);
        set(&mut self.scorpion_stare.image, &overlay.scorpion_stare.image);
    }

    /// Check the final configuration. Rules run in a fixed order and the first
    /// violation is returned.
    pub fn validate(&self) -> Result<(), ClusterError> {
        if self.master_count != 1 {
            return Err(ClusterError::InvalidMasterCount(self.master_count));
        }
        if self.worker_count < 1 {
            return Err(ClusterError::InvalidWorkerCount(self.worker_count));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricsOverlay {
    pub enable: Option<String>,
    pub carbon: Option<String>,
    pub graphite: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScorpionStareOverlay {
    pub enable: Option<String>,
    pub image: Option<String>,
}

/// A partial configuration contributed by one layer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterOverlay {
    /// Selects the per-cluster resource when used as the explicit override
    pub name: Option<String>,
    pub master_count: Option<i64>,
    pub worker_count: Option<i64>,
    pub spark_master_config: Option<String>,
    pub spark_worker_config: Option<String>,
    pub metrics: MetricsOverlay,
    pub scorpion_stare: ScorpionStareOverlay,
}

impl ClusterOverlay {
    /// Overlay that only selects a named resource
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// The requested resource name, ignoring an empty one.
    pub fn target_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    /// True when no configuration field is set (the name is not considered).
    pub fn is_empty(&self) -> bool {
        let unnamed = Self {
            name: None,
            ..self.clone()
        };
        unnamed == Self::default()
    }

    /// Build an overlay from the key/value data of a stored resource.
    ///
    /// Keys are visited in sorted order so the first reported error is stable.
    /// Keys the resolver does not recognise are skipped.
    pub fn from_resource(
        resource: &str,
        data: &ResourceData,
        resolver: &dyn KeyResolver,
    ) -> Result<Self, ClusterError> {
        let mut overlay = Self::default();
        for (raw_key, value) in data {
            let key = ConfigKey::parse(raw_key);
            match resolver.resolve(&key) {
                Some(field) => field.assign(&mut overlay, value, &key.qualified(resource))?,
                None => trace!(resource, key = raw_key.as_str(), "Ignoring unrecognized key"),
            }
        }
        Ok(overlay)
    }
}
