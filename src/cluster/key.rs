//! Resource keys and their mapping onto configuration fields.
//!
//! Keys are dot-separated paths. Only single-level namespaces (`metrics.enable`) are in
//! use; nested layouts can be supported by supplying another [`KeyResolver`].

use super::ClusterOverlay;
use crate::error::ClusterError;

/// A dot-separated configuration key, e.g. `metrics.carbon`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigKey {
    raw: String,
}

impl ConfigKey {
    pub fn parse(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.raw.split('.')
    }

    pub fn depth(&self) -> usize {
        self.segments().count()
    }

    /// Key prefixed with the resource it was read from, as used in error messages.
    pub fn qualified(&self, resource: &str) -> String {
        format!("{}.{}", resource, self.raw)
    }
}

impl std::fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Configuration fields addressable from a stored resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    MasterCount,
    WorkerCount,
    SparkMasterConfig,
    SparkWorkerConfig,
    MetricsEnable,
    MetricsCarbon,
    MetricsGraphite,
    ScorpionStareEnable,
    ScorpionStareImage,
}

impl Field {
    /// Parse `raw` and store it in the matching overlay slot.
    ///
    /// `qualified_key` names the offending key when parsing fails.
    pub fn assign(
        self,
        overlay: &mut ClusterOverlay,
        raw: &str,
        qualified_key: &str,
    ) -> Result<(), ClusterError> {
        let value = trim_newlines(raw);
        match self {
            Field::MasterCount => overlay.master_count = Some(parse_int(value, qualified_key)?),
            Field::WorkerCount => overlay.worker_count = Some(parse_int(value, qualified_key)?),
            Field::SparkMasterConfig => overlay.spark_master_config = Some(value.to_string()),
            Field::SparkWorkerConfig => overlay.spark_worker_config = Some(value.to_string()),
            Field::MetricsEnable => overlay.metrics.enable = Some(value.to_string()),
            Field::MetricsCarbon => overlay.metrics.carbon = Some(value.to_string()),
            Field::MetricsGraphite => overlay.metrics.graphite = Some(value.to_string()),
            Field::ScorpionStareEnable => overlay.scorpion_stare.enable = Some(value.to_string()),
            Field::ScorpionStareImage => overlay.scorpion_stare.image = Some(value.to_string()),
        }
        Ok(())
    }
}

fn trim_newlines(value: &str) -> &str {
    value.trim_matches('\n')
}

fn parse_int(value: &str, qualified_key: &str) -> Result<i64, ClusterError> {
    value
        .parse::<i64>()
        .map_err(|_| ClusterError::ConfigProcessing {
            key: qualified_key.to_string(),
            reason: "expected integer".to_string(),
        })
}

/// Maps a resource key onto a configuration field
pub trait KeyResolver {
    /// `None` means the key is not recognised and should be ignored.
    fn resolve(&self, key: &ConfigKey) -> Option<Field>;
}

/// Resolver for the flat, single-namespace key layout
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatKeyResolver;

impl KeyResolver for FlatKeyResolver {
    fn resolve(&self, key: &ConfigKey) -> Option<Field> {
        let segments: Vec<&str> = key.segments().collect();
        match segments.as_slice() {
            ["mastercount"] => Some(Field::MasterCount),
            ["workercount"] => Some(Field::WorkerCount),
            ["sparkmasterconfig"] => Some(Field::SparkMasterConfig),
            ["sparkworkerconfig"] => Some(Field::SparkWorkerConfig),
            ["metrics", "enable"] => Some(Field::MetricsEnable),
            ["metrics", "carbon"] => Some(Field::MetricsCarbon),
            ["metrics", "graphite"] => Some(Field::MetricsGraphite),
            ["scorpionstare", "enable"] => Some(Field::ScorpionStareEnable),
            ["scorpionstare", "image"] => Some(Field::ScorpionStareImage),
            _ => None,
        }
    }
}
