//! clusterconf: Layered Spark Cluster Configuration
//!
//! Resolves the configuration for a named Spark cluster by merging compiled-in defaults, a
//! shared `default` resource, a per-cluster resource, and explicit caller overrides, then
//! validating the result.

pub mod cli;
pub mod cluster;
pub mod error;
pub mod logging;
pub mod resolver;
pub mod settings;
pub mod store;

pub use cluster::{ClusterConfig, ClusterOverlay};
pub use error::{ClusterError, ErrorCode};
pub use resolver::{resolve, ConfigResolver};
pub use store::{ConfigStore, ResourceData};
