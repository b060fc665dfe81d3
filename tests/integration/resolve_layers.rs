//! Integration tests for layered resolution against an in-memory store

use clusterconf::cluster::{MetricsOverlay, ScorpionStareOverlay};
use clusterconf::error::{ClusterError, ErrorCategory, ErrorCode, StoreError};
use clusterconf::store::{ConfigStore, MemoryConfigStore, ResourceData};
use clusterconf::{resolve, ClusterConfig, ClusterOverlay};
use std::cell::RefCell;

fn layered_store() -> MemoryConfigStore {
    MemoryConfigStore::new()
        .with_resource("default", [("workercount", "3")])
        .with_resource("foo", [("workercount", "5")])
}

/// Records every fetch so tests can assert which layers were read.
struct RecordingStore {
    inner: MemoryConfigStore,
    fetched: RefCell<Vec<String>>,
}

impl ConfigStore for RecordingStore {
    fn fetch(&self, name: &str) -> Result<ResourceData, StoreError> {
        self.fetched.borrow_mut().push(name.to_string());
        self.inner.fetch(name)
    }
}

/// Fails every lookup of one resource with a non-not-found error.
struct BrokenResource(&'static str);

impl ConfigStore for BrokenResource {
    fn fetch(&self, name: &str) -> Result<ResourceData, StoreError> {
        if name == self.0 {
            Err(StoreError::Backend("etcd unavailable".to_string()))
        } else {
            Err(StoreError::NotFound(name.to_string()))
        }
    }
}

#[test]
fn test_default_only_with_empty_store() {
    let config = resolve(None, &MemoryConfigStore::new()).unwrap();
    assert_eq!(config, ClusterConfig::default());
}

#[test]
fn test_named_override_merge() {
    let config = resolve(Some(&ClusterOverlay::named("foo")), &layered_store()).unwrap();
    assert_eq!(config.worker_count, 5);
    assert_eq!(config.master_count, 1);
}

#[test]
fn test_explicit_override_wins_over_both_layers() {
    let overlay = ClusterOverlay {
        worker_count: Some(9),
        ..ClusterOverlay::named("foo")
    };
    let config = resolve(Some(&overlay), &layered_store()).unwrap();
    assert_eq!(config.worker_count, 9);
}

#[test]
fn test_missing_named_resource_is_fatal() {
    let err = resolve(Some(&ClusterOverlay::named("bar")), &layered_store()).unwrap_err();
    assert!(matches!(err, ClusterError::NamedConfigNotFound(ref n) if n == "bar"));
    assert_eq!(err.category(), ErrorCategory::ClusterConfig);
}

#[test]
fn test_missing_default_resource_is_tolerated() {
    let store = MemoryConfigStore::new().with_resource("foo", [("metrics.enable", "true")]);
    let config = resolve(Some(&ClusterOverlay::named("foo")), &store).unwrap();
    assert_eq!(config.metrics.enable, "true");
    assert_eq!(config.worker_count, 1);
}

#[test]
fn test_validation_ordering() {
    let store = MemoryConfigStore::new()
        .with_resource("default", [("mastercount", "2"), ("workercount", "0")]);
    let err = resolve(None, &store).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidMasterCount);
}

#[test]
fn test_parse_failure_names_resource_key() {
    let store = MemoryConfigStore::new().with_resource("default", [("mastercount", "abc")]);
    let err = resolve(None, &store).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ConfigProcessing);
    assert!(err.to_string().contains("default.mastercount"));
}

#[test]
fn test_parse_failure_in_named_layer() {
    let store = MemoryConfigStore::new().with_resource("foo", [("workercount", "five")]);
    let err = resolve(Some(&ClusterOverlay::named("foo")), &store).unwrap_err();
    assert_eq!(err.to_string(), "'foo.workercount', expected integer");
}

#[test]
fn test_client_operation_error_on_default_layer() {
    let err = resolve(None, &BrokenResource("default")).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ClientOperation);
    assert_eq!(err.category(), ErrorCategory::ClientOperation);
    assert!(err.to_string().contains("etcd unavailable"));
}

#[test]
fn test_client_operation_error_on_named_layer() {
    let err = resolve(Some(&ClusterOverlay::named("foo")), &BrokenResource("foo")).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ClientOperation);
}

#[test]
fn test_layers_read_in_order() {
    let store = RecordingStore {
        inner: layered_store(),
        fetched: RefCell::new(Vec::new()),
    };
    resolve(Some(&ClusterOverlay::named("foo")), &store).unwrap();
    assert_eq!(*store.fetched.borrow(), vec!["default", "foo"]);
}

#[test]
fn test_named_layer_skipped_after_default_failure() {
    let store = RecordingStore {
        inner: MemoryConfigStore::new()
            .with_resource("default", [("workercount", "oops")])
            .with_resource("foo", [("workercount", "5")]),
        fetched: RefCell::new(Vec::new()),
    };
    assert!(resolve(Some(&ClusterOverlay::named("foo")), &store).is_err());
    assert_eq!(*store.fetched.borrow(), vec!["default"]);
}

#[test]
fn test_default_name_reads_single_layer() {
    let store = RecordingStore {
        inner: layered_store(),
        fetched: RefCell::new(Vec::new()),
    };
    let config = resolve(Some(&ClusterOverlay::named("default")), &store).unwrap();
    assert_eq!(config.worker_count, 3);
    assert_eq!(*store.fetched.borrow(), vec!["default"]);
}

#[test]
fn test_fields_merge_independently_across_layers() {
    let store = MemoryConfigStore::new()
        .with_resource(
            "default",
            [
                ("metrics.enable", "true"),
                ("metrics.carbon", "quay.io/carbon"),
                ("sparkmasterconfig", "spark.a=1\n"),
            ],
        )
        .with_resource(
            "foo",
            [("metrics.carbon", "registry.local/carbon"), ("workercount", "4")],
        );

    let overlay = ClusterOverlay {
        scorpion_stare: ScorpionStareOverlay {
            enable: Some("true".to_string()),
            image: None,
        },
        metrics: MetricsOverlay {
            graphite: Some("registry.local/graphite".to_string()),
            ..Default::default()
        },
        ..ClusterOverlay::named("foo")
    };

    let config = resolve(Some(&overlay), &store).unwrap();
    assert_eq!(config.name, "foo");
    assert_eq!(config.worker_count, 4);
    assert_eq!(config.spark_master_config, "spark.a=1");
    assert_eq!(config.metrics.enable, "true");
    assert_eq!(config.metrics.carbon, "registry.local/carbon");
    assert_eq!(config.metrics.graphite, "registry.local/graphite");
    assert_eq!(config.scorpion_stare.enable, "true");
    assert_eq!(config.scorpion_stare.image, "docker.io/tmckay/scorpionstare");
}

#[test]
fn test_explicit_empty_string_resets_field() {
    let store = MemoryConfigStore::new().with_resource("default", [("metrics.enable", "true")]);
    let overlay = ClusterOverlay {
        metrics: MetricsOverlay {
            enable: Some(String::new()),
            ..Default::default()
        },
        ..Default::default()
    };
    let config = resolve(Some(&overlay), &store).unwrap();
    assert_eq!(config.metrics.enable, "");
}

#[test]
fn test_unknown_keys_ignored() {
    let store = MemoryConfigStore::new().with_resource(
        "default",
        [("workercount", "2"), ("futurefeature.depth", "deep"), ("Mastercount", "x")],
    );
    let config = resolve(None, &store).unwrap();
    assert_eq!(config.worker_count, 2);
}
