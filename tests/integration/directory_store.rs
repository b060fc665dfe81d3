//! Integration tests for resolving against TOML resource files

use clusterconf::error::ErrorCode;
use clusterconf::store::DirectoryConfigStore;
use clusterconf::{resolve, ClusterOverlay};
use tempfile::TempDir;

use super::test_utils::write_resource;

#[test]
fn test_resolve_from_resource_files() {
    let temp_dir = TempDir::new().unwrap();
    write_resource(
        temp_dir.path(),
        "default",
        r#"
workercount = 3

[metrics]
enable = "true"
"#,
    );
    write_resource(
        temp_dir.path(),
        "spark-prod",
        r#"
workercount = "12"
sparkworkerconfig = """
spark.executor.memory=8g
spark.executor.cores=4
"""

[scorpionstare]
enable = "true"
image = "registry.local/scorpionstare:2.1"
"#,
    );

    let store = DirectoryConfigStore::new(temp_dir.path());
    let config = resolve(Some(&ClusterOverlay::named("spark-prod")), &store).unwrap();

    assert_eq!(config.name, "spark-prod");
    assert_eq!(config.worker_count, 12);
    assert_eq!(config.metrics.enable, "true");
    assert_eq!(
        config.spark_worker_config,
        "spark.executor.memory=8g\nspark.executor.cores=4"
    );
    assert_eq!(config.scorpion_stare.image, "registry.local/scorpionstare:2.1");
}

#[test]
fn test_missing_directory_behaves_like_empty_store() {
    let temp_dir = TempDir::new().unwrap();
    let store = DirectoryConfigStore::new(temp_dir.path().join("does-not-exist"));

    let config = resolve(None, &store).unwrap();
    assert_eq!(config.worker_count, 1);

    let err = resolve(Some(&ClusterOverlay::named("foo")), &store).unwrap_err();
    assert_eq!(err.code(), ErrorCode::NamedConfigNotFound);
}

#[test]
fn test_malformed_default_file_is_client_operation_error() {
    let temp_dir = TempDir::new().unwrap();
    write_resource(temp_dir.path(), "default", "workercount = ");

    let store = DirectoryConfigStore::new(temp_dir.path());
    let err = resolve(None, &store).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ClientOperation);
}

#[test]
fn test_non_integer_count_in_file() {
    let temp_dir = TempDir::new().unwrap();
    write_resource(temp_dir.path(), "default", "mastercount = \"one\"\n");

    let store = DirectoryConfigStore::new(temp_dir.path());
    let err = resolve(None, &store).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ConfigProcessing);
    assert!(err.to_string().contains("default.mastercount"));
}

#[test]
fn test_float_count_in_file_is_not_an_integer() {
    let temp_dir = TempDir::new().unwrap();
    write_resource(temp_dir.path(), "default", "workercount = 3.0\n");

    let store = DirectoryConfigStore::new(temp_dir.path());
    let err = resolve(None, &store).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ConfigProcessing);
    assert_eq!(err.to_string(), "'default.workercount', expected integer");
}

#[test]
fn test_duplicate_flattened_key_is_client_operation_error() {
    let temp_dir = TempDir::new().unwrap();
    write_resource(
        temp_dir.path(),
        "default",
        "\"metrics.enable\" = \"a\"\n\n[metrics]\nenable = \"b\"\n",
    );

    let store = DirectoryConfigStore::new(temp_dir.path());
    let err = resolve(None, &store).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ClientOperation);
    assert!(err.to_string().contains("Duplicate key 'metrics.enable'"));
}
