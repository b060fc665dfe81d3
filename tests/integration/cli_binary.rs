//! Integration tests for the clusterconf binary

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

use super::test_utils::write_resource;

fn run(work_dir: &Path, args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_clusterconf");
    Command::new(bin)
        .current_dir(work_dir)
        .env("XDG_CONFIG_HOME", work_dir.join("xdg").as_os_str())
        .env("HOME", work_dir.as_os_str())
        .env_remove("CLUSTERCONF_LOG")
        .env_remove("CLUSTERCONF__STORE__PATH")
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_resolve_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("resources");
    write_resource(&store, "default", "workercount = 3\n");
    write_resource(&store, "foo", "workercount = 5\n");

    let output = run(
        temp_dir.path(),
        &[
            "--store",
            store.to_str().unwrap(),
            "resolve",
            "--name",
            "foo",
            "--format",
            "json",
        ],
    );
    assert!(
        output.status.success(),
        "resolve should succeed: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["name"], "foo");
    assert_eq!(value["workerCount"], 5);
    assert_eq!(value["masterCount"], 1);
}

#[test]
fn test_missing_named_resource_exits_nonzero() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(temp_dir.path(), &["--store", "resources", "resolve", "--name", "bar"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("error[named_config_not_found]: named config 'bar' does not exist"),
        "unexpected stderr: {}",
        stderr
    );
}

#[test]
fn test_local_settings_file_selects_store() {
    let temp_dir = TempDir::new().unwrap();
    write_resource(&temp_dir.path().join("cluster-configs"), "default", "workercount = 7\n");
    fs::write(
        temp_dir.path().join("clusterconf.toml"),
        "[store]\npath = \"cluster-configs\"\n",
    )
    .unwrap();

    let output = run(temp_dir.path(), &["resolve", "--format", "json"]);
    assert!(
        output.status.success(),
        "resolve should succeed: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["workerCount"], 7);
}

#[test]
fn test_verbose_logs_go_to_stderr() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(
        temp_dir.path(),
        &["--verbose", "--store", "resources", "defaults", "--format", "json"],
    );
    assert!(output.status.success());

    // stdout stays machine-readable while logs land on stderr
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["name"], "default");
    assert!(!String::from_utf8_lossy(&output.stderr).trim().is_empty());
}
