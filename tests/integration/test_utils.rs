//! Shared test utilities for integration tests

use std::fs;
use std::path::Path;

/// Write `<dir>/<name>.toml` with the given body.
pub fn write_resource(dir: &Path, name: &str, body: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(format!("{}.toml", name)), body).unwrap();
}
