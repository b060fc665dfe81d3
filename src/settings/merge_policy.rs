//! Merge rules: built-in defaults that every other settings source overrides.

use config::builder::DefaultState;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

pub const DEFAULT_STORE_PATH: &str = ".clusterconf/resources";

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("store.backend", "directory")?
        .set_default("store.path", DEFAULT_STORE_PATH)
}
