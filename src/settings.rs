//! Application Settings
//!
//! Settings for the `clusterconf` tool itself: which resource store to open and how to log.
//! Layered with the `config` crate, lowest priority first: built-in defaults, the global
//! settings file, `./clusterconf.toml`, then `CLUSTERCONF__<SECTION>__<KEY>` environment
//! variables.

mod merge_policy;
mod sources;

use crate::error::AppError;
use crate::logging::LoggingConfig;
use crate::store::{ConfigStore, DirectoryConfigStore, SledConfigStore};
use config::File;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Root settings structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub store: StoreSettings,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Resource store location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(default)]
    pub backend: StoreBackend,

    /// Directory of `<name>.toml` files, or the sled database directory
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Directory,
    Sled,
}

fn default_store_path() -> PathBuf {
    PathBuf::from(merge_policy::DEFAULT_STORE_PATH)
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            path: default_store_path(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.store.path.as_os_str().is_empty() {
            return Err(AppError::ConfigError("Store path cannot be empty".to_string()));
        }
        Ok(())
    }

    /// Open the configured resource store.
    pub fn open_store(&self) -> Result<Box<dyn ConfigStore>, AppError> {
        debug!(
            backend = ?self.store.backend,
            path = %self.store.path.display(),
            "Opening config store"
        );
        let store: Box<dyn ConfigStore> = match self.store.backend {
            StoreBackend::Directory => Box::new(DirectoryConfigStore::new(&self.store.path)),
            StoreBackend::Sled => Box::new(SledConfigStore::open(&self.store.path)?),
        };
        Ok(store)
    }
}

/// Builds [`Settings`] from the layered sources
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings, looking for `clusterconf.toml` in `working_dir`.
    pub fn load(working_dir: &Path) -> Result<Settings, AppError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = sources::global_file::add_to_builder(builder)?;
        let builder = sources::local_file::add_to_builder(builder, working_dir)?;
        let builder = sources::environment::add_to_builder(builder);

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from an explicit file instead of the global and local files.
    /// Environment variables still apply on top.
    pub fn load_from_file(path: &Path) -> Result<Settings, AppError> {
        let builder = merge_policy::builder_with_defaults()?
            .add_source(File::from(path).required(true));
        let builder = sources::environment::add_to_builder(builder);

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }
}
