//! Local settings file: ./clusterconf.toml in the working directory

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::Path;

pub const LOCAL_SETTINGS_FILE: &str = "clusterconf.toml";

/// Add the working directory's settings file to builder if it exists.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    working_dir: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let path = working_dir.join(LOCAL_SETTINGS_FILE);
    if path.exists() {
        return Ok(builder.add_source(File::from(path.as_path()).required(false)));
    }
    Ok(builder)
}
