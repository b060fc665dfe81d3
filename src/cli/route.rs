//! CLI route: single route table and run context. Dispatches to the resolver and presentation.

use crate::cli::parse::{Cli, Commands, OutputFormat};
use crate::cli::presentation::{
    format_config_json, format_config_text, format_resource_json, format_resource_text,
};
use crate::cluster::ClusterConfig;
use crate::error::AppError;
use crate::resolver::ConfigResolver;
use crate::settings::{Settings, SettingsLoader};
use crate::store::ConfigStore;
use std::path::Path;
use tracing::{debug, info};

/// Runtime context for CLI execution: effective settings and the resolver.
pub struct RunContext {
    settings: Settings,
    resolver: ConfigResolver,
}

impl RunContext {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            resolver: ConfigResolver::new(),
        }
    }

    /// Load settings for `cli`: an explicit `--config` file, otherwise the layered sources
    /// relative to `working_dir`. `--store` and `--backend` are applied last.
    pub fn load_settings(cli: &Cli, working_dir: &Path) -> Result<Settings, AppError> {
        let mut settings = match cli.config {
            Some(ref path) => SettingsLoader::load_from_file(path)?,
            None => SettingsLoader::load(working_dir)?,
        };
        if let Some(ref store) = cli.store {
            settings.store.path = store.clone();
        }
        if let Some(backend) = cli.backend {
            settings.store.backend = backend;
        }
        settings.validate()?;
        Ok(settings)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Run a command and return its stdout text.
    pub fn execute(&self, command: &Commands) -> Result<String, AppError> {
        match command {
            Commands::Resolve { overrides, format } => {
                let store = self.settings.open_store()?;
                let overlay = overrides.to_overlay();
                let config = self.resolver.resolve(Some(&overlay), store.as_ref())?;
                info!(name = %config.name, "Resolved cluster configuration");
                render_config(&config, *format)
            }
            Commands::Show { name, format } => {
                let store = self.settings.open_store()?;
                let data = store.fetch(name)?;
                debug!(resource = %name, keys = data.len(), "Fetched config resource");
                match format {
                    OutputFormat::Text => Ok(format_resource_text(name, &data)),
                    OutputFormat::Json => format_resource_json(name, &data),
                }
            }
            Commands::Defaults { format } => render_config(self.resolver.defaults(), *format),
        }
    }
}

fn render_config(config: &ClusterConfig, format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Text => Ok(format_config_text(config)),
        OutputFormat::Json => format_config_json(config),
    }
}
