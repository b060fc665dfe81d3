//! clusterconf CLI Binary
//!
//! Command-line front end for resolving layered cluster configuration.

use clap::Parser;
use clusterconf::cli::{map_error, Cli, RunContext};
use clusterconf::logging::{init_logging, LoggingConfig};
use clusterconf::settings::Settings;
use std::path::PathBuf;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();
    let working_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let settings = RunContext::load_settings(&cli, &working_dir);

    // Logging comes up before settings errors are reported so they are logged too.
    let logging_config = build_logging_config(&cli, settings.as_ref().ok());
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            error!("Failed to load settings: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    let context = RunContext::new(settings);
    info!(
        store = %context.settings().store.path.display(),
        "clusterconf starting"
    );

    match context.execute(&cli.command) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args and settings.
/// Precedence: CLI flags override settings override defaults.
fn build_logging_config(cli: &Cli, settings: Option<&Settings>) -> LoggingConfig {
    let mut config = settings.map(|s| s.logging.clone()).unwrap_or_default();

    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }

    config
}
