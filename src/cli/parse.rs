//! CLI parse: clap types for clusterconf. No behavior beyond flag-to-overlay mapping.

use crate::cluster::{ClusterOverlay, MetricsOverlay, ScorpionStareOverlay};
use crate::settings::StoreBackend;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// clusterconf - layered Spark cluster configuration
#[derive(Parser, Debug)]
#[command(name = "clusterconf")]
#[command(about = "Resolve layered Spark cluster configuration")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Settings file path (replaces global and local settings files)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Resource store location (overrides settings)
    #[arg(long)]
    pub store: Option<PathBuf>,

    /// Resource store backend (overrides settings)
    #[arg(long, value_enum)]
    pub backend: Option<StoreBackend>,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve and validate the configuration for a cluster
    Resolve {
        #[command(flatten)]
        overrides: OverrideArgs,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Show a stored configuration resource as-is
    Show {
        /// Resource name
        name: String,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Show the compiled-in default configuration
    Defaults {
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Explicit overrides; every flag left out leaves lower layers untouched
#[derive(Args, Debug, Default, Clone)]
pub struct OverrideArgs {
    /// Named configuration resource to layer over `default`
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub master_count: Option<i64>,

    #[arg(long, allow_negative_numbers = true)]
    pub worker_count: Option<i64>,

    #[arg(long)]
    pub spark_master_config: Option<String>,

    #[arg(long)]
    pub spark_worker_config: Option<String>,

    #[arg(long)]
    pub metrics_enable: Option<String>,

    #[arg(long)]
    pub metrics_carbon: Option<String>,

    #[arg(long)]
    pub metrics_graphite: Option<String>,

    #[arg(long = "scorpionstare-enable")]
    pub scorpionstare_enable: Option<String>,

    #[arg(long = "scorpionstare-image")]
    pub scorpionstare_image: Option<String>,
}

impl OverrideArgs {
    pub fn to_overlay(&self) -> ClusterOverlay {
        ClusterOverlay {
            name: self.name.clone(),
            master_count: self.master_count,
            worker_count: self.worker_count,
            spark_master_config: self.spark_master_config.clone(),
            spark_worker_config: self.spark_worker_config.clone(),
            metrics: MetricsOverlay {
                enable: self.metrics_enable.clone(),
                carbon: self.metrics_carbon.clone(),
                graphite: self.metrics_graphite.clone(),
            },
            scorpion_stare: ScorpionStareOverlay {
                enable: self.scorpionstare_enable.clone(),
                image: self.scorpionstare_image.clone(),
            },
        }
    }
}
