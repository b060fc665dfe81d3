//! Error types for cluster configuration resolution.

use thiserror::Error;

/// Stable, machine-matchable identifier for each [`ClusterError`] kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ClientOperation,
    NamedConfigNotFound,
    ConfigProcessing,
    InvalidMasterCount,
    InvalidWorkerCount,
}

/// Coarse grouping of error codes: store access vs. the configuration itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    ClientOperation,
    ClusterConfig,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ClientOperation => "client_operation",
            ErrorCode::NamedConfigNotFound => "named_config_not_found",
            ErrorCode::ConfigProcessing => "config_processing",
            ErrorCode::InvalidMasterCount => "invalid_master_count",
            ErrorCode::InvalidWorkerCount => "invalid_worker_count",
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ErrorCode::ClientOperation => ErrorCategory::ClientOperation,
            _ => ErrorCategory::ClusterConfig,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced while resolving a cluster configuration
#[derive(Debug, Error)]
pub enum ClusterError {
    #[error("{message}")]
    ClientOperation { resource: String, message: String },

    #[error("named config '{0}' does not exist")]
    NamedConfigNotFound(String),

    /// `key` is qualified with the resource name, e.g. `default.mastercount`.
    #[error("'{key}', {reason}")]
    ConfigProcessing { key: String, reason: String },

    #[error("cluster configuration must have a masterCount of 1")]
    InvalidMasterCount(i64),

    #[error("cluster configuration may not have a workerCount less than 1")]
    InvalidWorkerCount(i64),
}

impl ClusterError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ClusterError::ClientOperation { .. } => ErrorCode::ClientOperation,
            ClusterError::NamedConfigNotFound(_) => ErrorCode::NamedConfigNotFound,
            ClusterError::ConfigProcessing { .. } => ErrorCode::ConfigProcessing,
            ClusterError::InvalidMasterCount(_) => ErrorCode::InvalidMasterCount,
            ClusterError::InvalidWorkerCount(_) => ErrorCode::InvalidWorkerCount,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        self.code().category()
    }
}

/// Configuration store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("config resource '{0}' not found")]
    NotFound(String),

    #[error("store backend error: {0}")]
    Backend(String),

    #[error("store I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

/// Application-level errors surfaced by the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Cluster(#[from] ClusterError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}
