//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::AppError;

/// Map errors to `error[<code>]: <message>` for stderr.
/// Cluster errors carry their stable code; other failures use a fixed category.
pub fn map_error(e: &AppError) -> String {
    let code = match e {
        AppError::Cluster(err) => err.code().as_str(),
        AppError::Store(_) => "store",
        AppError::ConfigError(_) => "settings",
        AppError::Output(_) => "output",
    };
    format!("error[{}]: {}", code, e)
}
