//! Crate error taxonomy.
//!
//! Startup-path errors are typed so `main` can report exactly what failed.
//! Request-path rejections never reach these enums: the API layer maps them
//! straight to client-error responses.

use thiserror::Error;

use std::path::PathBuf;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// HTTP server lifecycle errors.
#[derive(Debug, Error)]
pub enum ServeError {
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}
