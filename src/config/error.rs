//! Error types for loading demo configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a [`DemoConfig`](super::DemoConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML, or names an unknown variation.
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
