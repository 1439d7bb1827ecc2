//! Error type for the demo runner and binary.

use crate::config::ConfigError;
use factory_framework::FrameworkError;
use thiserror::Error;

/// Errors that can stop a demo run.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error(transparent)]
    Framework(#[from] FrameworkError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
