//! # Framework Errors
//!
//! Products and factories never fail. The errors below live at the edges of the
//! system: turning user input into a variation, and writing demo output.

/// Errors that can occur within the factory framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Unknown {family} variation: {name}")]
    UnknownVariation { family: &'static str, name: String },
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}
