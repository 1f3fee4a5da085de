//! CLI error types.

use pricer_core::types::PricingError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `bsgreeks` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// A command-line argument could not be used.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The pricing request was rejected.
    #[error(transparent)]
    InvalidInput(#[from] PricingError),

    /// Configuration could not be loaded or failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Reading from stdin or writing to stdout failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output could not be produced.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result alias used throughout the CLI.
pub type Result<T> = std::result::Result<T, CliError>;
