//! CLI error types and exit codes.

use panelcfg_core::{ConfigError, PanelCfgError};

/// Exit codes for CLI operations
pub mod exit_codes {
    /// General error - I/O, unsupported requests, lookups without a match
    pub const GENERAL_ERROR: i32 = 1;
    /// Invalid configuration - malformed JSON, unknown item type, wrong shape
    pub const INVALID_CONFIG: i32 = 2;
}

/// CLI error type
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Input is not a valid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The request is not supported for the given input
    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    /// Lookup found nothing
    #[error("Not found: {0}")]
    NotFound(String),

    /// Result could not be rendered
    #[error("Output error: {0}")]
    Output(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::UnsupportedOperation(what) => Self::Unsupported(what.to_string()),
            e @ (ConfigError::InvalidVariant { .. } | ConfigError::Malformed(_)) => {
                Self::InvalidConfig(e.to_string())
            }
        }
    }
}

impl From<PanelCfgError> for CliError {
    fn from(err: PanelCfgError) -> Self {
        match err {
            PanelCfgError::Config(e) => e.into(),
            PanelCfgError::Json(e) => Self::InvalidConfig(e.to_string()),
            PanelCfgError::Io(e) => Self::Io(e),
        }
    }
}

impl CliError {
    /// Returns the appropriate exit code for this error type.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: General error (IO, unsupported operation, no match, output)
    /// - 2: Invalid configuration input
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidConfig(_) => exit_codes::INVALID_CONFIG,
            Self::Unsupported(_) | Self::NotFound(_) | Self::Output(_) | Self::Io(_) => {
                exit_codes::GENERAL_ERROR
            }
        }
    }
}
