//! Error types for panel layout configuration
//!
//! The configuration algebra itself can fail in only two ways: an item
//! carries a tag outside the known variant set, or an API is asked for
//! something that only exists in a different layer (a default `root` item).
//! Everything else reported here comes from the edges of the crate, where
//! untyped JSON is turned into typed configuration.

use thiserror::Error;

/// Errors raised by the configuration model.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An item `type` tag does not match any known variant.
    #[error("invalid config item type: {tag}")]
    InvalidVariant {
        /// The unrecognized tag as found in the input.
        tag: String,
    },

    /// The operation is not supported for the requested variant.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    /// The input is structurally invalid (wrong JSON kind, missing field).
    #[error("malformed configuration: {0}")]
    Malformed(String),
}

impl ConfigError {
    /// Creates an invalid-variant error for the given tag.
    #[must_use]
    pub fn invalid_variant(tag: impl Into<String>) -> Self {
        Self::InvalidVariant { tag: tag.into() }
    }

    /// Creates a malformed-configuration error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }

    /// Returns true if the error describes invalid input data rather than
    /// misuse of the API.
    #[must_use]
    pub const fn is_data_error(&self) -> bool {
        matches!(self, Self::InvalidVariant { .. } | Self::Malformed(_))
    }
}

/// Crate-level error covering configuration, JSON and I/O failures.
#[derive(Debug, Error)]
pub enum PanelCfgError {
    /// Configuration model error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File system error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for configuration model operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for operations that touch JSON text or files
pub type PanelCfgResult<T> = Result<T, PanelCfgError>;
