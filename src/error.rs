//! Error types for Quercle tools

use thiserror::Error;

/// Result type alias for Quercle operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or invoking Quercle tools
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// No API key was configured or found in the environment
    #[error("missing API key: pass one explicitly or set {}", crate::config::API_KEY_ENV)]
    MissingApiKey,

    /// HTTP transport error
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Quercle API returned a non-success status
    #[error("quercle api error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message reported by the service
        message: String,
    },

    /// Tool arguments did not match the declared input schema
    #[error("invalid arguments for {tool}: {reason}")]
    InvalidArguments {
        /// Tool name
        tool: String,
        /// Decoder message
        reason: String,
    },

    /// No tool registered under the requested name
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}
