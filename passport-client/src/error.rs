//! Passport client error types.

use passport_rest::{TransportError, url};
use thiserror::Error;

/// Result type for client construction.
pub type Result<T> = std::result::Result<T, PassportError>;

/// Errors raised while configuring or constructing a [`PassportClient`](crate::PassportClient).
///
/// API calls never return this type; their failures live in the
/// [`ClientResponse`](passport_rest::ClientResponse) envelope.
#[derive(Debug, Error)]
pub enum PassportError {
    /// Required environment variable is not set.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but unusable.
    #[error("Invalid value for {var}: {value}")]
    InvalidEnvVar {
        /// Variable name.
        var: String,
        /// Offending value.
        value: String,
    },

    /// Base URL failed to parse.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// Base URL parsed but cannot have API paths appended.
    #[error("Base URL cannot be used for API paths: {0}")]
    UnsupportedBaseUrl(String),

    /// The HTTP client could not be created.
    #[error("Failed to create HTTP client: {0}")]
    Transport(#[from] TransportError),
}
