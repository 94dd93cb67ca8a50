//! REST client error types.

use std::time::Duration;
use thiserror::Error;

/// Failure to reach the remote service or to receive a complete response.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Underlying HTTP client error (DNS, connect, TLS, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Connection error reported by a non-reqwest transport.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Request timed out.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
}

impl TransportError {
    /// Check if this is a timeout error.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_)) || matches!(self, Self::Http(e) if e.is_timeout())
    }

    /// Check if this is a connection error.
    pub fn is_connect(&self) -> bool {
        matches!(self, Self::Connection(_)) || matches!(self, Self::Http(e) if e.is_connect())
    }
}

/// Request body could not be serialized.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// JSON serialization error.
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    /// Form serialization error.
    #[error("Form encoding error: {0}")]
    Form(#[from] serde_urlencoded::ser::Error),
}

/// Response body could not be turned into a structured value.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Malformed JSON.
    #[error("JSON decoding error: {0}")]
    Json(#[from] serde_json::Error),

    /// Body present with a content type the decoder does not understand.
    #[error("Unsupported content type: {0}")]
    UnsupportedContentType(String),
}

/// URL assembly failure.
#[derive(Debug, Error)]
pub enum UrlError {
    /// The base URL cannot have path segments appended (e.g. `mailto:`).
    #[error("URL cannot be used as a base: {0}")]
    CannotBeABase(String),

    /// A path segment is `.` or `..`, which URL normalization would
    /// resolve against the preceding path instead of sending.
    #[error("path segment {0:?} would be resolved as a relative path")]
    DotSegment(String),

    /// URL parsing error.
    #[error("URL parse error: {0}")]
    Parse(#[from] url::ParseError),
}

/// Runtime failure captured in a [`ClientResponse`](crate::ClientResponse)
/// exception slot.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The service could not be reached.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A response arrived but its body could not be decoded.
    #[error("Failed to decode response with status {status}: {source}")]
    Decoding {
        /// HTTP status code of the undecodable response.
        status: u16,
        /// Decoder failure.
        #[source]
        source: DecodeError,
    },

    /// The request body could not be encoded; nothing was sent.
    #[error(transparent)]
    Encoding(#[from] EncodeError),

    /// The request URL could not be assembled; nothing was sent.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] UrlError),
}

impl ClientError {
    /// Check if the service was unreachable (as opposed to unintelligible).
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Check if this is a timeout error.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }

    /// Check if a response body failed to decode.
    pub fn is_decoding(&self) -> bool {
        matches!(self, Self::Decoding { .. })
    }

    /// Get the HTTP status code if a response was received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Decoding { status, .. } => Some(*status),
            Self::Transport(TransportError::Http(e)) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
