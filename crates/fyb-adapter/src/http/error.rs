/*
[INPUT]:  Error sources (transport, deadline, HTTP status, credentials, decoding, API)
[OUTPUT]: Structured error types with the raw body kept where the server sent one
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use std::time::Duration;

use bytes::Bytes;
use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the FYB adapter
#[derive(Error, Debug)]
pub enum FybError {
    /// Network or connection failure reported by the HTTP transport
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Deadline elapsed before the transport finished
    #[error("timeout on reading data from FYB API after {}ms", .duration.as_millis())]
    Timeout { duration: Duration },

    /// Server answered with a status other than 200 OK.
    ///
    /// The body is kept so callers can inspect server-provided error payloads.
    #[error("HTTP status {status}")]
    Status { status: StatusCode, body: Bytes },

    /// Authenticated call attempted without both API key and secret
    #[error("You need to set API Key and API Secret to call this method")]
    MissingCredentials,

    /// Response body did not match the expected JSON shape
    #[error("{source}: body={body}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// Key or permission failure reported as `{"error": "<message>"}`
    #[error("{0}")]
    Permission(String),

    /// Decoded response carried a nonzero `error` field
    #[error("{message}")]
    Api { code: i64, message: String },

    /// Request signature could not be computed
    #[error("Signing failed: {0}")]
    Signing(String),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Credential could not be carried in an HTTP header
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// Caller-supplied argument rejected before any request was built
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl FybError {
    /// Check if the call ran out of time
    pub fn is_timeout(&self) -> bool {
        matches!(self, FybError::Timeout { .. })
    }

    /// HTTP status of a non-200 response, if that is what failed
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FybError::Status { status, .. } => Some(*status),
            FybError::Transport(err) => err.status(),
            _ => None,
        }
    }

    /// Raw response body attached to the error, if any
    pub fn body(&self) -> Option<&[u8]> {
        match self {
            FybError::Status { body, .. } => Some(body),
            FybError::Decode { body, .. } => Some(body.as_bytes()),
            _ => None,
        }
    }

    /// Check if error indicates a key or permission problem
    pub fn is_auth_error(&self) -> bool {
        match self {
            FybError::MissingCredentials | FybError::Permission(_) => true,
            FybError::Status { status, .. } => {
                *status == StatusCode::UNAUTHORIZED || *status == StatusCode::FORBIDDEN
            }
            _ => false,
        }
    }
}

/// Result type alias for FYB operations
pub type Result<T> = std::result::Result<T, FybError>;
