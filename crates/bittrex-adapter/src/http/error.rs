/*
[INPUT]:  Error sources (endpoint lookup, HTTP, JSON decoding, signing, exchange envelope)
[OUTPUT]: Structured error types with context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the Bittrex adapter
#[derive(Error, Debug)]
pub enum BittrexError {
    /// Method name is not in the endpoint table; nothing was sent
    #[error("Unknown endpoint: {method}")]
    UnknownEndpoint { method: String },

    /// HTTP request failed (DNS, connection refused, timeout)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body is not valid JSON
    #[error("Invalid response (HTTP {status}): {body}")]
    InvalidResponse { status: u16, body: String },

    /// The exchange envelope reported `success: false`
    #[error("Exchange error: {message}")]
    Exchange { message: String },

    /// Request signing failed
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BittrexError {
    /// Check if the error came from the transport
    pub fn is_network_error(&self) -> bool {
        matches!(self, BittrexError::Http(_))
    }

    /// Check if the method name was rejected before dispatch
    pub fn is_unknown_endpoint(&self) -> bool {
        matches!(self, BittrexError::UnknownEndpoint { .. })
    }

    /// Create an invalid response error, keeping at most 256 bytes of body
    pub fn invalid_response(status: StatusCode, body: &str) -> Self {
        let mut end = body.len().min(256);
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        BittrexError::InvalidResponse {
            status: status.as_u16(),
            body: body[..end].to_string(),
        }
    }
}

/// Result type alias for Bittrex operations
pub type Result<T> = std::result::Result<T, BittrexError>;
