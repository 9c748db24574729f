//! Error types for the Catalog client

use thiserror::Error;

/// Client error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The server rejected the request; carries its human-readable message
    #[error("{message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message from the server's error envelope
        message: String,
    },

    /// The request never produced a response
    #[error("HTTP request error: {0}")]
    Transport(String),

    /// The response body could not be decoded
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Transport(err.to_string())
        }
    }
}
