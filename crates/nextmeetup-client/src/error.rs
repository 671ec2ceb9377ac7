//! Client error types.

use std::fmt;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur in the client.
#[derive(Debug)]
pub enum ClientError {
    /// Configuration error.
    Config(String),
    /// Provider error.
    Provider(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "configuration error: {}", msg),
            Self::Provider(msg) => write!(f, "provider error: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<nextmeetup_providers::ProviderError> for ClientError {
    fn from(err: nextmeetup_providers::ProviderError) -> Self {
        Self::Provider(err.to_string())
    }
}
