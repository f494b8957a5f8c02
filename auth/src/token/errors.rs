use thiserror::Error;

/// Error type for token operations.
///
/// Every decode failure collapses into [`TokenError::InvalidToken`]: callers
/// must not be able to tell a corrupted ciphertext from a malformed payload,
/// so no detail about the failing stage leaves the codec.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token field must not be empty: {0}")]
    EmptyField(&'static str),

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Invalid token")]
    InvalidToken,
}
