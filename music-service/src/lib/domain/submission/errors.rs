use thiserror::Error;

/// Error for SubmissionId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmissionIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for submission status parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmissionStatusError {
    #[error("Unknown submission status: {0}")]
    Unknown(String),
}

/// Top-level error for all lyrics submission operations
#[derive(Debug, Clone, Error)]
pub enum SubmissionError {
    #[error("Invalid submission ID: {0}")]
    InvalidSubmissionId(#[from] SubmissionIdError),

    #[error("Invalid submission status: {0}")]
    InvalidStatus(#[from] SubmissionStatusError),

    #[error("Submitted lyrics must not be empty")]
    EmptyLyrics,

    #[error("Submission not found: {0}")]
    NotFound(String),

    #[error("Referenced user not found: {0}")]
    UserNotFound(String),

    #[error("Referenced song not found: {0}")]
    SongNotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
