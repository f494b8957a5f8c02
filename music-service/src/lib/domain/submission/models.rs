use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::song::models::Song;
use crate::domain::song::models::SongId;
use crate::domain::submission::errors::SubmissionIdError;
use crate::domain::submission::errors::SubmissionStatusError;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Lyrics submission unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionId(pub Uuid);

impl SubmissionId {
    /// Generate a new random submission ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a submission ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, SubmissionIdError> {
        Uuid::parse_str(s)
            .map(SubmissionId)
            .map_err(|e| SubmissionIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for SubmissionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Review state of a lyrics submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    Pending,
    Approved,
    Rejected,
}

impl SubmissionStatus {
    /// Parse a status from its wire/storage form.
    ///
    /// # Errors
    /// * `Unknown` - Not one of `PENDING` / `APPROVED` / `REJECTED`
    pub fn parse(s: &str) -> Result<Self, SubmissionStatusError> {
        match s {
            "PENDING" => Ok(SubmissionStatus::Pending),
            "APPROVED" => Ok(SubmissionStatus::Approved),
            "REJECTED" => Ok(SubmissionStatus::Rejected),
            other => Err(SubmissionStatusError::Unknown(other.to_string())),
        }
    }

    /// Get the wire/storage form of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Pending => "PENDING",
            SubmissionStatus::Approved => "APPROVED",
            SubmissionStatus::Rejected => "REJECTED",
        }
    }
}

/// A user-contributed lyrics correction awaiting review.
#[derive(Debug, Clone)]
pub struct LyricsSubmission {
    pub id: SubmissionId,
    pub user_id: UserId,
    pub song_id: SongId,
    pub submitted_lyrics: String,
    pub status: SubmissionStatus,
    pub created_at: DateTime<Utc>,
}

/// Submission together with its submitter and target song.
#[derive(Debug, Clone)]
pub struct SubmissionDetails {
    pub submission: LyricsSubmission,
    pub user: User,
    pub song: Song,
}

/// Command to create a new lyrics submission.
#[derive(Debug)]
pub struct CreateSubmissionCommand {
    pub user_id: UserId,
    pub song_id: SongId,
    pub submitted_lyrics: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for tag in ["PENDING", "APPROVED", "REJECTED"] {
            assert_eq!(SubmissionStatus::parse(tag).unwrap().as_str(), tag);
        }
        assert!(SubmissionStatus::parse("pending").is_err());
        assert!(SubmissionStatus::parse("").is_err());
    }
}
