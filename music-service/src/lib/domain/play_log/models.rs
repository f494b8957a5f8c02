use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::play_log::errors::PlayLogIdError;
use crate::domain::song::models::SongId;
use crate::domain::user::models::UserId;

/// Play log unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayLogId(pub Uuid);

impl PlayLogId {
    /// Generate a new random play log ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a play log ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, PlayLogIdError> {
        Uuid::parse_str(s)
            .map(PlayLogId)
            .map_err(|e| PlayLogIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for PlayLogId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PlayLogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One listening event: a user played a song for some number of seconds.
#[derive(Debug, Clone)]
pub struct PlayLog {
    pub id: PlayLogId,
    pub user_id: UserId,
    pub song_id: SongId,
    pub duration_played_secs: i32,
    pub created_at: DateTime<Utc>,
}

/// Command to record a listening event.
#[derive(Debug)]
pub struct RecordPlayCommand {
    pub user_id: UserId,
    pub song_id: SongId,
    pub duration_played_secs: i32,
}
