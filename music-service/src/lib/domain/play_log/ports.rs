use async_trait::async_trait;

use crate::domain::play_log::errors::PlayLogError;
use crate::domain::play_log::models::PlayLog;
use crate::domain::play_log::models::RecordPlayCommand;
use crate::domain::user::models::UserId;

/// Port for play log service operations.
#[async_trait]
pub trait PlayLogServicePort: Send + Sync + 'static {
    /// Record a listening event.
    ///
    /// # Errors
    /// * `UserNotFound` / `SongNotFound` - Dangling references
    async fn record_play(&self, command: RecordPlayCommand) -> Result<PlayLog, PlayLogError>;

    /// Retrieve all listening events of one user, newest first.
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<PlayLog>, PlayLogError>;
}

/// Persistence operations for play logs.
#[async_trait]
pub trait PlayLogRepository: Send + Sync + 'static {
    async fn create(&self, log: PlayLog) -> Result<PlayLog, PlayLogError>;

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<PlayLog>, PlayLogError>;
}
