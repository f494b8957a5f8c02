use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::play_log::errors::PlayLogError;
use crate::domain::play_log::models::PlayLog;
use crate::domain::play_log::models::PlayLogId;
use crate::domain::play_log::ports::PlayLogRepository;
use crate::domain::song::models::SongId;
use crate::domain::user::models::UserId;

pub struct PostgresPlayLogRepository {
    pool: PgPool,
}

impl PostgresPlayLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct PlayLogRow {
    id: Uuid,
    user_id: Uuid,
    song_id: Uuid,
    duration_played_secs: i32,
    created_at: DateTime<Utc>,
}

impl PlayLogRow {
    fn into_domain(self) -> PlayLog {
        PlayLog {
            id: PlayLogId(self.id),
            user_id: UserId(self.user_id),
            song_id: SongId(self.song_id),
            duration_played_secs: self.duration_played_secs,
            created_at: self.created_at,
        }
    }
}

#[async_trait]
impl PlayLogRepository for PostgresPlayLogRepository {
    async fn create(&self, log: PlayLog) -> Result<PlayLog, PlayLogError> {
        sqlx::query(
            r#"
            INSERT INTO play_logs (id, user_id, song_id, duration_played_secs, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(log.id.0)
        .bind(log.user_id.0)
        .bind(log.song_id.0)
        .bind(log.duration_played_secs)
        .bind(log.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_foreign_key_violation() {
                    if db_err.constraint() == Some("play_logs_user_id_fkey") {
                        return PlayLogError::UserNotFound(log.user_id.to_string());
                    }
                    if db_err.constraint() == Some("play_logs_song_id_fkey") {
                        return PlayLogError::SongNotFound(log.song_id.to_string());
                    }
                }
            }
            PlayLogError::DatabaseError(e.to_string())
        })?;

        Ok(log)
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<PlayLog>, PlayLogError> {
        let rows = sqlx::query_as::<_, PlayLogRow>(
            r#"
            SELECT id, user_id, song_id, duration_played_secs, created_at
            FROM play_logs
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| PlayLogError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(PlayLogRow::into_domain).collect())
    }
}
