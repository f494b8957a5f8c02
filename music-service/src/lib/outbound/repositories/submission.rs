use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::submission::errors::SubmissionError;
use crate::domain::submission::models::LyricsSubmission;
use crate::domain::submission::models::SubmissionDetails;
use crate::domain::submission::models::SubmissionId;
use crate::domain::submission::models::SubmissionStatus;
use crate::domain::submission::ports::SubmissionRepository;
use crate::domain::song::models::SongId;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Plan;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::outbound::repositories::song::SongRow;

pub struct PostgresSubmissionRepository {
    pool: PgPool,
}

impl PostgresSubmissionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct SubmissionRow {
    id: Uuid,
    user_id: Uuid,
    song_id: Uuid,
    submitted_lyrics: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl SubmissionRow {
    fn into_domain(self) -> Result<LyricsSubmission, SubmissionError> {
        Ok(LyricsSubmission {
            id: SubmissionId(self.id),
            user_id: UserId(self.user_id),
            song_id: SongId(self.song_id),
            submitted_lyrics: self.submitted_lyrics,
            status: SubmissionStatus::parse(&self.status)?,
            created_at: self.created_at,
        })
    }
}

/// Submission joined with its submitter and target song.
#[derive(FromRow)]
struct SubmissionDetailsRow {
    #[sqlx(flatten)]
    submission: SubmissionRow,
    user_username: String,
    user_email: String,
    user_first_name: String,
    user_last_name: String,
    user_plan: String,
    user_password_hash: String,
    user_created_at: DateTime<Utc>,
    song_title: String,
    song_slug: String,
    song_album_id: Uuid,
    song_artist_id: Uuid,
    song_file_url: String,
    song_language: String,
    song_lyrics: Option<String>,
    song_chords: Option<String>,
    song_duration_secs: i32,
}

impl SubmissionDetailsRow {
    fn into_domain(self) -> Result<SubmissionDetails, SubmissionError> {
        let user = User {
            id: UserId(self.submission.user_id),
            username: Username::new(self.user_username)
                .map_err(|e| SubmissionError::DatabaseError(UserError::from(e).to_string()))?,
            email: EmailAddress::new(self.user_email)
                .map_err(|e| SubmissionError::DatabaseError(UserError::from(e).to_string()))?,
            first_name: self.user_first_name,
            last_name: self.user_last_name,
            plan: Plan::parse(&self.user_plan)
                .map_err(|e| SubmissionError::DatabaseError(UserError::from(e).to_string()))?,
            password_hash: self.user_password_hash,
            created_at: self.user_created_at,
        };

        let song = SongRow {
            id: self.submission.song_id,
            title: self.song_title,
            slug: self.song_slug,
            album_id: self.song_album_id,
            artist_id: self.song_artist_id,
            file_url: self.song_file_url,
            language: self.song_language,
            lyrics: self.song_lyrics,
            chords: self.song_chords,
            duration_secs: self.song_duration_secs,
        }
        .into_domain()
        .map_err(|e| SubmissionError::DatabaseError(e.to_string()))?;

        Ok(SubmissionDetails {
            submission: self.submission.into_domain()?,
            user,
            song,
        })
    }
}

const SUBMISSION_DETAILS_QUERY: &str = r#"
    SELECT ls.id, ls.user_id, ls.song_id, ls.submitted_lyrics, ls.status, ls.created_at,
           u.username AS user_username, u.email AS user_email,
           u.first_name AS user_first_name, u.last_name AS user_last_name,
           u.plan AS user_plan, u.password_hash AS user_password_hash,
           u.created_at AS user_created_at,
           s.title AS song_title, s.slug AS song_slug, s.album_id AS song_album_id,
           s.artist_id AS song_artist_id, s.file_url AS song_file_url,
           s.language AS song_language, s.lyrics AS song_lyrics,
           s.chords AS song_chords, s.duration_secs AS song_duration_secs
    FROM lyrics_submissions ls
    JOIN users u ON u.id = ls.user_id
    JOIN songs s ON s.id = ls.song_id
"#;

#[async_trait]
impl SubmissionRepository for PostgresSubmissionRepository {
    async fn create(
        &self,
        submission: LyricsSubmission,
    ) -> Result<LyricsSubmission, SubmissionError> {
        sqlx::query(
            r#"
            INSERT INTO lyrics_submissions (id, user_id, song_id, submitted_lyrics, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(submission.id.0)
        .bind(submission.user_id.0)
        .bind(submission.song_id.0)
        .bind(&submission.submitted_lyrics)
        .bind(submission.status.as_str())
        .bind(submission.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_foreign_key_violation() {
                    if db_err.constraint() == Some("lyrics_submissions_user_id_fkey") {
                        return SubmissionError::UserNotFound(submission.user_id.to_string());
                    }
                    if db_err.constraint() == Some("lyrics_submissions_song_id_fkey") {
                        return SubmissionError::SongNotFound(submission.song_id.to_string());
                    }
                }
            }
            SubmissionError::DatabaseError(e.to_string())
        })?;

        Ok(submission)
    }

    async fn list_all(&self) -> Result<Vec<SubmissionDetails>, SubmissionError> {
        let rows = sqlx::query_as::<_, SubmissionDetailsRow>(&format!(
            "{SUBMISSION_DETAILS_QUERY} ORDER BY ls.created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| SubmissionError::DatabaseError(e.to_string()))?;

        rows.into_iter()
            .map(SubmissionDetailsRow::into_domain)
            .collect()
    }

    async fn find_details_by_id(
        &self,
        id: &SubmissionId,
    ) -> Result<Option<SubmissionDetails>, SubmissionError> {
        let row = sqlx::query_as::<_, SubmissionDetailsRow>(&format!(
            "{SUBMISSION_DETAILS_QUERY} WHERE ls.id = $1"
        ))
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| SubmissionError::DatabaseError(e.to_string()))?;

        row.map(SubmissionDetailsRow::into_domain).transpose()
    }

    async fn update_status(
        &self,
        id: &SubmissionId,
        status: SubmissionStatus,
    ) -> Result<Option<LyricsSubmission>, SubmissionError> {
        let row = sqlx::query_as::<_, SubmissionRow>(
            r#"
            UPDATE lyrics_submissions
            SET status = $2
            WHERE id = $1
            RETURNING id, user_id, song_id, submitted_lyrics, status, created_at
            "#,
        )
        .bind(id.0)
        .bind(status.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| SubmissionError::DatabaseError(e.to_string()))?;

        row.map(SubmissionRow::into_domain).transpose()
    }

    async fn delete(&self, id: &SubmissionId) -> Result<(), SubmissionError> {
        let result = sqlx::query("DELETE FROM lyrics_submissions WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| SubmissionError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(SubmissionError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
