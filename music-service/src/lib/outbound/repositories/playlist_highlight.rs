use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::highlight::errors::HighlightError;
use crate::domain::highlight::models::HighlightId;
use crate::domain::highlight::models::PlaylistHighlight;
use crate::domain::highlight::models::PlaylistHighlightDetails;
use crate::domain::highlight::ports::PlaylistHighlightRepository;
use crate::domain::playlist::models::Playlist;
use crate::domain::playlist::models::PlaylistId;
use crate::domain::user::models::UserId;

pub struct PostgresPlaylistHighlightRepository {
    pool: PgPool,
}

impl PostgresPlaylistHighlightRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct PlaylistHighlightRow {
    id: Uuid,
    month_year: NaiveDate,
    playlist_id: Uuid,
    play_count: i32,
}

impl PlaylistHighlightRow {
    fn into_domain(self) -> PlaylistHighlight {
        PlaylistHighlight {
            id: HighlightId(self.id),
            month_year: self.month_year,
            playlist_id: PlaylistId(self.playlist_id),
            play_count: self.play_count,
        }
    }
}

/// Highlight joined with its playlist row.
#[derive(FromRow)]
struct PlaylistHighlightDetailsRow {
    #[sqlx(flatten)]
    highlight: PlaylistHighlightRow,
    playlist_user_id: Uuid,
    playlist_title: String,
    playlist_is_public: bool,
    playlist_image_url: String,
}

impl PlaylistHighlightDetailsRow {
    fn into_domain(self) -> PlaylistHighlightDetails {
        let playlist = Playlist {
            id: PlaylistId(self.highlight.playlist_id),
            user_id: UserId(self.playlist_user_id),
            title: self.playlist_title,
            is_public: self.playlist_is_public,
            image_url: self.playlist_image_url,
        };

        PlaylistHighlightDetails {
            highlight: self.highlight.into_domain(),
            playlist,
        }
    }
}

const PLAYLIST_HIGHLIGHT_DETAILS_QUERY: &str = r#"
    SELECT h.id, h.month_year, h.playlist_id, h.play_count,
           p.user_id AS playlist_user_id, p.title AS playlist_title,
           p.is_public AS playlist_is_public, p.image_url AS playlist_image_url
    FROM playlist_highlights h
    JOIN playlists p ON p.id = h.playlist_id
"#;

#[async_trait]
impl PlaylistHighlightRepository for PostgresPlaylistHighlightRepository {
    async fn create(
        &self,
        highlight: PlaylistHighlight,
    ) -> Result<PlaylistHighlight, HighlightError> {
        sqlx::query(
            r#"
            INSERT INTO playlist_highlights (id, month_year, playlist_id, play_count)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(highlight.id.0)
        .bind(highlight.month_year)
        .bind(highlight.playlist_id.0)
        .bind(highlight.play_count)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_foreign_key_violation() {
                    return HighlightError::PlaylistNotFound(highlight.playlist_id.to_string());
                }
            }
            HighlightError::DatabaseError(e.to_string())
        })?;

        Ok(highlight)
    }

    async fn list_all(&self) -> Result<Vec<PlaylistHighlightDetails>, HighlightError> {
        let rows = sqlx::query_as::<_, PlaylistHighlightDetailsRow>(&format!(
            "{PLAYLIST_HIGHLIGHT_DETAILS_QUERY} ORDER BY h.month_year DESC, h.play_count DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| HighlightError::DatabaseError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(PlaylistHighlightDetailsRow::into_domain)
            .collect())
    }

    async fn find_details_by_id(
        &self,
        id: &HighlightId,
    ) -> Result<Option<PlaylistHighlightDetails>, HighlightError> {
        let row = sqlx::query_as::<_, PlaylistHighlightDetailsRow>(&format!(
            "{PLAYLIST_HIGHLIGHT_DETAILS_QUERY} WHERE h.id = $1"
        ))
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| HighlightError::DatabaseError(e.to_string()))?;

        Ok(row.map(PlaylistHighlightDetailsRow::into_domain))
    }

    async fn update_play_count(
        &self,
        id: &HighlightId,
        play_count: i32,
    ) -> Result<Option<PlaylistHighlight>, HighlightError> {
        let row = sqlx::query_as::<_, PlaylistHighlightRow>(
            r#"
            UPDATE playlist_highlights
            SET play_count = $2
            WHERE id = $1
            RETURNING id, month_year, playlist_id, play_count
            "#,
        )
        .bind(id.0)
        .bind(play_count)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| HighlightError::DatabaseError(e.to_string()))?;

        Ok(row.map(PlaylistHighlightRow::into_domain))
    }

    async fn delete(&self, id: &HighlightId) -> Result<(), HighlightError> {
        let result = sqlx::query("DELETE FROM playlist_highlights WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| HighlightError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(HighlightError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
