use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::highlight::errors::HighlightError;
use crate::domain::highlight::models::HighlightId;
use crate::domain::highlight::models::SongHighlight;
use crate::domain::highlight::models::SongHighlightDetails;
use crate::domain::highlight::ports::SongHighlightRepository;
use crate::domain::song::models::SongId;
use crate::outbound::repositories::song::SongRow;

pub struct PostgresSongHighlightRepository {
    pool: PgPool,
}

impl PostgresSongHighlightRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct SongHighlightRow {
    id: Uuid,
    month_year: NaiveDate,
    song_id: Uuid,
    play_count: i32,
}

impl SongHighlightRow {
    fn into_domain(self) -> SongHighlight {
        SongHighlight {
            id: HighlightId(self.id),
            month_year: self.month_year,
            song_id: SongId(self.song_id),
            play_count: self.play_count,
        }
    }
}

/// Highlight joined with its song row.
#[derive(FromRow)]
struct SongHighlightDetailsRow {
    #[sqlx(flatten)]
    highlight: SongHighlightRow,
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

impl SongHighlightDetailsRow {
    fn into_domain(self) -> Result<SongHighlightDetails, HighlightError> {
        let song = SongRow {
            id: self.highlight.song_id,
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
        .map_err(|e| HighlightError::DatabaseError(e.to_string()))?;

        Ok(SongHighlightDetails {
            highlight: self.highlight.into_domain(),
            song,
        })
    }
}

const SONG_HIGHLIGHT_DETAILS_QUERY: &str = r#"
    SELECT h.id, h.month_year, h.song_id, h.play_count,
           s.title AS song_title, s.slug AS song_slug, s.album_id AS song_album_id,
           s.artist_id AS song_artist_id, s.file_url AS song_file_url,
           s.language AS song_language, s.lyrics AS song_lyrics,
           s.chords AS song_chords, s.duration_secs AS song_duration_secs
    FROM song_highlights h
    JOIN songs s ON s.id = h.song_id
"#;

#[async_trait]
impl SongHighlightRepository for PostgresSongHighlightRepository {
    async fn create(&self, highlight: SongHighlight) -> Result<SongHighlight, HighlightError> {
        sqlx::query(
            r#"
            INSERT INTO song_highlights (id, month_year, song_id, play_count)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(highlight.id.0)
        .bind(highlight.month_year)
        .bind(highlight.song_id.0)
        .bind(highlight.play_count)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_foreign_key_violation() {
                    return HighlightError::SongNotFound(highlight.song_id.to_string());
                }
            }
            HighlightError::DatabaseError(e.to_string())
        })?;

        Ok(highlight)
    }

    async fn list_all(&self) -> Result<Vec<SongHighlightDetails>, HighlightError> {
        let rows = sqlx::query_as::<_, SongHighlightDetailsRow>(&format!(
            "{SONG_HIGHLIGHT_DETAILS_QUERY} ORDER BY h.month_year DESC, h.play_count DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| HighlightError::DatabaseError(e.to_string()))?;

        rows.into_iter()
            .map(SongHighlightDetailsRow::into_domain)
            .collect()
    }

    async fn find_details_by_id(
        &self,
        id: &HighlightId,
    ) -> Result<Option<SongHighlightDetails>, HighlightError> {
        let row = sqlx::query_as::<_, SongHighlightDetailsRow>(&format!(
            "{SONG_HIGHLIGHT_DETAILS_QUERY} WHERE h.id = $1"
        ))
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| HighlightError::DatabaseError(e.to_string()))?;

        row.map(SongHighlightDetailsRow::into_domain).transpose()
    }

    async fn update_play_count(
        &self,
        id: &HighlightId,
        play_count: i32,
    ) -> Result<Option<SongHighlight>, HighlightError> {
        let row = sqlx::query_as::<_, SongHighlightRow>(
            r#"
            UPDATE song_highlights
            SET play_count = $2
            WHERE id = $1
            RETURNING id, month_year, song_id, play_count
            "#,
        )
        .bind(id.0)
        .bind(play_count)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| HighlightError::DatabaseError(e.to_string()))?;

        Ok(row.map(SongHighlightRow::into_domain))
    }

    async fn delete(&self, id: &HighlightId) -> Result<(), HighlightError> {
        let result = sqlx::query("DELETE FROM song_highlights WHERE id = $1")
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
