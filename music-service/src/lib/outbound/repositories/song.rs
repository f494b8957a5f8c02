use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::album::models::Album;
use crate::domain::album::models::AlbumId;
use crate::domain::artist::models::Artist;
use crate::domain::artist::models::ArtistId;
use crate::domain::song::errors::SongError;
use crate::domain::song::models::Language;
use crate::domain::song::models::Song;
use crate::domain::song::models::SongDetails;
use crate::domain::song::models::SongId;
use crate::domain::song::models::SongSearch;
use crate::domain::song::ports::SongRepository;

pub struct PostgresSongRepository {
    pool: PgPool,
}

impl PostgresSongRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
pub(crate) struct SongRow {
    pub(crate) id: Uuid,
    pub(crate) title: String,
    pub(crate) slug: String,
    pub(crate) album_id: Uuid,
    pub(crate) artist_id: Uuid,
    pub(crate) file_url: String,
    pub(crate) language: String,
    pub(crate) lyrics: Option<String>,
    pub(crate) chords: Option<String>,
    pub(crate) duration_secs: i32,
}

impl SongRow {
    pub(crate) fn into_domain(self) -> Result<Song, SongError> {
        Ok(Song {
            id: SongId(self.id),
            title: self.title,
            slug: self.slug,
            album_id: AlbumId(self.album_id),
            artist_id: ArtistId(self.artist_id),
            file_url: self.file_url,
            language: Language::parse(&self.language)?,
            lyrics: self.lyrics,
            chords: self.chords,
            duration_secs: self.duration_secs,
        })
    }
}

/// Song joined with its album and artist rows.
///
/// Shared with the playlist repository, which reads playlist members through
/// the same join.
#[derive(FromRow)]
pub(crate) struct SongDetailsRow {
    #[sqlx(flatten)]
    pub(crate) song: SongRow,
    pub(crate) album_title: String,
    pub(crate) album_release_date: NaiveDate,
    pub(crate) album_artist_id: Uuid,
    pub(crate) album_image_url: String,
    pub(crate) album_slug: String,
    pub(crate) artist_name: String,
    pub(crate) artist_bio: String,
    pub(crate) artist_slug: String,
    pub(crate) artist_image_url: String,
}

impl SongDetailsRow {
    pub(crate) fn into_domain(self) -> Result<SongDetails, SongError> {
        let album = Album {
            id: AlbumId(self.song.album_id),
            title: self.album_title,
            release_date: self.album_release_date,
            artist_id: ArtistId(self.album_artist_id),
            image_url: self.album_image_url,
            slug: self.album_slug,
        };
        let artist = Artist {
            id: ArtistId(self.song.artist_id),
            name: self.artist_name,
            bio: self.artist_bio,
            slug: self.artist_slug,
            image_url: self.artist_image_url,
        };

        Ok(SongDetails {
            song: self.song.into_domain()?,
            album,
            artist,
        })
    }
}

pub(crate) const SONG_DETAILS_QUERY: &str = r#"
    SELECT s.id, s.title, s.slug, s.album_id, s.artist_id, s.file_url,
           s.language, s.lyrics, s.chords, s.duration_secs,
           al.title AS album_title, al.release_date AS album_release_date,
           al.artist_id AS album_artist_id, al.image_url AS album_image_url,
           al.slug AS album_slug,
           ar.name AS artist_name, ar.bio AS artist_bio,
           ar.slug AS artist_slug, ar.image_url AS artist_image_url
    FROM songs s
    JOIN albums al ON al.id = s.album_id
    JOIN artists ar ON ar.id = s.artist_id
"#;

#[async_trait]
impl SongRepository for PostgresSongRepository {
    async fn create(&self, song: Song) -> Result<Song, SongError> {
        sqlx::query(
            r#"
            INSERT INTO songs (id, title, slug, album_id, artist_id, file_url,
                               language, lyrics, chords, duration_secs)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(song.id.0)
        .bind(&song.title)
        .bind(&song.slug)
        .bind(song.album_id.0)
        .bind(song.artist_id.0)
        .bind(&song.file_url)
        .bind(song.language.as_str())
        .bind(&song.lyrics)
        .bind(&song.chords)
        .bind(song.duration_secs)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_foreign_key_violation() {
                    if db_err.constraint() == Some("songs_album_id_fkey") {
                        return SongError::AlbumNotFound(song.album_id.to_string());
                    }
                    if db_err.constraint() == Some("songs_artist_id_fkey") {
                        return SongError::ArtistNotFound(song.artist_id.to_string());
                    }
                }
            }
            SongError::DatabaseError(e.to_string())
        })?;

        Ok(song)
    }

    async fn list_all(&self) -> Result<Vec<SongDetails>, SongError> {
        let rows = sqlx::query_as::<_, SongDetailsRow>(&format!(
            "{SONG_DETAILS_QUERY} ORDER BY s.title"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| SongError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(SongDetailsRow::into_domain).collect()
    }

    async fn list_by_language(&self, language: Language) -> Result<Vec<SongDetails>, SongError> {
        let rows = sqlx::query_as::<_, SongDetailsRow>(&format!(
            "{SONG_DETAILS_QUERY} WHERE s.language = $1 ORDER BY s.title"
        ))
        .bind(language.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| SongError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(SongDetailsRow::into_domain).collect()
    }

    async fn search(&self, search: &SongSearch) -> Result<Vec<Song>, SongError> {
        // Title matches on prefix, lyrics anywhere; ILIKE makes both
        // case-insensitive. The query string is passed as a bind parameter,
        // with LIKE wildcards escaped.
        let escaped = search
            .query
            .replace('\\', "\\\\")
            .replace('%', "\\%")
            .replace('_', "\\_");
        let title_pattern = format!("{escaped}%");
        let lyrics_pattern = format!("%{escaped}%");

        let rows = sqlx::query_as::<_, SongRow>(
            r#"
            SELECT id, title, slug, album_id, artist_id, file_url,
                   language, lyrics, chords, duration_secs
            FROM songs
            WHERE (title ILIKE $1 OR lyrics ILIKE $2)
              AND ($3::text IS NULL OR language = $3)
            ORDER BY title
            "#,
        )
        .bind(&title_pattern)
        .bind(&lyrics_pattern)
        .bind(search.language.map(|l| l.as_str()))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| SongError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(SongRow::into_domain).collect()
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_like_wildcards_are_escaped() {
        let query = "100%_pure\\gold";
        let escaped = query
            .replace('\\', "\\\\")
            .replace('%', "\\%")
            .replace('_', "\\_");
        assert_eq!(escaped, "100\\%\\_pure\\\\gold");
    }
}
