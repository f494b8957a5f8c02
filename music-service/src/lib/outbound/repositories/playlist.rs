use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::playlist::errors::PlaylistError;
use crate::domain::playlist::models::Playlist;
use crate::domain::playlist::models::PlaylistDetails;
use crate::domain::playlist::models::PlaylistEntry;
use crate::domain::playlist::models::PlaylistId;
use crate::domain::playlist::ports::PlaylistRepository;
use crate::domain::song::models::SongDetails;
use crate::domain::user::models::UserId;
use crate::outbound::repositories::song::SongDetailsRow;
use crate::outbound::repositories::song::SONG_DETAILS_QUERY;

pub struct PostgresPlaylistRepository {
    pool: PgPool,
}

impl PostgresPlaylistRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load the member songs of one playlist, with album and artist.
    async fn songs_of(&self, id: &PlaylistId) -> Result<Vec<SongDetails>, PlaylistError> {
        let rows = sqlx::query_as::<_, SongDetailsRow>(&format!(
            r#"
            {SONG_DETAILS_QUERY}
            JOIN playlist_songs ps ON ps.song_id = s.id
            WHERE ps.playlist_id = $1
            ORDER BY s.title
            "#
        ))
        .bind(id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| PlaylistError::DatabaseError(e.to_string()))?;

        rows.into_iter()
            .map(|row| {
                row.into_domain()
                    .map_err(|e| PlaylistError::DatabaseError(e.to_string()))
            })
            .collect()
    }
}

#[derive(FromRow)]
struct PlaylistRow {
    id: Uuid,
    user_id: Uuid,
    title: String,
    is_public: bool,
    image_url: String,
}

impl PlaylistRow {
    fn into_domain(self) -> Playlist {
        Playlist {
            id: PlaylistId(self.id),
            user_id: UserId(self.user_id),
            title: self.title,
            is_public: self.is_public,
            image_url: self.image_url,
        }
    }
}

/// Playlist member song joined with the playlist it belongs to.
#[derive(FromRow)]
struct MemberSongRow {
    playlist_id: Uuid,
    #[sqlx(flatten)]
    song: SongDetailsRow,
}

#[async_trait]
impl PlaylistRepository for PostgresPlaylistRepository {
    async fn create(&self, playlist: Playlist) -> Result<Playlist, PlaylistError> {
        sqlx::query(
            r#"
            INSERT INTO playlists (id, user_id, title, is_public, image_url)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(playlist.id.0)
        .bind(playlist.user_id.0)
        .bind(&playlist.title)
        .bind(playlist.is_public)
        .bind(&playlist.image_url)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_foreign_key_violation() {
                    return PlaylistError::UserNotFound(playlist.user_id.to_string());
                }
            }
            PlaylistError::DatabaseError(e.to_string())
        })?;

        Ok(playlist)
    }

    async fn find_by_id(&self, id: &PlaylistId) -> Result<Option<Playlist>, PlaylistError> {
        let row = sqlx::query_as::<_, PlaylistRow>(
            "SELECT id, user_id, title, is_public, image_url FROM playlists WHERE id = $1",
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| PlaylistError::DatabaseError(e.to_string()))?;

        Ok(row.map(PlaylistRow::into_domain))
    }

    async fn find_details_by_id(
        &self,
        id: &PlaylistId,
    ) -> Result<Option<PlaylistDetails>, PlaylistError> {
        let Some(playlist) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let songs = self.songs_of(id).await?;

        Ok(Some(PlaylistDetails { playlist, songs }))
    }

    async fn list_for_owner(
        &self,
        owner: &UserId,
    ) -> Result<Vec<PlaylistDetails>, PlaylistError> {
        let playlists = sqlx::query_as::<_, PlaylistRow>(
            r#"
            SELECT id, user_id, title, is_public, image_url
            FROM playlists
            WHERE user_id = $1
            ORDER BY title
            "#,
        )
        .bind(owner.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| PlaylistError::DatabaseError(e.to_string()))?;

        // One pass over all member songs of this owner's playlists, grouped
        // in memory, instead of a query per playlist.
        let member_rows = sqlx::query_as::<_, MemberSongRow>(&format!(
            r#"
            SELECT ps.playlist_id, q.* FROM ({SONG_DETAILS_QUERY}) q
            JOIN playlist_songs ps ON ps.song_id = q.id
            JOIN playlists p ON p.id = ps.playlist_id
            WHERE p.user_id = $1
            ORDER BY q.title
            "#
        ))
        .bind(owner.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| PlaylistError::DatabaseError(e.to_string()))?;

        let mut songs_by_playlist: HashMap<Uuid, Vec<SongDetails>> = HashMap::new();
        for row in member_rows {
            let details = row
                .song
                .into_domain()
                .map_err(|e| PlaylistError::DatabaseError(e.to_string()))?;
            songs_by_playlist
                .entry(row.playlist_id)
                .or_default()
                .push(details);
        }

        Ok(playlists
            .into_iter()
            .map(|row| {
                let songs = songs_by_playlist.remove(&row.id).unwrap_or_default();
                PlaylistDetails {
                    playlist: row.into_domain(),
                    songs,
                }
            })
            .collect())
    }

    async fn add_song(&self, entry: PlaylistEntry) -> Result<PlaylistEntry, PlaylistError> {
        sqlx::query(
            r#"
            INSERT INTO playlist_songs (playlist_id, song_id)
            VALUES ($1, $2)
            "#,
        )
        .bind(entry.playlist_id.0)
        .bind(entry.song_id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return PlaylistError::AlreadyInPlaylist;
                }
                if db_err.is_foreign_key_violation()
                    && db_err.constraint() == Some("playlist_songs_song_id_fkey")
                {
                    return PlaylistError::SongNotFound(entry.song_id.to_string());
                }
            }
            PlaylistError::DatabaseError(e.to_string())
        })?;

        Ok(entry)
    }

    async fn update(&self, playlist: Playlist) -> Result<Playlist, PlaylistError> {
        let result = sqlx::query(
            r#"
            UPDATE playlists
            SET title = $2, is_public = $3, image_url = $4
            WHERE id = $1
            "#,
        )
        .bind(playlist.id.0)
        .bind(&playlist.title)
        .bind(playlist.is_public)
        .bind(&playlist.image_url)
        .execute(&self.pool)
        .await
        .map_err(|e| PlaylistError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(PlaylistError::NotFound(playlist.id.to_string()));
        }

        Ok(playlist)
    }

    async fn delete(&self, id: &PlaylistId) -> Result<(), PlaylistError> {
        let result = sqlx::query("DELETE FROM playlists WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| PlaylistError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(PlaylistError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
