use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::album::errors::AlbumError;
use crate::domain::album::models::Album;
use crate::domain::album::models::AlbumDetails;
use crate::domain::album::models::AlbumId;
use crate::domain::album::ports::AlbumRepository;
use crate::domain::artist::models::Artist;
use crate::domain::artist::models::ArtistId;

pub struct PostgresAlbumRepository {
    pool: PgPool,
}

impl PostgresAlbumRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct AlbumRow {
    id: Uuid,
    title: String,
    release_date: NaiveDate,
    artist_id: Uuid,
    image_url: String,
    slug: String,
}

impl AlbumRow {
    fn into_domain(self) -> Album {
        Album {
            id: AlbumId(self.id),
            title: self.title,
            release_date: self.release_date,
            artist_id: ArtistId(self.artist_id),
            image_url: self.image_url,
            slug: self.slug,
        }
    }
}

/// Album joined with its artist row.
#[derive(FromRow)]
struct AlbumDetailsRow {
    id: Uuid,
    title: String,
    release_date: NaiveDate,
    artist_id: Uuid,
    image_url: String,
    slug: String,
    artist_name: String,
    artist_bio: String,
    artist_slug: String,
    artist_image_url: String,
}

impl AlbumDetailsRow {
    fn into_domain(self) -> AlbumDetails {
        AlbumDetails {
            album: Album {
                id: AlbumId(self.id),
                title: self.title,
                release_date: self.release_date,
                artist_id: ArtistId(self.artist_id),
                image_url: self.image_url,
                slug: self.slug,
            },
            artist: Artist {
                id: ArtistId(self.artist_id),
                name: self.artist_name,
                bio: self.artist_bio,
                slug: self.artist_slug,
                image_url: self.artist_image_url,
            },
        }
    }
}

const ALBUM_DETAILS_QUERY: &str = r#"
    SELECT a.id, a.title, a.release_date, a.artist_id, a.image_url, a.slug,
           ar.name AS artist_name, ar.bio AS artist_bio,
           ar.slug AS artist_slug, ar.image_url AS artist_image_url
    FROM albums a
    JOIN artists ar ON ar.id = a.artist_id
"#;

#[async_trait]
impl AlbumRepository for PostgresAlbumRepository {
    async fn create(&self, album: Album) -> Result<Album, AlbumError> {
        sqlx::query(
            r#"
            INSERT INTO albums (id, title, release_date, artist_id, image_url, slug)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(album.id.0)
        .bind(&album.title)
        .bind(album.release_date)
        .bind(album.artist_id.0)
        .bind(&album.image_url)
        .bind(&album.slug)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_foreign_key_violation() {
                    return AlbumError::ArtistNotFound(album.artist_id.to_string());
                }
            }
            AlbumError::DatabaseError(e.to_string())
        })?;

        Ok(album)
    }

    async fn find_by_id(&self, id: &AlbumId) -> Result<Option<Album>, AlbumError> {
        let row = sqlx::query_as::<_, AlbumRow>(
            "SELECT id, title, release_date, artist_id, image_url, slug FROM albums WHERE id = $1",
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AlbumError::DatabaseError(e.to_string()))?;

        Ok(row.map(AlbumRow::into_domain))
    }

    async fn find_details_by_id(&self, id: &AlbumId) -> Result<Option<AlbumDetails>, AlbumError> {
        let row = sqlx::query_as::<_, AlbumDetailsRow>(&format!(
            "{ALBUM_DETAILS_QUERY} WHERE a.id = $1"
        ))
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AlbumError::DatabaseError(e.to_string()))?;

        Ok(row.map(AlbumDetailsRow::into_domain))
    }

    async fn list_all(&self) -> Result<Vec<AlbumDetails>, AlbumError> {
        let rows = sqlx::query_as::<_, AlbumDetailsRow>(&format!(
            "{ALBUM_DETAILS_QUERY} ORDER BY a.release_date DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AlbumError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(AlbumDetailsRow::into_domain).collect())
    }

    async fn update(&self, album: Album) -> Result<Album, AlbumError> {
        let result = sqlx::query(
            r#"
            UPDATE albums
            SET title = $2, release_date = $3, artist_id = $4, image_url = $5, slug = $6
            WHERE id = $1
            "#,
        )
        .bind(album.id.0)
        .bind(&album.title)
        .bind(album.release_date)
        .bind(album.artist_id.0)
        .bind(&album.image_url)
        .bind(&album.slug)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_foreign_key_violation() {
                    return AlbumError::ArtistNotFound(album.artist_id.to_string());
                }
            }
            AlbumError::DatabaseError(e.to_string())
        })?;

        if result.rows_affected() == 0 {
            return Err(AlbumError::NotFound(album.id.to_string()));
        }

        Ok(album)
    }

    async fn delete(&self, id: &AlbumId) -> Result<(), AlbumError> {
        let result = sqlx::query("DELETE FROM albums WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| AlbumError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AlbumError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
