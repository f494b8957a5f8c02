use async_trait::async_trait;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::artist::errors::ArtistError;
use crate::domain::artist::models::Artist;
use crate::domain::artist::models::ArtistId;
use crate::domain::artist::ports::ArtistRepository;

pub struct PostgresArtistRepository {
    pool: PgPool,
}

impl PostgresArtistRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
pub(crate) struct ArtistRow {
    pub(crate) id: Uuid,
    pub(crate) name: String,
    pub(crate) bio: String,
    pub(crate) slug: String,
    pub(crate) image_url: String,
}

impl ArtistRow {
    pub(crate) fn into_domain(self) -> Artist {
        Artist {
            id: ArtistId(self.id),
            name: self.name,
            bio: self.bio,
            slug: self.slug,
            image_url: self.image_url,
        }
    }
}

#[async_trait]
impl ArtistRepository for PostgresArtistRepository {
    async fn create(&self, artist: Artist) -> Result<Artist, ArtistError> {
        sqlx::query(
            r#"
            INSERT INTO artists (id, name, bio, slug, image_url)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(artist.id.0)
        .bind(&artist.name)
        .bind(&artist.bio)
        .bind(&artist.slug)
        .bind(&artist.image_url)
        .execute(&self.pool)
        .await
        .map_err(|e| ArtistError::DatabaseError(e.to_string()))?;

        Ok(artist)
    }

    async fn find_by_id(&self, id: &ArtistId) -> Result<Option<Artist>, ArtistError> {
        let row = sqlx::query_as::<_, ArtistRow>(
            "SELECT id, name, bio, slug, image_url FROM artists WHERE id = $1",
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ArtistError::DatabaseError(e.to_string()))?;

        Ok(row.map(ArtistRow::into_domain))
    }

    async fn list_all(&self) -> Result<Vec<Artist>, ArtistError> {
        let rows = sqlx::query_as::<_, ArtistRow>(
            "SELECT id, name, bio, slug, image_url FROM artists ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ArtistError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(ArtistRow::into_domain).collect())
    }

    async fn update(&self, artist: Artist) -> Result<Artist, ArtistError> {
        let result = sqlx::query(
            r#"
            UPDATE artists
            SET name = $2, bio = $3, slug = $4, image_url = $5
            WHERE id = $1
            "#,
        )
        .bind(artist.id.0)
        .bind(&artist.name)
        .bind(&artist.bio)
        .bind(&artist.slug)
        .bind(&artist.image_url)
        .execute(&self.pool)
        .await
        .map_err(|e| ArtistError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ArtistError::NotFound(artist.id.to_string()));
        }

        Ok(artist)
    }

    async fn delete(&self, id: &ArtistId) -> Result<(), ArtistError> {
        let result = sqlx::query("DELETE FROM artists WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| ArtistError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ArtistError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
