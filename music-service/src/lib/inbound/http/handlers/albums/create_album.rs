use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::album::models::CreateAlbumCommand;
use crate::domain::album::ports::AlbumServicePort;
use crate::domain::artist::errors::ArtistIdError;
use crate::domain::artist::models::ArtistId;
use crate::inbound::http::handlers::AlbumData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn create_album(
    State(state): State<AppState>,
    Json(body): Json<CreateAlbumRequest>,
) -> Result<ApiSuccess<AlbumData>, ApiError> {
    state
        .album_service
        .create_album(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref album| ApiSuccess::new(StatusCode::CREATED, album.into()))
}

/// HTTP request body for creating an album (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateAlbumRequest {
    title: String,
    release_date: String,
    artist_id: String,
    image_url: String,
    slug: Option<String>,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateAlbumRequestError {
    #[error("Invalid release date: {0}")]
    ReleaseDate(String),

    #[error("Invalid artist ID: {0}")]
    ArtistId(#[from] ArtistIdError),
}

impl CreateAlbumRequest {
    fn try_into_command(self) -> Result<CreateAlbumCommand, ParseCreateAlbumRequestError> {
        let release_date = self
            .release_date
            .parse::<NaiveDate>()
            .map_err(|e| ParseCreateAlbumRequestError::ReleaseDate(e.to_string()))?;
        let artist_id = ArtistId::from_string(&self.artist_id)?;

        Ok(CreateAlbumCommand {
            title: self.title,
            release_date,
            artist_id,
            image_url: self.image_url,
            slug: self.slug,
        })
    }
}

impl From<ParseCreateAlbumRequestError> for ApiError {
    fn from(err: ParseCreateAlbumRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
