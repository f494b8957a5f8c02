use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::album::models::AlbumId;
use crate::domain::album::models::UpdateAlbumCommand;
use crate::domain::album::ports::AlbumServicePort;
use crate::domain::artist::errors::ArtistIdError;
use crate::domain::artist::models::ArtistId;
use crate::inbound::http::handlers::AlbumData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// HTTP request body for updating an album (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateAlbumRequest {
    pub title: Option<String>,
    pub release_date: Option<String>,
    pub artist_id: Option<String>,
    pub image_url: Option<String>,
    pub slug: Option<String>,
}

#[derive(Debug, Clone, Error)]
enum ParseUpdateAlbumRequestError {
    #[error("Invalid release date: {0}")]
    ReleaseDate(String),

    #[error("Invalid artist ID: {0}")]
    ArtistId(#[from] ArtistIdError),
}

impl UpdateAlbumRequest {
    fn try_into_command(self) -> Result<UpdateAlbumCommand, ParseUpdateAlbumRequestError> {
        let release_date = self
            .release_date
            .map(|s| {
                s.parse::<NaiveDate>()
                    .map_err(|e| ParseUpdateAlbumRequestError::ReleaseDate(e.to_string()))
            })
            .transpose()?;
        let artist_id = self
            .artist_id
            .map(|s| ArtistId::from_string(&s))
            .transpose()?;

        Ok(UpdateAlbumCommand {
            title: self.title,
            release_date,
            artist_id,
            image_url: self.image_url,
            slug: self.slug,
        })
    }
}

impl From<ParseUpdateAlbumRequestError> for ApiError {
    fn from(err: ParseUpdateAlbumRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

pub async fn update_album(
    State(state): State<AppState>,
    Path(album_id): Path<String>,
    Json(body): Json<UpdateAlbumRequest>,
) -> Result<ApiSuccess<AlbumData>, ApiError> {
    let album_id =
        AlbumId::from_string(&album_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let command = body.try_into_command()?;

    state
        .album_service
        .update_album(&album_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref album| ApiSuccess::new(StatusCode::OK, album.into()))
}
