use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::domain::artist::models::CreateArtistCommand;
use crate::domain::artist::ports::ArtistServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ArtistData;
use crate::inbound::http::router::AppState;

pub async fn create_artist(
    State(state): State<AppState>,
    Json(body): Json<CreateArtistRequest>,
) -> Result<ApiSuccess<ArtistData>, ApiError> {
    state
        .artist_service
        .create_artist(body.into_command())
        .await
        .map_err(ApiError::from)
        .map(|ref artist| ApiSuccess::new(StatusCode::CREATED, artist.into()))
}

/// HTTP request body for creating an artist (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateArtistRequest {
    name: String,
    bio: Option<String>,
    slug: Option<String>,
    image_url: String,
}

impl CreateArtistRequest {
    fn into_command(self) -> CreateArtistCommand {
        CreateArtistCommand {
            name: self.name,
            bio: self.bio,
            slug: self.slug,
            image_url: self.image_url,
        }
    }
}
