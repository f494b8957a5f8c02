use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::domain::artist::models::ArtistId;
use crate::domain::artist::models::UpdateArtistCommand;
use crate::domain::artist::ports::ArtistServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ArtistData;
use crate::inbound::http::router::AppState;

/// HTTP request body for updating an artist (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateArtistRequest {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub slug: Option<String>,
    pub image_url: Option<String>,
}

pub async fn update_artist(
    State(state): State<AppState>,
    Path(artist_id): Path<String>,
    Json(body): Json<UpdateArtistRequest>,
) -> Result<ApiSuccess<ArtistData>, ApiError> {
    let artist_id =
        ArtistId::from_string(&artist_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let command = UpdateArtistCommand {
        name: body.name,
        bio: body.bio,
        slug: body.slug,
        image_url: body.image_url,
    };

    state
        .artist_service
        .update_artist(&artist_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref artist| ApiSuccess::new(StatusCode::OK, artist.into()))
}
