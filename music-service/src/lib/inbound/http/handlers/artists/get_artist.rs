use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::artist::models::ArtistId;
use crate::domain::artist::ports::ArtistServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ArtistData;
use crate::inbound::http::router::AppState;

pub async fn get_artist(
    State(state): State<AppState>,
    Path(artist_id): Path<String>,
) -> Result<ApiSuccess<ArtistData>, ApiError> {
    let artist_id =
        ArtistId::from_string(&artist_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .artist_service
        .get_artist(&artist_id)
        .await
        .map_err(ApiError::from)
        .map(|ref artist| ApiSuccess::new(StatusCode::OK, artist.into()))
}
