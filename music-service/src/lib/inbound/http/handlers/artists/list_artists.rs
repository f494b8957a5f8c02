use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::artist::ports::ArtistServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ArtistData;
use crate::inbound::http::router::AppState;

pub async fn list_artists(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<ArtistData>>, ApiError> {
    state
        .artist_service
        .list_artists()
        .await
        .map_err(ApiError::from)
        .map(|artists| {
            ApiSuccess::new(StatusCode::OK, artists.iter().map(Into::into).collect())
        })
}
