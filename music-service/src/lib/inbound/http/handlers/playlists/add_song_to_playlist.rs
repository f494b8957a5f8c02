use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::playlist::models::PlaylistEntry;
use crate::domain::playlist::models::PlaylistId;
use crate::domain::playlist::ports::PlaylistServicePort;
use crate::domain::song::models::SongId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// HTTP request body for adding a song to a playlist (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddSongRequest {
    song_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistEntryData {
    pub playlist_id: String,
    pub song_id: String,
}

impl From<&PlaylistEntry> for PlaylistEntryData {
    fn from(entry: &PlaylistEntry) -> Self {
        Self {
            playlist_id: entry.playlist_id.to_string(),
            song_id: entry.song_id.to_string(),
        }
    }
}

pub async fn add_song_to_playlist(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthenticatedUser>,
    Path(playlist_id): Path<String>,
    Json(body): Json<AddSongRequest>,
) -> Result<ApiSuccess<PlaylistEntryData>, ApiError> {
    let playlist_id =
        PlaylistId::from_string(&playlist_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let song_id =
        SongId::from_string(&body.song_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .playlist_service
        .add_song(&actor.user_id, &playlist_id, &song_id)
        .await
        .map_err(ApiError::from)
        .map(|ref entry| ApiSuccess::new(StatusCode::CREATED, entry.into()))
}
