use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::album::errors::AlbumIdError;
use crate::domain::album::models::AlbumId;
use crate::domain::artist::errors::ArtistIdError;
use crate::domain::artist::models::ArtistId;
use crate::domain::song::errors::LanguageError;
use crate::domain::song::models::CreateSongCommand;
use crate::domain::song::models::Language;
use crate::domain::song::ports::SongServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::SongData;
use crate::inbound::http::router::AppState;

pub async fn create_song(
    State(state): State<AppState>,
    Json(body): Json<CreateSongRequest>,
) -> Result<ApiSuccess<SongData>, ApiError> {
    state
        .song_service
        .create_song(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref song| ApiSuccess::new(StatusCode::CREATED, song.into()))
}

/// HTTP request body for creating a song (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateSongRequest {
    title: String,
    slug: String,
    album_id: String,
    artist_id: String,
    file_url: String,
    language: String,
    lyrics: Option<String>,
    chords: Option<String>,
    duration_secs: i32,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateSongRequestError {
    #[error("Invalid album ID: {0}")]
    AlbumId(#[from] AlbumIdError),

    #[error("Invalid artist ID: {0}")]
    ArtistId(#[from] ArtistIdError),

    #[error("Invalid language: {0}")]
    Language(#[from] LanguageError),
}

impl CreateSongRequest {
    fn try_into_command(self) -> Result<CreateSongCommand, ParseCreateSongRequestError> {
        let album_id = AlbumId::from_string(&self.album_id)?;
        let artist_id = ArtistId::from_string(&self.artist_id)?;
        let language = Language::parse(&self.language)?;

        Ok(CreateSongCommand {
            title: self.title,
            slug: self.slug,
            album_id,
            artist_id,
            file_url: self.file_url,
            language,
            lyrics: self.lyrics,
            chords: self.chords,
            duration_secs: self.duration_secs,
        })
    }
}

impl From<ParseCreateSongRequestError> for ApiError {
    fn from(err: ParseCreateSongRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
