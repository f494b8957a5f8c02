use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::highlight::models::CreatePlaylistHighlightCommand;
use crate::domain::highlight::ports::HighlightServicePort;
use crate::domain::playlist::errors::PlaylistIdError;
use crate::domain::playlist::models::PlaylistId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::PlaylistHighlightData;
use crate::inbound::http::router::AppState;

pub async fn create_playlist_highlight(
    State(state): State<AppState>,
    Json(body): Json<CreatePlaylistHighlightRequest>,
) -> Result<ApiSuccess<PlaylistHighlightData>, ApiError> {
    state
        .highlight_service
        .create_playlist_highlight(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref highlight| ApiSuccess::new(StatusCode::CREATED, highlight.into()))
}

/// HTTP request body for creating a playlist highlight (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatePlaylistHighlightRequest {
    month_year: String,
    playlist_id: String,
    play_count: Option<i32>,
}

#[derive(Debug, Clone, Error)]
enum ParseCreatePlaylistHighlightRequestError {
    #[error("Invalid month_year date (expected YYYY-MM-DD): {0}")]
    MonthYear(String),

    #[error("Invalid playlist ID: {0}")]
    PlaylistId(#[from] PlaylistIdError),
}

impl CreatePlaylistHighlightRequest {
    fn try_into_command(
        self,
    ) -> Result<CreatePlaylistHighlightCommand, ParseCreatePlaylistHighlightRequestError> {
        let month_year = self
            .month_year
            .parse::<NaiveDate>()
            .map_err(|e| ParseCreatePlaylistHighlightRequestError::MonthYear(e.to_string()))?;
        let playlist_id = PlaylistId::from_string(&self.playlist_id)?;

        Ok(CreatePlaylistHighlightCommand {
            month_year,
            playlist_id,
            play_count: self.play_count,
        })
    }
}

impl From<ParseCreatePlaylistHighlightRequestError> for ApiError {
    fn from(err: ParseCreatePlaylistHighlightRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
