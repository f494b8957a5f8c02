use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use crate::domain::song::models::Language;
use crate::domain::song::models::SongSearch;
use crate::domain::song::ports::SongServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::SongData;
use crate::inbound::http::router::AppState;

/// Query string for the catalog search: `?query=...&language=pt_BR`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchSongsQuery {
    query: String,
    language: Option<String>,
}

pub async fn search_songs(
    State(state): State<AppState>,
    Query(params): Query<SearchSongsQuery>,
) -> Result<ApiSuccess<Vec<SongData>>, ApiError> {
    if params.query.is_empty() {
        return Err(ApiError::BadRequest(
            "Search query must not be empty".to_string(),
        ));
    }

    let language = params
        .language
        .map(|s| Language::parse(&s))
        .transpose()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let search = SongSearch {
        query: params.query,
        language,
    };

    state
        .song_service
        .search_songs(search)
        .await
        .map_err(ApiError::from)
        .map(|songs| ApiSuccess::new(StatusCode::OK, songs.iter().map(Into::into).collect()))
}
