use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::albums;
use super::handlers::artists;
use super::handlers::authenticate::authenticate;
use super::handlers::highlights;
use super::handlers::play_logs;
use super::handlers::playlists;
use super::handlers::songs;
use super::handlers::submissions;
use super::handlers::users;
use super::middleware::authenticate as auth_middleware;
use crate::domain::album::service::AlbumService;
use crate::domain::artist::service::ArtistService;
use crate::domain::highlight::service::HighlightService;
use crate::domain::play_log::service::PlayLogService;
use crate::domain::playlist::service::PlaylistService;
use crate::domain::song::service::SongService;
use crate::domain::submission::service::SubmissionService;
use crate::domain::user::service::UserService;
use crate::outbound::repositories::PostgresAlbumRepository;
use crate::outbound::repositories::PostgresArtistRepository;
use crate::outbound::repositories::PostgresPlayLogRepository;
use crate::outbound::repositories::PostgresPlaylistHighlightRepository;
use crate::outbound::repositories::PostgresPlaylistRepository;
use crate::outbound::repositories::PostgresSongHighlightRepository;
use crate::outbound::repositories::PostgresSongRepository;
use crate::outbound::repositories::PostgresSubmissionRepository;
use crate::outbound::repositories::PostgresUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<PostgresUserRepository>>,
    pub artist_service: Arc<ArtistService<PostgresArtistRepository>>,
    pub album_service: Arc<AlbumService<PostgresAlbumRepository>>,
    pub song_service: Arc<SongService<PostgresSongRepository>>,
    pub playlist_service: Arc<PlaylistService<PostgresPlaylistRepository>>,
    pub submission_service: Arc<SubmissionService<PostgresSubmissionRepository>>,
    pub highlight_service:
        Arc<HighlightService<PostgresSongHighlightRepository, PostgresPlaylistHighlightRepository>>,
    pub play_log_service: Arc<PlayLogService<PostgresPlayLogRepository>>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/api/auth/login", post(authenticate))
        .route("/api/users", post(users::create_user))
        .route("/api/users/:user_id", get(users::get_user))
        .route("/api/artists", post(artists::create_artist))
        .route("/api/artists", get(artists::list_artists))
        .route("/api/artists/:artist_id", get(artists::get_artist))
        .route("/api/artists/:artist_id", patch(artists::update_artist))
        .route("/api/artists/:artist_id", delete(artists::delete_artist))
        .route("/api/albums", post(albums::create_album))
        .route("/api/albums", get(albums::list_albums))
        .route("/api/albums/:album_id", get(albums::get_album))
        .route("/api/albums/:album_id", patch(albums::update_album))
        .route("/api/albums/:album_id", delete(albums::delete_album))
        .route("/api/songs", post(songs::create_song))
        .route("/api/songs", get(songs::list_songs))
        .route(
            "/api/songs/language/:language",
            get(songs::list_songs_by_language),
        )
        .route("/api/songs/search", get(songs::search_songs))
        .route("/api/playlists", post(playlists::create_playlist))
        .route("/api/playlists/:playlist_id", get(playlists::get_playlist))
        .route(
            "/api/lyrics-submissions",
            post(submissions::create_submission),
        )
        .route(
            "/api/lyrics-submissions",
            get(submissions::list_submissions),
        )
        .route(
            "/api/lyrics-submissions/:submission_id",
            get(submissions::get_submission),
        )
        .route(
            "/api/lyrics-submissions/:submission_id",
            patch(submissions::update_submission_status),
        )
        .route(
            "/api/lyrics-submissions/:submission_id",
            delete(submissions::delete_submission),
        )
        .route(
            "/api/highlights/songs",
            post(highlights::create_song_highlight),
        )
        .route(
            "/api/highlights/songs",
            get(highlights::list_song_highlights),
        )
        .route(
            "/api/highlights/songs/:highlight_id",
            get(highlights::get_song_highlight),
        )
        .route(
            "/api/highlights/songs/:highlight_id",
            patch(highlights::update_song_highlight),
        )
        .route(
            "/api/highlights/songs/:highlight_id",
            delete(highlights::delete_song_highlight),
        )
        .route(
            "/api/highlights/playlists",
            post(highlights::create_playlist_highlight),
        )
        .route(
            "/api/highlights/playlists",
            get(highlights::list_playlist_highlights),
        )
        .route(
            "/api/highlights/playlists/:highlight_id",
            get(highlights::get_playlist_highlight),
        )
        .route(
            "/api/highlights/playlists/:highlight_id",
            patch(highlights::update_playlist_highlight),
        )
        .route(
            "/api/highlights/playlists/:highlight_id",
            delete(highlights::delete_playlist_highlight),
        )
        .route("/api/play-logs", post(play_logs::record_play))
        .route(
            "/api/users/:user_id/play-logs",
            get(play_logs::list_user_play_logs),
        );

    // Playlist mutations and the owner-scoped listing go through the token
    // middleware; everything else stays open, matching the upstream API.
    let protected_routes = Router::new()
        .route("/api/me/playlists", get(playlists::list_my_playlists))
        .route(
            "/api/playlists/:playlist_id/songs",
            post(playlists::add_song_to_playlist),
        )
        .route(
            "/api/playlists/:playlist_id",
            patch(playlists::update_playlist),
        )
        .route(
            "/api/playlists/:playlist_id",
            delete(playlists::delete_playlist),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
