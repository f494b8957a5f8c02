use std::sync::Arc;

use auth::Authenticator;
use music_service::config::Config;
use music_service::domain::album::service::AlbumService;
use music_service::domain::artist::service::ArtistService;
use music_service::domain::highlight::service::HighlightService;
use music_service::domain::play_log::service::PlayLogService;
use music_service::domain::playlist::service::PlaylistService;
use music_service::domain::song::service::SongService;
use music_service::domain::submission::service::SubmissionService;
use music_service::domain::user::service::UserService;
use music_service::inbound::http::router::create_router;
use music_service::inbound::http::router::AppState;
use music_service::outbound::repositories::PostgresAlbumRepository;
use music_service::outbound::repositories::PostgresArtistRepository;
use music_service::outbound::repositories::PostgresPlayLogRepository;
use music_service::outbound::repositories::PostgresPlaylistHighlightRepository;
use music_service::outbound::repositories::PostgresPlaylistRepository;
use music_service::outbound::repositories::PostgresSongHighlightRepository;
use music_service::outbound::repositories::PostgresSongRepository;
use music_service::outbound::repositories::PostgresSubmissionRepository;
use music_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "music_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "music-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    // A missing token secret fails here, before anything listens.
    let config = Config::load()?;

    tracing::info!(
        database_url = %config.database.url,
        http_port = config.server.http_port,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(config.token.secret.as_bytes()));

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let artist_repository = Arc::new(PostgresArtistRepository::new(pg_pool.clone()));
    let album_repository = Arc::new(PostgresAlbumRepository::new(pg_pool.clone()));
    let song_repository = Arc::new(PostgresSongRepository::new(pg_pool.clone()));
    let playlist_repository = Arc::new(PostgresPlaylistRepository::new(pg_pool.clone()));
    let submission_repository = Arc::new(PostgresSubmissionRepository::new(pg_pool.clone()));
    let song_highlight_repository =
        Arc::new(PostgresSongHighlightRepository::new(pg_pool.clone()));
    let playlist_highlight_repository =
        Arc::new(PostgresPlaylistHighlightRepository::new(pg_pool.clone()));
    let play_log_repository = Arc::new(PostgresPlayLogRepository::new(pg_pool));

    let state = AppState {
        user_service: Arc::new(UserService::new(user_repository)),
        artist_service: Arc::new(ArtistService::new(artist_repository)),
        album_service: Arc::new(AlbumService::new(album_repository)),
        song_service: Arc::new(SongService::new(song_repository)),
        playlist_service: Arc::new(PlaylistService::new(playlist_repository)),
        submission_service: Arc::new(SubmissionService::new(submission_repository)),
        highlight_service: Arc::new(HighlightService::new(
            song_highlight_repository,
            playlist_highlight_repository,
        )),
        play_log_service: Arc::new(PlayLogService::new(play_log_repository)),
        authenticator,
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(state);
    axum::serve(http_listener, http_application).await?;

    Ok(())
}
