use axum::{
    extract::{Path, Request, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use log::{debug, error, info, warn};
use std::path::PathBuf;
use std::sync::Arc as StdArc;
use tower::ServiceExt;
use tower_http::services::ServeFile;

use crate::archive::{RecordStore, SqliteArchive};
use crate::config::ServeConfig;
use crate::error::{ArchiveError, Resource};
use crate::{db, media, pages, templates};

// State shared by all handlers
pub struct AppState {
    pub store: StdArc<dyn RecordStore>,
    pub archive_root: PathBuf,
}

impl IntoResponse for ArchiveError {
    fn into_response(self) -> Response {
        match &self {
            ArchiveError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()).into_response(),
            ArchiveError::MalformedInput(msg) => {
                error!("Malformed archive data: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Malformed archive data").into_response()
            }
            ArchiveError::Upstream(e) => {
                error!("Database query failed: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error").into_response()
            }
        }
    }
}

/// Routes for the archive browser
pub fn router(state: StdArc<AppState>) -> Router {
    Router::new()
        .route("/", get(landing_handler))
        .route("/podcast/{podcast}", get(podcast_handler))
        .route("/podcast/{podcast}/cover", get(cover_handler))
        .route("/episode/{episode}/audio", get(audio_handler))
        .route("/public/style.css", get(style_handler))
        .route("/favicon.ico", get(favicon_handler))
        .with_state(state)
}

/// Serve the archive until Ctrl-C (for the default command)
pub fn run(config: ServeConfig) -> Result<(), Box<dyn std::error::Error>> {
    config.validate()?;

    if config.immutable {
        warn!("Immutable mode enabled. Only use this for databases on read-only media;");
        warn!("gPodder writing to the database while serving will produce SQLITE_CORRUPT errors.");
    }

    info!("Archive: {}", config.archive_root.display());
    info!("Database: {}", config.database.display());
    info!("Listening on: http://{}", config.listen_addr());
    info!("Endpoints:");
    info!("  GET /  - Podcasts with downloaded episodes");
    info!("  GET /podcast/:podcast  - Podcast page");
    info!("  GET /podcast/:podcast/cover  - Cover image");
    info!("  GET /episode/:episode/audio  - Episode audio");

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        let pool = db::open_readonly_pool(&config.database, config.immutable)
            .await
            .map_err(|e| format!("Failed to open database '{}': {}", config.database.display(), e))?;

        let archive = SqliteArchive::new(pool.clone());
        let podcasts = archive
            .podcast_count()
            .await
            .map_err(|e| format!("Not a gPodder database '{}': {}", config.database.display(), e))?;
        info!("Archive has {} podcasts", podcasts);

        let app_state = StdArc::new(AppState {
            store: StdArc::new(archive),
            archive_root: config.archive_root.clone(),
        });

        let listener = tokio::net::TcpListener::bind(config.listen_addr())
            .await
            .map_err(|e| format!("Failed to bind to {}: {}", config.listen_addr(), e))?;
        axum::serve(listener, router(app_state))
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| format!("Server error: {}", e))?;

        pool.close().await;
        info!("Server stopped");
        Ok::<(), Box<dyn std::error::Error>>(())
    })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}

// Ids that do not parse can't exist either
fn parse_id(raw: &str, resource: Resource) -> Result<i64, ArchiveError> {
    raw.parse().map_err(|_| ArchiveError::NotFound(resource))
}

async fn landing_handler(State(state): State<StdArc<AppState>>) -> Result<Html<String>, ArchiveError> {
    let page = pages::load_landing_page(state.store.as_ref()).await?;
    Ok(Html(templates::listing(&page).into_string()))
}

async fn podcast_handler(
    State(state): State<StdArc<AppState>>,
    Path(podcast): Path<String>,
) -> Result<Html<String>, ArchiveError> {
    let podcast_id = parse_id(&podcast, Resource::Podcast)?;
    let page = pages::load_podcast_page(state.store.as_ref(), podcast_id).await?;
    Ok(Html(templates::detail(&page).into_string()))
}

async fn cover_handler(
    State(state): State<StdArc<AppState>>,
    Path(podcast): Path<String>,
    request: Request,
) -> Result<Response, ArchiveError> {
    let podcast_id = parse_id(&podcast, Resource::Podcast)?;
    let podcast = state
        .store
        .get_podcast(podcast_id)
        .await?
        .ok_or(ArchiveError::NotFound(Resource::Podcast))?;

    let path = media::resolve_cover(&state.archive_root, &podcast.download_folder)
        .ok_or(ArchiveError::NotFound(Resource::Cover))?;
    serve_file(path, request, Resource::Cover).await
}

async fn audio_handler(
    State(state): State<StdArc<AppState>>,
    Path(episode): Path<String>,
    request: Request,
) -> Result<Response, ArchiveError> {
    let episode_id = parse_id(&episode, Resource::Episode)?;
    // not downloaded means there is nothing to serve
    let episode = state
        .store
        .get_episode(episode_id)
        .await?
        .filter(|e| e.is_visible())
        .ok_or(ArchiveError::NotFound(Resource::Episode))?;
    let podcast = state
        .store
        .get_podcast(episode.podcast_id)
        .await?
        .ok_or(ArchiveError::NotFound(Resource::Podcast))?;

    let path = media::resolve_audio(&state.archive_root, &podcast.download_folder, &episode.file_name)
        .ok_or(ArchiveError::NotFound(Resource::Audio))?;
    serve_file(path, request, Resource::Audio).await
}

async fn style_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        templates::STYLE_CSS,
    )
}

async fn favicon_handler() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "image/x-icon")], templates::FAVICON)
}

/// Stream a file with range and content-type support
async fn serve_file(
    path: PathBuf,
    request: Request,
    resource: Resource,
) -> Result<Response, ArchiveError> {
    let response = match ServeFile::new(&path).oneshot(request).await {
        Ok(response) => response,
        Err(never) => match never {},
    };

    if response.status() == StatusCode::NOT_FOUND {
        debug!("File not found: {}", path.display());
        return Err(ArchiveError::NotFound(resource));
    }
    Ok(response.into_response())
}
