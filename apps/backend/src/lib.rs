pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{routing::get, Router};
use slide_core::{AssetTable, ChapterGroup};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::services::cache::DeckCache;
use crate::services::content::ContentRepository;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<ContentRepository>,
    pub assets: Arc<AssetTable>,
    pub cache: Arc<DeckCache>,
    pub groups: Arc<Vec<ChapterGroup>>,
}

impl AppState {
    /// Build state for a content directory, discovering its images.
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let content = ContentRepository::new(&config.content_dir, config.urls.clone());
        let assets = content
            .discover_assets(&config.assets_url_prefix, &config.images_fallback_url)
            .await?;

        Ok(Self {
            content: Arc::new(content),
            assets: Arc::new(assets),
            cache: Arc::new(DeckCache::new()),
            groups: Arc::new(ChapterGroup::defaults()),
        })
    }
}

/// Router with all API routes and the local image folder.
pub fn app(state: AppState, assets_url_prefix: &str) -> Router {
    let images = ServeDir::new(state.content.images_dir());
    let assets_mount = assets_url_prefix.trim_end_matches('/');

    Router::new()
        .route("/health", get(health_check))
        // Chapter routes
        .route("/api/chapters", get(routes::chapters::list))
        .route("/api/chapters/{slug}", get(routes::chapters::document))
        .route("/api/chapters/{slug}/slides", get(routes::chapters::slideshow))
        .route("/api/chapters/{slug}/outline", get(routes::chapters::outline))
        // Slide routes
        .route("/api/slides/{id}", get(routes::slides::view))
        .nest_service(assets_mount, images)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    tracing::info!("Loading content from {}...", config.content_dir.display());
    let state = AppState::from_config(&config).await?;

    let app = app(state, &config.assets_url_prefix);
    let addr = config.addr();

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
