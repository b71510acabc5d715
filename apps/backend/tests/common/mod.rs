//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext writing fixture chapters to a temporary content directory
//! - Router construction over that directory

pub mod fixtures;

use axum::Router;
use tempfile::TempDir;

use js_training_backend::config::Config;
use js_training_backend::{app, AppState};

/// Test context owning the content directory and the router serving it.
pub struct TestContext {
    pub state: AppState,
    app: Router,
    _dir: TempDir,
}

impl TestContext {
    /// Create a context with the standard fixture chapters and images.
    pub async fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create content dir");
        fixtures::write_content(dir.path());

        let content_dir = dir.path().to_string_lossy().into_owned();
        let config = Config::from_lookup(|key| match key {
            "CONTENT_DIR" => Some(content_dir.clone()),
            _ => None,
        })
        .expect("Failed to build config");

        let state = AppState::from_config(&config)
            .await
            .expect("Failed to load content");
        let app = app(state.clone(), &config.assets_url_prefix);

        Self {
            state,
            app,
            _dir: dir,
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }
}
