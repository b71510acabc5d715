//! Server configuration from environment variables.

use std::path::PathBuf;

use slide_core::SiteUrls;
use thiserror::Error;

pub const DEFAULT_IMAGES_FALLBACK_URL: &str =
    "https://raw.githubusercontent.com/we-learn-js/js-training/js-training-v2/src/md/images/";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value: {0}")]
    InvalidPort(String),
}

/// Backend settings.
///
/// Env vars (all optional):
/// - HOST, PORT: listen address (0.0.0.0:3000)
/// - CONTENT_DIR: directory holding chapter `*.md` files and `images/`
/// - SITE_URL: public site origin used in canonical URLs
/// - ASSETS_URL_PREFIX: URL prefix local images are served under
/// - IMAGES_FALLBACK_URL: remote folder for images missing locally
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub content_dir: PathBuf,
    pub urls: SiteUrls,
    pub assets_url_prefix: String,
    pub images_fallback_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; missing keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(value))?,
            None => 3000,
        };

        let defaults = SiteUrls::default();

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            content_dir: lookup("CONTENT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("content")),
            urls: SiteUrls {
                site_url: lookup("SITE_URL").unwrap_or(defaults.site_url),
                ..defaults
            },
            assets_url_prefix: lookup("ASSETS_URL_PREFIX")
                .unwrap_or_else(|| "/assets/images/".to_string()),
            images_fallback_url: lookup("IMAGES_FALLBACK_URL")
                .unwrap_or_else(|| DEFAULT_IMAGES_FALLBACK_URL.to_string()),
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
