// src/config.rs
//
// Application configuration
//
// Everything has a working default. `from_env` overrides individual values
// from environment variables:
//
//   MOVIEHUB_DATABASE_PATH  database file (default: {APP_DATA}/moviehub/moviehub.db)
//   MOVIEHUB_CACHE_LIMIT    max cached movies (default: unbounded)
//   TMDB_API_KEY            catalog API key (query parameter)
//   TMDB_ACCESS_TOKEN       catalog read access token (bearer header)
//   TMDB_BASE_URL           catalog API root
//   TMDB_LANGUAGE           result language, e.g. "en-US"

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub access_token: Option<String>,
    pub language: String,
    pub timeout: Duration,
    /// Minimum spacing between two catalog requests
    pub min_request_interval: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.themoviedb.org/3".to_string(),
            api_key: None,
            access_token: None,
            language: "en-US".to_string(),
            timeout: Duration::from_secs(15),
            min_request_interval: Duration::from_millis(250),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CacheConfig {
    /// None keeps every fetched movie
    pub max_entries: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// None uses the platform data directory
    pub database_path: Option<PathBuf>,
    pub catalog: CatalogConfig,
    pub cache: CacheConfig,
}

impl AppConfig {
    /// Defaults overridden by the process environment
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults overridden by `lookup`; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = Self::default();

        if let Some(path) = get("MOVIEHUB_DATABASE_PATH") {
            config.database_path = Some(PathBuf::from(path));
        }

        if let Some(limit) = get("MOVIEHUB_CACHE_LIMIT") {
            let max_entries = limit.parse::<usize>().map_err(|e| {
                AppError::Config(format!("MOVIEHUB_CACHE_LIMIT '{}' is not a count: {}", limit, e))
            })?;
            config.cache.max_entries = Some(max_entries);
        }

        config.catalog.api_key = get("TMDB_API_KEY");
        config.catalog.access_token = get("TMDB_ACCESS_TOKEN");

        if let Some(base_url) = get("TMDB_BASE_URL") {
            config.catalog.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(language) = get("TMDB_LANGUAGE") {
            config.catalog.language = language;
        }

        Ok(config)
    }
}
