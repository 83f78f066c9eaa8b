// src/integrations/tmdb/client.rs
//
// TMDB (The Movie Database) REST client
//
// ARCHITECTURE:
// - HTTP client for the catalog's v3 API
// - Maps external JSON → MovieRecord (no caching, no persistence)
// - Used by CatalogService through the MovieCatalog trait
//
// Endpoints used:
// - GET /search/movie     title search (optional year)
// - GET /discover/movie   year / genre browsing when no title is given
// - GET /movie/{id}       details

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

use crate::config::CatalogConfig;
use crate::domain::movie::{genre_id_by_name, genre_name, MovieRecord};
use crate::domain::search::SearchCriteria;
use crate::error::{AppError, AppResult};
use crate::integrations::catalog::{CatalogPage, MovieCatalog};

/// Paged list response
#[derive(Debug, Deserialize)]
struct PageResponse {
    #[serde(default)]
    page: u32,
    results: Vec<MovieData>,
    #[serde(default)]
    total_pages: u32,
    #[serde(default)]
    total_results: u32,
}

/// Movie as returned by list and detail endpoints
#[derive(Debug, Deserialize)]
struct MovieData {
    id: i64,
    title: String,
    release_date: Option<String>,
    /// List endpoints
    #[serde(default)]
    genre_ids: Vec<i64>,
    /// Detail endpoint
    #[serde(default)]
    genres: Vec<GenreData>,
    overview: Option<String>,
    poster_path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenreData {
    id: i64,
    name: String,
}

/// Error body the API sends with non-2xx responses
#[derive(Debug, Deserialize)]
struct StatusMessage {
    status_message: String,
}

/// A catalog GET request: endpoint path plus query parameters
#[derive(Debug, PartialEq)]
struct CatalogRequest {
    path: &'static str,
    query: Vec<(&'static str, String)>,
    /// Genre to keep when the endpoint cannot filter by genre itself
    local_genre_filter: Option<i64>,
}

/// Keeps a minimum interval between requests
struct RateLimiter {
    last_request: Option<Instant>,
    min_interval: Duration,
}

impl RateLimiter {
    fn new(min_interval: Duration) -> Self {
        Self {
            last_request: None,
            min_interval,
        }
    }

    async fn wait_if_needed(&mut self) {
        if let Some(last) = self.last_request {
            let elapsed = last.elapsed();
            if elapsed < self.min_interval {
                tokio::time::sleep(self.min_interval - elapsed).await;
            }
        }
        self.last_request = Some(Instant::now());
    }
}

/// TMDB API Client
pub struct TmdbClient {
    base_url: String,
    api_key: Option<String>,
    access_token: Option<String>,
    language: String,
    http_client: Client,
    rate_limiter: Mutex<RateLimiter>,
}

impl TmdbClient {
    pub fn new(config: &CatalogConfig) -> AppResult<Self> {
        let http_client = Client::builder().timeout(config.timeout).build()?;

        if config.api_key.is_none() && config.access_token.is_none() {
            log::warn!("No catalog credentials configured; catalog requests will be refused");
        }

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            access_token: config.access_token.clone(),
            language: config.language.clone(),
            http_client,
            rate_limiter: Mutex::new(RateLimiter::new(config.min_request_interval)),
        })
    }

    /// Search by title, or browse by year and genre
    ///
    /// Returns None when the criteria name a genre the catalog does not know,
    /// since nothing can match it.
    fn build_search_request(criteria: &SearchCriteria, page: u32) -> Option<CatalogRequest> {
        let genre_id = match criteria.genre() {
            Some(name) => Some(genre_id_by_name(name)?),
            None => None,
        };
        let page = page.max(1).to_string();

        if let Some(title) = criteria.title() {
            let mut query = vec![("query", title.to_string()), ("page", page)];
            if let Some(year) = criteria.year {
                query.push(("year", year.to_string()));
            }
            return Some(CatalogRequest {
                path: "/search/movie",
                query,
                local_genre_filter: genre_id,
            });
        }

        let mut query = vec![
            ("page", page),
            ("sort_by", "popularity.desc".to_string()),
        ];
        if let Some(year) = criteria.year {
            query.push(("primary_release_year", year.to_string()));
        }
        if let Some(genre_id) = genre_id {
            query.push(("with_genres", genre_id.to_string()));
        }
        Some(CatalogRequest {
            path: "/discover/movie",
            query,
            local_genre_filter: None,
        })
    }

    // ========================================================================
    // INTERNAL: HTTP
    // ========================================================================

    async fn get_json<T>(&self, path: &str, query: &[(&'static str, String)]) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        self.rate_limiter.lock().await.wait_if_needed().await;

        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .http_client
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .query(&[("language", self.language.as_str())])
            .query(query);

        if let Some(key) = &self.api_key {
            request = request.query(&[("api_key", key.as_str())]);
        }
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        log::debug!("Catalog GET {}", path);
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<StatusMessage>()
                .await
                .map(|m| m.status_message)
                .unwrap_or_default();
            return Err(AppError::Catalog(format!(
                "TMDB returned status {} for {}: {}",
                status, path, detail
            )));
        }

        Ok(response.json::<T>().await?)
    }

    /// Totals are passed through as reported; `genre_filter` narrows only `results`
    fn map_page(response: PageResponse, genre_filter: Option<i64>) -> CatalogPage {
        let results = response
            .results
            .into_iter()
            .map(Self::map_movie)
            .filter(|movie| genre_filter.map_or(true, |id| movie.genre_ids.contains(&id)))
            .collect();

        CatalogPage {
            page: response.page,
            results,
            total_pages: response.total_pages,
            total_results: response.total_results,
        }
    }

    fn map_movie(data: MovieData) -> MovieRecord {
        let genre_ids = if data.genre_ids.is_empty() {
            data.genres.iter().map(|g| g.id).collect()
        } else {
            data.genre_ids
        };

        let genre = data
            .genres
            .into_iter()
            .next()
            .map(|g| g.name)
            .or_else(|| genre_ids.iter().find_map(|id| genre_name(*id)).map(str::to_string));

        MovieRecord {
            id: data.id,
            title: data.title,
            release_date: data.release_date.filter(|d| !d.is_empty()),
            genre,
            genre_ids,
            overview: data.overview.filter(|o| !o.is_empty()),
            poster_path: data.poster_path,
        }
    }
}

#[async_trait]
impl MovieCatalog for TmdbClient {
    async fn search(&self, criteria: SearchCriteria, page: u32) -> AppResult<CatalogPage> {
        let request = match Self::build_search_request(&criteria, page) {
            Some(request) => request,
            None => {
                log::debug!("Unknown genre {:?}, nothing to search", criteria.genre());
                return Ok(CatalogPage::empty(page));
            }
        };

        let response: PageResponse = self.get_json(request.path, &request.query).await?;
        Ok(Self::map_page(response, request.local_genre_filter))
    }

    async fn fetch_movie(&self, id: i64) -> AppResult<MovieRecord> {
        let path = format!("/movie/{}", id);
        let data: MovieData = self.get_json(&path, &[]).await?;
        Ok(Self::map_movie(data))
    }
}
