// src/lib.rs
// MovieHub - Local-first movie search, cache and favorites
//
// Architecture:
// - Domain: MovieRecord, its stored-list schema, search criteria
// - Repositories: durable key-value storage (SQLite, in-memory)
// - Services: FavoritesLedger and MovieCache (write-through lists), CatalogService
// - Integrations: remote movie catalog (TMDB)
// - Application: page-facing commands and DTOs
//
// Components are explicit instances wired at startup; there is no global state.

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

pub mod application;
pub mod integrations;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    decode_movies, encode_movies, validate_search, DecodedMovies, IntoMovieId, MovieRecord, SearchCriteria, SearchValidationErrors,
};

// ============================================================================
// PUBLIC API - Errors & Configuration
// ============================================================================

pub use config::{AppConfig, CacheConfig, CatalogConfig};
pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Storage
// ============================================================================

pub use db::{create_connection_pool, create_connection_pool_at, initialize_database, ConnectionPool};
pub use repositories::{InMemoryKeyValueStore, KeyValueStore, SqliteKeyValueStore};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    CatalogService, FavoritesLedger, MovieCache, FAVORITES_KEY, MOVIE_CACHE_KEY,
};

// ============================================================================
// PUBLIC API - Integrations & Application
// ============================================================================

pub use application::AppState;
pub use application::{commands, dto};
pub use integrations::{CatalogPage, MovieCatalog, TmdbClient};
