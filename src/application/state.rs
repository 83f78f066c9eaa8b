// src/application/state.rs

use std::sync::Arc;

use crate::services::{CatalogService, FavoritesLedger, MovieCache};

/// Everything the command handlers need.
/// Built once in main.rs and passed by reference; there is no global state.
pub struct AppState {
    pub favorites: Arc<FavoritesLedger>,
    pub movie_cache: Arc<MovieCache>,
    pub catalog_service: Arc<CatalogService>,
}
