// src/services/mod.rs
//
// Services Module - Orchestration Layer

mod persisted_list;

pub mod catalog_service;
pub mod favorites_ledger;
pub mod movie_cache;


pub use catalog_service::CatalogService;
pub use favorites_ledger::{FavoritesLedger, FAVORITES_KEY};
pub use movie_cache::{MovieCache, MOVIE_CACHE_KEY};
