// src/integrations/mod.rs
//
// External Integrations Module

pub mod catalog;
pub mod tmdb;

pub use catalog::{CatalogPage, MovieCatalog};
pub use tmdb::client::TmdbClient;

#[cfg(test)]
pub use catalog::MockMovieCatalog;
