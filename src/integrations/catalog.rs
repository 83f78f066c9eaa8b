// src/integrations/catalog.rs
//
// Remote movie catalog boundary
//
// Services depend on this trait, never on a concrete HTTP client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::movie::MovieRecord;
use crate::domain::search::SearchCriteria;
use crate::error::AppResult;

/// One page of catalog results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogPage {
    pub page: u32,
    pub results: Vec<MovieRecord>,

    /// Catalog-side paging. A client that narrows `results` after the fetch
    /// (such as a genre filter on title search) keeps these unfiltered, so
    /// they bound the pages to request, not the matches on them.
    pub total_pages: u32,
    pub total_results: u32,
}

impl CatalogPage {
    /// A page with no results
    pub fn empty(page: u32) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Movies matching `criteria`, one page at a time (pages start at 1)
    async fn search(&self, criteria: SearchCriteria, page: u32) -> AppResult<CatalogPage>;

    /// Full record for one movie
    async fn fetch_movie(&self, id: i64) -> AppResult<MovieRecord>;
}
