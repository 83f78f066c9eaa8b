// src/services/catalog_service.rs
//
// Catalog Service - search and details on top of the remote catalog
//
// - Search input is validated before any request is made
// - A failed catalog call is reported as "no results", never as an error
// - Every movie the catalog returns is added to the MovieCache
// - Details are served from the cache first, the catalog second

use std::sync::Arc;

use crate::domain::movie::{IntoMovieId, MovieRecord};
use crate::domain::search::{validate_search, SearchCriteria};
use crate::error::{AppError, AppResult};
use crate::integrations::{CatalogPage, MovieCatalog};
use crate::services::MovieCache;

pub struct CatalogService {
    catalog: Arc<dyn MovieCatalog>,
    cache: Arc<MovieCache>,
}

impl CatalogService {
    pub fn new(catalog: Arc<dyn MovieCatalog>, cache: Arc<MovieCache>) -> Self {
        Self { catalog, cache }
    }

    /// Search the catalog
    ///
    /// Invalid criteria return `AppError::InvalidSearch` with per-field messages.
    pub async fn search(&self, criteria: SearchCriteria, page: u32) -> AppResult<CatalogPage> {
        validate_search(&criteria).map_err(AppError::InvalidSearch)?;
        let page = page.max(1);

        let result = match self.catalog.search(criteria, page).await {
            Ok(result) => result,
            Err(e) => {
                log::warn!("Catalog search failed, showing no results: {}", e);
                return Ok(CatalogPage::empty(page));
            }
        };

        for movie in &result.results {
            self.remember(movie.clone());
        }

        Ok(result)
    }

    /// Movie for the details page
    ///
    /// The id is coerced like a route parameter. A cached movie never hits the
    /// network. Ok(None) means the movie could not be found or fetched.
    pub async fn movie_details(&self, id: impl IntoMovieId) -> AppResult<Option<MovieRecord>> {
        let id = match id.into_movie_id() {
            Some(id) => id,
            None => return Ok(None),
        };

        if let Some(movie) = self.cache.get_movie_by_id(id) {
            return Ok(Some(movie));
        }

        match self.catalog.fetch_movie(id).await {
            Ok(movie) => {
                self.remember(movie.clone());
                Ok(Some(movie))
            }
            Err(e) => {
                log::warn!("Could not fetch movie {}: {}", id, e);
                Ok(None)
            }
        }
    }

    /// Cache a fetched movie; a cache failure never fails the caller
    fn remember(&self, movie: MovieRecord) {
        let id = movie.id;
        if let Err(e) = self.cache.add_movie(movie) {
            log::warn!("Could not cache movie {}: {}", id, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrations::MockMovieCatalog;
    use crate::repositories::InMemoryKeyValueStore;

    fn spider_man() -> MovieRecord {
        MovieRecord::new(123, "Spider-Man")
            .with_release_date("2023-05-10")
            .with_genre_ids(vec![28])
            .with_poster_path("/spiderman.jpg")
            .with_overview("Hero movie")
    }

    fn service_with(catalog: MockMovieCatalog) -> (CatalogService, Arc<MovieCache>) {
        let cache = Arc::new(MovieCache::new(Arc::new(InMemoryKeyValueStore::new())));
        (CatalogService::new(Arc::new(catalog), cache.clone()), cache)
    }

    #[tokio::test]
    async fn test_search_returns_and_caches_results() {
        let mut catalog = MockMovieCatalog::new();
        catalog
            .expect_search()
            .withf(|criteria, page| criteria.title() == Some("Spider-Man") && *page == 1)
            .times(1)
            .returning(|_, page| {
                Ok(CatalogPage {
                    page,
                    results: vec![spider_man()],
                    total_pages: 1,
                    total_results: 1,
                })
            });
        let (service, cache) = service_with(catalog);

        let page = service
            .search(SearchCriteria::by_title("Spider-Man"), 1)
            .await
            .unwrap();

        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].title, "Spider-Man");
        assert_eq!(cache.get_movie_by_id("123"), Some(spider_man()));
    }

    #[tokio::test]
    async fn test_invalid_search_never_calls_catalog() {
        let mut catalog = MockMovieCatalog::new();
        catalog.expect_search().never();
        let (service, _) = service_with(catalog);

        let err = service.search(SearchCriteria::by_title("a"), 1).await.unwrap_err();

        match err {
            AppError::InvalidSearch(errors) => assert_eq!(
                errors.title.as_deref(),
                Some("Movie title must be at least 2 characters.")
            ),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_failed_search_is_no_results() {
        let mut catalog = MockMovieCatalog::new();
        catalog
            .expect_search()
            .returning(|_, _| Err(AppError::Catalog("offline".to_string())));
        let (service, cache) = service_with(catalog);

        let page = service
            .search(SearchCriteria::by_title("Spider-Man"), 3)
            .await
            .unwrap();

        assert!(page.results.is_empty());
        assert_eq!(page.page, 3);
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_details_prefer_cache() {
        let mut catalog = MockMovieCatalog::new();
        catalog.expect_fetch_movie().never();
        let (service, cache) = service_with(catalog);
        cache.add_movie(spider_man()).unwrap();

        let movie = service.movie_details("123").await.unwrap();
        assert_eq!(movie, Some(spider_man()));
    }

    #[tokio::test]
    async fn test_details_fetch_and_cache_on_miss() {
        let mut catalog = MockMovieCatalog::new();
        catalog
            .expect_fetch_movie()
            .withf(|id| *id == 123)
            .times(1)
            .returning(|_| Ok(spider_man()));
        let (service, cache) = service_with(catalog);

        assert_eq!(service.movie_details(123).await.unwrap(), Some(spider_man()));
        assert_eq!(service.movie_details(123).await.unwrap(), Some(spider_man()));
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_details_failure_is_not_found() {
        let mut catalog = MockMovieCatalog::new();
        catalog
            .expect_fetch_movie()
            .returning(|_| Err(AppError::NotFound));
        let (service, _) = service_with(catalog);

        assert_eq!(service.movie_details(99).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_details_with_unparseable_id() {
        let mut catalog = MockMovieCatalog::new();
        catalog.expect_fetch_movie().never();
        let (service, _) = service_with(catalog);

        assert_eq!(service.movie_details("not-an-id").await.unwrap(), None);
    }
}
