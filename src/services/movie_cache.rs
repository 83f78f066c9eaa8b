// src/services/movie_cache.rs
//
// Movie Cache
//
// Movies already fetched from the catalog, keyed by id and kept across
// sessions. Insertion is write-once: a cached record is never replaced.
// By default the cache never shrinks; an optional capacity limit evicts the
// oldest entries first.

use std::sync::Arc;

use crate::domain::movie::{IntoMovieId, MovieRecord};
use crate::error::AppResult;
use crate::repositories::KeyValueStore;
use crate::services::persisted_list::PersistedMovieList;

/// Storage key holding the cached movies
pub const MOVIE_CACHE_KEY: &str = "cachedMovies";

pub struct MovieCache {
    list: PersistedMovieList,
    capacity_limit: Option<usize>,
}

impl MovieCache {
    /// Unbounded cache loaded from `store`
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            list: PersistedMovieList::load(store, MOVIE_CACHE_KEY),
            capacity_limit: None,
        }
    }

    /// Cache holding at most `max_entries` movies (at least one)
    pub fn with_capacity_limit(store: Arc<dyn KeyValueStore>, max_entries: usize) -> Self {
        Self {
            list: PersistedMovieList::load(store, MOVIE_CACHE_KEY),
            capacity_limit: Some(max_entries.max(1)),
        }
    }

    pub fn capacity_limit(&self) -> Option<usize> {
        self.capacity_limit
    }

    /// Cache `movie` unless a movie with the same id is already cached
    ///
    /// Returns true when the movie was inserted. A movie already present is
    /// left as is and nothing is written to storage.
    pub fn add_movie(&self, movie: MovieRecord) -> AppResult<bool> {
        let id = movie.id;
        let limit = self.capacity_limit;

        let evicted = self.list.update(|movies| {
            if movies.iter().any(|m| m.id == id) {
                return None;
            }
            movies.push(movie);

            let overflow = limit.map_or(0, |max| movies.len().saturating_sub(max));
            movies.drain(..overflow);
            Some(overflow)
        })?;

        match evicted {
            Some(0) => {
                log::debug!("Cached movie {}", id);
                Ok(true)
            }
            Some(count) => {
                log::debug!("Cached movie {}, evicted {} oldest", id, count);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// First cached movie whose id matches `id` after coercion
    pub fn get_movie_by_id(&self, id: impl IntoMovieId) -> Option<MovieRecord> {
        let id = id.into_movie_id()?;
        self.list
            .read(|movies| movies.iter().find(|m| m.id == id).cloned())
    }

    pub fn contains(&self, id: i64) -> bool {
        self.list.read(|movies| movies.iter().any(|m| m.id == id))
    }

    /// Cached movies, oldest first
    pub fn movies(&self) -> Vec<MovieRecord> {
        self.list.snapshot()
    }

    pub fn len(&self) -> usize {
        self.list.read(|movies| movies.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Re-read the cache from storage
    pub fn reload(&self) {
        self.list.reload();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemoryKeyValueStore;

    fn spider_man() -> MovieRecord {
        MovieRecord::new(123, "Spider-Man")
            .with_release_date("2023-05-10")
            .with_genre_ids(vec![28])
            .with_poster_path("/spiderman.jpg")
            .with_overview("Hero movie")
    }

    fn empty_cache() -> MovieCache {
        MovieCache::new(Arc::new(InMemoryKeyValueStore::new()))
    }

    #[test]
    fn test_add_is_idempotent_per_id() {
        let cache = empty_cache();

        assert!(cache.add_movie(spider_man()).unwrap());
        assert!(!cache.add_movie(spider_man()).unwrap());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_existing_record_is_never_replaced() {
        let cache = empty_cache();
        cache.add_movie(spider_man()).unwrap();

        cache.add_movie(MovieRecord::new(123, "Other title")).unwrap();

        assert_eq!(cache.get_movie_by_id(123), Some(spider_man()));
    }

    #[test]
    fn test_duplicate_add_does_not_write() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let cache = MovieCache::new(store.clone());
        cache.add_movie(spider_man()).unwrap();

        store.set(MOVIE_CACHE_KEY, "sentinel").unwrap();
        cache.add_movie(spider_man()).unwrap();

        assert_eq!(store.get(MOVIE_CACHE_KEY).unwrap().as_deref(), Some("sentinel"));
    }

    #[test]
    fn test_lookup_coerces_text_ids() {
        let cache = empty_cache();
        cache.add_movie(spider_man()).unwrap();

        let by_number = cache.get_movie_by_id(123);
        let by_text = cache.get_movie_by_id("123");

        assert!(by_number.is_some());
        assert_eq!(by_number, by_text);
        assert_eq!(cache.get_movie_by_id(String::from("123")), by_number);
    }

    #[test]
    fn test_lookup_miss_is_none() {
        let cache = empty_cache();
        cache.add_movie(spider_man()).unwrap();

        assert_eq!(cache.get_movie_by_id(7), None);
        assert_eq!(cache.get_movie_by_id("abc"), None);
    }

    #[test]
    fn test_zero_and_negative_ids_are_cached() {
        let cache = empty_cache();

        assert!(cache.add_movie(MovieRecord::new(0, "Zero")).unwrap());
        assert!(cache.add_movie(MovieRecord::new(-5, "Negative")).unwrap());

        assert_eq!(cache.get_movie_by_id(0), Some(MovieRecord::new(0, "Zero")));
        assert_eq!(cache.get_movie_by_id("-5"), Some(MovieRecord::new(-5, "Negative")));
    }

    #[test]
    fn test_capacity_limit_evicts_oldest() {
        let cache =
            MovieCache::with_capacity_limit(Arc::new(InMemoryKeyValueStore::new()), 2);

        cache.add_movie(MovieRecord::new(1, "A")).unwrap();
        cache.add_movie(MovieRecord::new(2, "B")).unwrap();
        cache.add_movie(MovieRecord::new(3, "C")).unwrap();

        let ids: Vec<i64> = cache.movies().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![2, 3]);
        assert!(!cache.contains(1));
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let cache =
            MovieCache::with_capacity_limit(Arc::new(InMemoryKeyValueStore::new()), 0);
        assert_eq!(cache.capacity_limit(), Some(1));

        cache.add_movie(MovieRecord::new(1, "A")).unwrap();
        cache.add_movie(MovieRecord::new(2, "B")).unwrap();
        assert_eq!(cache.movies(), vec![MovieRecord::new(2, "B")]);
    }

    #[test]
    fn test_storage_failure_leaves_cache_unchanged() {
        let cache = MovieCache::new(Arc::new(InMemoryKeyValueStore::with_quota(4)));

        assert!(cache.add_movie(spider_man()).is_err());
        assert!(cache.is_empty());
    }
}
