// src/services/favorites_ledger.rs
//
// Favorites Ledger
//
// The user's favorite movies, as a set keyed by movie id with insertion order
// preserved. Built once at startup and shared; nothing here is global.

use std::sync::Arc;

use crate::domain::movie::MovieRecord;
use crate::error::AppResult;
use crate::repositories::KeyValueStore;
use crate::services::persisted_list::PersistedMovieList;

/// Storage key holding the favorites list
pub const FAVORITES_KEY: &str = "favorites";

pub struct FavoritesLedger {
    list: PersistedMovieList,
}

impl FavoritesLedger {
    /// Load favorites from `store`; unreadable or absent data yields an empty ledger
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            list: PersistedMovieList::load(store, FAVORITES_KEY),
        }
    }

    /// Add `movie` if no favorite has its id, otherwise remove that favorite
    ///
    /// Returns whether the movie is a favorite afterwards. The updated list is
    /// stored before this returns; on a storage failure the ledger is unchanged.
    pub fn toggle_favorite(&self, movie: MovieRecord) -> AppResult<bool> {
        let id = movie.id;

        let now_favorite = self
            .list
            .update(|favorites| match favorites.iter().position(|f| f.id == id) {
                Some(index) => {
                    favorites.remove(index);
                    Some(false)
                }
                None => {
                    favorites.push(movie);
                    Some(true)
                }
            })?
            .unwrap_or(false);

        log::debug!(
            "Movie {} {} favorites",
            id,
            if now_favorite { "added to" } else { "removed from" }
        );
        Ok(now_favorite)
    }

    pub fn is_favorite(&self, id: i64) -> bool {
        self.list.read(|favorites| favorites.iter().any(|f| f.id == id))
    }

    /// The stored favorite with this id
    pub fn favorite_by_id(&self, id: i64) -> Option<MovieRecord> {
        self.list
            .read(|favorites| favorites.iter().find(|f| f.id == id).cloned())
    }

    /// Favorites in the order they were added
    pub fn favorites(&self) -> Vec<MovieRecord> {
        self.list.snapshot()
    }

    pub fn len(&self) -> usize {
        self.list.read(|favorites| favorites.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Re-read favorites from storage, dropping the in-memory view
    pub fn reload(&self) {
        self.list.reload();
    }
}
