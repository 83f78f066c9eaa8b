// src/services/persisted_list.rs
//
// Write-through movie list
//
// One in-memory list mirrored to one key of a KeyValueStore. The list is read
// from storage once, at construction (or on an explicit reload). Every change
// is written to storage before it becomes visible in memory; if the write
// fails, memory is left as it was.

use std::sync::{Arc, RwLock};

use crate::domain::movie::{decode_movies, encode_movies, MovieRecord};
use crate::error::AppResult;
use crate::repositories::KeyValueStore;

pub(crate) struct PersistedMovieList {
    key: &'static str,
    store: Arc<dyn KeyValueStore>,
    records: RwLock<Vec<MovieRecord>>,
}

impl PersistedMovieList {
    pub(crate) fn load(store: Arc<dyn KeyValueStore>, key: &'static str) -> Self {
        let records = read_records(store.as_ref(), key);
        Self {
            key,
            store,
            records: RwLock::new(records),
        }
    }

    /// Replace the in-memory list with what storage holds now
    pub(crate) fn reload(&self) {
        let fresh = read_records(self.store.as_ref(), self.key);
        let mut records = self.records.write().unwrap_or_else(|e| e.into_inner());
        *records = fresh;
    }

    pub(crate) fn read<R>(&self, f: impl FnOnce(&[MovieRecord]) -> R) -> R {
        let records = self.records.read().unwrap_or_else(|e| e.into_inner());
        f(&records)
    }

    pub(crate) fn snapshot(&self) -> Vec<MovieRecord> {
        self.read(|records| records.to_vec())
    }

    /// Apply a change and persist it
    ///
    /// `mutate` works on a copy of the list and returns None to leave
    /// everything untouched (no storage write). Otherwise the full list is
    /// written under the key, and only then swapped into memory.
    pub(crate) fn update<R>(
        &self,
        mutate: impl FnOnce(&mut Vec<MovieRecord>) -> Option<R>,
    ) -> AppResult<Option<R>> {
        let mut records = self.records.write().unwrap_or_else(|e| e.into_inner());

        let mut next = records.clone();
        let outcome = match mutate(&mut next) {
            Some(outcome) => outcome,
            None => return Ok(None),
        };

        let raw = encode_movies(&next)?;
        if let Err(e) = self.store.set(self.key, &raw) {
            log::warn!("Could not persist '{}', change discarded: {}", self.key, e);
            return Err(e);
        }

        *records = next;
        Ok(Some(outcome))
    }
}

/// Read and decode a stored list; never fails
fn read_records(store: &dyn KeyValueStore, key: &str) -> Vec<MovieRecord> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            log::debug!("No stored value for '{}', starting empty", key);
            return Vec::new();
        }
        Err(e) => {
            log::warn!("Could not read '{}', starting empty: {}", key, e);
            return Vec::new();
        }
    };

    let decoded = decode_movies(&raw);
    if decoded.rejected {
        log::warn!("Stored value for '{}' is unreadable, starting empty", key);
    } else if decoded.dropped > 0 {
        log::warn!(
            "Dropped {} malformed record(s) from '{}'",
            decoded.dropped,
            key
        );
    }
    if decoded.legacy {
        log::info!("'{}' uses the unversioned layout; it will be upgraded on next write", key);
    }

    decoded.records
}
