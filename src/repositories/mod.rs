// src/repositories/mod.rs
//
// Repository layer
//
// RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO knowledge of what values encode
// - Explicit SQL only

pub mod key_value_store;

pub use key_value_store::{InMemoryKeyValueStore, KeyValueStore, SqliteKeyValueStore};
