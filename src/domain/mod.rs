// src/domain/mod.rs
//
// Domain Root
//
// Declares the domain modules and re-exports their public API.
// Other layers import from `crate::domain::*`.

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod movie;
pub mod search;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Movie Domain
pub use movie::{
    decode_movies, encode_movies, genre_id_by_name, genre_name, parse_movie_id, DecodedMovies,
    IntoMovieId, MovieRecord, CURRENT_SCHEMA_VERSION,
};

// Search Domain
pub use search::{validate_search, SearchCriteria, SearchValidationErrors};

