pub mod entity;
pub mod genre;
pub mod id;
pub mod schema;

pub use entity::MovieRecord;
pub use genre::{genre_id_by_name, genre_name, TMDB_GENRES};
pub use id::{parse_movie_id, IntoMovieId};
pub use schema::{decode_movies, encode_movies, DecodedMovies, CURRENT_SCHEMA_VERSION};
