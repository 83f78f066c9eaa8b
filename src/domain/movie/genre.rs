// Catalog genre table
//
// The catalog identifies genres by number; the search form and cards use names.

/// (id, name) pairs used by the movie catalog
pub const TMDB_GENRES: &[(i64, &str)] = &[
    (28, "Action"),
    (12, "Adventure"),
    (16, "Animation"),
    (35, "Comedy"),
    (80, "Crime"),
    (99, "Documentary"),
    (18, "Drama"),
    (10751, "Family"),
    (14, "Fantasy"),
    (36, "History"),
    (27, "Horror"),
    (10402, "Music"),
    (9648, "Mystery"),
    (10749, "Romance"),
    (878, "Science Fiction"),
    (10770, "TV Movie"),
    (53, "Thriller"),
    (10752, "War"),
    (37, "Western"),
];

/// Genre name for a catalog genre id
pub fn genre_name(id: i64) -> Option<&'static str> {
    TMDB_GENRES
        .iter()
        .find(|(genre_id, _)| *genre_id == id)
        .map(|(_, name)| *name)
}

/// Catalog genre id for a name, case-insensitive
///
/// "Sci-Fi" and "SciFi" are accepted for Science Fiction.
pub fn genre_id_by_name(name: &str) -> Option<i64> {
    let wanted = name.trim();
    if wanted.eq_ignore_ascii_case("sci-fi") || wanted.eq_ignore_ascii_case("scifi") {
        return Some(878);
    }
    TMDB_GENRES
        .iter()
        .find(|(_, genre)| genre.eq_ignore_ascii_case(wanted))
        .map(|(id, _)| *id)
}
