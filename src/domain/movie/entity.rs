use serde::{Deserialize, Deserializer, Serialize};

/// Base URL for catalog poster images when only a relative path is stored
const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// One movie as known to this application
///
/// Identity is the catalog `id` alone. Every other field is display
/// metadata and is kept exactly as received.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredMovie")]
pub struct MovieRecord {
    /// Catalog identifier, the sole equality key
    pub id: i64,

    pub title: String,

    /// Release date ("2014-11-05") or a bare year ("2014")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,

    /// Human readable genre label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,

    /// Catalog genre identifiers
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub genre_ids: Vec<i64>,

    /// Synopsis
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,

    /// Relative catalog path ("/abc.jpg") or an absolute image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
}

/// Every field name a stored record may carry
///
/// Card-shaped records use `year` / `description` / `image`, camelCase
/// writers use `releaseDate` / `posterPath`. A record may carry several
/// names for one field; the canonical name wins.
#[derive(Deserialize)]
struct StoredMovie {
    id: i64,
    title: String,

    #[serde(default, deserialize_with = "lenient_string")]
    release_date: Option<String>,
    #[serde(default, rename = "releaseDate", deserialize_with = "lenient_string")]
    release_date_camel: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    year: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    genre: Option<String>,
    #[serde(default)]
    genre_ids: Vec<i64>,

    #[serde(default, deserialize_with = "lenient_string")]
    overview: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    description: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    poster_path: Option<String>,
    #[serde(default, rename = "posterPath", deserialize_with = "lenient_string")]
    poster_path_camel: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    image: Option<String>,
}

impl From<StoredMovie> for MovieRecord {
    fn from(stored: StoredMovie) -> Self {
        Self {
            id: stored.id,
            title: stored.title,
            release_date: stored
                .release_date
                .or(stored.release_date_camel)
                .or(stored.year),
            genre: stored.genre,
            genre_ids: stored.genre_ids,
            overview: stored.overview.or(stored.description),
            poster_path: stored
                .poster_path
                .or(stored.poster_path_camel)
                .or(stored.image),
        }
    }
}

impl MovieRecord {
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_release_date(mut self, release_date: impl Into<String>) -> Self {
        self.release_date = Some(release_date.into());
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn with_genre_ids(mut self, genre_ids: Vec<i64>) -> Self {
        self.genre_ids = genre_ids;
        self
    }

    pub fn with_overview(mut self, overview: impl Into<String>) -> Self {
        self.overview = Some(overview.into());
        self
    }

    pub fn with_poster_path(mut self, poster_path: impl Into<String>) -> Self {
        self.poster_path = Some(poster_path.into());
        self
    }

    /// Release year taken from the leading digits of `release_date`
    pub fn year(&self) -> Option<i32> {
        let date = self.release_date.as_deref()?.trim();
        let digits: String = date.chars().take_while(|c| c.is_ascii_digit()).collect();
        if digits.len() != 4 {
            return None;
        }
        digits.parse().ok()
    }

    /// Genre label, falling back to the first known catalog genre id
    pub fn genre_label(&self) -> Option<String> {
        if let Some(genre) = &self.genre {
            return Some(genre.clone());
        }
        self.genre_ids
            .iter()
            .find_map(|id| super::genre::genre_name(*id))
            .map(str::to_string)
    }

    /// Full poster URL for the given catalog size ("w500", "original", ...)
    pub fn poster_url(&self, size: &str) -> Option<String> {
        let path = self.poster_path.as_deref()?.trim();
        if path.is_empty() {
            return None;
        }
        if path.starts_with("http://") || path.starts_with("https://") {
            return Some(path.to_string());
        }
        let path = path.trim_start_matches('/');
        Some(format!("{}/{}/{}", POSTER_BASE_URL, size, path))
    }
}

/// Accepts a string, a number or null for opaque text fields
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(serde_json::Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected a string or number, found {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favorites_shaped_record_decodes() {
        let json = r#"{
            "id": 1,
            "title": "Interstellar",
            "year": "2014",
            "genre": "Sci-Fi",
            "description": "Space and time journey",
            "image": "https://via.placeholder.com/300x450?text=Interstellar"
        }"#;
        let movie: MovieRecord = serde_json::from_str(json).unwrap();

        assert_eq!(movie.id, 1);
        assert_eq!(movie.release_date.as_deref(), Some("2014"));
        assert_eq!(movie.overview.as_deref(), Some("Space and time journey"));
        assert_eq!(movie.year(), Some(2014));
        assert_eq!(
            movie.poster_url("w500").as_deref(),
            Some("https://via.placeholder.com/300x450?text=Interstellar")
        );
    }

    #[test]
    fn test_catalog_shaped_record_decodes() {
        let json = r#"{
            "id": 123,
            "title": "Spider-Man",
            "release_date": "2023-05-10",
            "genre_ids": [28],
            "poster_path": "/spiderman.jpg",
            "overview": "Hero movie"
        }"#;
        let movie: MovieRecord = serde_json::from_str(json).unwrap();

        assert_eq!(movie.year(), Some(2023));
        assert_eq!(movie.genre_label().as_deref(), Some("Action"));
        assert_eq!(
            movie.poster_url("w500").as_deref(),
            Some("https://image.tmdb.org/t/p/w500/spiderman.jpg")
        );
    }

    #[test]
    fn test_numeric_year_is_kept_as_text() {
        let movie: MovieRecord =
            serde_json::from_str(r#"{"id": 7, "title": "Se7en", "year": 1995}"#).unwrap();
        assert_eq!(movie.release_date.as_deref(), Some("1995"));
    }

    #[test]
    fn test_missing_title_is_rejected() {
        let result = serde_json::from_str::<MovieRecord>(r#"{"id": 7}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_string_id_is_rejected() {
        let result = serde_json::from_str::<MovieRecord>(r#"{"id": "7", "title": "Se7en"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_mixed_names_prefer_canonical() {
        let json = r#"{
            "id": 1,
            "title": "Interstellar",
            "release_date": "2014-11-05",
            "year": "2014",
            "overview": "The adventures of a group of explorers",
            "description": "Space and time journey",
            "poster_path": "/interstellar.jpg",
            "image": "https://via.placeholder.com/300x450?text=Interstellar"
        }"#;
        let movie: MovieRecord = serde_json::from_str(json).unwrap();

        assert_eq!(movie.release_date.as_deref(), Some("2014-11-05"));
        assert_eq!(
            movie.overview.as_deref(),
            Some("The adventures of a group of explorers")
        );
        assert_eq!(movie.poster_path.as_deref(), Some("/interstellar.jpg"));
    }

    #[test]
    fn test_null_canonical_falls_back_to_other_name() {
        let movie: MovieRecord = serde_json::from_str(
            r#"{"id": 2, "title": "Arrival", "overview": null, "description": "Linguist meets aliens"}"#,
        )
        .unwrap();
        assert_eq!(movie.overview.as_deref(), Some("Linguist meets aliens"));
    }

    #[test]
    fn test_serializes_canonical_names_only() {
        let movie = MovieRecord::new(5, "Alien").with_overview("In space");
        let json = serde_json::to_string(&movie).unwrap();
        assert_eq!(json, r#"{"id":5,"title":"Alien","overview":"In space"}"#);
    }
}
