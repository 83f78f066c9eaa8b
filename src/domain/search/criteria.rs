use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

/// First year a film could have been released
pub const EARLIEST_FILM_YEAR: i32 = 1888;

/// How far past the current year announced releases may be searched
const FUTURE_YEAR_WINDOW: i32 = 5;

const MIN_TITLE_CHARS: usize = 2;

/// What the user asked the catalog for
///
/// Blank strings are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub genre: Option<String>,
}

impl SearchCriteria {
    pub fn by_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// Trimmed title, None when blank
    pub fn title(&self) -> Option<&str> {
        non_blank(self.title.as_deref())
    }

    /// Trimmed genre, None when blank
    pub fn genre(&self) -> Option<&str> {
        non_blank(self.genre.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.title().is_none() && self.year.is_none() && self.genre().is_none()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Per-field messages for the search form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchValidationErrors {
    pub form: Option<String>,
    pub title: Option<String>,
    pub year: Option<String>,
}

impl SearchValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.form.is_none() && self.title.is_none() && self.year.is_none()
    }
}

impl std::fmt::Display for SearchValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<&str> = [&self.form, &self.title, &self.year]
            .into_iter()
            .filter_map(|m| m.as_deref())
            .collect();
        write!(f, "{}", messages.join(" "))
    }
}

/// Validate search form input
pub fn validate_search(criteria: &SearchCriteria) -> Result<(), SearchValidationErrors> {
    let mut errors = SearchValidationErrors::default();

    if criteria.is_empty() {
        errors.form = Some("Please fill at least one field to search.".to_string());
        return Err(errors);
    }

    if let Some(title) = criteria.title() {
        if title.chars().count() < MIN_TITLE_CHARS {
            errors.title = Some("Movie title must be at least 2 characters.".to_string());
        }
    }

    if let Some(year) = criteria.year {
        let latest = Utc::now().year() + FUTURE_YEAR_WINDOW;
        if !(EARLIEST_FILM_YEAR..=latest).contains(&year) {
            errors.year = Some("Please enter a valid year.".to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
