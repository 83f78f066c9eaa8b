// Movie id coercion
//
// Lookups accept either an integer id or text such as a route parameter.
// Text is read by its integer prefix: optional leading whitespace, an
// optional sign, then digits. Anything after the digits is ignored.

use regex::Regex;
use std::sync::OnceLock;

fn integer_prefix() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\s*([+-]?\d+)").expect("static regex is valid"))
}

/// Parse the integer prefix of `raw`, or None if there is none
pub fn parse_movie_id(raw: &str) -> Option<i64> {
    let captures = integer_prefix().captures(raw)?;
    captures.get(1)?.as_str().parse().ok()
}

/// Anything that can be coerced into a movie id for lookup
pub trait IntoMovieId {
    fn into_movie_id(self) -> Option<i64>;
}

impl IntoMovieId for i64 {
    fn into_movie_id(self) -> Option<i64> {
        Some(self)
    }
}

impl IntoMovieId for i32 {
    fn into_movie_id(self) -> Option<i64> {
        Some(i64::from(self))
    }
}

impl IntoMovieId for u32 {
    fn into_movie_id(self) -> Option<i64> {
        Some(i64::from(self))
    }
}

impl IntoMovieId for u64 {
    fn into_movie_id(self) -> Option<i64> {
        i64::try_from(self).ok()
    }
}

impl IntoMovieId for &str {
    fn into_movie_id(self) -> Option<i64> {
        parse_movie_id(self)
    }
}

impl IntoMovieId for String {
    fn into_movie_id(self) -> Option<i64> {
        parse_movie_id(&self)
    }
}

impl IntoMovieId for &String {
    fn into_movie_id(self) -> Option<i64> {
        parse_movie_id(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_digits() {
        assert_eq!(parse_movie_id("123"), Some(123));
    }

    #[test]
    fn test_integer_prefix_is_used() {
        assert_eq!(parse_movie_id("  42abc"), Some(42));
        assert_eq!(parse_movie_id("-8"), Some(-8));
        assert_eq!(parse_movie_id("12.9"), Some(12));
    }

    #[test]
    fn test_non_numeric_text_has_no_id() {
        assert_eq!(parse_movie_id("abc"), None);
        assert_eq!(parse_movie_id(""), None);
        assert_eq!(parse_movie_id("x12"), None);
    }

    #[test]
    fn test_overflow_has_no_id() {
        assert_eq!(parse_movie_id("99999999999999999999999"), None);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(123i64.into_movie_id(), Some(123));
        assert_eq!(123u32.into_movie_id(), Some(123));
        assert_eq!("123".into_movie_id(), Some(123));
        assert_eq!(String::from("123").into_movie_id(), Some(123));
        assert_eq!(u64::MAX.into_movie_id(), None);
    }
}
