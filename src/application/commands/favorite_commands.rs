// src/application/commands/favorite_commands.rs

use crate::application::error_handling::{ErrorResponse, ToErrorResponse};
use crate::application::{dto::*, state::AppState};
use crate::domain::movie::parse_movie_id;

fn parse_id(movie_id: &str) -> Result<i64, String> {
    parse_movie_id(movie_id)
        .ok_or_else(|| ErrorResponse::validation(format!("Invalid movie id: {}", movie_id)).to_json())
}

/// Favorite or un-favorite a movie from a card or the details page
///
/// A movie not yet favorited is looked up (cache first, then catalog) so the
/// full record is stored with the favorite.
pub async fn toggle_favorite(
    state: &AppState,
    movie_id: String,
) -> Result<FavoriteStatusDto, String> {
    let id = parse_id(&movie_id)?;

    let movie = match state.favorites.favorite_by_id(id) {
        Some(movie) => movie,
        None => state
            .catalog_service
            .movie_details(id)
            .await
            .to_error_response()?
            .ok_or_else(|| ErrorResponse::not_found("Movie").to_json())?,
    };

    let is_favorite = state
        .favorites
        .toggle_favorite(movie)
        .to_error_response()?;

    Ok(FavoriteStatusDto {
        movie_id: id,
        is_favorite,
    })
}

pub async fn is_favorite(state: &AppState, movie_id: String) -> Result<FavoriteStatusDto, String> {
    let id = parse_id(&movie_id)?;

    Ok(FavoriteStatusDto {
        movie_id: id,
        is_favorite: state.favorites.is_favorite(id),
    })
}

/// Everything on the favorites page, oldest first
pub async fn list_favorites(state: &AppState) -> Result<Vec<MovieCardDto>, String> {
    Ok(state
        .favorites
        .favorites()
        .into_iter()
        .map(|movie| MovieCardDto::from_record(movie, true))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::commands::test_support::state_with;
    use crate::domain::movie::MovieRecord;
    use crate::error::AppError;
    use crate::integrations::MockMovieCatalog;

    fn interstellar() -> MovieRecord {
        MovieRecord::new(1, "Interstellar").with_genre("Sci-Fi")
    }

    #[tokio::test]
    async fn test_toggle_twice_from_cache() {
        let mut catalog = MockMovieCatalog::new();
        catalog.expect_fetch_movie().never();
        let state = state_with(catalog);
        state.movie_cache.add_movie(interstellar()).unwrap();

        let on = toggle_favorite(&state, "1".to_string()).await.unwrap();
        assert!(on.is_favorite);
        assert_eq!(list_favorites(&state).await.unwrap().len(), 1);

        let off = toggle_favorite(&state, "1".to_string()).await.unwrap();
        assert!(!off.is_favorite);
        assert!(list_favorites(&state).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_toggle_fetches_uncached_movie() {
        let mut catalog = MockMovieCatalog::new();
        catalog
            .expect_fetch_movie()
            .times(1)
            .returning(|_| Ok(interstellar()));
        let state = state_with(catalog);

        toggle_favorite(&state, "1".to_string()).await.unwrap();

        let cards = list_favorites(&state).await.unwrap();
        assert_eq!(cards[0].genre.as_deref(), Some("Sci-Fi"));
        assert!(state.movie_cache.contains(1));
    }

    #[tokio::test]
    async fn test_toggle_unknown_movie_is_not_found() {
        let mut catalog = MockMovieCatalog::new();
        catalog
            .expect_fetch_movie()
            .returning(|_| Err(AppError::NotFound));
        let state = state_with(catalog);

        let err = toggle_favorite(&state, "77".to_string()).await.unwrap_err();
        assert!(err.contains("Movie not found"));
        assert!(!state.favorites.is_favorite(77));
    }

    #[tokio::test]
    async fn test_bad_id_is_validation_error() {
        let state = state_with(MockMovieCatalog::new());

        let err = is_favorite(&state, "abc".to_string()).await.unwrap_err();
        assert!(err.contains("Invalid movie id: abc"));
    }

    #[tokio::test]
    async fn test_is_favorite_reports_status() {
        let state = state_with(MockMovieCatalog::new());
        state.favorites.toggle_favorite(interstellar()).unwrap();

        let status = is_favorite(&state, "1".to_string()).await.unwrap();
        assert_eq!(
            status,
            FavoriteStatusDto {
                movie_id: 1,
                is_favorite: true
            }
        );
    }
}
