// src/application/commands/details_commands.rs

use crate::application::error_handling::ToErrorResponse;
use crate::application::{dto::*, state::AppState};

/// Load the details page for a movie id taken from the route
pub async fn get_movie_details(
    state: &AppState,
    movie_id: String,
) -> Result<Option<MovieCardDto>, String> {
    let movie = state
        .catalog_service
        .movie_details(movie_id.as_str())
        .await
        .to_error_response()?;

    Ok(movie.map(|m| {
        let favorite = state.favorites.is_favorite(m.id);
        MovieCardDto::from_record(m, favorite)
    }))
}
