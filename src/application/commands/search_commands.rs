// src/application/commands/search_commands.rs

use crate::application::error_handling::ToErrorResponse;
use crate::application::{dto::*, state::AppState};

/// Search the catalog from the home page form
pub async fn search_movies(
    state: &AppState,
    dto: SearchRequestDto,
) -> Result<SearchResultsDto, String> {
    let page = state
        .catalog_service
        .search(dto.criteria(), dto.page.unwrap_or(1))
        .await
        .to_error_response()?;

    Ok(SearchResultsDto::from_page(page, |id| {
        state.favorites.is_favorite(id)
    }))
}
