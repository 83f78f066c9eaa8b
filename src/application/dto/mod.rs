// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// PRINCIPLES:
// - DTOs are page-friendly representations
// - DTOs are simple, serializable structs
// - Conversion FROM domain records only (never TO)

use serde::{Deserialize, Serialize};

use crate::domain::movie::MovieRecord;
use crate::domain::search::SearchCriteria;
use crate::integrations::CatalogPage;

/// Poster size shown on cards and the details page
const CARD_POSTER_SIZE: &str = "w500";

// ============================================================================
// MOVIE DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieCardDto {
    pub id: i64,
    pub title: String,
    pub year: Option<i32>,
    pub release_date: Option<String>,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub is_favorite: bool,
}

impl MovieCardDto {
    pub fn from_record(movie: MovieRecord, is_favorite: bool) -> Self {
        Self {
            id: movie.id,
            year: movie.year(),
            genre: movie.genre_label(),
            image: movie.poster_url(CARD_POSTER_SIZE),
            title: movie.title,
            release_date: movie.release_date,
            description: movie.overview,
            is_favorite,
        }
    }
}

// ============================================================================
// SEARCH DTOs
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequestDto {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub page: Option<u32>,
}

impl SearchRequestDto {
    pub fn criteria(&self) -> SearchCriteria {
        SearchCriteria {
            title: self.title.clone(),
            year: self.year,
            genre: self.genre.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResultsDto {
    pub movies: Vec<MovieCardDto>,
    pub page: u32,
    pub total_pages: u32,
    pub total_results: u32,
}

impl SearchResultsDto {
    pub fn from_page(page: CatalogPage, is_favorite: impl Fn(i64) -> bool) -> Self {
        let movies = page
            .results
            .into_iter()
            .map(|movie| {
                let favorite = is_favorite(movie.id);
                MovieCardDto::from_record(movie, favorite)
            })
            .collect();

        Self {
            movies,
            page: page.page,
            total_pages: page.total_pages,
            total_results: page.total_results,
        }
    }
}

// ============================================================================
// FAVORITE DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteStatusDto {
    pub movie_id: i64,
    pub is_favorite: bool,
}
