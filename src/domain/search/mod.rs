pub mod criteria;

pub use criteria::{validate_search, SearchCriteria, SearchValidationErrors, EARLIEST_FILM_YEAR};
