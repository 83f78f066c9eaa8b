// src/application/error_handling.rs
//
// Error responses for the page boundary
//
// - Maps internal errors → page-friendly responses
// - Never exposes storage or HTTP internals in `message`
// - Logs the full error for debugging

use serde::{Deserialize, Serialize};

use crate::domain::search::SearchValidationErrors;
use crate::error::AppError;

/// Standard error response for pages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
    /// Per-field messages for the search form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<SearchValidationErrors>,
}

/// Error categories for pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Resource not found
    NotFound,

    /// Invalid input
    Validation,

    /// Local storage could not be read or written
    Storage,

    /// Movie catalog error
    ExternalService,

    /// Other/unknown error
    Internal,
}

impl ErrorResponse {
    fn new(error_type: ErrorType, message: impl Into<String>, details: Option<String>) -> Self {
        Self {
            success: false,
            error_type,
            message: message.into(),
            details,
            fields: None,
        }
    }

    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::NotFound => Self::new(ErrorType::NotFound, "Resource not found", None),

            AppError::InvalidSearch(fields) => Self {
                fields: Some(fields.clone()),
                ..Self::new(ErrorType::Validation, fields.to_string(), None)
            },

            AppError::QuotaExceeded { .. } => {
                log::error!("{}", error);
                Self::new(
                    ErrorType::Storage,
                    "Local storage is full",
                    Some(error.to_string()),
                )
            }

            AppError::Database(_) | AppError::Pool(_) => {
                log::error!("Storage error: {:?}", error);
                Self::new(
                    ErrorType::Storage,
                    "Local storage operation failed",
                    Some("Check logs for details".to_string()),
                )
            }

            AppError::Http(_) | AppError::Catalog(_) => {
                log::error!("Catalog error: {}", error);
                Self::new(
                    ErrorType::ExternalService,
                    "Movie catalog error",
                    Some(error.to_string()),
                )
            }

            AppError::Serialization(_)
            | AppError::Io(_)
            | AppError::Config(_)
            | AppError::Other(_) => {
                log::error!("Internal error: {:?}", error);
                Self::new(ErrorType::Internal, error.to_string(), None)
            }
        }
    }

    /// Create validation error
    pub fn validation(message: String) -> Self {
        Self::new(ErrorType::Validation, message, None)
    }

    /// Create not found error
    pub fn not_found(resource: &str) -> Self {
        Self::new(ErrorType::NotFound, format!("{} not found", resource), None)
    }

    /// Serialized form handed back to the page
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "Internal error".to_string())
    }
}

/// Helper trait to convert Results to serialized ErrorResponse
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> Result<T, String>;
}

impl<T> ToErrorResponse<T> for Result<T, AppError> {
    fn to_error_response(self) -> Result<T, String> {
        self.map_err(|e| ErrorResponse::from_app_error(e).to_json())
    }
}
