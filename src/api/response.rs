//! Response types for the Pet Age Engine API.
//!
//! This module defines the table listing returned by `GET /tables`, the
//! error response structures, and the mapping from engine errors to HTTP
//! statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::config::{ConfigLoader, SpeciesTables};
use crate::error::EngineError;

/// Response body for `GET /tables`.
#[derive(Debug, Clone, Serialize)]
pub struct TablesResponse<'a> {
    /// Name of the loaded table set.
    pub name: &'a str,
    /// Version of the loaded table set.
    pub version: &'a str,
    /// Every species with its categories and tables.
    pub species: Vec<&'a SpeciesTables>,
}

impl<'a> From<&'a ConfigLoader> for TablesResponse<'a> {
    fn from(config: &'a ConfigLoader) -> Self {
        let metadata = config.metadata();
        TablesResponse {
            name: &metadata.name,
            version: &metadata.version,
            species: config.species().collect(),
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
            EngineError::SpeciesNotFound { species } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "SPECIES_NOT_FOUND",
                    message,
                    format!("No age tables are configured for '{}'", species),
                ),
            },
            EngineError::CategoryNotFound { species, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "CATEGORY_NOT_FOUND",
                    message,
                    format!("See GET /tables for the categories available for '{}'", species),
                ),
            },
            EngineError::CategoryRequired { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("CATEGORY_REQUIRED", message),
            },
            EngineError::InvalidAge { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_AGE", message),
            },
            EngineError::InvalidTable { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Invalid age table", message),
            },
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
        }
    }
}
