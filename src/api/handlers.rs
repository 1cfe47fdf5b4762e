//! HTTP request handlers for the Pet Age Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::perform_conversion;
use crate::models::ConversionRequest;

use super::request::ConvertRequest;
use super::response::{ApiError, ApiErrorResponse, TablesResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/convert", post(convert_handler))
        .route("/tables", get(tables_handler))
        .with_state(state)
}

/// Handler for POST /convert.
///
/// Accepts a conversion request and returns the human-equivalent age.
async fn convert_handler(
    State(state): State<AppState>,
    payload: Result<Json<ConvertRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing conversion request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let request: ConversionRequest = request.into();

    match perform_conversion(&request, state.config()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                species = %result.species,
                category = %result.category,
                pet_age = %result.pet_age,
                human_age = %result.human_age,
                duration_us = result.audit_trace.duration_us,
                "Conversion completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Conversion failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for GET /tables.
///
/// Lists every species, its size categories, and their age tables.
async fn tables_handler(State(state): State<AppState>) -> impl IntoResponse {
    let body = serde_json::to_value(TablesResponse::from(state.config()));
    match body {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(err) => {
            warn!(error = %err, "Failed to serialize tables");
            ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::new("SERIALIZATION_ERROR", "Failed to serialize tables"),
            }
            .into_response()
        }
    }
}
