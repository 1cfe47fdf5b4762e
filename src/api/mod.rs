//! HTTP API module for the Pet Age Engine.
//!
//! This module provides the REST API endpoints for converting pet ages and
//! listing the configured age tables.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ConvertRequest;
pub use response::{ApiError, TablesResponse};
pub use state::AppState;
