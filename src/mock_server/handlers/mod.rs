//! HTTP request handlers for the mock server.

pub mod eulas;
pub mod product_files;
pub mod products;
pub mod releases;
pub mod user_groups;

pub use eulas::*;
pub use product_files::*;
pub use products::*;
pub use releases::*;
pub use user_groups::*;

use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};

/// Error body in the shape the real API uses.
pub(crate) fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(serde_json::json!({ "message": message }))).into_response()
}

pub(crate) fn not_found(what: &str) -> Response {
    error_response(StatusCode::NOT_FOUND, format!("{what} not found"))
}
