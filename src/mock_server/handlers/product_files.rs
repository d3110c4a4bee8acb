//! Product file endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tokio::sync::RwLock;

use super::{not_found, IdParam};
use crate::mock_server::state::MockState;

/// Body of the add/remove product file PATCH requests.
#[derive(Debug, Deserialize)]
pub struct ProductFileParams {
    pub product_file: IdParam,
}

/// GET /products/{slug}/product_files
pub async fn list_product_files(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(slug): Path<String>,
) -> impl IntoResponse {
    let state = state.read().await;
    let files = state.product_files.get(&slug).cloned().unwrap_or_default();

    (
        StatusCode::OK,
        Json(serde_json::json!({ "product_files": files })),
    )
}

/// GET /products/{slug}/product_files/{id}
pub async fn get_product_file(
    State(state): State<Arc<RwLock<MockState>>>,
    Path((slug, id)): Path<(String, u64)>,
) -> impl IntoResponse {
    let state = state.read().await;

    match state.get_product_file(&slug, id) {
        Some(file) => (
            StatusCode::OK,
            Json(serde_json::json!({ "product_file": file })),
        )
            .into_response(),
        None => not_found(&format!("product file {id}")),
    }
}

/// GET /products/{slug}/releases/{id}/product_files
pub async fn list_release_product_files(
    State(state): State<Arc<RwLock<MockState>>>,
    Path((slug, id)): Path<(String, u64)>,
) -> impl IntoResponse {
    let state = state.read().await;

    if state.get_release(&slug, id).is_none() {
        return not_found(&format!("release {id}"));
    }

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "product_files": state.product_files_for_release(&slug, id)
        })),
    )
        .into_response()
}

/// PATCH /products/{slug}/releases/{id}/add_product_file
pub async fn add_product_file(
    State(state): State<Arc<RwLock<MockState>>>,
    Path((slug, id)): Path<(String, u64)>,
    Json(params): Json<ProductFileParams>,
) -> impl IntoResponse {
    let mut state = state.write().await;
    let file_id = params.product_file.id;

    if state.get_release(&slug, id).is_none() {
        return not_found(&format!("release {id}"));
    }
    if state.get_product_file(&slug, file_id).is_none() {
        return not_found(&format!("product file {file_id}"));
    }

    state
        .release_product_files
        .entry(id)
        .or_default()
        .insert(file_id);
    StatusCode::NO_CONTENT.into_response()
}

/// PATCH /products/{slug}/releases/{id}/remove_product_file
pub async fn remove_product_file(
    State(state): State<Arc<RwLock<MockState>>>,
    Path((slug, id)): Path<(String, u64)>,
    Json(params): Json<ProductFileParams>,
) -> impl IntoResponse {
    let mut state = state.write().await;

    if state.get_release(&slug, id).is_none() {
        return not_found(&format!("release {id}"));
    }

    if let Some(files) = state.release_product_files.get_mut(&id) {
        files.remove(&params.product_file.id);
    }
    StatusCode::NO_CONTENT.into_response()
}
