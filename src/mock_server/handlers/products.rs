//! Product endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tokio::sync::RwLock;

use super::not_found;
use crate::mock_server::state::MockState;

/// GET /products
pub async fn list_products(State(state): State<Arc<RwLock<MockState>>>) -> impl IntoResponse {
    let state = state.read().await;
    let products: Vec<_> = state.list_products().into_iter().cloned().collect();

    (
        StatusCode::OK,
        Json(serde_json::json!({ "products": products })),
    )
}

/// GET /products/{slug}
pub async fn get_product(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(slug): Path<String>,
) -> impl IntoResponse {
    let state = state.read().await;

    match state.get_product(&slug) {
        Some(product) => (StatusCode::OK, Json(product.clone())).into_response(),
        None => not_found(&format!("product '{slug}'")),
    }
}
