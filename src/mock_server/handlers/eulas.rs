//! EULA endpoint handlers.

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
use crate::Eula;

/// GET /eulas
pub async fn list_eulas(State(state): State<Arc<RwLock<MockState>>>) -> impl IntoResponse {
    let state = state.read().await;

    // The list endpoint omits the agreement text.
    let eulas: Vec<Eula> = state
        .eulas
        .values()
        .map(|e| Eula {
            content: None,
            ..e.clone()
        })
        .collect();

    (StatusCode::OK, Json(serde_json::json!({ "eulas": eulas })))
}

/// GET /eulas/{slug}
pub async fn get_eula(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(slug): Path<String>,
) -> impl IntoResponse {
    let state = state.read().await;

    match state.eulas.get(&slug) {
        Some(eula) => (StatusCode::OK, Json(eula.clone())).into_response(),
        None => not_found(&format!("EULA '{slug}'")),
    }
}
