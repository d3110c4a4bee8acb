//! Release and EULA-acceptance endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tokio::sync::RwLock;

use super::not_found;
use crate::mock_server::state::MockState;
use crate::{Eula, Release};

#[derive(Debug, Deserialize)]
pub struct NewReleaseEula {
    pub slug: String,
}

#[derive(Debug, Deserialize)]
pub struct NewRelease {
    pub version: String,
    pub release_type: String,
    pub eula: NewReleaseEula,
    #[serde(default)]
    pub description: Option<String>,
}

/// Body of POST /products/{slug}/releases.
#[derive(Debug, Deserialize)]
pub struct CreateReleaseParams {
    pub release: NewRelease,
    #[allow(dead_code)] // Accepted by the API but has no effect in the mock
    #[serde(default)]
    pub copy_metadata: bool,
}

/// Body of PATCH /products/{slug}/releases/{id}.
#[derive(Debug, Deserialize)]
pub struct UpdateReleaseParams {
    pub release: Release,
}

/// GET /products/{slug}/releases
pub async fn list_releases(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(slug): Path<String>,
) -> impl IntoResponse {
    let state = state.read().await;

    if state.get_product(&slug).is_none() {
        return not_found(&format!("product '{slug}'"));
    }
    let releases = state.list_releases(&slug).cloned().unwrap_or_default();

    (
        StatusCode::OK,
        Json(serde_json::json!({ "releases": releases })),
    )
        .into_response()
}

/// GET /products/{slug}/releases/{id}
pub async fn get_release(
    State(state): State<Arc<RwLock<MockState>>>,
    Path((slug, id)): Path<(String, u64)>,
) -> impl IntoResponse {
    let state = state.read().await;

    match state.get_release(&slug, id) {
        Some(release) => (StatusCode::OK, Json(release.clone())).into_response(),
        None => not_found(&format!("release {id}")),
    }
}

/// POST /products/{slug}/releases
pub async fn create_release(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(slug): Path<String>,
    Json(params): Json<CreateReleaseParams>,
) -> impl IntoResponse {
    let mut state = state.write().await;

    let release = Release {
        version: params.release.version,
        release_type: Some(params.release.release_type),
        description: params.release.description,
        eula: Some(Eula {
            slug: Some(params.release.eula.slug),
            ..Default::default()
        }),
        ..Default::default()
    };

    match state.create_release(&slug, release) {
        Some(created) => (
            StatusCode::CREATED,
            Json(serde_json::json!({ "release": created })),
        )
            .into_response(),
        None => not_found(&format!("product '{slug}'")),
    }
}

/// PATCH /products/{slug}/releases/{id}
pub async fn update_release(
    State(state): State<Arc<RwLock<MockState>>>,
    Path((slug, id)): Path<(String, u64)>,
    Json(params): Json<UpdateReleaseParams>,
) -> impl IntoResponse {
    let mut state = state.write().await;
    let release = Release {
        id,
        ..params.release
    };

    match state.update_release(&slug, release) {
        Some(updated) => (
            StatusCode::OK,
            Json(serde_json::json!({ "release": updated })),
        )
            .into_response(),
        None => not_found(&format!("release {id}")),
    }
}

/// DELETE /products/{slug}/releases/{id}
pub async fn delete_release(
    State(state): State<Arc<RwLock<MockState>>>,
    Path((slug, id)): Path<(String, u64)>,
) -> impl IntoResponse {
    let mut state = state.write().await;

    if state.delete_release(&slug, id) {
        StatusCode::NO_CONTENT.into_response()
    } else {
        not_found(&format!("release {id}"))
    }
}

/// POST /products/{slug}/releases/{id}/eula_acceptance
pub async fn accept_eula(
    State(state): State<Arc<RwLock<MockState>>>,
    Path((slug, id)): Path<(String, u64)>,
) -> impl IntoResponse {
    let mut state = state.write().await;

    match state.accept_eula(&slug, id) {
        Some(acceptance) => (StatusCode::OK, Json(acceptance)).into_response(),
        None => not_found(&format!("release {id}")),
    }
}
