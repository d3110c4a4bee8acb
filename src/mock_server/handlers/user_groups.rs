//! User group endpoint handlers.

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

#[derive(Debug, Deserialize)]
pub struct IdParam {
    pub id: u64,
}

/// Body of the add/remove user group PATCH requests.
#[derive(Debug, Deserialize)]
pub struct UserGroupParams {
    pub user_group: IdParam,
}

/// GET /user_groups
pub async fn list_user_groups(State(state): State<Arc<RwLock<MockState>>>) -> impl IntoResponse {
    let state = state.read().await;
    let groups: Vec<_> = state.user_groups.values().cloned().collect();

    (
        StatusCode::OK,
        Json(serde_json::json!({ "user_groups": groups })),
    )
}

/// GET /products/{slug}/releases/{id}/user_groups
pub async fn list_release_user_groups(
    State(state): State<Arc<RwLock<MockState>>>,
    Path((slug, id)): Path<(String, u64)>,
) -> impl IntoResponse {
    let state = state.read().await;

    if state.get_release(&slug, id).is_none() {
        return not_found(&format!("release {id}"));
    }

    (
        StatusCode::OK,
        Json(serde_json::json!({ "user_groups": state.user_groups_for_release(id) })),
    )
        .into_response()
}

/// PATCH /products/{slug}/releases/{id}/add_user_group
pub async fn add_user_group(
    State(state): State<Arc<RwLock<MockState>>>,
    Path((slug, id)): Path<(String, u64)>,
    Json(params): Json<UserGroupParams>,
) -> impl IntoResponse {
    let mut state = state.write().await;
    let group_id = params.user_group.id;

    if state.get_release(&slug, id).is_none() {
        return not_found(&format!("release {id}"));
    }
    if !state.user_groups.contains_key(&group_id) {
        return not_found(&format!("user group {group_id}"));
    }

    state
        .release_user_groups
        .entry(id)
        .or_default()
        .insert(group_id);
    StatusCode::NO_CONTENT.into_response()
}

/// PATCH /products/{slug}/releases/{id}/remove_user_group
pub async fn remove_user_group(
    State(state): State<Arc<RwLock<MockState>>>,
    Path((slug, id)): Path<(String, u64)>,
    Json(params): Json<UserGroupParams>,
) -> impl IntoResponse {
    let mut state = state.write().await;

    if state.get_release(&slug, id).is_none() {
        return not_found(&format!("release {id}"));
    }

    if let Some(groups) = state.release_user_groups.get_mut(&id) {
        groups.remove(&params.user_group.id);
    }
    StatusCode::NO_CONTENT.into_response()
}
