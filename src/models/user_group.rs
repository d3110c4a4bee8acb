//! User group model and client.

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};

use crate::client::{segment, PivnetClient};
use crate::error::Result;
use crate::models::IdReference;
use crate::traits::UserGroupClient;

/// An access-control group that can be attached to releases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserGroup {
    /// Numeric user group ID.
    pub id: u64,

    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Member email addresses.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct UserGroupListResponse {
    #[serde(default)]
    user_groups: Vec<UserGroup>,
}

#[derive(Debug, Serialize)]
struct UserGroupRequest {
    user_group: IdReference,
}

/// User group operations bound to a [`PivnetClient`].
#[derive(Debug, Clone)]
pub struct UserGroups {
    client: PivnetClient,
}

impl UserGroups {
    pub(crate) fn new(client: PivnetClient) -> Self {
        Self { client }
    }

    async fn patch_release(
        &self,
        product_slug: &str,
        release_id: u64,
        action: &str,
        user_group_id: u64,
    ) -> Result<()> {
        let path = format!(
            "/products/{}/releases/{}/{}",
            segment(product_slug),
            release_id,
            action
        );
        let body = UserGroupRequest {
            user_group: IdReference { id: user_group_id },
        };

        self.client
            .send_empty(Method::PATCH, &path, Some(&body), StatusCode::NO_CONTENT)
            .await
    }
}

#[async_trait]
impl UserGroupClient for UserGroups {
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<UserGroup>> {
        let data: UserGroupListResponse = self.client.get_json("/user_groups").await?;
        Ok(data.user_groups)
    }

    #[tracing::instrument(skip(self))]
    async fn list_for_release(
        &self,
        product_slug: &str,
        release_id: u64,
    ) -> Result<Vec<UserGroup>> {
        let path = format!(
            "/products/{}/releases/{}/user_groups",
            segment(product_slug),
            release_id
        );
        let data: UserGroupListResponse = self.client.get_json(&path).await?;
        Ok(data.user_groups)
    }

    #[tracing::instrument(skip(self))]
    async fn add_to_release(
        &self,
        product_slug: &str,
        release_id: u64,
        user_group_id: u64,
    ) -> Result<()> {
        self.patch_release(product_slug, release_id, "add_user_group", user_group_id)
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn remove_from_release(
        &self,
        product_slug: &str,
        release_id: u64,
        user_group_id: u64,
    ) -> Result<()> {
        self.patch_release(product_slug, release_id, "remove_user_group", user_group_id)
            .await
    }
}
