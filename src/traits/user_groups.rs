//! User group operations.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::UserGroup;

/// Access to user groups and their association with releases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserGroupClient: Send + Sync {
    /// List all user groups.
    async fn list(&self) -> Result<Vec<UserGroup>>;

    /// List the user groups attached to a release.
    async fn list_for_release(&self, product_slug: &str, release_id: u64)
        -> Result<Vec<UserGroup>>;

    /// Attach a user group to a release.
    async fn add_to_release(
        &self,
        product_slug: &str,
        release_id: u64,
        user_group_id: u64,
    ) -> Result<()>;

    /// Detach a user group from a release.
    async fn remove_from_release(
        &self,
        product_slug: &str,
        release_id: u64,
        user_group_id: u64,
    ) -> Result<()>;
}
