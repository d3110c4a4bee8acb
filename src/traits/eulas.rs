//! EULA listing and acceptance.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Eula, EulaAcceptance};

/// Access to end-user license agreements.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EulaClient: Send + Sync {
    /// List all EULAs.
    async fn list(&self) -> Result<Vec<Eula>>;

    /// Fetch a EULA, including its content, by slug.
    async fn get(&self, eula_slug: &str) -> Result<Eula>;

    /// Accept the EULA attached to a release.
    async fn accept(&self, product_slug: &str, release_id: u64) -> Result<EulaAcceptance>;
}
