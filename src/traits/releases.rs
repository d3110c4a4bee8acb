//! Release operations.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{CreateReleaseConfig, Release};

/// Read and write access to the releases of a product.
///
/// # Example
///
/// ```ignore
/// use pivnet::{PivnetClient, ReleaseClient};
///
/// let client = PivnetClient::from_env()?;
/// let release = client.releases().get_by_version("pivotal-cf", "1.2.3").await?;
/// client.releases().delete("pivotal-cf", release.id).await?;
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReleaseClient: Send + Sync {
    /// List the releases of a product, in server order.
    async fn list(&self, product_slug: &str) -> Result<Vec<Release>>;

    /// Fetch one release by ID.
    async fn get(&self, product_slug: &str, release_id: u64) -> Result<Release>;

    /// Find a release by its version string.
    ///
    /// Issues a single list request and selects the matching entry.
    ///
    /// # Errors
    ///
    /// Returns [`PivnetError::InvalidArgument`](crate::PivnetError::InvalidArgument)
    /// if no release has that version.
    async fn get_by_version(&self, product_slug: &str, version: &str) -> Result<Release>;

    /// Create a release; the server answers 201.
    async fn create(&self, product_slug: &str, config: CreateReleaseConfig) -> Result<Release>;

    /// Replace the mutable fields of an existing release.
    async fn update(&self, product_slug: &str, release: Release) -> Result<Release>;

    /// Delete a release; the server answers 204.
    async fn delete(&self, product_slug: &str, release_id: u64) -> Result<()>;
}
