//! Product file operations.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::ProductFile;

/// Access to product files and their association with releases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductFileClient: Send + Sync {
    /// List every file of a product.
    async fn list(&self, product_slug: &str) -> Result<Vec<ProductFile>>;

    /// List the files attached to a release.
    async fn list_for_release(
        &self,
        product_slug: &str,
        release_id: u64,
    ) -> Result<Vec<ProductFile>>;

    /// Fetch one product file by ID.
    async fn get(&self, product_slug: &str, product_file_id: u64) -> Result<ProductFile>;

    /// Attach a product file to a release.
    async fn add_to_release(
        &self,
        product_slug: &str,
        release_id: u64,
        product_file_id: u64,
    ) -> Result<()>;

    /// Detach a product file from a release.
    async fn remove_from_release(
        &self,
        product_slug: &str,
        release_id: u64,
        product_file_id: u64,
    ) -> Result<()>;
}
