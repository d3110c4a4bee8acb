//! Product lookups.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Product;

/// Read access to products.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductClient: Send + Sync {
    /// List every product visible to the token.
    async fn list(&self) -> Result<Vec<Product>>;

    /// Fetch a product by slug.
    async fn get(&self, product_slug: &str) -> Result<Product>;
}
