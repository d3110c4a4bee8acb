//! Product model and client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::{segment, PivnetClient};
use crate::error::Result;
use crate::traits::ProductClient;

/// A Pivnet product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Numeric product ID.
    pub id: u64,

    /// Human-readable identifier used in API paths.
    #[serde(default)]
    pub slug: String,

    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProductListResponse {
    #[serde(default)]
    products: Vec<Product>,
}

/// Product operations bound to a [`PivnetClient`].
#[derive(Debug, Clone)]
pub struct Products {
    client: PivnetClient,
}

impl Products {
    pub(crate) fn new(client: PivnetClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProductClient for Products {
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Product>> {
        let data: ProductListResponse = self.client.get_json("/products").await?;
        Ok(data.products)
    }

    #[tracing::instrument(skip(self))]
    async fn get(&self, product_slug: &str) -> Result<Product> {
        let path = format!("/products/{}", segment(product_slug));
        self.client.get_json(&path).await
    }
}
