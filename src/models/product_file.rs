//! Product file model and client.

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};

use crate::client::{segment, PivnetClient};
use crate::error::Result;
use crate::models::{IdReference, Links};
use crate::traits::ProductFileClient;

/// A downloadable file belonging to a product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFile {
    /// Numeric product file ID.
    pub id: u64,

    /// Display name of the file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// e.g. "Software", "Documentation".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,

    /// Version of the file itself, independent of the release version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_version: Option<String>,

    /// Object-store location of the file contents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_object_url: Option<String>,

    /// Hex MD5 checksum of the file contents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md5: Option<String>,

    /// Link relations, e.g. `download`.
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

#[derive(Debug, Deserialize)]
struct ProductFileListResponse {
    #[serde(default)]
    product_files: Vec<ProductFile>,
}

#[derive(Debug, Deserialize)]
struct ProductFileResponse {
    product_file: ProductFile,
}

#[derive(Debug, Serialize)]
struct ProductFileRequest {
    product_file: IdReference,
}

/// Product file operations bound to a [`PivnetClient`].
#[derive(Debug, Clone)]
pub struct ProductFiles {
    client: PivnetClient,
}

impl ProductFiles {
    pub(crate) fn new(client: PivnetClient) -> Self {
        Self { client }
    }

    async fn patch_release(
        &self,
        product_slug: &str,
        release_id: u64,
        action: &str,
        product_file_id: u64,
    ) -> Result<()> {
        let path = format!(
            "/products/{}/releases/{}/{}",
            segment(product_slug),
            release_id,
            action
        );
        let body = ProductFileRequest {
            product_file: IdReference {
                id: product_file_id,
            },
        };

        self.client
            .send_empty(Method::PATCH, &path, Some(&body), StatusCode::NO_CONTENT)
            .await
    }
}

#[async_trait]
impl ProductFileClient for ProductFiles {
    #[tracing::instrument(skip(self))]
    async fn list(&self, product_slug: &str) -> Result<Vec<ProductFile>> {
        let path = format!("/products/{}/product_files", segment(product_slug));
        let data: ProductFileListResponse = self.client.get_json(&path).await?;
        Ok(data.product_files)
    }

    #[tracing::instrument(skip(self))]
    async fn list_for_release(
        &self,
        product_slug: &str,
        release_id: u64,
    ) -> Result<Vec<ProductFile>> {
        let path = format!(
            "/products/{}/releases/{}/product_files",
            segment(product_slug),
            release_id
        );
        let data: ProductFileListResponse = self.client.get_json(&path).await?;
        Ok(data.product_files)
    }

    #[tracing::instrument(skip(self))]
    async fn get(&self, product_slug: &str, product_file_id: u64) -> Result<ProductFile> {
        let path = format!(
            "/products/{}/product_files/{}",
            segment(product_slug),
            product_file_id
        );
        let data: ProductFileResponse = self.client.get_json(&path).await?;
        Ok(data.product_file)
    }

    #[tracing::instrument(skip(self))]
    async fn add_to_release(
        &self,
        product_slug: &str,
        release_id: u64,
        product_file_id: u64,
    ) -> Result<()> {
        self.patch_release(product_slug, release_id, "add_product_file", product_file_id)
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn remove_from_release(
        &self,
        product_slug: &str,
        release_id: u64,
        product_file_id: u64,
    ) -> Result<()> {
        self.patch_release(
            product_slug,
            release_id,
            "remove_product_file",
            product_file_id,
        )
        .await
    }
}
