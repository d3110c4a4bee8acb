//! EULA models and client.

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};

use crate::client::{segment, PivnetClient};
use crate::error::Result;
use crate::models::Links;
use crate::traits::EulaClient;

/// An end-user license agreement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eula {
    /// Numeric EULA ID.
    #[serde(default)]
    pub id: u64,

    /// Identifier used in API paths, e.g. "pivotal_software_eula".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Full agreement text; only returned by the single-EULA endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Link relations.
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

/// Result of accepting a release's EULA.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EulaAcceptance {
    /// When the acceptance was recorded, as returned by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted_at: Option<String>,

    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

#[derive(Debug, Deserialize)]
struct EulaListResponse {
    #[serde(default)]
    eulas: Vec<Eula>,
}

/// EULA operations bound to a [`PivnetClient`].
#[derive(Debug, Clone)]
pub struct Eulas {
    client: PivnetClient,
}

impl Eulas {
    pub(crate) fn new(client: PivnetClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EulaClient for Eulas {
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Eula>> {
        let data: EulaListResponse = self.client.get_json("/eulas").await?;
        Ok(data.eulas)
    }

    #[tracing::instrument(skip(self))]
    async fn get(&self, eula_slug: &str) -> Result<Eula> {
        let path = format!("/eulas/{}", segment(eula_slug));
        self.client.get_json(&path).await
    }

    #[tracing::instrument(skip(self))]
    async fn accept(&self, product_slug: &str, release_id: u64) -> Result<EulaAcceptance> {
        let path = format!(
            "/products/{}/releases/{}/eula_acceptance",
            segment(product_slug),
            release_id
        );
        self.client
            .send_json(Method::POST, &path, None::<&()>, StatusCode::OK)
            .await
    }
}
