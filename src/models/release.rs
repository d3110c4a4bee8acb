//! Release model and client.

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};

use crate::client::{segment, PivnetClient};
use crate::error::{PivnetError, Result};
use crate::models::{Eula, Links};
use crate::traits::ReleaseClient;

/// A release of a Pivnet product.
///
/// Releases are the unit of download: each one carries a version, an
/// optional EULA that must be accepted first, and links to its files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// Numeric release ID.
    #[serde(default)]
    pub id: u64,

    /// Release version, e.g. "1.8.3".
    #[serde(default)]
    pub version: String,

    /// e.g. "Major Release", "Security Release".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_type: Option<String>,

    /// `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,

    /// Where the release notes are published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_notes_url: Option<String>,

    /// "All Users", "Selected User Groups Only", "Admins Only".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,

    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// EULA that must be accepted before download.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eula: Option<Eula>,

    /// `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_of_support_date: Option<String>,

    /// `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_of_guidance_date: Option<String>,

    /// `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_of_availability_date: Option<String>,

    /// Whether the release is subject to export control.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controlled: Option<bool>,

    /// Export Control Classification Number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eccn: Option<String>,

    /// Export license exception, e.g. "TSU".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_exception: Option<String>,

    /// Link relations: `download`, `eula_acceptance`, `product_files`.
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

impl Release {
    /// Slug of the attached EULA, if any.
    pub fn eula_slug(&self) -> Option<&str> {
        self.eula.as_ref().and_then(|e| e.slug.as_deref())
    }

    /// Returns true if the release advertises a download link.
    pub fn is_downloadable(&self) -> bool {
        self.links
            .as_ref()
            .and_then(Links::download_href)
            .is_some()
    }
}

/// Parameters for creating a release.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateReleaseConfig {
    pub version: String,
    pub release_type: String,
    pub eula_slug: String,
    pub description: Option<String>,
    pub release_notes_url: Option<String>,
    pub release_date: Option<String>,
    pub controlled: Option<bool>,
    pub eccn: Option<String>,
    pub license_exception: Option<String>,
    pub end_of_support_date: Option<String>,
    pub end_of_guidance_date: Option<String>,
    pub end_of_availability_date: Option<String>,
    /// Copy metadata from the previous release of the product.
    pub copy_metadata: bool,
}

#[derive(Debug, Serialize)]
struct EulaSlug<'a> {
    slug: &'a str,
}

#[derive(Debug, Serialize)]
struct NewRelease<'a> {
    version: &'a str,
    release_type: &'a str,
    eula: EulaSlug<'a>,
    oss_compliant: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    release_notes_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    release_date: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    controlled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    eccn: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    license_exception: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_of_support_date: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_of_guidance_date: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_of_availability_date: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct CreateReleaseBody<'a> {
    release: NewRelease<'a>,
    copy_metadata: bool,
}

impl<'a> From<&'a CreateReleaseConfig> for CreateReleaseBody<'a> {
    fn from(config: &'a CreateReleaseConfig) -> Self {
        Self {
            release: NewRelease {
                version: &config.version,
                release_type: &config.release_type,
                eula: EulaSlug {
                    slug: &config.eula_slug,
                },
                oss_compliant: "confirm",
                description: config.description.as_deref(),
                release_notes_url: config.release_notes_url.as_deref(),
                release_date: config.release_date.as_deref(),
                controlled: config.controlled,
                eccn: config.eccn.as_deref(),
                license_exception: config.license_exception.as_deref(),
                end_of_support_date: config.end_of_support_date.as_deref(),
                end_of_guidance_date: config.end_of_guidance_date.as_deref(),
                end_of_availability_date: config.end_of_availability_date.as_deref(),
            },
            copy_metadata: config.copy_metadata,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ReleaseEnvelope {
    release: Release,
}

#[derive(Debug, Deserialize)]
struct ReleaseListResponse {
    #[serde(default)]
    releases: Vec<Release>,
}

/// Release operations bound to a [`PivnetClient`].
#[derive(Debug, Clone)]
pub struct Releases {
    client: PivnetClient,
}

impl Releases {
    pub(crate) fn new(client: PivnetClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ReleaseClient for Releases {
    #[tracing::instrument(skip(self))]
    async fn list(&self, product_slug: &str) -> Result<Vec<Release>> {
        let path = format!("/products/{}/releases", segment(product_slug));
        let data: ReleaseListResponse = self.client.get_json(&path).await?;
        Ok(data.releases)
    }

    #[tracing::instrument(skip(self))]
    async fn get(&self, product_slug: &str, release_id: u64) -> Result<Release> {
        let path = format!(
            "/products/{}/releases/{}",
            segment(product_slug),
            release_id
        );
        self.client.get_json(&path).await
    }

    #[tracing::instrument(skip(self))]
    async fn get_by_version(&self, product_slug: &str, version: &str) -> Result<Release> {
        self.list(product_slug)
            .await?
            .into_iter()
            .find(|r| r.version == version)
            .ok_or_else(|| {
                PivnetError::InvalidArgument(format!(
                    "release '{version}' not found for product '{product_slug}'"
                ))
            })
    }

    #[tracing::instrument(skip(self))]
    async fn create(&self, product_slug: &str, config: CreateReleaseConfig) -> Result<Release> {
        let path = format!("/products/{}/releases", segment(product_slug));
        let body = CreateReleaseBody::from(&config);

        let data: ReleaseEnvelope = self
            .client
            .send_json(Method::POST, &path, Some(&body), StatusCode::CREATED)
            .await?;
        Ok(data.release)
    }

    #[tracing::instrument(skip(self, release), fields(release_id = release.id))]
    async fn update(&self, product_slug: &str, mut release: Release) -> Result<Release> {
        let path = format!(
            "/products/{}/releases/{}",
            segment(product_slug),
            release.id
        );
        // Links are server-owned and rejected on write.
        release.links = None;
        let body = ReleaseEnvelope { release };

        let data: ReleaseEnvelope = self
            .client
            .send_json(Method::PATCH, &path, Some(&body), StatusCode::OK)
            .await?;
        Ok(data.release)
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, product_slug: &str, release_id: u64) -> Result<()> {
        let path = format!(
            "/products/{}/releases/{}",
            segment(product_slug),
            release_id
        );
        self.client
            .send_empty(Method::DELETE, &path, None::<&()>, StatusCode::NO_CONTENT)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_decodes_links_and_eula() {
        let release: Release = serde_json::from_value(serde_json::json!({
            "id": 1234,
            "version": "1.8.3",
            "release_type": "Security Release",
            "eula": {"id": 1, "slug": "pivotal_software_eula", "name": "Pivotal EULA"},
            "unknown_field": "ignored",
            "_links": {
                "download": {"href": "https://network.pivotal.io/api/v2/products/p/releases/1234/download"}
            }
        }))
        .unwrap();

        assert_eq!(release.id, 1234);
        assert_eq!(release.version, "1.8.3");
        assert_eq!(release.eula_slug(), Some("pivotal_software_eula"));
        assert!(release.is_downloadable());
        let links = release.links.unwrap();
        assert!(links.eula_acceptance.is_none());
        assert!(links.product_files.is_none());
    }

    #[test]
    fn test_create_body_shape() {
        let config = CreateReleaseConfig {
            version: "2.0.0".to_string(),
            release_type: "Major Release".to_string(),
            eula_slug: "pivotal_software_eula".to_string(),
            description: Some("big one".to_string()),
            copy_metadata: true,
            ..Default::default()
        };

        let body = serde_json::to_value(CreateReleaseBody::from(&config)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "release": {
                    "version": "2.0.0",
                    "release_type": "Major Release",
                    "eula": {"slug": "pivotal_software_eula"},
                    "oss_compliant": "confirm",
                    "description": "big one"
                },
                "copy_metadata": true
            })
        );
    }
}
