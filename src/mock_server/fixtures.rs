//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use std::collections::HashMap;

use crate::{Eula, Links, Product, ProductFile, Release, UserGroup};

/// Collection of fixture factories for test data.
pub struct Fixtures;

/// The data the default mock server starts with.
pub struct DefaultScenario {
    pub products: Vec<Product>,
    pub releases: Vec<(String, Release)>,
    pub eulas: Vec<Eula>,
    pub user_groups: Vec<UserGroup>,
    pub product_files: Vec<(String, ProductFile)>,
    pub release_product_files: Vec<(u64, u64)>,
}

impl Fixtures {
    // =========================================================================
    // Product Fixtures
    // =========================================================================

    /// Create a product.
    pub fn product(id: u64, slug: &str) -> Product {
        Product {
            id,
            slug: slug.to_string(),
            name: Some(format!("{slug} product")),
        }
    }

    // =========================================================================
    // Release Fixtures
    // =========================================================================

    /// Create a minimal release.
    pub fn release(id: u64, version: &str) -> Release {
        Release {
            id,
            version: version.to_string(),
            ..Default::default()
        }
    }

    /// Create a release with a EULA and download/acceptance links.
    pub fn release_with_eula(id: u64, version: &str, product_slug: &str, eula_slug: &str) -> Release {
        let base = format!("/api/v2/products/{product_slug}/releases/{id}");
        let mut release = Self::release(id, version);
        release.release_type = Some("Major Release".to_string());
        release.eula = Some(Eula {
            slug: Some(eula_slug.to_string()),
            ..Default::default()
        });
        release.links = Some(Links {
            download: Some(href(&format!("{base}/download"))),
            eula_acceptance: Some(href(&format!("{base}/eula_acceptance"))),
            product_files: Some(href(&format!("{base}/product_files"))),
            eula: None,
        });
        release
    }

    // =========================================================================
    // EULA Fixtures
    // =========================================================================

    /// Create a EULA.
    pub fn eula(id: u64, slug: &str, name: &str) -> Eula {
        Eula {
            id,
            slug: Some(slug.to_string()),
            name: Some(name.to_string()),
            content: Some(format!("Terms of {name}")),
            links: None,
        }
    }

    // =========================================================================
    // User Group Fixtures
    // =========================================================================

    /// Create a user group.
    pub fn user_group(id: u64, name: &str) -> UserGroup {
        UserGroup {
            id,
            name: name.to_string(),
            description: None,
            members: vec![],
        }
    }

    // =========================================================================
    // Product File Fixtures
    // =========================================================================

    /// Create a product file.
    pub fn product_file(id: u64, name: &str) -> ProductFile {
        ProductFile {
            id,
            name: Some(name.to_string()),
            file_type: Some("Software".to_string()),
            file_version: Some("1.0".to_string()),
            aws_object_url: Some(format!("https://s3.example.com/{name}")),
            md5: Some("d41d8cd98f00b204e9800998ecf8427e".to_string()),
            ..Default::default()
        }
    }

    // =========================================================================
    // Scenarios
    // =========================================================================

    /// Product `banana` with two releases, a EULA, two user groups and a
    /// file attached to the newest release.
    pub fn default_scenario() -> DefaultScenario {
        DefaultScenario {
            products: vec![Self::product(1, "banana"), Self::product(2, "apple")],
            releases: vec![
                (
                    "banana".to_string(),
                    Self::release_with_eula(1234, "1.0.0", "banana", "pivotal_software_eula"),
                ),
                (
                    "banana".to_string(),
                    Self::release_with_eula(2345, "1.1.0", "banana", "pivotal_software_eula"),
                ),
            ],
            eulas: vec![Self::eula(1, "pivotal_software_eula", "Pivotal Software EULA")],
            user_groups: vec![
                Self::user_group(2, "group 1"),
                Self::user_group(3, "group 2"),
            ],
            product_files: vec![
                ("banana".to_string(), Self::product_file(10, "banana.tgz")),
                ("banana".to_string(), Self::product_file(11, "banana-docs.pdf")),
            ],
            release_product_files: vec![(2345, 10)],
        }
    }
}

fn href(url: &str) -> HashMap<String, String> {
    HashMap::from([("href".to_string(), url.to_string())])
}
