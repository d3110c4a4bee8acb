//! Pivnet API client library.
//!
//! A Rust library for the Pivotal Network (Pivnet) software-distribution
//! API: products, releases, EULAs, user groups and product files. Each
//! resource family is exposed as a capability trait ([`ReleaseClient`],
//! [`EulaClient`], ...) implemented by a lightweight handle obtained from
//! [`PivnetClient`].
//!
//! # Quick Start
//!
//! ```no_run
//! use pivnet::{EulaClient, PivnetClient, ReleaseClient, UserGroupClient};
//!
//! #[tokio::main]
//! async fn main() -> pivnet::Result<()> {
//!     // Create client from environment variables
//!     let client = PivnetClient::from_env()?;
//!
//!     // Find a release and accept its EULA
//!     let release = client.releases().get_by_version("pivotal-cf", "1.8.3").await?;
//!     client.eulas().accept("pivotal-cf", release.id).await?;
//!
//!     // Restrict it to a user group
//!     client.user_groups().add_to_release("pivotal-cf", release.id, 42).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Request model
//!
//! Every operation performs exactly one HTTP request. The response status
//! must equal the single code the operation expects (200 for reads, 201 for
//! creation, 204 for content-less mutations); anything else is reported as
//! [`PivnetError::UnexpectedStatus`] carrying both codes and any message the
//! server included. There is no retry, caching or pagination.
//!
//! # Configuration
//!
//! [`ClientConfig::from_env`] reads:
//!
//! - `PIVNET_API_TOKEN` (required) - Your Pivnet API token
//! - `PIVNET_ENDPOINT` (optional) - Host (defaults to `https://network.pivotal.io`)

pub mod cli;
mod client;
mod error;
mod models;
mod output;
mod traits;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use client::{
    ClientConfig, PivnetClient, API_PREFIX, DEFAULT_ENDPOINT, DEFAULT_USER_AGENT,
};
pub use error::{PivnetError, Result};

// Re-export capability traits
pub use traits::{EulaClient, ProductClient, ProductFileClient, ReleaseClient, UserGroupClient};

// Re-export models and resource handles
pub use models::{
    CreateReleaseConfig, Eula, EulaAcceptance, Eulas, Links, Product, ProductFile, ProductFiles,
    Products, Release, Releases, UserGroup, UserGroups,
};

// Re-export output helpers
pub use output::{print_list, print_single, PrintAs, TableRow};
