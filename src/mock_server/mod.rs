//! Mock Pivnet API server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the Pivnet
//! API for integration and end-to-end testing. Unlike wiremock which mocks at
//! the HTTP level per-test, this server maintains state across requests, so a
//! deleted release stays deleted and an attached user group shows up in the
//! next listing.
//!
//! # Example
//!
//! ```ignore
//! use pivnet::mock_server::MockServer;
//! use pivnet::{ClientConfig, PivnetClient, ReleaseClient};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = PivnetClient::new(
//!         ClientConfig::new(MockServer::TOKEN).with_endpoint(server.url()),
//!     )
//!     .unwrap();
//!
//!     // Server comes with default fixtures
//!     let releases = client.releases().list("banana").await.unwrap();
//!     assert!(!releases.is_empty());
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::Fixtures;
pub use server::MockServer;
pub use state::MockState;
