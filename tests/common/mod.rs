//! Shared helpers for wiremock-based tests.

#![allow(dead_code)]

use pivnet::{ClientConfig, PivnetClient};
use wiremock::MockServer;

pub const TOKEN: &str = "my-auth-token";
pub const USER_AGENT: &str = "pivnet-resource/0.1.0 (some-url)";

pub fn client_for(server: &MockServer) -> PivnetClient {
    PivnetClient::new(
        ClientConfig::new(TOKEN)
            .with_endpoint(server.uri())
            .with_user_agent(USER_AGENT),
    )
    .unwrap()
}

pub fn api_path(path: &str) -> String {
    format!("/api/v2{path}")
}
