//! Mock Pivnet API server.
//!
//! Provides an axum-based HTTP server that simulates the Pivnet API.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::{self, Next},
    response::Response,
    routing::{get, patch, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tower::ServiceBuilder;

use super::fixtures::{DefaultScenario, Fixtures};
use super::handlers;
use super::state::MockState;
use crate::API_PREFIX;

/// A mock Pivnet API server for testing.
///
/// The server runs in the background and can be used to test the Pivnet
/// client against a realistic API implementation.
pub struct MockServer {
    /// The URL where the server is listening.
    url: String,
    /// Handle to the server task.
    handle: JoinHandle<()>,
    /// Shared state that can be modified during tests.
    state: Arc<RwLock<MockState>>,
}

impl MockServer {
    /// Token the default server requires.
    pub const TOKEN: &'static str = "mock-api-token";

    /// Start a new mock server with default fixtures.
    ///
    /// The server listens on a random available port and returns immediately.
    /// Requests must carry [`MockServer::TOKEN`].
    pub async fn start() -> Self {
        Self::with_state(Self::default_state().with_required_token(Self::TOKEN)).await
    }

    /// Start a mock server with empty state and no token check.
    pub async fn start_empty() -> Self {
        Self::with_state(MockState::new()).await
    }

    /// Start a mock server with custom state.
    pub async fn with_state(state: MockState) -> Self {
        let shared_state = state.shared();
        let app = Self::create_router(shared_state.clone());

        // Bind to a random available port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to address");
        let addr = listener.local_addr().expect("Failed to get local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server error");
        });

        Self {
            url: format!("http://{}", addr),
            handle,
            state: shared_state,
        }
    }

    /// Get the base URL of the mock server.
    ///
    /// Use this as the endpoint of a `ClientConfig`.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get access to the server's shared state.
    ///
    /// This allows modifying the mock data during a test.
    pub fn state(&self) -> Arc<RwLock<MockState>> {
        self.state.clone()
    }

    /// Shutdown the server.
    ///
    /// This aborts the server task. It's safe to call multiple times.
    pub async fn shutdown(self) {
        self.handle.abort();
        let _ = self.handle.await;
    }

    /// Create the default state with common test fixtures.
    fn default_state() -> MockState {
        Self::state_from_scenario(Fixtures::default_scenario())
    }

    /// Create state from a scenario.
    fn state_from_scenario(scenario: DefaultScenario) -> MockState {
        let mut state = MockState::new();

        for product in scenario.products {
            state = state.with_product(product);
        }

        for (slug, release) in scenario.releases {
            state = state.with_release(&slug, release);
        }

        for eula in scenario.eulas {
            state = state.with_eula(eula);
        }

        for group in scenario.user_groups {
            state = state.with_user_group(group);
        }

        for (slug, file) in scenario.product_files {
            state = state.with_product_file(&slug, file);
        }

        for (release_id, file_id) in scenario.release_product_files {
            state
                .release_product_files
                .entry(release_id)
                .or_default()
                .insert(file_id);
        }

        state
    }

    /// Create the axum router with all routes.
    fn create_router(state: Arc<RwLock<MockState>>) -> Router {
        let api = Router::new()
            // Product routes
            .route("/products", get(handlers::list_products))
            .route("/products/:slug", get(handlers::get_product))
            // Release routes
            .route(
                "/products/:slug/releases",
                get(handlers::list_releases).post(handlers::create_release),
            )
            .route(
                "/products/:slug/releases/:id",
                get(handlers::get_release)
                    .patch(handlers::update_release)
                    .delete(handlers::delete_release),
            )
            .route(
                "/products/:slug/releases/:id/eula_acceptance",
                post(handlers::accept_eula),
            )
            // EULA routes
            .route("/eulas", get(handlers::list_eulas))
            .route("/eulas/:slug", get(handlers::get_eula))
            // User group routes
            .route("/user_groups", get(handlers::list_user_groups))
            .route(
                "/products/:slug/releases/:id/user_groups",
                get(handlers::list_release_user_groups),
            )
            .route(
                "/products/:slug/releases/:id/add_user_group",
                patch(handlers::add_user_group),
            )
            .route(
                "/products/:slug/releases/:id/remove_user_group",
                patch(handlers::remove_user_group),
            )
            // Product file routes
            .route(
                "/products/:slug/product_files",
                get(handlers::list_product_files),
            )
            .route(
                "/products/:slug/product_files/:id",
                get(handlers::get_product_file),
            )
            .route(
                "/products/:slug/releases/:id/product_files",
                get(handlers::list_release_product_files),
            )
            .route(
                "/products/:slug/releases/:id/add_product_file",
                patch(handlers::add_product_file),
            )
            .route(
                "/products/:slug/releases/:id/remove_product_file",
                patch(handlers::remove_product_file),
            )
            .layer(ServiceBuilder::new().layer(middleware::from_fn_with_state(
                state.clone(),
                require_token,
            )));

        Router::new()
            .nest(API_PREFIX, api)
            // Health check
            .route("/health", get(health_check))
            .with_state(state)
    }
}

/// Reject API requests without the configured token.
async fn require_token(
    State(state): State<Arc<RwLock<MockState>>>,
    request: Request,
    next: Next,
) -> Response {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    if !state.read().await.is_authorized(header) {
        return handlers::error_response(
            StatusCode::UNAUTHORIZED,
            "invalid API token".to_string(),
        );
    }

    next.run(request).await
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "ok"
}
