//! Pivnet API client.
//!
//! Low-level HTTP client that builds authenticated requests, dispatches them
//! against an expected status code and decodes JSON bodies. Resource-specific
//! verbs live on the handles returned by [`PivnetClient::releases`] and
//! friends.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::error::{PivnetError, Result};
use crate::models::{Eulas, ProductFiles, Products, Releases, UserGroups};

/// Production Pivnet host.
pub const DEFAULT_ENDPOINT: &str = "https://network.pivotal.io";

/// Prefix shared by every API path.
pub const API_PREFIX: &str = "/api/v2";

/// User agent sent when the caller does not supply one.
pub const DEFAULT_USER_AGENT: &str = concat!("pivnet-rs/", env!("CARGO_PKG_VERSION"));

/// Immutable client configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base endpoint, e.g. `https://network.pivotal.io`.
    pub endpoint: String,
    /// API token sent in the `Authorization` header.
    pub token: String,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

impl ClientConfig {
    /// Configuration for the production endpoint with the default user agent.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            token: token.into(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Override the endpoint. An empty endpoint keeps [`DEFAULT_ENDPOINT`].
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        self.endpoint = if endpoint.is_empty() {
            DEFAULT_ENDPOINT.to_string()
        } else {
            endpoint
        };
        self
    }

    /// Override the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Read configuration from environment variables.
    ///
    /// Uses `PIVNET_API_TOKEN` for authentication and optionally
    /// `PIVNET_ENDPOINT` for the host (defaults to [`DEFAULT_ENDPOINT`]).
    ///
    /// # Errors
    ///
    /// Returns an error if `PIVNET_API_TOKEN` is not set.
    pub fn from_env() -> Result<Self> {
        let token = env::var("PIVNET_API_TOKEN").map_err(|_| {
            PivnetError::ConfigMissing("PIVNET_API_TOKEN environment variable not set".to_string())
        })?;

        let config = Self::new(token);
        Ok(match env::var("PIVNET_ENDPOINT") {
            Ok(endpoint) => config.with_endpoint(endpoint),
            Err(_) => config,
        })
    }
}

/// Low-level Pivnet API client.
///
/// Holds the configuration and an HTTP connection pool and nothing else, so
/// it can be reused for any number of sequential or concurrent calls. Clones
/// share the same pool.
///
/// # Example
///
/// ```no_run
/// use pivnet::{ClientConfig, PivnetClient, ReleaseClient};
///
/// # async fn example() -> pivnet::Result<()> {
/// let client = PivnetClient::new(ClientConfig::new("my-api-token"))?;
/// let releases = client.releases().list("pivotal-cf").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct PivnetClient {
    http: Client,
    config: Arc<ClientConfig>,
    base_url: Arc<String>,
}

impl std::fmt::Debug for PivnetClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PivnetClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl PivnetClient {
    /// Create a client from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `PIVNET_API_TOKEN` is not set or the endpoint is
    /// not a valid URL.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Create a new client with a default HTTP transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is empty, the endpoint is invalid, or
    /// the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(Duration::from_secs(300))
            .build()
            .map_err(PivnetError::HttpError)?;

        Self::with_http_client(config, http)
    }

    /// Create a client on top of a caller-supplied transport.
    ///
    /// Timeouts, proxies and TLS settings are whatever `http` was built with.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is empty or the endpoint is invalid.
    pub fn with_http_client(config: ClientConfig, http: Client) -> Result<Self> {
        if config.token.is_empty() {
            return Err(PivnetError::ConfigMissing("API token is empty".to_string()));
        }

        let endpoint = config.endpoint.trim_end_matches('/');
        let parsed = Url::parse(endpoint)?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(PivnetError::ConfigMissing(format!(
                "endpoint must be an http(s) URL with a host: {endpoint}"
            )));
        }
        let base_url = format!("{endpoint}{API_PREFIX}");

        Ok(Self {
            http,
            config: Arc::new(config),
            base_url: Arc::new(base_url),
        })
    }

    /// Endpoint plus API prefix, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Product operations.
    pub fn products(&self) -> Products {
        Products::new(self.clone())
    }

    /// Release operations.
    pub fn releases(&self) -> Releases {
        Releases::new(self.clone())
    }

    /// EULA listing and acceptance.
    pub fn eulas(&self) -> Eulas {
        Eulas::new(self.clone())
    }

    /// User group operations.
    pub fn user_groups(&self) -> UserGroups {
        UserGroups::new(self.clone())
    }

    /// Product file operations.
    pub fn product_files(&self) -> ProductFiles {
        ProductFiles::new(self.clone())
    }

    /// Build an authenticated request for `path` (relative to the API prefix).
    ///
    /// # Errors
    ///
    /// Returns [`PivnetError::EncodeError`] if `body` cannot be serialized.
    pub fn build_request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<RequestBuilder> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, %url, "pivnet request");

        let mut request = self
            .http
            .request(method, url)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Token {}", self.config.token),
            )
            .header(reqwest::header::USER_AGENT, &self.config.user_agent);

        if let Some(body) = body {
            let bytes = serde_json::to_vec(body).map_err(PivnetError::EncodeError)?;
            request = request
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(bytes);
        }

        Ok(request)
    }

    /// Send `request` once and return the raw body if the status matches.
    ///
    /// # Errors
    ///
    /// Returns [`PivnetError::HttpError`] on transport failure and
    /// [`PivnetError::UnexpectedStatus`] when the status differs from
    /// `expected`.
    pub async fn dispatch(&self, request: RequestBuilder, expected: StatusCode) -> Result<Vec<u8>> {
        let response = request.send().await.map_err(PivnetError::HttpError)?;
        let status = response.status();

        tracing::debug!(
            url = %response.url(),
            status = status.as_u16(),
            expected = expected.as_u16(),
            "pivnet response"
        );

        let body = response.bytes().await.map_err(PivnetError::HttpError)?;

        if status != expected {
            return Err(PivnetError::UnexpectedStatus {
                status_code: status.as_u16(),
                expected_status_code: expected.as_u16(),
                message: extract_error_message(&body),
            });
        }

        Ok(body.to_vec())
    }

    /// Deserialize a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`PivnetError::ParseError`] if the body does not match `T`.
    pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
        serde_json::from_slice(body).map_err(PivnetError::ParseError)
    }

    /// GET `path` and decode the body.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send_json(Method::GET, path, None::<&()>, StatusCode::OK)
            .await
    }

    /// Send a request whose response carries a JSON body.
    pub(crate) async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        expected: StatusCode,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.build_request(method, path, body)?;
        let bytes = self.dispatch(request, expected).await?;
        Self::decode(&bytes)
    }

    /// Send a request whose response body is ignored (e.g. 204 No Content).
    pub(crate) async fn send_empty<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        expected: StatusCode,
    ) -> Result<()> {
        let request = self.build_request(method, path, body)?;
        self.dispatch(request, expected).await?;
        Ok(())
    }
}

/// Pull a human-readable message out of a failure body, if there is one.
fn extract_error_message(body: &[u8]) -> Option<String> {
    let json: serde_json::Value = serde_json::from_slice(body).ok()?;

    if let Some(msg) = json.get("message").and_then(|m| m.as_str()) {
        return Some(msg.to_string());
    }
    if let Some(err) = json.get("error").and_then(|m| m.as_str()) {
        return Some(err.to_string());
    }
    json.get("errors")
        .and_then(|e| e.as_array())
        .and_then(|errors| errors.iter().find_map(|e| e.as_str()))
        .map(str::to_string)
}

/// Percent-encode a path segment such as a product slug.
pub(crate) fn segment(value: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(value)
}
