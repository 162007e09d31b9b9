//! hny HTTP Client
//!
//! A simple, type-safe HTTP client for the observability API.
//!
//! Resource endpoints live under `/1/` and authenticate with a configuration
//! key sent as `X-Honeycomb-Team`. Team management endpoints live under
//! `/2/teams/{team}/` and authenticate with a management key sent as a bearer
//! token.
//!
//! # Example
//!
//! ```no_run
//! use hny_client::HoneycombClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = HoneycombClient::new("https://api.honeycomb.io")
//!         .with_api_key("my-configuration-key");
//!
//!     for dataset in client.list_datasets().await? {
//!         println!("{}", dataset.slug);
//!     }
//!     Ok(())
//! }
//! ```

mod auth;
mod boards;
mod datasets;
mod environments;
pub mod error;
mod keys;
mod markers;
mod queries;
mod slos;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use queries::QueryExecutor;

use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Header carrying the configuration key on v1 endpoints
pub const API_KEY_HEADER: &str = "X-Honeycomb-Team";

/// HTTP client for the observability API
///
/// This client provides methods for all supported endpoints, organized
/// into logical groups:
/// - Datasets, boards, markers and SLOs (configuration key)
/// - Query creation and asynchronous query results (configuration key)
/// - API keys and environments (management key + team slug)
#[derive(Debug, Clone)]
pub struct HoneycombClient {
    /// Base URL of the API (e.g., "https://api.honeycomb.io")
    base_url: String,
    /// HTTP client instance
    client: Client,
    /// Configuration key for v1 endpoints
    api_key: Option<String>,
    /// Management key (`keyid:secret`) for v2 endpoints
    management_key: Option<String>,
    /// Team slug for v2 endpoints
    team: Option<String>,
}

impl HoneycombClient {
    /// Create a new client without credentials
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the API (e.g., "https://api.honeycomb.io")
    ///
    /// # Example
    /// ```
    /// use hny_client::HoneycombClient;
    ///
    /// let client = HoneycombClient::new("https://api.honeycomb.io");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the API
    /// * `client` - A configured reqwest Client
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            api_key: None,
            management_key: None,
            team: None,
        }
    }

    /// Set the configuration key used for v1 endpoints
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the management key used for v2 endpoints
    pub fn with_management_key(mut self, management_key: impl Into<String>) -> Self {
        self.management_key = Some(management_key.into());
        self
    }

    /// Set the team slug used for v2 endpoints
    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    /// Get the base URL of the API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Request Builders
    // =============================================================================

    /// Build an endpoint URL from path segments below the base URL
    ///
    /// Each segment is percent-encoded, so IDs and slugs can never add path
    /// components, a query string or a fragment.
    fn url<I>(&self, segments: I) -> Result<Url>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            ClientError::InvalidRequest(format!("invalid base URL '{}': {}", self.base_url, e))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                ClientError::InvalidRequest(format!("base URL '{}' cannot have a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Build an authenticated request against a v1 endpoint
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `segments` - Path segments below `/1/`
    fn v1(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ClientError::MissingCredentials("configuration key"))?;

        let url = self.url(["1"].iter().chain(segments))?;
        debug!(%method, %url, "v1 request");

        Ok(self
            .client
            .request(method, url)
            .header(API_KEY_HEADER, api_key))
    }

    /// Build an authenticated request against a team-scoped v2 endpoint
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `segments` - Path segments below `/2/teams/{team}/`
    fn v2(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder> {
        let management_key = self
            .management_key
            .as_deref()
            .ok_or(ClientError::MissingCredentials("management key"))?;
        let team = self
            .team
            .as_deref()
            .ok_or(ClientError::MissingCredentials("team slug"))?;

        let url = self.url(["2", "teams", team].iter().chain(segments))?;
        debug!(%method, %url, "v2 request");

        Ok(self
            .client
            .request(method, url)
            .bearer_auth(management_key)
            .header(reqwest::header::CONTENT_TYPE, "application/vnd.api+json"))
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// This method checks the status code and returns an appropriate error if
    /// the request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::from_response(status.as_u16(), &error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response that returns no content (e.g., DELETE operations)
    ///
    /// This method checks the status code and returns an error if the request failed.
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::from_response(status.as_u16(), &error_text));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = HoneycombClient::new("https://api.honeycomb.io");
        assert_eq!(client.base_url(), "https://api.honeycomb.io");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = HoneycombClient::new("https://api.honeycomb.io/");
        assert_eq!(client.base_url(), "https://api.honeycomb.io");
    }

    #[test]
    fn test_v1_request_carries_team_header() {
        let client = HoneycombClient::new("https://api.honeycomb.io").with_api_key("secret");
        let request = client.v1(Method::GET, &["datasets"]).unwrap().build().unwrap();

        assert_eq!(request.url().as_str(), "https://api.honeycomb.io/1/datasets");
        assert_eq!(request.headers()[API_KEY_HEADER], "secret");
    }

    #[test]
    fn test_v1_request_without_key_fails() {
        let client = HoneycombClient::new("https://api.honeycomb.io");
        let err = client.v1(Method::GET, &["datasets"]).unwrap_err();
        assert!(matches!(err, ClientError::MissingCredentials("configuration key")));
    }

    #[test]
    fn test_v2_request_is_team_scoped() {
        let client = HoneycombClient::new("https://api.honeycomb.io")
            .with_management_key("kid:secret")
            .with_team("acme");
        let request = client
            .v2(Method::GET, &["environments"])
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(
            request.url().as_str(),
            "https://api.honeycomb.io/2/teams/acme/environments"
        );
        assert_eq!(
            request.headers()[reqwest::header::AUTHORIZATION],
            "Bearer kid:secret"
        );
    }

    #[test]
    fn test_v2_request_requires_team() {
        let client =
            HoneycombClient::new("https://api.honeycomb.io").with_management_key("kid:secret");
        let err = client.v2(Method::GET, &["environments"]).unwrap_err();
        assert!(matches!(err, ClientError::MissingCredentials("team slug")));
    }

    #[test]
    fn test_path_segments_are_percent_encoded() {
        let client = HoneycombClient::new("https://api.honeycomb.io").with_api_key("secret");
        let request = client
            .v1(Method::GET, &["datasets", "a/b?c#d"])
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(
            request.url().as_str(),
            "https://api.honeycomb.io/1/datasets/a%2Fb%3Fc%23d"
        );
        assert!(request.url().query().is_none());
        assert!(request.url().fragment().is_none());
    }

    #[test]
    fn test_base_url_path_prefix_is_kept() {
        let client = HoneycombClient::new("https://proxy.internal/honeycomb/").with_api_key("secret");
        let request = client.v1(Method::GET, &["auth"]).unwrap().build().unwrap();

        assert_eq!(request.url().as_str(), "https://proxy.internal/honeycomb/1/auth");
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let client = HoneycombClient::new("not a url").with_api_key("secret");
        let err = client.v1(Method::GET, &["auth"]).unwrap_err();
        assert!(matches!(err, ClientError::InvalidRequest(_)));
    }
}
