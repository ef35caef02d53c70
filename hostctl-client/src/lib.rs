//! hostctl HTTP Client
//!
//! A type-safe HTTP client for the hosting platform's management API.
//!
//! Requests are authenticated with an OAuth2 client-credentials token that is
//! fetched on first use and reused for the lifetime of the client.
//!
//! # Example
//!
//! ```no_run
//! use hostctl_client::{CloudClient, Credentials};
//! use hostctl_core::dto::collection::ListQuery;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = CloudClient::new(
//!         "https://cloud.acquia.com/api",
//!         "https://accounts.acquia.com/api/auth/oauth/token",
//!         Credentials::new("key", "secret"),
//!     );
//!
//!     for application in client.list_applications(&ListQuery::default()).await? {
//!         println!("{} ({})", application.name, application.hosting.id);
//!     }
//!     Ok(())
//! }
//! ```

mod account;
pub mod api;
mod applications;
mod code;
mod crons;
mod databases;
mod domains;
mod environments;
pub mod error;
mod logs;
mod notifications;
mod organizations;
mod teams;

// Re-export commonly used types
pub use api::CloudApi;
pub use error::{ClientError, Result};

use hostctl_core::dto::collection::Collection;
use hostctl_core::dto::operation::OperationResponse;
use reqwest::{Client, Method, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::debug;

/// API key and secret used for the client-credentials grant
#[derive(Clone)]
pub struct Credentials {
    key: String,
    secret: String,
}

impl Credentials {
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &self.key)
            .field("secret", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// HTTP client for the hosting platform API
///
/// Endpoints are grouped by resource:
/// - Account, applications, environments, code
/// - Databases and database backups
/// - Domains, crons, logs
/// - Notifications (asynchronous task status)
/// - Organizations, teams, roles and permissions
#[derive(Debug, Clone)]
pub struct CloudClient {
    /// Base URL of the API (e.g., "https://cloud.acquia.com/api")
    base_url: String,
    /// OAuth2 token endpoint
    token_url: String,
    credentials: Credentials,
    /// HTTP client instance
    client: Client,
    /// Access token, fetched lazily and shared between clones
    token: Arc<OnceCell<String>>,
}

impl CloudClient {
    /// Create a new API client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the management API
    /// * `token_url` - The OAuth2 token endpoint
    /// * `credentials` - API key and secret
    pub fn new(
        base_url: impl Into<String>,
        token_url: impl Into<String>,
        credentials: Credentials,
    ) -> Self {
        let client = Client::builder()
            .user_agent(concat!("hostctl/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self::with_client(base_url, token_url, credentials, client)
    }

    /// Create a new API client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(
        base_url: impl Into<String>,
        token_url: impl Into<String>,
        credentials: Credentials,
        client: Client,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token_url: token_url.into(),
            credentials,
            client,
            token: Arc::new(OnceCell::new()),
        }
    }

    /// Get the base URL of the API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Authentication
    // =============================================================================

    async fn access_token(&self) -> Result<&str> {
        let token = self
            .token
            .get_or_try_init(|| self.fetch_token())
            .await?;
        Ok(token.as_str())
    }

    async fn fetch_token(&self) -> Result<String> {
        debug!("Requesting access token from {}", self.token_url);

        let response = self
            .client
            .post(&self.token_url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.credentials.key.as_str()),
                ("client_secret", self.credentials.secret.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::Auth(format!("{} ({})", error_text, status)));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| ClientError::Auth(format!("Malformed token response: {}", e)))?;

        Ok(token.access_token)
    }

    // =============================================================================
    // Request Builders
    // =============================================================================

    async fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let token = self.access_token().await?;
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);
        Ok(self.client.request(method, url).bearer_auth(token))
    }

    async fn get(&self, path: &str) -> Result<RequestBuilder> {
        self.request(Method::GET, path).await
    }

    async fn post(&self, path: &str) -> Result<RequestBuilder> {
        self.request(Method::POST, path).await
    }

    async fn put(&self, path: &str) -> Result<RequestBuilder> {
        self.request(Method::PUT, path).await
    }

    async fn delete(&self, path: &str) -> Result<RequestBuilder> {
        self.request(Method::DELETE, path).await
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// This method checks the status code and returns an appropriate error if
    /// the request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let response = Self::check_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle a collection response, unwrapping `_embedded.items`
    async fn handle_collection<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<Vec<T>> {
        let collection: Collection<T> = self.handle_response(response).await?;
        Ok(collection.into_items())
    }

    /// Handle the response of a mutating call
    async fn handle_operation(&self, response: reqwest::Response) -> Result<OperationResponse> {
        self.handle_response(response).await
    }

    /// Handle a response whose body is raw bytes (e.g. log downloads)
    async fn handle_bytes(&self, response: reqwest::Response) -> Result<Vec<u8>> {
        let response = Self::check_status(response).await?;
        Ok(response.bytes().await?.to_vec())
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials::new("key", "secret")
    }

    #[test]
    fn test_client_creation() {
        let client = CloudClient::new("https://cloud.example.com/api", "https://auth", credentials());
        assert_eq!(client.base_url(), "https://cloud.example.com/api");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = CloudClient::new("https://cloud.example.com/api/", "https://auth", credentials());
        assert_eq!(client.base_url(), "https://cloud.example.com/api");
    }

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let debug = format!("{:?}", Credentials::new("my-key", "top-secret"));
        assert!(debug.contains("my-key"));
        assert!(!debug.contains("top-secret"));
    }
}
