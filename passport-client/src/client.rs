//! Passport client.

use passport_rest::{NoMethod, ReqwestExecutor, RestRequest, Transport};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use crate::{PassportConfig, Result};

/// Client for the full set of Passport APIs.
///
/// Every API method returns a [`ClientResponse`](passport_rest::ClientResponse):
/// the decoded success payload, the decoded error payload (validation
/// failures and the like), or an exception when Passport could not be
/// reached or answered with something undecodable.
///
/// Cloning is cheap; clones share configuration and connection pool.
///
/// ```no_run
/// use passport_client::PassportClient;
/// use serde_json::json;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let client = PassportClient::new("api-key", "https://idp.example.com")?;
///
/// let response = client
///     .login(&json!({
///         "applicationId": "6c6dfe33-2c9d-4a38-8a33-8e7f5b1e3d39",
///         "loginId": "jane@example.com",
///         "password": "correct horse battery staple"
///     }))
///     .await;
///
/// match (response.success_response(), response.error_response(), response.exception()) {
///     (Some(body), _, _) => println!("token: {}", body["token"]),
///     (_, Some(errors), _) => println!("rejected ({:?}): {errors}", response.status()),
///     (_, _, Some(e)) => println!("Passport unavailable: {e}"),
///     _ => println!("status {:?} without a body", response.status()),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct PassportClient {
    config: Arc<PassportConfig>,
    transport: Arc<dyn Transport>,
}

impl PassportClient {
    /// Create a client for `base_url` authenticating with `api_key`.
    pub fn new(api_key: impl Into<String>, base_url: &str) -> Result<Self> {
        Self::with_config(PassportConfig::new(api_key, base_url)?)
    }

    /// Create a client with custom configuration.
    pub fn with_config(config: PassportConfig) -> Result<Self> {
        let executor = ReqwestExecutor::new(config.executor_config())?;
        Ok(Self::with_transport(config, Arc::new(executor)))
    }

    /// Create a client that sends requests through `transport`.
    pub fn with_transport(config: PassportConfig, transport: Arc<dyn Transport>) -> Self {
        debug!(base_url = %config.base_url, "Creating Passport client");
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    /// Create a client from `PASSPORT_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::with_config(PassportConfig::from_env()?)
    }

    /// Get the client configuration.
    pub fn config(&self) -> &PassportConfig {
        &self.config
    }

    /// Begin a request carrying the API key and configured timeouts.
    ///
    /// Useful for calling endpoints this client does not wrap yet.
    pub fn start(&self) -> RestRequest<NoMethod> {
        RestRequest::new(self.transport.clone(), self.config.base_url.clone())
            .authorization(&self.config.api_key)
            .connect_timeout(self.config.connect_timeout)
            .read_timeout(self.config.read_timeout)
    }
}

impl fmt::Debug for PassportClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PassportClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_client_creation() {
        let client = PassportClient::new("key", "https://idp.example.com").unwrap();
        assert_eq!(client.config().base_url.as_str(), "https://idp.example.com/");
        assert_eq!(client.config().read_timeout, Duration::from_millis(2000));
    }

    #[test]
    fn test_client_rejects_bad_url() {
        assert!(PassportClient::new("key", "not a url").is_err());
    }

    #[test]
    fn test_start_builds_against_base() {
        let client = PassportClient::new("key", "https://idp.example.com/passport/").unwrap();
        let url = client
            .start()
            .uri("/api/user")
            .url_segment("abc")
            .build_url()
            .unwrap();
        assert_eq!(url.as_str(), "https://idp.example.com/passport/api/user/abc");
    }

    #[test]
    fn test_debug_hides_api_key() {
        let client = PassportClient::new("top-secret", "https://idp.example.com").unwrap();
        assert!(!format!("{client:?}").contains("top-secret"));
    }
}
