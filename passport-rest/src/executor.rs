//! Request execution.

use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, trace, warn};
use url::Url;

use crate::{ExecutorConfig, TransportError};

/// A fully assembled request, ready to go on the wire.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    /// HTTP method.
    pub method: Method,
    /// Final URL including query string.
    pub url: Url,
    /// Request headers (authorization and content type included).
    pub headers: HeaderMap,
    /// Encoded body, if any.
    pub body: Option<Bytes>,
    /// Connect timeout override; `None` uses the executor default.
    pub connect_timeout: Option<Duration>,
    /// Read timeout override; `None` uses the executor default.
    pub read_timeout: Option<Duration>,
}

/// Status, headers and body of a received response.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// Status code.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Response body.
    pub body: Bytes,
}

impl RawResponse {
    /// Get the content type if available.
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
    }
}

/// Performs the network call for a prepared request.
///
/// Implementations must not retry and must not keep per-call state between
/// executions; one transport is shared by every concurrent dispatch.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute the request once.
    async fn execute(&self, request: PreparedRequest) -> Result<RawResponse, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn execute(&self, request: PreparedRequest) -> Result<RawResponse, TransportError> {
        (**self).execute(request).await
    }
}

/// [`Transport`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestExecutor {
    inner: reqwest::Client,
    config: Arc<ExecutorConfig>,
    /// Clients for request-specific timeouts, keyed by (connect, read).
    overrides: Arc<RwLock<HashMap<(Duration, Duration), reqwest::Client>>>,
}

impl ReqwestExecutor {
    /// Create a new executor with the given configuration.
    pub fn new(config: ExecutorConfig) -> Result<Self, TransportError> {
        let inner = build_client(&config, config.connect_timeout, config.read_timeout)?;
        Ok(Self {
            inner,
            config: Arc::new(config),
            overrides: Arc::new(RwLock::new(HashMap::new())),
        })
    }

    /// Get the executor configuration.
    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /// Pick the shared client, or the cached client for overridden timeouts.
    fn client_for(
        &self,
        connect_timeout: Duration,
        read_timeout: Duration,
    ) -> Result<reqwest::Client, TransportError> {
        if connect_timeout == self.config.connect_timeout
            && read_timeout == self.config.read_timeout
        {
            return Ok(self.inner.clone());
        }

        let key = (connect_timeout, read_timeout);
        if let Some(client) = self.overrides.read().get(&key) {
            return Ok(client.clone());
        }

        let mut overrides = self.overrides.write();
        if let Some(client) = overrides.get(&key) {
            return Ok(client.clone());
        }

        debug!(
            connect_timeout_ms = connect_timeout.as_millis() as u64,
            read_timeout_ms = read_timeout.as_millis() as u64,
            "Building client for request-specific timeouts"
        );
        let client = build_client(&self.config, connect_timeout, read_timeout)
            .map_err(TransportError::from)?;
        overrides.insert(key, client.clone());
        Ok(client)
    }

    /// Number of clients built for request-specific timeouts.
    pub fn override_clients(&self) -> usize {
        self.overrides.read().len()
    }
}

#[async_trait]
impl Transport for ReqwestExecutor {
    async fn execute(&self, request: PreparedRequest) -> Result<RawResponse, TransportError> {
        let connect_timeout = request
            .connect_timeout
            .unwrap_or(self.config.connect_timeout);
        let read_timeout = request.read_timeout.unwrap_or(self.config.read_timeout);
        let client = self.client_for(connect_timeout, read_timeout)?;

        debug!(
            method = %request.method,
            url = %request.url,
            body_len = request.body.as_ref().map_or(0, Bytes::len),
            "Sending HTTP request"
        );

        let mut builder = client.request(request.method, request.url);

        for (name, value) in &self.config.default_headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        // Request headers replace defaults with the same name.
        builder = builder.headers(request.headers);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let start = Instant::now();
        let response = builder.send().await.inspect_err(|e| {
            warn!(
                error = %e,
                timeout = e.is_timeout(),
                connect = e.is_connect(),
                "HTTP request failed"
            );
        })?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.inspect_err(|e| {
            warn!(error = %e, status = %status, "Failed to read response body");
        })?;

        trace!(
            status = %status,
            body_len = body.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Received HTTP response"
        );

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}

fn build_client(
    config: &ExecutorConfig,
    connect_timeout: Duration,
    read_timeout: Duration,
) -> Result<reqwest::Client, reqwest::Error> {
    let redirect = if config.follow_redirects {
        reqwest::redirect::Policy::limited(config.max_redirects)
    } else {
        reqwest::redirect::Policy::none()
    };

    reqwest::Client::builder()
        .connect_timeout(connect_timeout)
        .read_timeout(read_timeout)
        .user_agent(&config.user_agent)
        .redirect(redirect)
        .build()
}
