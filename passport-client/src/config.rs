//! Passport client configuration.

use passport_rest::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_READ_TIMEOUT, ExecutorConfig, Url};
use std::env;
use std::fmt;
use std::time::Duration;

use crate::{PassportError, Result};

/// Prefix shared by every environment variable the client reads.
pub const ENV_PREFIX: &str = "PASSPORT";

/// Passport client configuration.
///
/// Set once when the client is built and shared read-only by every call.
#[derive(Clone)]
pub struct PassportConfig {
    /// API key sent verbatim in the `Authorization` header.
    pub api_key: String,
    /// Base URL of the Passport backend.
    pub base_url: Url,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// Read timeout.
    pub read_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl PassportConfig {
    /// Create a configuration with default timeouts (2000 ms each).
    pub fn new(api_key: impl Into<String>, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(PassportError::UnsupportedBaseUrl(base_url.to_string()));
        }

        Ok(Self {
            api_key: api_key.into(),
            base_url,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            read_timeout: DEFAULT_READ_TIMEOUT,
            user_agent: format!("passport-client/{}", env!("CARGO_PKG_VERSION")),
        })
    }

    /// Load from `PASSPORT_API_KEY`, `PASSPORT_BASE_URL` and the optional
    /// `PASSPORT_CONNECT_TIMEOUT_MS` / `PASSPORT_READ_TIMEOUT_MS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load using a custom variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let loader = EnvLoader { lookup };

        let api_key = loader.load_var("API_KEY")?;
        let base_url = loader.load_var("BASE_URL")?;
        let mut config = Self::new(api_key, &base_url)?;

        if let Some(timeout) = loader.load_millis("CONNECT_TIMEOUT_MS")? {
            config.connect_timeout = timeout;
        }
        if let Some(timeout) = loader.load_millis("READ_TIMEOUT_MS")? {
            config.read_timeout = timeout;
        }

        Ok(config)
    }

    /// Set the connection timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the read timeout.
    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// Set the user agent string.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Executor settings derived from this configuration.
    pub fn executor_config(&self) -> ExecutorConfig {
        ExecutorConfig::builder()
            .connect_timeout(self.connect_timeout)
            .read_timeout(self.read_timeout)
            .user_agent(self.user_agent.clone())
            .build()
    }
}

impl fmt::Debug for PassportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PassportConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .field("connect_timeout", &self.connect_timeout)
            .field("read_timeout", &self.read_timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Reads `PASSPORT_`-prefixed variables.
struct EnvLoader<F> {
    lookup: F,
}

impl<F> EnvLoader<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn full_key(key: &str) -> String {
        format!("{}_{}", ENV_PREFIX, key.to_uppercase())
    }

    fn load_opt(&self, key: &str) -> Option<(String, String)> {
        let full_key = Self::full_key(key);
        (self.lookup)(&full_key)
            .filter(|value| !value.trim().is_empty())
            .map(|value| (full_key, value))
    }

    fn load_var(&self, key: &str) -> Result<String> {
        self.load_opt(key)
            .map(|(_, value)| value)
            .ok_or_else(|| PassportError::MissingEnvVar(Self::full_key(key)))
    }

    fn load_millis(&self, key: &str) -> Result<Option<Duration>> {
        let Some((var, value)) = self.load_opt(key) else {
            return Ok(None);
        };

        value
            .trim()
            .parse::<u64>()
            .map(|ms| Some(Duration::from_millis(ms)))
            .map_err(|_| PassportError::InvalidEnvVar { var, value })
    }
}
