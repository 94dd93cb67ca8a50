//! # Passport REST
//!
//! The generic request builder that every Passport API call goes through.
//!
//! A request is accumulated on an owned, fluent [`RestRequest`] (base URL,
//! path template and segments, query parameters, headers, body, timeouts),
//! dispatched through a [`Transport`], and classified into a single
//! [`ClientResponse`] envelope holding exactly one of:
//!
//! - a **success** payload (2xx),
//! - an **error** payload (non-2xx, e.g. validation failures),
//! - an **exception** (service unreachable, timeout, undecodable body).
//!
//! Runtime failures never escape `go()`; callers branch on one type.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use passport_rest::{ExecutorConfig, ReqwestExecutor, RestRequest, Url};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let executor = Arc::new(ReqwestExecutor::new(ExecutorConfig::default())?);
//!     let base = Url::parse("https://idp.example.com")?;
//!
//!     let response = RestRequest::new(executor, base)
//!         .authorization("my-api-key")
//!         .uri("/api/user/bulk")
//!         .url_parameter("userId", vec!["u1", "u2"])
//!         .url_parameter("hardDelete", true)
//!         .delete()
//!         .go()
//!         .await;
//!
//!     println!("State: {:?}, status: {:?}", response.state(), response.status());
//!     Ok(())
//! }
//! ```
//!
//! ## No Retries
//!
//! The executor sends each request exactly once. Timeouts (connect and
//! read, 2000 ms by default) are the only cancellation mechanism.

mod classify;
mod codec;
mod config;
mod error;
mod executor;
mod request;
mod response;
mod uri;

pub use classify::classify;
pub use codec::{
    BodyEncoder, EncodedBody, FORM_CONTENT_TYPE, FormBody, JSON_CONTENT_TYPE, JsonBody,
    JsonDecoder, ResponseDecoder, is_json_compatible,
};
pub use config::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_READ_TIMEOUT, ExecutorConfig, ExecutorConfigBuilder};
pub use error::{ClientError, DecodeError, EncodeError, TransportError, UrlError};
pub use executor::{PreparedRequest, RawResponse, ReqwestExecutor, Transport};
pub use request::{NoMethod, RestRequest};
pub use response::{ClientResponse, Outcome, ResponseState};
pub use uri::{PathSegment, QueryParams, QueryValue, UrlBuilder};

// Re-export common types
pub use bytes::Bytes;
pub use http::{HeaderMap, HeaderValue, Method, StatusCode, header};
pub use serde_json::Value;
pub use url::{self, Url};

/// Prelude for common imports.
///
/// ```
/// use passport_rest::prelude::*;
/// ```
pub mod prelude {
    pub use crate::codec::{BodyEncoder, FormBody, JsonBody, JsonDecoder, ResponseDecoder};
    pub use crate::config::{ExecutorConfig, ExecutorConfigBuilder};
    pub use crate::error::{ClientError, TransportError};
    pub use crate::executor::{ReqwestExecutor, Transport};
    pub use crate::request::RestRequest;
    pub use crate::response::{ClientResponse, Outcome, ResponseState};
    pub use crate::uri::{QueryParams, QueryValue};
    pub use http::{Method, StatusCode};
    pub use url::Url;
}
