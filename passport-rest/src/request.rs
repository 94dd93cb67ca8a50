//! Fluent REST request builder.

use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::{
    BodyEncoder, ClientError, ClientResponse, EncodeError, EncodedBody, JsonBody, JsonDecoder,
    PathSegment, PreparedRequest, QueryParams, QueryValue, ResponseDecoder, Transport, UrlBuilder,
    UrlError, classify,
};

/// Method state of a [`RestRequest`] that has no HTTP method yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMethod;

/// Owned, fluent accumulator for one REST call.
///
/// Every setter consumes and returns the builder. `go` is only available
/// once a method has been chosen with [`get`](RestRequest::get),
/// [`post`](RestRequest::post), [`put`](RestRequest::put),
/// [`delete`](RestRequest::delete) or [`method`](RestRequest::method), so a
/// dispatch without a method does not compile:
///
/// ```compile_fail
/// # use std::sync::Arc;
/// # use passport_rest::{ExecutorConfig, ReqwestExecutor, RestRequest, Url};
/// # async fn run() {
/// let executor = Arc::new(ReqwestExecutor::new(ExecutorConfig::default()).unwrap());
/// let base = Url::parse("https://idp.example.com").unwrap();
/// let response = RestRequest::new(executor, base).uri("/api/user").go().await;
/// # }
/// ```
///
/// ```no_run
/// # use std::sync::Arc;
/// # use passport_rest::{ExecutorConfig, ReqwestExecutor, RestRequest, Url};
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let executor = Arc::new(ReqwestExecutor::new(ExecutorConfig::default())?);
/// let base = Url::parse("https://idp.example.com")?;
///
/// let response = RestRequest::new(executor, base)
///     .authorization("api-key")
///     .uri("/api/user")
///     .url_segment("abc-123")
///     .get()
///     .go()
///     .await;
///
/// if let Some(user) = response.success_response() {
///     println!("{user}");
/// }
/// # Ok(())
/// # }
/// ```
pub struct RestRequest<M = NoMethod> {
    transport: Arc<dyn Transport>,
    base_url: Url,
    uri: String,
    segments: Vec<PathSegment>,
    query: QueryParams,
    headers: HeaderMap,
    body: Option<Result<EncodedBody, EncodeError>>,
    success_decoder: Arc<dyn ResponseDecoder>,
    error_decoder: Arc<dyn ResponseDecoder>,
    connect_timeout: Option<Duration>,
    read_timeout: Option<Duration>,
    method: M,
}

impl RestRequest<NoMethod> {
    /// Start a request against `base_url`. Both decoders default to JSON.
    pub fn new(transport: Arc<dyn Transport>, base_url: Url) -> Self {
        Self {
            transport,
            base_url,
            uri: String::new(),
            segments: Vec::new(),
            query: QueryParams::new(),
            headers: HeaderMap::new(),
            body: None,
            success_decoder: Arc::new(JsonDecoder),
            error_decoder: Arc::new(JsonDecoder),
            connect_timeout: None,
            read_timeout: None,
            method: NoMethod,
        }
    }

    /// Use `GET`.
    pub fn get(self) -> RestRequest<Method> {
        self.method(Method::GET)
    }

    /// Use `POST`.
    pub fn post(self) -> RestRequest<Method> {
        self.method(Method::POST)
    }

    /// Use `PUT`.
    pub fn put(self) -> RestRequest<Method> {
        self.method(Method::PUT)
    }

    /// Use `DELETE`.
    pub fn delete(self) -> RestRequest<Method> {
        self.method(Method::DELETE)
    }

    /// Use a custom method.
    pub fn method(self, method: Method) -> RestRequest<Method> {
        RestRequest {
            transport: self.transport,
            base_url: self.base_url,
            uri: self.uri,
            segments: self.segments,
            query: self.query,
            headers: self.headers,
            body: self.body,
            success_decoder: self.success_decoder,
            error_decoder: self.error_decoder,
            connect_timeout: self.connect_timeout,
            read_timeout: self.read_timeout,
            method,
        }
    }
}

impl<M> RestRequest<M> {
    /// Replace the base URL.
    pub fn url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Set the path template, e.g. `/api/user/registration`.
    pub fn uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = uri.into();
        self
    }

    /// Append a path segment after the path template. Absent or empty
    /// segments are skipped.
    pub fn url_segment(mut self, segment: impl Into<PathSegment>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Add a query parameter, merging with earlier values of the same name.
    /// Absent values are dropped.
    pub fn url_parameter(mut self, name: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.query.append(name, value);
        self
    }

    /// Add a header to the request. Invalid names or values are dropped.
    pub fn header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        let name = name.as_ref();
        match (
            HeaderName::try_from(name),
            HeaderValue::try_from(value.as_ref()),
        ) {
            (Ok(name), Ok(value)) => {
                self.headers.insert(name, value);
            }
            _ => warn!(header = name, "Dropping invalid request header"),
        }
        self
    }

    /// Set the `Authorization` header verbatim (an API key, for example).
    pub fn authorization(mut self, value: impl AsRef<str>) -> Self {
        match HeaderValue::try_from(value.as_ref()) {
            Ok(mut value) => {
                value.set_sensitive(true);
                self.headers.insert(AUTHORIZATION, value);
            }
            Err(_) => warn!("Dropping invalid Authorization header"),
        }
        self
    }

    /// Set `Authorization: JWT <token>`.
    pub fn jwt_authorization(self, encoded_jwt: impl AsRef<str>) -> Self {
        let value = format!("JWT {}", encoded_jwt.as_ref());
        self.authorization(value)
    }

    /// Set the request body with its encoder. Encoding failures are reported
    /// by `go` as an exception without contacting the service.
    pub fn body_handler(mut self, encoder: impl BodyEncoder) -> Self {
        self.body = Some(encoder.encode());
        self
    }

    /// Set a JSON request body.
    pub fn json_body<T: Serialize + ?Sized>(self, body: &T) -> Self {
        self.body_handler(JsonBody(body))
    }

    /// Set the decoder used for 2xx responses.
    pub fn success_decoder(mut self, decoder: impl ResponseDecoder + 'static) -> Self {
        self.success_decoder = Arc::new(decoder);
        self
    }

    /// Set the decoder used for non-2xx responses.
    pub fn error_decoder(mut self, decoder: impl ResponseDecoder + 'static) -> Self {
        self.error_decoder = Arc::new(decoder);
        self
    }

    /// Set the connect timeout for this request.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Set the read timeout for this request.
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    /// Build the URL with path segments and query parameters.
    pub fn build_url(&self) -> Result<Url, UrlError> {
        UrlBuilder::new(self.base_url.clone())
            .uri(&self.uri)
            .segments(self.segments.iter().map(|segment| segment.0.as_deref()))
            .query_params(self.query.clone())
            .build()
    }
}

impl RestRequest<Method> {
    /// Send the request and classify the outcome.
    ///
    /// Never fails: transport, encoding and decoding failures are all
    /// reported through the returned envelope.
    pub async fn go(self) -> ClientResponse {
        let url = match self.build_url() {
            Ok(url) => url,
            Err(e) => {
                warn!(error = %e, "Failed to build request URL");
                return ClientResponse::failed(None, HeaderMap::new(), ClientError::InvalidUrl(e));
            }
        };

        let mut headers = self.headers;
        let body = match self.body {
            Some(Ok(encoded)) => {
                headers.entry(CONTENT_TYPE).or_insert(encoded.content_type);
                Some(encoded.bytes)
            }
            Some(Err(e)) => {
                warn!(error = %e, url = %url, "Failed to encode request body");
                return ClientResponse::failed(None, HeaderMap::new(), ClientError::Encoding(e));
            }
            None => None,
        };

        debug!(method = %self.method, url = %url, "Dispatching request");

        let request = PreparedRequest {
            method: self.method,
            url,
            headers,
            body,
            connect_timeout: self.connect_timeout,
            read_timeout: self.read_timeout,
        };

        let result = self.transport.execute(request).await;
        classify(result, self.success_decoder.as_ref(), self.error_decoder.as_ref())
    }
}
