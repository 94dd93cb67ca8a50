//! The response envelope returned by every dispatch.

use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::ClientError;

/// Terminal state of one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseState {
    /// 2xx response whose body decoded (or was empty).
    Success,
    /// Non-2xx response whose body decoded (or was empty).
    ApplicationError,
    /// The service could not be reached.
    TransportException,
    /// A body could not be decoded, or the request body could not be
    /// encoded before sending.
    DecodingException,
}

/// What one dispatch produced. Exactly one variant per response.
#[derive(Debug)]
pub enum Outcome {
    /// Decoded success payload, absent when the body was empty.
    Success(Option<Value>),
    /// Decoded error payload, absent when the body was empty.
    Error(Option<Value>),
    /// Runtime failure.
    Exception(ClientError),
}

/// Unified result of one request: success, application error, or exception.
///
/// ```
/// use passport_rest::{ClientResponse, ResponseState};
/// use http::StatusCode;
///
/// let response = ClientResponse::error(
///     StatusCode::NOT_FOUND,
///     Default::default(),
///     Some(serde_json::json!({"generalErrors": [{"code": "[NotFound]"}]})),
/// );
/// assert_eq!(response.status(), Some(404));
/// assert_eq!(response.state(), ResponseState::ApplicationError);
/// assert!(response.success_response().is_none());
/// assert!(response.exception().is_none());
/// ```
#[derive(Debug)]
pub struct ClientResponse {
    status: Option<StatusCode>,
    headers: HeaderMap,
    outcome: Outcome,
}

impl ClientResponse {
    /// Create a success envelope.
    pub fn success(status: StatusCode, headers: HeaderMap, payload: Option<Value>) -> Self {
        Self {
            status: Some(status),
            headers,
            outcome: Outcome::Success(payload),
        }
    }

    /// Create an application error envelope.
    pub fn error(status: StatusCode, headers: HeaderMap, payload: Option<Value>) -> Self {
        Self {
            status: Some(status),
            headers,
            outcome: Outcome::Error(payload),
        }
    }

    /// Create an exception envelope. `status` is kept when a response arrived.
    pub fn failed(status: Option<StatusCode>, headers: HeaderMap, exception: ClientError) -> Self {
        Self {
            status,
            headers,
            outcome: Outcome::Exception(exception),
        }
    }

    /// Get the status code, if a response was received.
    pub fn status(&self) -> Option<u16> {
        self.status.map(|s| s.as_u16())
    }

    /// Get the typed status code, if a response was received.
    pub fn status_code(&self) -> Option<StatusCode> {
        self.status
    }

    /// Get the response headers (empty when no response was received).
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Get a specific header value.
    pub fn header(&self, name: impl AsRef<str>) -> Option<&str> {
        self.headers
            .get(name.as_ref())
            .and_then(|v| v.to_str().ok())
    }

    /// Get the outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Consume the envelope and return the outcome.
    pub fn into_outcome(self) -> Outcome {
        self.outcome
    }

    /// Classify the envelope into its terminal state.
    pub fn state(&self) -> ResponseState {
        match &self.outcome {
            Outcome::Success(_) => ResponseState::Success,
            Outcome::Error(_) => ResponseState::ApplicationError,
            Outcome::Exception(ClientError::Decoding { .. } | ClientError::Encoding(_)) => {
                ResponseState::DecodingException
            }
            Outcome::Exception(_) => ResponseState::TransportException,
        }
    }

    /// Check if the request succeeded (2xx and decodable).
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Success(_))
    }

    /// Get the success payload.
    pub fn success_response(&self) -> Option<&Value> {
        match &self.outcome {
            Outcome::Success(payload) => payload.as_ref(),
            _ => None,
        }
    }

    /// Get the error payload.
    pub fn error_response(&self) -> Option<&Value> {
        match &self.outcome {
            Outcome::Error(payload) => payload.as_ref(),
            _ => None,
        }
    }

    /// Get the exception.
    pub fn exception(&self) -> Option<&ClientError> {
        match &self.outcome {
            Outcome::Exception(e) => Some(e),
            _ => None,
        }
    }

    /// Deserialize the success payload into a typed view.
    pub fn success_as<T: DeserializeOwned>(&self) -> Option<serde_json::Result<T>> {
        self.success_response()
            .map(|payload| T::deserialize(payload))
    }

    /// Deserialize the error payload into a typed view.
    pub fn error_as<T: DeserializeOwned>(&self) -> Option<serde_json::Result<T>> {
        self.error_response()
            .map(|payload| T::deserialize(payload))
    }

    /// Convert into a `Result`: success payload on `Ok`, otherwise the
    /// whole envelope on `Err` so the caller can inspect error or exception.
    pub fn into_result(self) -> Result<Option<Value>, Self> {
        match self.outcome {
            Outcome::Success(payload) => Ok(payload),
            _ => Err(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DecodeError, EncodeError, TransportError};
    use serde::Deserialize;
    use serde_json::json;
    use std::time::Duration;

    #[derive(Debug, Deserialize)]
    struct Token {
        token: String,
    }

    #[test]
    fn test_success_envelope() {
        let response = ClientResponse::success(
            StatusCode::OK,
            HeaderMap::new(),
            Some(json!({"token": "abc"})),
        );
        assert_eq!(response.state(), ResponseState::Success);
        assert!(response.is_success());
        assert_eq!(response.status(), Some(200));
        assert!(response.error_response().is_none());
        assert!(response.exception().is_none());

        let token: Token = response.success_as().unwrap().unwrap();
        assert_eq!(token.token, "abc");
    }

    #[test]
    fn test_transport_exception_has_no_status() {
        let response = ClientResponse::failed(
            None,
            HeaderMap::new(),
            TransportError::Timeout(Duration::from_millis(2000)).into(),
        );
        assert_eq!(response.state(), ResponseState::TransportException);
        assert_eq!(response.status(), None);
        assert!(response.success_response().is_none());
        assert!(response.error_response().is_none());
        assert!(response.exception().unwrap().is_timeout());
    }

    #[test]
    fn test_decoding_exception_keeps_status() {
        let source = serde_json::from_str::<Value>("<html>").unwrap_err();
        let response = ClientResponse::failed(
            Some(StatusCode::OK),
            HeaderMap::new(),
            ClientError::Decoding {
                status: 200,
                source: DecodeError::Json(source),
            },
        );
        assert_eq!(response.state(), ResponseState::DecodingException);
        assert_eq!(response.status(), Some(200));
        assert!(!response.is_success());
    }

    #[test]
    fn test_encoding_failure_is_decoding_exception() {
        let mut bad = std::collections::HashMap::new();
        bad.insert((1, 2), "tuple keys are not JSON");
        let source = serde_json::to_vec(&bad).unwrap_err();

        let response = ClientResponse::failed(
            None,
            HeaderMap::new(),
            ClientError::Encoding(EncodeError::Json(source)),
        );
        assert_eq!(response.state(), ResponseState::DecodingException);
        assert_eq!(response.status(), None);
        assert!(!response.exception().unwrap().is_transport());
    }

    #[test]
    fn test_into_result() {
        let ok = ClientResponse::success(StatusCode::NO_CONTENT, HeaderMap::new(), None);
        assert_eq!(ok.into_result().unwrap(), None);

        let err = ClientResponse::error(
            StatusCode::BAD_REQUEST,
            HeaderMap::new(),
            Some(json!({"fieldErrors": {}})),
        );
        let envelope = err.into_result().unwrap_err();
        assert_eq!(envelope.status(), Some(400));
        assert!(envelope.error_response().is_some());
    }
}
