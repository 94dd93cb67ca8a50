//! Request body encoders and response body decoders.

use bytes::Bytes;
use http::HeaderValue;
use serde::Serialize;
use serde_json::Value;

use crate::{DecodeError, EncodeError};

/// Content type sent with JSON request bodies.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// Content type sent with form request bodies.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A serialized request body and the content type describing it.
#[derive(Debug, Clone)]
pub struct EncodedBody {
    /// Value for the `Content-Type` header.
    pub content_type: HeaderValue,
    /// Wire bytes.
    pub bytes: Bytes,
}

/// Turns a request payload into wire bytes.
pub trait BodyEncoder {
    /// Serialize the payload.
    fn encode(&self) -> Result<EncodedBody, EncodeError>;
}

/// JSON request body.
///
/// ```
/// use passport_rest::{BodyEncoder, JsonBody};
///
/// let body = JsonBody(&serde_json::json!({"loginId": "jane@example.com"}))
///     .encode()
///     .unwrap();
/// assert_eq!(body.content_type, "application/json; charset=UTF-8");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct JsonBody<'a, T: ?Sized>(pub &'a T);

impl<T: Serialize + ?Sized> BodyEncoder for JsonBody<'_, T> {
    fn encode(&self) -> Result<EncodedBody, EncodeError> {
        let bytes = serde_json::to_vec(self.0)?;
        Ok(EncodedBody {
            content_type: HeaderValue::from_static(JSON_CONTENT_TYPE),
            bytes: Bytes::from(bytes),
        })
    }
}

/// URL-encoded form request body.
#[derive(Debug, Clone, Copy)]
pub struct FormBody<'a, T: ?Sized>(pub &'a T);

impl<T: Serialize + ?Sized> BodyEncoder for FormBody<'_, T> {
    fn encode(&self) -> Result<EncodedBody, EncodeError> {
        let encoded = serde_urlencoded::to_string(self.0)?;
        Ok(EncodedBody {
            content_type: HeaderValue::from_static(FORM_CONTENT_TYPE),
            bytes: Bytes::from(encoded.into_bytes()),
        })
    }
}

/// Turns a response body into a structured value.
pub trait ResponseDecoder: Send + Sync {
    /// Decode `body`. `Ok(None)` means there was no payload.
    fn decode(&self, content_type: Option<&str>, body: &[u8]) -> Result<Option<Value>, DecodeError>;
}

/// JSON response decoder.
///
/// A missing content type is treated as JSON. A body consisting only of
/// whitespace decodes to no payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl ResponseDecoder for JsonDecoder {
    fn decode(&self, content_type: Option<&str>, body: &[u8]) -> Result<Option<Value>, DecodeError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        if let Some(content_type) = content_type
            && !is_json_compatible(content_type)
        {
            return Err(DecodeError::UnsupportedContentType(content_type.to_string()));
        }

        Ok(Some(serde_json::from_slice(body)?))
    }
}

/// Check if a content type carries JSON (`application/json`,
/// `application/problem+json`, `text/json`, ...).
pub fn is_json_compatible(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json"
        || mime == "text/json"
        || (mime.starts_with("application/") && mime.ends_with("+json"))
}
