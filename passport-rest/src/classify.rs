//! Response classification.

use http::HeaderMap;
use tracing::debug;

use crate::{ClientError, ClientResponse, RawResponse, ResponseDecoder, TransportError};

/// Turn the outcome of one executor call into a [`ClientResponse`].
///
/// The status code decides which decoder runs: 2xx uses `success_decoder`,
/// everything else uses `error_decoder`. A decoder failure becomes a
/// decoding exception that keeps the status.
pub fn classify(
    result: Result<RawResponse, TransportError>,
    success_decoder: &dyn ResponseDecoder,
    error_decoder: &dyn ResponseDecoder,
) -> ClientResponse {
    let raw = match result {
        Ok(raw) => raw,
        Err(e) => {
            debug!(error = %e, "Classified as transport exception");
            return ClientResponse::failed(None, HeaderMap::new(), ClientError::Transport(e));
        }
    };

    let status = raw.status;
    let is_success = status.is_success();
    let decoder = if is_success {
        success_decoder
    } else {
        error_decoder
    };

    let decoded = decoder.decode(raw.content_type(), &raw.body);
    match decoded {
        Ok(payload) if is_success => {
            debug!(status = %status, has_payload = payload.is_some(), "Classified as success");
            ClientResponse::success(status, raw.headers, payload)
        }
        Ok(payload) => {
            debug!(status = %status, has_payload = payload.is_some(), "Classified as application error");
            ClientResponse::error(status, raw.headers, payload)
        }
        Err(source) => {
            debug!(status = %status, error = %source, "Classified as decoding exception");
            ClientResponse::failed(
                Some(status),
                raw.headers,
                ClientError::Decoding {
                    status: status.as_u16(),
                    source,
                },
            )
        }
    }
}
