//! Axum-specific error types and mappings.
//!
//! This module provides the service adapter's error type and the mapping
//! from [`ResolveError`] to HTTP status codes and JSON response bodies.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::resolver::ResolveError;

/// Service adapter error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Bad request (invalid or missing input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Upstream probe failed (transport, unexpected status, or missing
    /// Content-Type).
    #[error("Bad gateway: {0}")]
    BadGateway(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<ResolveError> for HttpError {
    fn from(err: ResolveError) -> Self {
        // Every resolution failure, soft or hard, means the upstream did not
        // yield a usable answer; the service reports them all as 502.
        HttpError::BadGateway(err.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_errors_map_to_bad_gateway() {
        let cases = [
            ResolveError::transport("https://example.com", "HEAD", "connection refused"),
            ResolveError::unexpected_status("https://example.com", 500),
            ResolveError::content_type_missing("https://example.com"),
        ];
        for err in cases {
            assert!(matches!(HttpError::from(err), HttpError::BadGateway(_)));
        }
    }

    #[test]
    fn test_bad_gateway_preserves_resolve_error_message() {
        let err = ResolveError::unexpected_status("https://example.com", 503);
        let HttpError::BadGateway(msg) = HttpError::from(err) else {
            panic!("expected BadGateway");
        };
        assert!(msg.contains("503"));
        assert!(msg.contains("example.com"));
    }
}
