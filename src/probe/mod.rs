//! Header prober - single header-only HTTP requests.
//!
//! This module provides the [`HeaderProber`], the one place in the crate that
//! performs network I/O. A probe issues exactly one HEAD or GET request
//! against a URL and reports the raw status code and response headers, or a
//! transport failure. It holds no decision logic; classification of the
//! response belongs to the [`crate::resolver`] engine.

mod http_client;

pub use http_client::configure_probe_http_timeouts;

use reqwest::header::HeaderMap;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;

/// HTTP method used for a single probe attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeMethod {
    /// Header-only request; servers may reject it with 401/403/405.
    Head,
    /// Full request whose body is never read or buffered.
    Get,
}

impl ProbeMethod {
    /// Returns the method name as it appears on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Head => "HEAD",
            Self::Get => "GET",
        }
    }
}

/// Raw outcome of a successful probe attempt.
///
/// A `ProbeResponse` only exists when the request reached a server and a
/// status line came back; transport failures are [`ProbeError`] instead, so a
/// failed probe can never carry a usable status code or header set.
#[derive(Debug, Clone)]
pub struct ProbeResponse {
    /// Status code of the (unfollowed) response.
    pub status: StatusCode,
    /// Response headers; lookups are case-insensitive by construction.
    pub headers: HeaderMap,
}

impl ProbeResponse {
    /// Returns the value of `name` as a UTF-8 string, if present and valid.
    #[must_use]
    pub fn header_str(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}

/// Transport-level probe failure (DNS, refused/reset, TLS, timeout).
///
/// Never raised past the prober boundary as a panic; transport failures are
/// data for the engine to classify.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The request never produced a status line.
    #[error("probe request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Issues single header-only HTTP requests with redirects left unfollowed.
///
/// Designed to be created once and shared: the underlying client pools
/// connections, and probing holds no mutable state.
#[derive(Debug, Clone)]
pub struct HeaderProber {
    client: Client,
}

impl HeaderProber {
    /// Creates a prober using the shared probe client policy.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError`] when HTTP client construction fails.
    pub fn new() -> Result<Self, ProbeError> {
        Ok(Self {
            client: http_client::build_probe_http_client()?,
        })
    }

    /// Probes `url` with the given method and returns status plus headers.
    ///
    /// For [`ProbeMethod::Get`] the response body is left unread: reqwest
    /// only buffers the body when asked, and the response is dropped after
    /// the headers are cloned out.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError`] on any transport-level failure, including the
    /// bounded request timeout.
    pub async fn probe(&self, url: &str, method: ProbeMethod) -> Result<ProbeResponse, ProbeError> {
        let request = match method {
            ProbeMethod::Head => self.client.head(url),
            ProbeMethod::Get => self.client.get(url),
        };

        let response = request.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        debug!(url, method = method.as_str(), status = status.as_u16(), "probe complete");

        Ok(ProbeResponse { status, headers })
    }
}
