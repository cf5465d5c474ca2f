//! Resolution engine for redirect-target and content-type discovery.
//!
//! Built on the [`HeaderProber`], the engine exposes two operations that
//! share one probe-with-fallback pattern:
//!
//! - [`ResolutionEngine::resolve_redirect`] - reports the absolutized target
//!   of a single redirect hop, or `None` when the URL does not redirect.
//! - [`ResolutionEngine::resolve_content_type`] - reports the `Content-Type`
//!   declared for the URL.
//!
//! Callers combine the two: resolve the redirect first, then look up the
//! content type on the redirect target (or the original URL when there is
//! none). Both the CLI and the HTTP service adapter follow this flow.
//!
//! # Status policy
//!
//! Servers that reject HEAD semantics with 401, 403, or 405 get exactly one
//! GET fallback probe; classification then uses the GET response, never the
//! original rejection. After the fallback, any final status outside
//! `[200, 400)` is an [`ResolveError::UnexpectedStatus`] for both operations.
//! A 3xx without a `Location` header is a benign "no redirect" outcome, not
//! a failure.

mod error;

pub use error::ResolveError;

use reqwest::header::{CONTENT_TYPE, LOCATION};
use tracing::debug;
use url::Url;

use crate::probe::{HeaderProber, ProbeError, ProbeMethod, ProbeResponse};

/// Statuses that indicate the server rejected HEAD semantics and the probe
/// should be retried once with GET.
#[must_use]
pub fn is_head_rejected_status(status: u16) -> bool {
    matches!(status, 401 | 403 | 405)
}

/// Returns true when the final status is within the accepted `[200, 400)`
/// range shared by both resolution operations.
#[must_use]
pub fn is_accepted_status(status: u16) -> bool {
    (200..400).contains(&status)
}

/// Resolves a possibly relative redirect target against the original URL.
///
/// Returns the value as-is if it already starts with `http://` or
/// `https://`; otherwise joins with `original_url` (network-path
/// references like `//host/path` inherit the base scheme). Falls back to
/// the raw value when the base cannot be parsed or joined.
#[must_use]
pub fn absolutize_location(location: &str, original_url: &str) -> String {
    if location.starts_with("http://") || location.starts_with("https://") {
        return location.to_string();
    }
    Url::parse(original_url)
        .ok()
        .and_then(|base| base.join(location).ok())
        .map_or_else(|| location.to_string(), |url| url.to_string())
}

/// Engine combining the HEAD/GET fallback probe with response classification.
///
/// Holds only the shared prober; every resolution call is independent and
/// stateless, so one engine can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct ResolutionEngine {
    prober: HeaderProber,
}

impl ResolutionEngine {
    /// Creates an engine with a freshly built prober.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError`] when HTTP client construction fails.
    pub fn new() -> Result<Self, ProbeError> {
        Ok(Self {
            prober: HeaderProber::new()?,
        })
    }

    /// Creates an engine around an existing prober.
    #[must_use]
    pub fn with_prober(prober: HeaderProber) -> Self {
        Self { prober }
    }

    /// Probes with HEAD, falling back to a single GET when the server
    /// rejects HEAD semantics (401/403/405).
    ///
    /// Transport failures on either attempt surface as
    /// [`ResolveError::Transport`]; there is no retry beyond the one
    /// fallback.
    async fn probe_with_fallback(&self, url: &str) -> Result<ProbeResponse, ResolveError> {
        let head = self
            .prober
            .probe(url, ProbeMethod::Head)
            .await
            .map_err(|error| ResolveError::transport(url, "HEAD", &error.to_string()))?;

        if !is_head_rejected_status(head.status.as_u16()) {
            return Ok(head);
        }

        debug!(url, head_status = head.status.as_u16(), "HEAD rejected; retrying with GET");
        self.prober
            .probe(url, ProbeMethod::Get)
            .await
            .map_err(|error| ResolveError::transport(url, "GET", &error.to_string()))
    }

    /// Reports the absolutized target of a single redirect hop.
    ///
    /// Returns `Ok(None)` when the URL does not redirect: a non-3xx accepted
    /// status, or a 3xx response without a `Location` header. The redirect
    /// target is never itself probed here; callers decide whether to follow.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Transport`] when both probe attempts fail at
    /// the transport level, and [`ResolveError::UnexpectedStatus`] when the
    /// final status falls outside `[200, 400)`.
    #[tracing::instrument(skip(self))]
    pub async fn resolve_redirect(&self, url: &str) -> Result<Option<String>, ResolveError> {
        let response = self.probe_with_fallback(url).await?;
        let status = response.status;

        if !is_accepted_status(status.as_u16()) {
            return Err(ResolveError::unexpected_status(url, status.as_u16()));
        }
        if !status.is_redirection() {
            return Ok(None);
        }

        let Some(location) = response.header_str(LOCATION.as_str()) else {
            debug!(url, status = status.as_u16(), "redirect status without Location header");
            return Ok(None);
        };

        let target = absolutize_location(location, url);
        debug!(url, target = %target, "redirect target resolved");
        Ok(Some(target))
    }

    /// Reports the `Content-Type` declared for the URL, verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Transport`] when both probe attempts fail,
    /// [`ResolveError::UnexpectedStatus`] when the final status falls
    /// outside `[200, 400)`, and [`ResolveError::ContentTypeMissing`] when
    /// the response carries no `Content-Type` header (a soft failure).
    #[tracing::instrument(skip(self))]
    pub async fn resolve_content_type(&self, url: &str) -> Result<String, ResolveError> {
        let response = self.probe_with_fallback(url).await?;
        let status = response.status;

        if !is_accepted_status(status.as_u16()) {
            return Err(ResolveError::unexpected_status(url, status.as_u16()));
        }

        response
            .header_str(CONTENT_TYPE.as_str())
            .map(str::to_string)
            .ok_or_else(|| ResolveError::content_type_missing(url))
    }
}
