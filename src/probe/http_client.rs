//! Shared HTTP client construction policy for header probes.
//!
//! This module centralizes probe networking defaults so the CLI and service
//! adapters stay consistent on timeout, user-agent, compression, and the
//! no-redirect requirement.

use std::sync::RwLock;
use std::time::Duration;

use reqwest::Client;
use reqwest::redirect::Policy;

use crate::user_agent;

use super::ProbeError;

const CONNECT_TIMEOUT_SECS: u64 = 10;
const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy)]
struct ProbeHttpTimeouts {
    connect_timeout_secs: u64,
    request_timeout_secs: u64,
}

impl Default for ProbeHttpTimeouts {
    fn default() -> Self {
        Self {
            connect_timeout_secs: CONNECT_TIMEOUT_SECS,
            request_timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }
}

static PROBE_HTTP_TIMEOUTS: RwLock<ProbeHttpTimeouts> = RwLock::new(ProbeHttpTimeouts {
    connect_timeout_secs: CONNECT_TIMEOUT_SECS,
    request_timeout_secs: REQUEST_TIMEOUT_SECS,
});

/// Configures probe HTTP timeouts used by probe client builders.
///
/// Intended for CLI/runtime configuration before prober construction. The
/// request timeout bounds the whole probe; exceeding it is a transport
/// failure, not a status code.
pub fn configure_probe_http_timeouts(connect_timeout_secs: u64, request_timeout_secs: u64) {
    if let Ok(mut guard) = PROBE_HTTP_TIMEOUTS.write() {
        *guard = ProbeHttpTimeouts {
            connect_timeout_secs,
            request_timeout_secs,
        };
    }
}

fn probe_http_timeouts() -> ProbeHttpTimeouts {
    PROBE_HTTP_TIMEOUTS
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

/// Builds a probe HTTP client using shared project policy.
///
/// Redirects are never followed by the transport: a 3xx response must stay
/// observable so the engine can extract its `Location` header itself.
///
/// # Errors
///
/// Returns [`ProbeError`] when client construction fails.
pub fn build_probe_http_client() -> Result<Client, ProbeError> {
    let timeouts = probe_http_timeouts();
    Client::builder()
        .connect_timeout(Duration::from_secs(timeouts.connect_timeout_secs))
        .timeout(Duration::from_secs(timeouts.request_timeout_secs))
        .user_agent(user_agent::default_probe_user_agent())
        .redirect(Policy::none())
        .gzip(true)
        .build()
        .map_err(ProbeError::from)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_build_probe_http_client_succeeds_with_defaults() {
        assert!(build_probe_http_client().is_ok());
    }

    #[test]
    fn test_default_timeouts_are_ten_seconds() {
        let timeouts = ProbeHttpTimeouts::default();
        assert_eq!(timeouts.connect_timeout_secs, 10);
        assert_eq!(timeouts.request_timeout_secs, 10);
    }
}
