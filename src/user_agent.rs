//! Shared User-Agent string for probe HTTP clients.
//!
//! Single source for project URL and UA format so CLI and service traffic
//! stay consistent and easy to update (good citizenship; RFC 9308).

/// Project URL for User-Agent identification (good citizenship; RFC 9308).
const PROJECT_UA_URL: &str = "https://github.com/fierce/urlprobe";

/// Default User-Agent for header probes (identifies the tool).
#[must_use]
pub(crate) fn default_probe_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("urlprobe/{version} (header-probe; +{PROJECT_UA_URL})")
}
