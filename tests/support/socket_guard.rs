//! Helpers for tests that stand up a wiremock upstream on localhost.
//!
//! Sandboxed CI runners sometimes refuse loopback binds; these helpers let
//! such tests skip gracefully there while staying mandatory where
//! `URLPROBE_REQUIRE_SOCKET_TESTS` is set.

use std::net::TcpListener;
use std::panic::Location;

use wiremock::MockServer;

/// True when the environment insists socket-bound tests must run (no skips).
#[must_use]
pub fn socket_tests_required() -> bool {
    std::env::var("URLPROBE_REQUIRE_SOCKET_TESTS")
        .ok()
        .is_some_and(|value| matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
}

/// Checks whether localhost binds work here; reports the caller's location
/// when they do not so the skipped test is easy to find in the log.
#[track_caller]
#[must_use]
pub fn should_skip_socket_bound_test() -> bool {
    if TcpListener::bind("127.0.0.1:0").is_ok() {
        return false;
    }

    let location = Location::caller();
    let message = format!(
        "[socket-bound-test] cannot bind localhost socket at {}:{}; wiremock-based test cannot run in this environment",
        location.file(),
        location.line()
    );
    if socket_tests_required() {
        panic!("{message}. Set URLPROBE_REQUIRE_SOCKET_TESTS=0 to allow local skip behavior.");
    }

    eprintln!(
        "{message}. Skipping test. Set URLPROBE_REQUIRE_SOCKET_TESTS=1 to fail-fast instead."
    );
    true
}

/// Starts a wiremock upstream, or returns `None` when the test should skip.
pub async fn start_mock_server_or_skip() -> Option<MockServer> {
    if should_skip_socket_bound_test() {
        None
    } else {
        Some(MockServer::start().await)
    }
}

/// Reserves a localhost port that is then released, yielding an address with
/// nothing listening on it (for connection-refused scenarios).
#[allow(dead_code)]
#[must_use]
pub fn unused_local_url() -> Option<String> {
    let listener = TcpListener::bind("127.0.0.1:0").ok()?;
    let port = listener.local_addr().ok()?.port();
    drop(listener);
    Some(format!("http://127.0.0.1:{port}/"))
}
