//! URL Probe Library
//!
//! This library resolves the "effective" representation metadata of a URL
//! without downloading its body: it follows a single redirect hop (if
//! present) and reports the final resource's content type.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`probe`] - Header prober issuing single HEAD/GET requests
//! - [`resolver`] - Resolution engine: HEAD→GET fallback, redirect
//!   absolutization, content-type lookup
//! - [`server`] - axum service adapter exposing the engine over HTTP
//!
//! Two binaries consume the library: `urlprobe` (CLI, one URL per
//! invocation) and `urlprobe-server` (the HTTP service).

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod probe;
pub mod resolver;
pub mod server;

mod user_agent;

// Re-export commonly used types
pub use probe::{HeaderProber, ProbeError, ProbeMethod, ProbeResponse, configure_probe_http_timeouts};
pub use resolver::{ResolutionEngine, ResolveError, absolutize_location};
pub use server::{ServerConfig, create_router};
