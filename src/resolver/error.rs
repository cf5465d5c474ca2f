//! Error types for resolution operations.
//!
//! This module defines structured errors for redirect and content-type
//! resolution, following the What/Why/Fix pattern used across the project.

use thiserror::Error;

/// Errors that can occur while resolving a URL's metadata.
#[derive(Debug, Clone, Error)]
pub enum ResolveError {
    /// Network-level failure on the HEAD probe or its GET fallback
    #[error("transport failure probing '{url}' via {method}: {reason}\n  Suggestion: {suggestion}")]
    Transport {
        /// The URL whose probe failed
        url: String,
        /// The method that failed (HEAD, or GET after fallback)
        method: String,
        /// The underlying transport error description
        reason: String,
        /// How to fix the issue
        suggestion: String,
    },

    /// Final status code fell outside the accepted [200, 400) range
    #[error(
        "unexpected status {status} for '{url}'\n  Suggestion: Check that the URL points to a reachable resource"
    )]
    UnexpectedStatus {
        /// The URL that produced the status
        url: String,
        /// The out-of-policy status code
        status: u16,
    },

    /// Probe succeeded but the response carried no Content-Type header
    #[error(
        "no Content-Type header present for '{url}'\n  Suggestion: The server did not declare a type; inspect the resource manually"
    )]
    ContentTypeMissing {
        /// The URL whose response lacked a Content-Type
        url: String,
    },
}

impl ResolveError {
    /// Creates a `Transport` error from a probe failure.
    #[must_use]
    pub fn transport(url: &str, method: &str, reason: &str) -> Self {
        Self::Transport {
            url: url.to_string(),
            method: method.to_string(),
            reason: reason.to_string(),
            suggestion: "Check the URL, network connectivity, and DNS resolution".to_string(),
        }
    }

    /// Creates an `UnexpectedStatus` error.
    #[must_use]
    pub fn unexpected_status(url: &str, status: u16) -> Self {
        Self::UnexpectedStatus {
            url: url.to_string(),
            status,
        }
    }

    /// Creates a `ContentTypeMissing` error.
    #[must_use]
    pub fn content_type_missing(url: &str) -> Self {
        Self::ContentTypeMissing {
            url: url.to_string(),
        }
    }

    /// Returns true for soft failures the CLI reports without a non-zero exit.
    ///
    /// Only `ContentTypeMissing` qualifies: the probe itself succeeded and
    /// the server simply declared no type.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        matches!(self, Self::ContentTypeMissing { .. })
    }
}
