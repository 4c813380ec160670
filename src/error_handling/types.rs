//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Failure of a single TXT query.
///
/// Produced by `TxtLookup` implementations. The resolver wraps it into
/// `ResolveError::LookupFailure` together with the domain that failed.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The DNS resolver reported an error (timeout, NXDOMAIN, no records, ...).
    #[error(transparent)]
    Dns(#[from] hickory_resolver::error::ResolveError),

    /// Any other lookup failure, e.g. from a non-DNS `TxtLookup` source.
    #[error("{0}")]
    Other(String),
}

/// Error types for a recursive TXT resolution.
///
/// Every variant is fatal to the whole run: no partial result is returned.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// A TXT lookup failed for some domain in the include tree.
    #[error("error looking up TXT {domain}: {source}")]
    LookupFailure {
        /// The domain whose lookup failed
        domain: String,
        /// The underlying lookup error
        #[source]
        source: LookupError,
    },

    /// A resolution stage stopped before the run reached quiescence.
    #[error("resolution stage stopped unexpectedly: {0}")]
    StageStopped(String),
}

/// Error types for output rendering.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormatError {
    /// The requested output mode is not one of `tfvars`, `variables`, `routes`.
    #[error("Unknown output type: {0}")]
    UnknownFormatMode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_failure_names_domain() {
        let err = ResolveError::LookupFailure {
            domain: "_netblocks.example.com".to_string(),
            source: LookupError::Other("connection refused".to_string()),
        };
        let msg = err.to_string();
        assert!(msg.contains("_netblocks.example.com"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn test_lookup_failure_exposes_source() {
        use std::error::Error as _;

        let err = ResolveError::LookupFailure {
            domain: "a.com".to_string(),
            source: LookupError::Other("boom".to_string()),
        };
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("boom"));
    }

    #[test]
    fn test_unknown_format_mode_names_mode() {
        let err = FormatError::UnknownFormatMode("bogus-mode".to_string());
        assert_eq!(err.to_string(), "Unknown output type: bogus-mode");
    }
}
