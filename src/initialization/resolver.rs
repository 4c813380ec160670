//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

use crate::config::DNS_ATTEMPTS;

/// Initializes the DNS resolver used for TXT lookups.
///
/// Uses the host's resolver configuration (`/etc/resolv.conf` on Unix) and
/// falls back to hickory's default upstreams (Google DNS) when the system
/// configuration cannot be read.
///
/// # Arguments
///
/// * `timeout_secs` - Per-query timeout in seconds
///
/// # Returns
///
/// A configured `TokioAsyncResolver` wrapped in `Arc` for sharing across tasks.
pub fn init_resolver(timeout_secs: u64) -> Arc<TokioAsyncResolver> {
    let (config, mut opts) = match hickory_resolver::system_conf::read_system_conf() {
        Ok(system) => system,
        Err(e) => {
            log::warn!("Failed to read system DNS configuration, using defaults: {e}");
            (ResolverConfig::default(), ResolverOpts::default())
        }
    };

    opts.timeout = Duration::from_secs(timeout_secs);
    opts.attempts = DNS_ATTEMPTS;
    // Query names exactly as written in include: directives, no search-domain appending
    opts.ndots = 0;

    Arc::new(TokioAsyncResolver::tokio(config, opts))
}
