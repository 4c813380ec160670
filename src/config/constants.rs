//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including DNS timeouts, lookup fan-out, and CLI flag defaults.

// Network operation timeouts
/// DNS query timeout in seconds
/// Most TXT queries complete in well under a second; 3s fails fast on dead servers
pub const DNS_TIMEOUT_SECS: u64 = 3;
/// Attempts per DNS query before the resolver reports a failure
pub const DNS_ATTEMPTS: usize = 2;

/// Maximum number of TXT queries the lookup stage keeps in flight at once
pub const LOOKUP_FAN_OUT: usize = 4;

// CLI defaults
/// Default output type
pub const DEFAULT_OUTPUT: &str = "routes";
/// Default root domain to resolve
pub const DEFAULT_DOMAIN: &str = "_spf.google.com";
/// Default variable name in output
pub const DEFAULT_VARIABLE_NAME: &str = "google_netblock_cidrs";
/// Default route name prefix
pub const DEFAULT_ROUTE_PREFIX: &str = "google-route";
/// Default route description
pub const DEFAULT_ROUTE_DESCRIPTION: &str = "google private access netblock from _spf.google.com";
/// Default route priority
pub const DEFAULT_ROUTE_PRIORITY: &str = "50";
/// Default next hop type
pub const DEFAULT_ROUTE_HOP_TYPE: &str = "next_hop_internet";
/// Default next hop value
pub const DEFAULT_ROUTE_HOP_VALUE: &str = "true";

/// Next hop type that accepts an additional instance zone field
pub const NEXT_HOP_INSTANCE: &str = "next_hop_instance";
