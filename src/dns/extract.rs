//! SPF entry extraction and classification.

use strum_macros::EnumIter;

/// Splits a TXT record body into whitespace-delimited entries.
///
/// Runs of whitespace never produce empty entries.
pub fn split_record(record: &str) -> std::str::SplitWhitespace<'_> {
    record.split_whitespace()
}

/// An SPF mechanism parsed from a single TXT entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mechanism<'a> {
    /// `ip4:<cidr>`
    Ip4(&'a str),
    /// `ip6:<cidr>`
    Ip6(&'a str),
    /// `include:<domain>`
    Include(&'a str),
    /// Anything else (`v=spf1`, `~all`, `redirect=`, qualified mechanisms, ...)
    Other(&'a str),
}

/// Kind of a classified entry, used for per-run counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum EntryKind {
    /// IPv4 range, collected
    Ip4,
    /// IPv6 range, discarded
    Ip6,
    /// Nested domain, looked up recursively
    Include,
    /// Ignored
    Other,
}

impl Mechanism<'_> {
    /// Returns the counter bucket for this mechanism.
    pub fn kind(&self) -> EntryKind {
        match self {
            Mechanism::Ip4(_) => EntryKind::Ip4,
            Mechanism::Ip6(_) => EntryKind::Ip6,
            Mechanism::Include(_) => EntryKind::Include,
            Mechanism::Other(_) => EntryKind::Other,
        }
    }
}

/// Classifies a TXT entry of the form `<mechanism>:<value>`.
///
/// Only the first `:` separates tag from value, so `ip6:2001:db8::/32`
/// keeps its full address. Tags match exactly and case-sensitively; an
/// entry without `:` is `Other`.
pub fn classify_entry(entry: &str) -> Mechanism<'_> {
    match entry.split_once(':') {
        Some(("ip4", value)) => Mechanism::Ip4(value),
        Some(("ip6", value)) => Mechanism::Ip6(value),
        Some(("include", value)) => Mechanism::Include(value),
        Some((tag, _)) => Mechanism::Other(tag),
        None => Mechanism::Other(entry),
    }
}
