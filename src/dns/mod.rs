//! DNS TXT lookups and SPF entry handling.
//!
//! This module provides:
//! - The `TxtLookup` capability and its `hickory-resolver` implementation
//! - Splitting of TXT bodies into entries
//! - Classification of entries into SPF mechanisms (`ip4`, `ip6`, `include`)

mod extract;
mod records;

// Re-export public API
pub use extract::{classify_entry, split_record, EntryKind, Mechanism};
pub use records::{lookup_txt_records, TxtLookup};
