//! DNS TXT record queries.
//!
//! The resolver engine only needs one capability from DNS: "give me the TXT
//! records for this name". `TxtLookup` captures that so the engine can run
//! against the host resolver in production and an in-memory table in tests.

use async_trait::async_trait;
use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;

use crate::error_handling::LookupError;

/// Source of TXT records for a domain.
#[async_trait]
pub trait TxtLookup: Send + Sync {
    /// Returns every TXT record published at `domain`, one string per record.
    async fn lookup_txt(&self, domain: &str) -> Result<Vec<String>, LookupError>;
}

#[async_trait]
impl TxtLookup for TokioAsyncResolver {
    async fn lookup_txt(&self, domain: &str) -> Result<Vec<String>, LookupError> {
        lookup_txt_records(domain, self).await
    }
}

/// Queries TXT (text) records for a domain.
///
/// A TXT record may be split into several character-strings on the wire;
/// they are concatenated back into one string per record.
///
/// # Errors
///
/// Every resolver error is returned, including "no records found" and
/// NXDOMAIN. A missing link in an include chain is a broken chain, not an
/// empty one.
pub async fn lookup_txt_records(
    domain: &str,
    resolver: &TokioAsyncResolver,
) -> Result<Vec<String>, LookupError> {
    match resolver.lookup(domain, RecordType::TXT).await {
        Ok(lookup) => {
            let txt_records: Vec<String> = lookup
                .iter()
                .filter_map(|rdata| {
                    if let RData::TXT(txt) = rdata {
                        Some(
                            txt.iter()
                                .map(|bytes| String::from_utf8_lossy(bytes).to_string())
                                .collect::<Vec<String>>()
                                .join(""),
                        )
                    } else {
                        None
                    }
                })
                .collect();
            log::trace!("TXT {domain}: {txt_records:?}");
            Ok(txt_records)
        }
        Err(e) => {
            let error_msg = e.to_string();
            if error_msg.contains("timeout") || error_msg.contains("timed out") {
                log::warn!("TXT record lookup timed out for {domain}: {e}");
            } else {
                log::warn!("Failed to lookup TXT records for {domain}: {e}");
            }
            Err(e.into())
        }
    }
}
