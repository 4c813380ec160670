//! The two resolution stages.
//!
//! The lookup stage turns domains into TXT entries, the classification stage
//! turns entries into CIDRs and further domains. They talk only through
//! unbounded channels, so neither stage ever waits on the other to make room.

use std::sync::Arc;

use futures::future::BoxFuture;
use futures::stream::FuturesUnordered;
use futures::{FutureExt, StreamExt};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio_util::sync::CancellationToken;

use crate::config::LOOKUP_FAN_OUT;
use crate::dns::{classify_entry, split_record, Mechanism, TxtLookup};
use crate::error_handling::{LookupError, ResolveError};

use super::stats::ResolutionStats;
use super::tracker::WorkTracker;

/// State shared by both stages.
#[derive(Clone)]
pub(crate) struct StageContext {
    pub(crate) tracker: WorkTracker,
    pub(crate) stats: Arc<ResolutionStats>,
    pub(crate) cancel: CancellationToken,
}

type LookupOutcome = (String, Result<Vec<String>, LookupError>);

async fn query<L>(lookup: Arc<L>, domain: String) -> LookupOutcome
where
    L: TxtLookup + ?Sized,
{
    let result = lookup.lookup_txt(&domain).await;
    (domain, result)
}

/// Consumes pending domains and emits one entry per whitespace-delimited token
/// of every TXT record found.
///
/// Up to `LOOKUP_FAN_OUT` queries run at once. A failed query is reported on
/// `errors` and is never marked done, so the run cannot reach quiescence
/// after a failure.
pub(crate) async fn lookup_stage<L>(
    lookup: Arc<L>,
    mut domains: UnboundedReceiver<String>,
    entries: UnboundedSender<String>,
    errors: UnboundedSender<ResolveError>,
    ctx: StageContext,
) where
    L: TxtLookup + ?Sized + 'static,
{
    let mut in_flight: FuturesUnordered<BoxFuture<'static, LookupOutcome>> =
        FuturesUnordered::new();

    loop {
        tokio::select! {
            _ = ctx.cancel.cancelled() => break,
            next = domains.recv(), if in_flight.len() < LOOKUP_FAN_OUT => match next {
                Some(domain) => {
                    log::debug!("Looking up TXT {domain}");
                    in_flight.push(query(Arc::clone(&lookup), domain).boxed());
                }
                None => break,
            },
            Some((domain, result)) = in_flight.next(), if !in_flight.is_empty() => match result {
                Ok(records) => {
                    ctx.stats.record_domain(records.len());
                    for record in &records {
                        for entry in split_record(record) {
                            ctx.tracker.add();
                            if entries.send(entry.to_string()).is_err() {
                                return;
                            }
                        }
                    }
                    ctx.tracker.done();
                }
                Err(source) => {
                    log::error!("TXT lookup failed for {domain}: {source}");
                    let _ = errors.send(ResolveError::LookupFailure { domain, source });
                }
            },
        }
    }
}

/// Consumes entries: `ip4` values go to `cidrs`, `include` values go back to
/// `domains`, everything else is dropped.
pub(crate) async fn classify_stage(
    mut entries: UnboundedReceiver<String>,
    domains: UnboundedSender<String>,
    cidrs: UnboundedSender<String>,
    ctx: StageContext,
) {
    loop {
        let entry = tokio::select! {
            _ = ctx.cancel.cancelled() => break,
            next = entries.recv() => match next {
                Some(entry) => entry,
                None => break,
            },
        };

        let mechanism = classify_entry(&entry);
        ctx.stats.increment_entry(mechanism.kind());
        match mechanism {
            Mechanism::Ip4(cidr) => {
                if cidrs.send(cidr.to_string()).is_err() {
                    break;
                }
            }
            Mechanism::Ip6(_) => {}
            Mechanism::Include(domain) => {
                log::debug!("Following include:{domain}");
                ctx.tracker.add();
                if domains.send(domain.to_string()).is_err() {
                    break;
                }
            }
            Mechanism::Other(tag) => log::trace!("Ignoring entry {entry} (mechanism {tag})"),
        }
        ctx.tracker.done();
    }
}
