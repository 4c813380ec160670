//! Recursive SPF TXT resolution.
//!
//! Resolution is a traversal of the graph whose nodes are domains and whose
//! edges are `include:` directives. Two long-running stages do the work:
//!
//! ```text
//!            root
//!             │
//!             ▼
//!   ┌──── domains ────┐          ┌──── entries ────┐
//!   │  lookup stage   │ ───────▶ │ classify stage  │ ──▶ cidrs ──▶ orchestrator
//!   └─────────────────┘          └─────────────────┘
//!             ▲                           │ include:
//!             └───────────────────────────┘
//! ```
//!
//! The orchestrator collects CIDRs from the results channel and returns once
//! the outstanding-work count reaches zero, or as soon as any lookup fails.
//!
//! There is no cycle or depth guard: a domain that includes itself, directly
//! or transitively, is expanded forever.

mod stages;
mod stats;
mod tracker;

use std::sync::Arc;

use log::{debug, info};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::dns::{EntryKind, TxtLookup};
use crate::error_handling::ResolveError;

use stages::{classify_stage, lookup_stage, StageContext};
use tracker::WorkTracker;

pub use stats::ResolutionStats;

/// Outcome of a successful resolution.
pub struct Resolution {
    /// Every `ip4:` value found, once per occurrence, in no particular order
    pub cidrs: Vec<String>,
    /// Counters for the run
    pub stats: Arc<ResolutionStats>,
}

/// Resolves `root` and every domain it transitively includes, returning all
/// IPv4 CIDRs found.
///
/// # Errors
///
/// Returns `ResolveError::LookupFailure` for the first TXT lookup that fails
/// anywhere in the tree. No partial result is returned.
///
/// # Example
///
/// ```no_run
/// use txt2route::{init_resolver, resolve};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let resolver = init_resolver(3);
/// let cidrs = resolve("_spf.google.com", resolver).await?;
/// println!("{} ranges", cidrs.len());
/// # Ok(())
/// # }
/// ```
pub async fn resolve<L>(root: &str, lookup: Arc<L>) -> Result<Vec<String>, ResolveError>
where
    L: TxtLookup + ?Sized + 'static,
{
    resolve_with_stats(root, lookup)
        .await
        .map(|resolution| resolution.cidrs)
}

/// Same as [`resolve`], also returning the run's counters.
pub async fn resolve_with_stats<L>(root: &str, lookup: Arc<L>) -> Result<Resolution, ResolveError>
where
    L: TxtLookup + ?Sized + 'static,
{
    let (domain_tx, domain_rx) = mpsc::unbounded_channel();
    let (entry_tx, entry_rx) = mpsc::unbounded_channel();
    let (cidr_tx, mut cidr_rx) = mpsc::unbounded_channel();
    let (error_tx, mut error_rx) = mpsc::unbounded_channel();

    let tracker = WorkTracker::new();
    let stats = Arc::new(ResolutionStats::new());
    let cancel = CancellationToken::new();
    let ctx = StageContext {
        tracker: tracker.clone(),
        stats: Arc::clone(&stats),
        cancel: cancel.clone(),
    };

    // Dropping the JoinSet on any early return aborts both stages
    let mut stages = JoinSet::new();
    stages.spawn(lookup_stage(
        lookup,
        domain_rx,
        entry_tx,
        error_tx,
        ctx.clone(),
    ));
    stages.spawn(classify_stage(entry_rx, domain_tx.clone(), cidr_tx, ctx));

    tracker.add();
    domain_tx.send(root.to_string()).map_err(|_| {
        ResolveError::StageStopped("lookup stage exited before the root domain was queued".into())
    })?;
    drop(domain_tx);

    let mut cidrs = Vec::new();
    let outcome = loop {
        tokio::select! {
            biased;
            Some(err) = error_rx.recv() => break Err(err),
            Some(cidr) = cidr_rx.recv() => cidrs.push(cidr),
            _ = tracker.wait_idle() => break Ok(()),
            Some(joined) = stages.join_next() => {
                let reason = match joined {
                    Ok(()) => "stage exited before quiescence".to_string(),
                    Err(e) => e.to_string(),
                };
                break Err(ResolveError::StageStopped(reason));
            }
        }
    };

    match outcome {
        Ok(()) => {
            // Every ip4 send happened before its entry was marked done
            while let Ok(cidr) = cidr_rx.try_recv() {
                cidrs.push(cidr);
            }
            cancel.cancel();
            while stages.join_next().await.is_some() {}

            info!(
                "Resolved {} CIDRs from {} domains ({} entries: {} include, {} ip6 skipped, {} ignored)",
                cidrs.len(),
                stats.domains_queried(),
                stats.total_entries(),
                stats.entry_count(EntryKind::Include),
                stats.entry_count(EntryKind::Ip6),
                stats.entry_count(EntryKind::Other),
            );
            Ok(Resolution { cidrs, stats })
        }
        Err(err) => {
            debug!(
                "Aborting resolution with {} work items outstanding",
                tracker.outstanding()
            );
            cancel.cancel();
            stages.shutdown().await;
            Err(err)
        }
    }
}
