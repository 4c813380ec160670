//! Outstanding-work tracking for quiescence detection.

use std::sync::Arc;

use tokio::sync::watch;

/// Counts work items that have been enqueued but not yet fully processed.
///
/// Every enqueue calls `add()` before the item is sent, and every processed
/// item calls `done()` only after its downstream effects (new enqueues,
/// result sends) have happened. A count of zero therefore means no work is
/// queued or running anywhere.
#[derive(Clone)]
pub(crate) struct WorkTracker {
    outstanding: Arc<watch::Sender<usize>>,
}

impl WorkTracker {
    pub(crate) fn new() -> Self {
        let (tx, _rx) = watch::channel(0);
        WorkTracker {
            outstanding: Arc::new(tx),
        }
    }

    pub(crate) fn add(&self) {
        self.outstanding.send_modify(|n| *n += 1);
    }

    pub(crate) fn done(&self) {
        self.outstanding.send_modify(|n| {
            debug_assert!(*n > 0, "work item completed more than once");
            *n = n.saturating_sub(1);
        });
    }

    pub(crate) fn outstanding(&self) -> usize {
        *self.outstanding.borrow()
    }

    /// Resolves once the outstanding count is zero.
    pub(crate) async fn wait_idle(&self) {
        let mut rx = self.outstanding.subscribe();
        // The sender lives as long as `self`, so this cannot fail
        let _ = rx.wait_for(|n| *n == 0).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_wait_idle_returns_immediately_when_empty() {
        let tracker = WorkTracker::new();
        tokio::time::timeout(Duration::from_secs(1), tracker.wait_idle())
            .await
            .expect("idle tracker should not block");
    }

    #[tokio::test]
    async fn test_wait_idle_blocks_until_all_done() {
        let tracker = WorkTracker::new();
        tracker.add();
        tracker.add();
        assert_eq!(tracker.outstanding(), 2);

        let waiter = {
            let tracker = tracker.clone();
            tokio::spawn(async move { tracker.wait_idle().await })
        };

        tracker.done();
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!waiter.is_finished(), "one item is still outstanding");

        tracker.done();
        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("waiter should finish once the count reaches zero")
            .unwrap();
        assert_eq!(tracker.outstanding(), 0);
    }
}
