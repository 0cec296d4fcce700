//! Fire-and-forget hand-off to an [`AlertSink`].

use super::AlertSink;
use crate::alerts::Alert;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Outcome counts of a dispatch worker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchStats {
    /// Alerts the sink accepted.
    pub persisted: usize,
    /// Alerts the sink failed to store.
    pub failed: usize,
}

/// Sending half of the alert hand-off.
///
/// Cloning shares the same worker. The worker finishes once every clone has
/// been dropped and the queue is drained.
///
/// The queue is unbounded so `dispatch` never waits. A sink slower than the
/// monitoring interval lets batches pile up in memory; [`AlertDispatcher::pending`]
/// reports the backlog.
#[derive(Debug, Clone)]
pub struct AlertDispatcher {
    sender: mpsc::UnboundedSender<Vec<Alert>>,
    pending: Arc<AtomicUsize>,
}

impl AlertDispatcher {
    /// Spawns the worker on the current Tokio runtime.
    ///
    /// The returned handle resolves to the worker's [`DispatchStats`].
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn spawn(sink: Arc<dyn AlertSink>) -> (Self, JoinHandle<DispatchStats>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let pending = Arc::new(AtomicUsize::new(0));
        let worker = tokio::spawn(run_worker(receiver, sink, Arc::clone(&pending)));
        (Self { sender, pending }, worker)
    }

    /// Returns the number of batches queued but not yet taken by the worker.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.load(Ordering::Acquire)
    }

    /// Queues a batch for persistence and returns immediately.
    ///
    /// A stopped worker is logged; the caller is never told.
    pub fn dispatch(&self, alerts: Vec<Alert>) {
        if alerts.is_empty() {
            return;
        }
        let count = alerts.len();
        self.pending.fetch_add(1, Ordering::AcqRel);
        if self.sender.send(alerts).is_err() {
            self.pending.fetch_sub(1, Ordering::AcqRel);
            warn!(count, "alert sink worker stopped, dropping alerts");
        }
    }
}

async fn run_worker(
    mut receiver: mpsc::UnboundedReceiver<Vec<Alert>>,
    sink: Arc<dyn AlertSink>,
    pending: Arc<AtomicUsize>,
) -> DispatchStats {
    let mut stats = DispatchStats::default();

    while let Some(batch) = receiver.recv().await {
        pending.fetch_sub(1, Ordering::AcqRel);
        for alert in &batch {
            match sink.persist_alert(alert).await {
                Ok(()) => stats.persisted += 1,
                Err(e) => {
                    stats.failed += 1;
                    warn!(alert_id = %alert.id, error = %e, "failed to save alert");
                }
            }
        }
    }

    debug!(
        persisted = stats.persisted,
        failed = stats.failed,
        "alert sink worker finished"
    );
    stats
}
