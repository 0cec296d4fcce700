//! In-process sinks.

use super::{AlertSink, SinkError};
use crate::alerts::{Alert, AlertType};
use crate::error::{Error, Result};
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// History kept by [`InMemoryAlertSink::bounded_default`].
pub const DEFAULT_ALERT_HISTORY: usize = 50;

/// Keeps alerts in memory, keyed by id.
///
/// Uses `DashMap` so several dispatch workers can write concurrently. A sink built
/// with [`InMemoryAlertSink::new`] grows without limit; a bounded sink evicts the
/// oldest stored alert once it holds more than its capacity.
#[derive(Debug, Default)]
pub struct InMemoryAlertSink {
    alerts: DashMap<String, (u64, Alert)>,
    sequence: AtomicU64,
    capacity: Option<usize>,
}

impl InMemoryAlertSink {
    /// Creates an empty, unbounded sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sink that keeps only the newest `capacity` alerts.
    ///
    /// A capacity of zero is treated as one.
    #[must_use]
    pub fn bounded(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity.max(1)),
            ..Self::default()
        }
    }

    /// Creates a sink that keeps the newest [`DEFAULT_ALERT_HISTORY`] alerts.
    #[must_use]
    pub fn bounded_default() -> Self {
        Self::bounded(DEFAULT_ALERT_HISTORY)
    }

    /// Returns the capacity, or `None` if unbounded.
    #[must_use]
    pub const fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Returns the number of stored alerts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    /// Returns true if nothing has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    /// Returns a stored alert by id.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoDataAvailable` if no alert has that id.
    pub fn get(&self, id: &str) -> Result<Alert> {
        self.alerts
            .get(id)
            .map(|entry| entry.value().1.clone())
            .ok_or_else(|| Error::no_data(format!("alert {id} not found")))
    }

    /// Returns the number of stored alerts of one type.
    #[must_use]
    pub fn count_by_type(&self, alert_type: AlertType) -> usize {
        self.alerts
            .iter()
            .filter(|entry| entry.value().1.alert_type == alert_type)
            .count()
    }

    /// Removes every stored alert.
    pub fn clear(&self) {
        self.alerts.clear();
    }

    fn evict_oldest(&self, capacity: usize) {
        while self.alerts.len() > capacity {
            let oldest = self
                .alerts
                .iter()
                .min_by_key(|entry| entry.value().0)
                .map(|entry| entry.key().clone());
            match oldest {
                Some(id) => {
                    self.alerts.remove(&id);
                }
                None => break,
            }
        }
    }
}

#[async_trait]
impl AlertSink for InMemoryAlertSink {
    async fn persist_alert(&self, alert: &Alert) -> std::result::Result<(), SinkError> {
        let seq = self.sequence.fetch_add(1, Ordering::Relaxed);
        self.alerts.insert(alert.id.clone(), (seq, alert.clone()));
        if let Some(capacity) = self.capacity {
            self.evict_oldest(capacity);
        }
        Ok(())
    }
}

/// Discards every alert.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpAlertSink;

#[async_trait]
impl AlertSink for NoOpAlertSink {
    async fn persist_alert(&self, _alert: &Alert) -> std::result::Result<(), SinkError> {
        Ok(())
    }
}
