//! Alert sink seam.
//!
//! Durable storage lives outside this crate. A storage adapter implements
//! [`AlertSink`]; the [`AlertDispatcher`] hands finished alerts to it without
//! waiting, and sink failures are logged and counted, never returned to the
//! alert pipeline.
//!
//! ## Example
//!
//! ```rust
//! use option_chain_alerts::sink::{AlertDispatcher, InMemoryAlertSink};
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let sink = Arc::new(InMemoryAlertSink::new());
//! let (dispatcher, worker) = AlertDispatcher::spawn(sink.clone());
//!
//! dispatcher.dispatch(Vec::new());
//! drop(dispatcher);
//!
//! let stats = worker.await.unwrap();
//! assert_eq!(stats.persisted, 0);
//! # }
//! ```

mod dispatcher;
mod memory;

pub use dispatcher::{AlertDispatcher, DispatchStats};
pub use memory::{DEFAULT_ALERT_HISTORY, InMemoryAlertSink, NoOpAlertSink};

use crate::alerts::Alert;
use async_trait::async_trait;

/// Alert persistence error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SinkError {
    /// The store could not be reached.
    #[error("alert sink connection failed: {message}")]
    ConnectionFailed {
        /// Reason reported by the store.
        message: String,
    },

    /// The store accepted the connection but the write failed.
    #[error("alert write failed for {alert_id}: {message}")]
    WriteFailed {
        /// Id of the alert being written.
        alert_id: String,
        /// Reason reported by the store.
        message: String,
    },

    /// The store refused the record.
    #[error("alert rejected: {message}")]
    Rejected {
        /// Reason reported by the store.
        message: String,
    },
}

/// Port for persisting finished alerts.
#[async_trait]
pub trait AlertSink: Send + Sync {
    /// Persists one alert.
    async fn persist_alert(&self, alert: &Alert) -> Result<(), SinkError>;
}
