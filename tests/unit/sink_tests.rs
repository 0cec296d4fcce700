//! Integration tests for alert dispatch.

use crate::common::{session_time, short_dated_chain, short_dated_config};
use async_trait::async_trait;
use option_chain_alerts::alerts::{Alert, AlertType, generate_alerts_at};
use option_chain_alerts::sink::{
    AlertDispatcher, AlertSink, DispatchStats, InMemoryAlertSink, NoOpAlertSink, SinkError,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Rejects every other write.
#[derive(Default)]
struct FlakySink {
    calls: AtomicUsize,
    stored: InMemoryAlertSink,
}

#[async_trait]
impl AlertSink for FlakySink {
    async fn persist_alert(&self, alert: &Alert) -> Result<(), SinkError> {
        if self.calls.fetch_add(1, Ordering::SeqCst) % 2 == 1 {
            return Err(SinkError::ConnectionFailed {
                message: "connection reset".to_string(),
            });
        }
        self.stored.persist_alert(alert).await
    }
}

#[tokio::test]
async fn test_generated_alerts_are_persisted() {
    let alerts = generate_alerts_at(
        &short_dated_chain("NSE:NIFTY50-INDEX"),
        &short_dated_config(),
        session_time(),
    );
    let sink = Arc::new(InMemoryAlertSink::new());
    let (dispatcher, worker) = AlertDispatcher::spawn(sink.clone());

    dispatcher.dispatch(alerts.clone());
    drop(dispatcher);

    let stats = worker.await.unwrap();
    assert_eq!(stats, DispatchStats { persisted: 6, failed: 0 });
    assert_eq!(sink.count_by_type(AlertType::GammaSpread), 4);
    assert_eq!(sink.count_by_type(AlertType::ThetaDecay), 2);
    for alert in &alerts {
        assert_eq!(&sink.get(&alert.id).unwrap(), alert);
    }
}

#[tokio::test]
async fn test_partial_failures_do_not_stop_worker() {
    let sink = Arc::new(FlakySink::default());
    let (dispatcher, worker) = AlertDispatcher::spawn(sink.clone());

    let alerts = generate_alerts_at(
        &short_dated_chain("NSE:NIFTYBANK-INDEX"),
        &short_dated_config(),
        session_time(),
    );
    dispatcher.dispatch(alerts);
    drop(dispatcher);

    let stats = worker.await.unwrap();
    assert_eq!(stats, DispatchStats { persisted: 3, failed: 3 });
    assert_eq!(sink.stored.len(), 3);
}

#[tokio::test]
async fn test_cloned_dispatchers_share_worker() {
    let (dispatcher, worker) = AlertDispatcher::spawn(Arc::new(NoOpAlertSink));
    let other = dispatcher.clone();

    let alerts = generate_alerts_at(
        &short_dated_chain("NSE:FINNIFTY-INDEX"),
        &short_dated_config(),
        session_time(),
    );
    dispatcher.dispatch(alerts.clone());
    other.dispatch(alerts);
    dispatcher.dispatch(Vec::new());
    drop(dispatcher);
    drop(other);

    let stats = worker.await.unwrap();
    assert_eq!(stats.persisted, 12);
}
