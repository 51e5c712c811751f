//! Periodic analytics poller
//!
//! Issues one poll immediately and then one per interval, forever, whatever
//! the outcome of earlier polls. There is no backoff and no attempt limit.
//! Each poll runs in its own task and is tagged with a sequence number at
//! issue time, so completions can arrive (and be reported) out of order.

use super::core::EventSender;
use crate::analytics::AnalyticsSource;
use crate::analytics::error::FetchFailure;
use crate::error_classifier::ErrorClassifier;
use crate::events::Event;
use crate::logging::LogLevel;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};

/// The running poll timer.
///
/// Dropping the handle cancels the timer, so leaving the dashboard by any
/// path stops polling. Polls already in flight are left to finish; their
/// results go nowhere once the receiver is gone.
#[derive(Debug)]
pub struct PollerHandle {
    timer: JoinHandle<()>,
}

impl PollerHandle {
    /// Cancels the timer. Equivalent to dropping the handle.
    pub fn stop(self) {}

    pub fn is_finished(&self) -> bool {
        self.timer.is_finished()
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.timer.abort();
    }
}

/// Starts polling `source` every `period`, the first poll firing immediately.
pub fn spawn_poller(
    source: Arc<dyn AnalyticsSource>,
    event_sender: EventSender,
    period: Duration,
) -> PollerHandle {
    let timer = tokio::spawn(poll_loop(source, event_sender, period));
    PollerHandle { timer }
}

async fn poll_loop(source: Arc<dyn AnalyticsSource>, event_sender: EventSender, period: Duration) {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut sequence: u64 = 0;

    loop {
        ticker.tick().await;
        if event_sender.is_closed() {
            break;
        }

        sequence += 1;
        event_sender.send_event(Event::poll_started(sequence)).await;
        tokio::spawn(run_poll(source.clone(), event_sender.clone(), sequence));
    }
}

/// Performs one poll and reports its outcome. Errors stop here.
async fn run_poll(source: Arc<dyn AnalyticsSource>, event_sender: EventSender, sequence: u64) {
    let (result, log_level) = match source.fetch_snapshot().await {
        Ok(snapshot) => (Ok(snapshot), LogLevel::Info),
        Err(e) => {
            let log_level = ErrorClassifier::new().classify_fetch_error(&e);
            log::log!(log::Level::from(log_level), "poll #{} failed: {}", sequence, e);
            (Err(FetchFailure::from(&e)), log_level)
        }
    };

    event_sender
        .send_event(Event::poll_completed(sequence, result, log_level))
        .await;
}
