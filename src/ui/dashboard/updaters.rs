//! Dashboard state update logic
//!
//! Contains all methods for updating dashboard state from events

use super::state::DashboardState;

use crate::events::{Event as WorkerEvent, EventType, Worker};
use crate::logging::LogLevel;
use crate::refresh::Transition;

use std::time::Instant;

impl DashboardState {
    /// Update the dashboard state with new tick and queued events.
    pub fn update(&mut self) {
        self.tick += 1;

        // Pull everything the poller has sent since the last frame
        let mut received = Vec::new();
        if let Some(receiver) = self.event_receiver_mut() {
            while let Ok(event) = receiver.try_recv() {
                received.push(event);
            }
        }
        for event in received {
            self.add_event(event);
        }

        // Process all queued events one by one, in arrival order
        while let Some(event) = self.pending_events.pop_front() {
            self.add_to_activity_log(event.clone());
            self.process_event(&event);
        }
    }

    /// Process a single event and update relevant state
    fn process_event(&mut self, event: &WorkerEvent) {
        match event.worker {
            Worker::Poller => self.handle_poller_event(event),
            Worker::Controller => {}
        }
    }

    /// Handle Poller events
    fn handle_poller_event(&mut self, event: &WorkerEvent) {
        if event.event_type == EventType::Refresh {
            self.poll_metrics.record_issued(Instant::now());
        }

        let Some(outcome) = event.outcome.clone() else {
            return;
        };

        let sequence = outcome.sequence;
        let succeeded = outcome.result.is_ok();
        match self.controller_mut().apply(outcome) {
            Transition::Applied { from, to } => {
                // Only outcomes that reached the display move the counters
                if succeeded {
                    self.poll_metrics.record_success(&event.timestamp);
                } else {
                    self.poll_metrics.record_failure();
                }
                if from != to {
                    self.add_to_activity_log(WorkerEvent::controller_with_level(
                        format!("Display changed from {} to {}", from, to),
                        EventType::StateChange,
                        LogLevel::Debug,
                    ));
                }
            }
            Transition::Stale { newest, .. } => {
                self.poll_metrics.record_stale();
                self.add_to_activity_log(WorkerEvent::controller_with_level(
                    format!(
                        "Discarded response from poll #{} (poll #{} already shown)",
                        sequence, newest
                    ),
                    EventType::Waiting,
                    LogLevel::Info,
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::error::{FailureKind, FetchFailure};
    use crate::analytics::{AnalyticsSnapshot, MockAnalyticsSource};
    use crate::consts::cli_consts::FETCH_FAILURE_MESSAGE;
    use crate::environment::Environment;
    use crate::refresh::{DisplayState, StalePolicy};
    use crate::ui::app::UIConfig;
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::time::Duration;

    fn snapshot(total_records: u64) -> AnalyticsSnapshot {
        AnalyticsSnapshot {
            total_records,
            average_temperature: 21.5,
            max_temperature: 24.0,
            min_temperature: 19.0,
            average_humidity: 45.0,
            records_per_sensor: HashMap::from([("s1".to_string(), total_records)]),
            raw_readings: Vec::new(),
        }
    }

    fn dashboard() -> DashboardState {
        DashboardState::new(Environment::Local, Instant::now(), UIConfig::default())
    }

    fn network_failure() -> FetchFailure {
        FetchFailure::new(FailureKind::Network, "connection refused")
    }

    #[test]
    fn test_events_drive_display_state() {
        let mut state = dashboard();
        assert!(state.display_state().is_loading());

        state.add_event(WorkerEvent::poll_started(1));
        state.add_event(WorkerEvent::poll_completed(1, Err(network_failure()), LogLevel::Warn));
        state.update();
        assert_eq!(
            state.display_state(),
            &DisplayState::Failed(FETCH_FAILURE_MESSAGE.to_string())
        );

        state.add_event(WorkerEvent::poll_started(2));
        state.add_event(WorkerEvent::poll_completed(2, Ok(snapshot(42)), LogLevel::Info));
        state.update();
        assert_eq!(state.display_state(), &DisplayState::Ready(snapshot(42)));

        assert_eq!(state.poll_metrics.polls_issued, 2);
        assert_eq!(state.poll_metrics.polls_succeeded, 1);
        assert_eq!(state.poll_metrics.polls_failed, 1);
    }

    #[test]
    // The failure detail is logged even though the display only shows the fixed message.
    fn test_failure_detail_reaches_activity_log() {
        let mut state = dashboard();
        state.add_event(WorkerEvent::poll_completed(1, Err(network_failure()), LogLevel::Warn));
        state.update();

        assert!(
            state
                .activity_logs
                .iter()
                .any(|event| event.msg.contains("connection refused"))
        );
        assert_eq!(
            state.display_state(),
            &DisplayState::Failed(FETCH_FAILURE_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_stale_completion_is_counted_and_logged() {
        let ui_config = UIConfig {
            stale_policy: StalePolicy::DiscardStale,
            ..UIConfig::default()
        };
        let mut state = DashboardState::new(Environment::Local, Instant::now(), ui_config);
        state.add_event(WorkerEvent::poll_completed(2, Ok(snapshot(2)), LogLevel::Info));
        state.add_event(WorkerEvent::poll_completed(1, Ok(snapshot(1)), LogLevel::Info));
        state.update();

        assert_eq!(state.display_state(), &DisplayState::Ready(snapshot(2)));
        assert_eq!(state.poll_metrics.stale_discarded, 1);
        assert!(
            state
                .activity_logs
                .iter()
                .any(|event| event.worker == Worker::Controller && event.msg.contains("poll #1"))
        );
    }

    #[test]
    // A discarded completion leaves the success and failure counters alone.
    fn test_stale_completion_does_not_touch_counters() {
        let ui_config = UIConfig {
            stale_policy: StalePolicy::DiscardStale,
            ..UIConfig::default()
        };
        let mut state = DashboardState::new(Environment::Local, Instant::now(), ui_config);
        state.add_event(WorkerEvent::poll_completed(2, Err(network_failure()), LogLevel::Warn));
        state.add_event(WorkerEvent::poll_completed(1, Ok(snapshot(1)), LogLevel::Info));
        state.update();

        let metrics = &state.poll_metrics;
        assert_eq!(metrics.polls_failed, 1);
        assert_eq!(metrics.consecutive_failures, 1);
        assert_eq!(metrics.polls_succeeded, 0);
        assert!(metrics.last_success_timestamp.is_none());
        assert_eq!(metrics.stale_discarded, 1);
    }

    #[test]
    fn test_default_policy_follows_completion_order() {
        let mut state = dashboard();
        state.add_event(WorkerEvent::poll_completed(2, Ok(snapshot(2)), LogLevel::Info));
        state.add_event(WorkerEvent::poll_completed(1, Ok(snapshot(1)), LogLevel::Info));
        state.update();

        assert_eq!(state.display_state(), &DisplayState::Ready(snapshot(1)));
    }

    #[tokio::test(start_paused = true)]
    // Mounting polls immediately; dropping the dashboard stops polling.
    async fn test_mount_polls_until_dropped() {
        let calls = Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let counter = calls.clone();
        let mut mock = MockAnalyticsSource::new();
        mock.expect_environment().return_const(Environment::Local);
        mock.expect_fetch_snapshot().returning(move || {
            counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            Ok(snapshot(7))
        });

        let mut state = DashboardState::mount(Arc::new(mock), Instant::now(), UIConfig::default());
        assert!(state.display_state().is_loading());

        tokio::time::sleep(Duration::from_millis(100)).await;
        state.update();
        assert_eq!(state.display_state(), &DisplayState::Ready(snapshot(7)));
        assert!(state.is_polling());

        drop(state);
        tokio::time::sleep(Duration::from_millis(60_000)).await;
        assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 1);
    }
}
