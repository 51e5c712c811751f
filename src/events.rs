//! Event System
//!
//! Types and implementations for poller events and logging

use crate::analytics::AnalyticsSnapshot;
use crate::analytics::error::FetchFailure;
use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Worker {
    /// Task that issues the periodic analytics polls.
    Poller,
    /// The refresh controller applying poll outcomes to the display state.
    Controller,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    Waiting,
    StateChange,
}

/// Completion of one poll, tagged with the sequence number it was issued with.
#[derive(Debug, Clone, PartialEq)]
pub struct PollOutcome {
    pub sequence: u64,
    pub result: Result<AnalyticsSnapshot, FetchFailure>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub worker: Worker,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
    /// Poll result carried by completion events
    pub outcome: Option<PollOutcome>,
}

impl Event {
    fn new(worker: Worker, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            worker,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
            outcome: None,
        }
    }

    /// A poll has just been issued.
    pub fn poll_started(sequence: u64) -> Self {
        Self::new(
            Worker::Poller,
            format!("Poll #{}: requesting analytics...", sequence),
            EventType::Refresh,
            LogLevel::Debug,
        )
    }

    /// A poll has resolved, successfully or not.
    pub fn poll_completed(
        sequence: u64,
        result: Result<AnalyticsSnapshot, FetchFailure>,
        log_level: LogLevel,
    ) -> Self {
        let (msg, event_type) = match &result {
            Ok(snapshot) => (
                format!(
                    "Poll #{}: received {} records from {} sensors",
                    sequence,
                    snapshot.total_records,
                    snapshot.records_per_sensor.len()
                ),
                EventType::Success,
            ),
            Err(failure) => (format!("Poll #{} failed: {}", sequence, failure), EventType::Error),
        };
        let mut event = Self::new(Worker::Poller, msg, event_type, log_level);
        event.outcome = Some(PollOutcome { sequence, result });
        event
    }

    pub fn controller_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Worker::Controller, msg, event_type, log_level)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::error::FailureKind;

    #[test]
    fn test_poll_completed_failure_carries_detail() {
        let failure = FetchFailure::new(FailureKind::Network, "connection refused");
        let event = Event::poll_completed(7, Err(failure.clone()), LogLevel::Warn);

        assert_eq!(event.worker, Worker::Poller);
        assert_eq!(event.event_type, EventType::Error);
        assert!(event.msg.contains("#7"));
        assert!(event.msg.contains("connection refused"));
        assert_eq!(
            event.outcome,
            Some(PollOutcome {
                sequence: 7,
                result: Err(failure)
            })
        );
    }

    #[test]
    fn test_display_includes_type_and_message() {
        let event = Event::poll_started(1);
        let rendered = event.to_string();
        assert!(rendered.starts_with("Refresh ["));
        assert!(rendered.ends_with("Poll #1: requesting analytics..."));
        assert!(event.outcome.is_none());
    }
}
