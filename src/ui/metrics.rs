//! Poll metrics collection and display.

use ratatui::prelude::Color;
use std::time::{Duration, Instant};

/// Running counters over every poll the dashboard has seen.
#[derive(Debug, Clone, Default)]
pub struct PollMetrics {
    /// Polls issued by the timer.
    pub polls_issued: u64,
    /// Completions that carried a snapshot.
    pub polls_succeeded: u64,
    /// Completions that carried a failure.
    pub polls_failed: u64,
    /// Failures since the last success.
    pub consecutive_failures: u64,
    /// Completions dropped because a newer poll had already been applied.
    pub stale_discarded: u64,
    /// Timestamp of the last successful poll, as carried by its event.
    pub last_success_timestamp: Option<String>,
    /// When the most recent poll was issued.
    pub last_poll_started: Option<Instant>,
}

impl PollMetrics {
    pub fn record_issued(&mut self, at: Instant) {
        self.polls_issued += 1;
        self.last_poll_started = Some(at);
    }

    pub fn record_success(&mut self, timestamp: &str) {
        self.polls_succeeded += 1;
        self.consecutive_failures = 0;
        self.last_success_timestamp = Some(timestamp.to_string());
    }

    pub fn record_failure(&mut self) {
        self.polls_failed += 1;
        self.consecutive_failures += 1;
    }

    pub fn record_stale(&mut self) {
        self.stale_discarded += 1;
    }

    /// Percentage of completed polls that succeeded.
    pub fn success_rate(&self) -> f64 {
        let completed = self.polls_succeeded + self.polls_failed;
        if completed == 0 {
            0.0
        } else {
            (self.polls_succeeded as f64 / completed as f64) * 100.0
        }
    }

    /// Get success rate color based on health.
    pub fn success_rate_color(&self) -> Color {
        let rate = self.success_rate();
        if rate >= 75.0 {
            Color::Green
        } else if rate >= 50.0 {
            Color::Yellow
        } else {
            Color::Red
        }
    }

    /// Time left until the next scheduled poll, measured at `now`.
    pub fn next_poll_in(&self, interval: Duration, now: Instant) -> Duration {
        match self.last_poll_started {
            Some(started) => interval.saturating_sub(now.saturating_duration_since(started)),
            None => Duration::ZERO,
        }
    }

    /// How far through the current interval we are, 0 to 100.
    pub fn interval_progress(&self, interval: Duration, now: Instant) -> u16 {
        if interval.is_zero() {
            return 100;
        }
        let remaining = self.next_poll_in(interval, now);
        let elapsed = interval - remaining;
        ((elapsed.as_secs_f64() / interval.as_secs_f64()) * 100.0).min(100.0) as u16
    }
}
