//! Refresh controller
//!
//! Owns the [`DisplayState`], the single source of truth for what the
//! dashboard shows. Poll outcomes arrive as [`PollOutcome`]s and each one
//! replaces the state wholesale: there is no merging of old and new data and
//! no fallback to an earlier snapshot after a failure.

use crate::analytics::AnalyticsSnapshot;
use crate::consts::cli_consts::FETCH_FAILURE_MESSAGE;
use crate::events::PollOutcome;

/// What the dashboard displays, exactly one of three things.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayState {
    /// No poll has resolved yet.
    Loading,
    /// The most recent applied poll failed. Holds the user-facing message.
    Failed(String),
    /// The most recent applied poll succeeded.
    Ready(AnalyticsSnapshot),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
pub enum StateKind {
    Loading,
    Failed,
    Ready,
}

impl DisplayState {
    pub fn kind(&self) -> StateKind {
        match self {
            DisplayState::Loading => StateKind::Loading,
            DisplayState::Failed(_) => StateKind::Failed,
            DisplayState::Ready(_) => StateKind::Ready,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DisplayState::Loading)
    }

}

/// How completions that arrive out of issue order are treated.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum StalePolicy {
    /// Apply every completion in the order it arrives.
    #[default]
    ApplyAll,
    /// Drop a completion whose poll was issued before the newest applied one.
    DiscardStale,
}

/// Result of handing one outcome to the controller.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Transition {
    Applied { from: StateKind, to: StateKind },
    /// The outcome was older than `newest` and left the state untouched.
    Stale { sequence: u64, newest: u64 },
}

#[derive(Debug)]
pub struct RefreshController {
    state: DisplayState,
    policy: StalePolicy,
    newest_applied: Option<u64>,
}

impl RefreshController {
    /// A freshly mounted controller, in `Loading`.
    pub fn new(policy: StalePolicy) -> Self {
        Self {
            state: DisplayState::Loading,
            policy,
            newest_applied: None,
        }
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    /// True only until the first poll resolves.
    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Applies one poll outcome.
    ///
    /// Success becomes `Ready` with the payload untouched; any failure becomes
    /// `Failed` with the same fixed message regardless of cause.
    pub fn apply(&mut self, outcome: PollOutcome) -> Transition {
        if self.policy == StalePolicy::DiscardStale {
            if let Some(newest) = self.newest_applied {
                if outcome.sequence <= newest {
                    return Transition::Stale {
                        sequence: outcome.sequence,
                        newest,
                    };
                }
            }
        }

        let from = self.state.kind();
        self.newest_applied = Some(
            self.newest_applied
                .map_or(outcome.sequence, |newest| newest.max(outcome.sequence)),
        );
        self.state = match outcome.result {
            Ok(snapshot) => DisplayState::Ready(snapshot),
            Err(_) => DisplayState::Failed(FETCH_FAILURE_MESSAGE.to_string()),
        };

        Transition::Applied {
            from,
            to: self.state.kind(),
        }
    }
}

impl Default for RefreshController {
    fn default() -> Self {
        Self::new(StalePolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::SensorReading;
    use crate::analytics::error::{FailureKind, FetchFailure};
    use std::collections::HashMap;

    fn snapshot(total_records: u64) -> AnalyticsSnapshot {
        AnalyticsSnapshot {
            total_records,
            average_temperature: 21.5,
            max_temperature: 27.125,
            min_temperature: 14.0,
            average_humidity: 48.3,
            records_per_sensor: HashMap::from([("s1".to_string(), 3), ("s2".to_string(), 7)]),
            raw_readings: vec![SensorReading {
                timestamp: "2024-05-01T10:00:00".to_string(),
                sensor_id: "s1".to_string(),
                temperature: 20.0,
                humidity: 50.0,
            }],
        }
    }

    fn ok(sequence: u64, total_records: u64) -> PollOutcome {
        PollOutcome {
            sequence,
            result: Ok(snapshot(total_records)),
        }
    }

    fn failed(sequence: u64, kind: FailureKind) -> PollOutcome {
        PollOutcome {
            sequence,
            result: Err(FetchFailure::new(kind, "detail that must stay hidden")),
        }
    }

    #[test]
    fn test_starts_loading() {
        let controller = RefreshController::default();
        assert_eq!(controller.state(), &DisplayState::Loading);
        assert!(controller.is_loading());
    }

    #[test]
    // A successful poll is shown exactly as received.
    fn test_success_replaces_loading_verbatim() {
        let mut controller = RefreshController::default();
        let transition = controller.apply(ok(1, 42));

        assert_eq!(
            transition,
            Transition::Applied {
                from: StateKind::Loading,
                to: StateKind::Ready
            }
        );
        assert_eq!(controller.state(), &DisplayState::Ready(snapshot(42)));
        assert!(!controller.is_loading());
    }

    #[test]
    // Every failure cause produces the same message and never the detail.
    fn test_failure_message_is_constant() {
        for kind in [FailureKind::Network, FailureKind::Status, FailureKind::Decode] {
            let mut controller = RefreshController::default();
            controller.apply(failed(1, kind));
            assert_eq!(
                controller.state(),
                &DisplayState::Failed(FETCH_FAILURE_MESSAGE.to_string())
            );
            assert!(FETCH_FAILURE_MESSAGE.starts_with("Could not connect to the backend"));
        }
    }

    #[test]
    // A failure after a success drops the old snapshot entirely.
    fn test_failure_after_success_discards_snapshot() {
        let mut controller = RefreshController::default();
        controller.apply(ok(1, 10));
        controller.apply(failed(2, FailureKind::Network));

        assert_eq!(
            controller.state(),
            &DisplayState::Failed(FETCH_FAILURE_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_success_after_failure_recovers() {
        let mut controller = RefreshController::default();
        controller.apply(failed(1, FailureKind::Status));
        controller.apply(ok(2, 99));

        assert_eq!(controller.state(), &DisplayState::Ready(snapshot(99)));
    }

    #[test]
    // All six transitions between the three states are allowed.
    fn test_all_transitions_are_valid() {
        let mut controller = RefreshController::default();
        let steps = [
            (ok(1, 1), StateKind::Loading, StateKind::Ready),
            (ok(2, 2), StateKind::Ready, StateKind::Ready),
            (failed(3, FailureKind::Network), StateKind::Ready, StateKind::Failed),
            (failed(4, FailureKind::Decode), StateKind::Failed, StateKind::Failed),
            (ok(5, 5), StateKind::Failed, StateKind::Ready),
        ];
        for (outcome, from, to) in steps {
            assert_eq!(controller.apply(outcome), Transition::Applied { from, to });
        }

        let mut controller = RefreshController::default();
        assert_eq!(
            controller.apply(failed(1, FailureKind::Network)),
            Transition::Applied {
                from: StateKind::Loading,
                to: StateKind::Failed
            }
        );
    }

    #[test]
    // Loading is never re-entered once the first poll has resolved.
    fn test_loading_is_never_reentered() {
        let mut controller = RefreshController::default();
        controller.apply(failed(1, FailureKind::Network));
        for sequence in 2..10 {
            let outcome = if sequence % 2 == 0 {
                ok(sequence, sequence)
            } else {
                failed(sequence, FailureKind::Status)
            };
            controller.apply(outcome);
            assert!(!controller.is_loading());
        }
    }

    #[test]
    // An older poll completing after a newer one is ignored.
    fn test_discards_stale_completion() {
        let mut controller = RefreshController::new(StalePolicy::DiscardStale);
        controller.apply(ok(3, 30));

        let transition = controller.apply(failed(2, FailureKind::Network));
        assert_eq!(
            transition,
            Transition::Stale {
                sequence: 2,
                newest: 3
            }
        );
        assert_eq!(controller.state(), &DisplayState::Ready(snapshot(30)));
    }

    #[test]
    // Without the guard outcomes are applied in completion order.
    fn test_apply_all_uses_completion_order() {
        let mut controller = RefreshController::new(StalePolicy::ApplyAll);
        controller.apply(ok(3, 30));
        controller.apply(ok(2, 20));

        assert_eq!(controller.state(), &DisplayState::Ready(snapshot(20)));
    }

    #[test]
    // A fresh controller shows whichever poll completed last, even an older one.
    fn test_default_applies_in_completion_order() {
        let mut controller = RefreshController::default();
        assert_eq!(
            controller.apply(ok(2, 2)),
            Transition::Applied {
                from: StateKind::Loading,
                to: StateKind::Ready
            }
        );
        assert_eq!(
            controller.apply(ok(1, 1)),
            Transition::Applied {
                from: StateKind::Ready,
                to: StateKind::Ready
            }
        );
        assert_eq!(controller.state(), &DisplayState::Ready(snapshot(1)));
    }
}
