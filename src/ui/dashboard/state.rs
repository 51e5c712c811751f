//! Dashboard state management
//!
//! Contains the main dashboard state struct. The dashboard owns the refresh
//! controller and, once mounted, the poller feeding it.

use crate::analytics::AnalyticsSource;
use crate::consts::cli_consts::{EVENT_QUEUE_SIZE, MAX_ACTIVITY_LOGS};
use crate::environment::Environment;
use crate::events::Event as WorkerEvent;
use crate::refresh::{DisplayState, RefreshController};
use crate::ui::app::UIConfig;
use crate::ui::metrics::PollMetrics;
use crate::workers::core::EventSender;
use crate::workers::{PollerHandle, spawn_poller};

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Dashboard state with the current display state and poll statistics.
#[derive(Debug)]
pub struct DashboardState {
    /// The analytics backend being polled.
    pub environment: Environment,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Fixed interval between polls.
    pub poll_interval: Duration,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<WorkerEvent>,
    /// Activity logs for display
    pub activity_logs: VecDeque<WorkerEvent>,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Poll counters and timing
    pub poll_metrics: PollMetrics,
    /// Animation tick counter
    pub tick: usize,

    controller: RefreshController,
    /// Events from the poller, present once mounted
    event_receiver: Option<mpsc::Receiver<WorkerEvent>>,
    /// Cancels polling when the dashboard is dropped
    poller: Option<PollerHandle>,
}

impl DashboardState {
    /// Creates a dashboard in `Loading` with no poller attached.
    pub fn new(environment: Environment, start_time: Instant, ui_config: UIConfig) -> Self {
        Self {
            environment,
            start_time,
            poll_interval: ui_config.poll_interval,
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            with_background_color: ui_config.with_background_color,
            poll_metrics: PollMetrics::default(),
            tick: 0,
            controller: RefreshController::new(ui_config.stale_policy),
            event_receiver: None,
            poller: None,
        }
    }

    /// Creates the dashboard and starts polling `source`.
    ///
    /// The first poll is issued right away. Polling stops when the returned
    /// state is dropped.
    pub fn mount(
        source: Arc<dyn AnalyticsSource>,
        start_time: Instant,
        ui_config: UIConfig,
    ) -> Self {
        let mut state = Self::new(source.environment().clone(), start_time, ui_config);
        let (sender, receiver) = mpsc::channel::<WorkerEvent>(EVENT_QUEUE_SIZE);
        state.poller = Some(spawn_poller(
            source,
            EventSender::new(sender),
            state.poll_interval,
        ));
        state.event_receiver = Some(receiver);
        state
    }

    pub fn display_state(&self) -> &DisplayState {
        self.controller.state()
    }

    pub fn is_polling(&self) -> bool {
        self.poller
            .as_ref()
            .is_some_and(|poller| !poller.is_finished())
    }

    pub(super) fn controller_mut(&mut self) -> &mut RefreshController {
        &mut self.controller
    }

    pub(super) fn event_receiver_mut(&mut self) -> Option<&mut mpsc::Receiver<WorkerEvent>> {
        self.event_receiver.as_mut()
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: WorkerEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: WorkerEvent) {
        self.pending_events.push_back(event);
    }
}
