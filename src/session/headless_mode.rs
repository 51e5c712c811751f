//! Headless mode execution

use super::{
    SessionData,
    messages::{
        display_state_message, print_session_exit_success, print_session_shutdown,
        print_session_starting,
    },
};
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use crate::refresh::{RefreshController, Transition};
use crate::workers::core::EventSender;
use crate::workers::spawn_poller;
use std::error::Error;
use tokio::sync::mpsc;

/// Runs the application in headless mode
///
/// This function handles:
/// 1. Console event logging
/// 2. Printing each display state the dashboard would show
/// 3. Ctrl+C shutdown handling
///
/// # Arguments
/// * `session` - Session data from setup
///
/// # Returns
/// * `Ok(())` - Headless mode completed successfully
/// * `Err` - Headless mode failed
pub async fn run_headless_mode(session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", &session.environment().api_url());

    let mut controller = RefreshController::new(session.ui_config.stale_policy);
    display_state_message(controller.state()).print();

    let (event_sender, mut event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let poller = spawn_poller(
        session.source.clone(),
        EventSender::new(event_sender),
        session.ui_config.poll_interval,
    );

    let mut shutdown_receiver = session.shutdown_sender.subscribe();

    // Event loop: log events to console until shutdown
    loop {
        tokio::select! {
            Some(event) = event_receiver.recv() => {
                if event.should_display() {
                    println!("{}", event);
                }
                let Some(outcome) = event.outcome else {
                    continue;
                };
                let sequence = outcome.sequence;
                match controller.apply(outcome) {
                    Transition::Applied { .. } => display_state_message(controller.state()).print(),
                    Transition::Stale { newest, .. } => {
                        let stale = Event::controller_with_level(
                            format!(
                                "Discarded response from poll #{} (poll #{} already shown)",
                                sequence, newest
                            ),
                            EventType::Waiting,
                            LogLevel::Info,
                        );
                        println!("{}", stale);
                    }
                }
            }
            _ = shutdown_receiver.recv() => {
                break;
            }
        }
    }

    print_session_shutdown();
    poller.stop();
    print_session_exit_success();

    Ok(())
}
