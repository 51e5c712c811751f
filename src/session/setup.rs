//! Session setup and initialization

use crate::analytics::{AnalyticsClient, AnalyticsSource};
use crate::environment::Environment;
use crate::ui::UIConfig;
use std::error::Error;
use std::sync::Arc;
use tokio::sync::broadcast;

/// Session data for both TUI and headless modes
pub struct SessionData {
    /// The backend every poll goes to
    pub source: Arc<dyn AnalyticsSource>,
    /// Fired once on Ctrl+C
    pub shutdown_sender: broadcast::Sender<()>,
    /// Display and polling settings
    pub ui_config: UIConfig,
}

impl SessionData {
    pub fn environment(&self) -> &Environment {
        self.source.environment()
    }
}

/// Sets up a dashboard session
///
/// Builds the HTTP client for `env` and arms the Ctrl+C handler. No request
/// is made here; polling begins when a mode mounts the dashboard.
///
/// # Arguments
/// * `env` - Backend to poll
/// * `ui_config` - Display and polling settings
///
/// # Returns
/// * `Ok(SessionData)` - Successfully set up session
/// * `Err` - The HTTP client could not be built
pub async fn setup_session(
    env: Environment,
    ui_config: UIConfig,
) -> Result<SessionData, Box<dyn Error>> {
    let client = AnalyticsClient::new(env)?;

    // Create shutdown channel - only one shutdown signal needed
    let (shutdown_sender, _) = broadcast::channel(1);

    // Trigger shutdown on Ctrl+C
    let shutdown_sender_clone = shutdown_sender.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_sender_clone.send(());
        }
    });

    Ok(SessionData {
        source: Arc::new(client),
        shutdown_sender,
        ui_config,
    })
}
