//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::analytics::AnalyticsSource;
use crate::consts::cli_consts::{SPLASH_DURATION_MS, polling};
use crate::refresh::StalePolicy;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::{Frame, Terminal, backend::Backend};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::broadcast;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub poll_interval: Duration,
    pub stale_policy: StalePolicy,
}

impl UIConfig {
    pub fn new(with_background_color: bool, stale_policy: StalePolicy) -> Self {
        Self {
            with_background_color,
            poll_interval: polling::poll_interval(),
            stale_policy,
        }
    }
}

impl Default for UIConfig {
    fn default() -> Self {
        Self::new(false, StalePolicy::default())
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// The mounted dashboard. Polling runs for as long as this screen exists.
    Dashboard(Box<DashboardState>),
}

/// Application state
pub struct App {
    /// The start time of the application, used for computing uptime.
    start_time: Instant,

    /// Where the dashboard gets its snapshots from.
    source: Arc<dyn AnalyticsSource>,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Receives an external shutdown request (e.g. SIGINT).
    shutdown_receiver: broadcast::Receiver<()>,

    ui_config: UIConfig,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        source: Arc<dyn AnalyticsSource>,
        shutdown_receiver: broadcast::Receiver<()>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            start_time: Instant::now(),
            source,
            current_screen: Screen::Splash,
            shutdown_receiver,
            ui_config,
        }
    }

    /// Leaves the splash screen and mounts the dashboard, which starts polling.
    pub fn show_dashboard(&mut self) {
        let state = DashboardState::mount(
            self.source.clone(),
            self.start_time,
            self.ui_config.clone(),
        );
        self.current_screen = Screen::Dashboard(Box::new(state));
    }

    pub fn current_screen(&self) -> &Screen {
        &self.current_screen
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
///
/// Returning from here drops the dashboard and with it the poll timer.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_millis(SPLASH_DURATION_MS);

    // UI event loop
    loop {
        if app.shutdown_receiver.try_recv().is_ok() {
            return Ok(());
        }

        if let Screen::Dashboard(state) = &mut app.current_screen {
            state.update();
        }
        terminal.draw(|f| render(f, app.current_screen()))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration {
                app.show_dashboard();
                continue;
            }
        }

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                // Handle exit events
                let ctrl_c = key.code == KeyCode::Char('c')
                    && key.modifiers.contains(KeyModifiers::CONTROL);
                if ctrl_c || matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    return Ok(());
                }

                // Any other key skips the splash screen
                if let Screen::Splash = app.current_screen {
                    app.show_dashboard();
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}
