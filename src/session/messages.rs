//! Unified messaging system for session operations

use crate::refresh::DisplayState;
use crate::ui::dashboard::components::status::{ERROR_TITLE, LOADING_TEXT};
use crate::ui::dashboard::utils::format_stat_value;

// ANSI Color Codes for session messages
pub const COLOR_INFO: &str = "\x1b[1;36m"; // Bold Cyan
pub const COLOR_SUCCESS: &str = "\x1b[1;32m"; // Bold Green
pub const COLOR_WARN: &str = "\x1b[1;91m"; // Bold Bright Red
pub const COLOR_RESET: &str = "\x1b[0m";

/// Session-specific message types
#[derive(Debug, Clone, PartialEq)]
pub enum SessionMessage {
    /// Normal session start/shutdown messages
    Info(String),
    /// Success messages for completed operations
    Success(String),
    /// The backend could not be reached or answered badly
    Warn(String),
}

impl SessionMessage {
    /// Create an info message
    pub fn info(msg: impl Into<String>) -> Self {
        Self::Info(msg.into())
    }

    /// Create a success message
    pub fn success(msg: impl Into<String>) -> Self {
        Self::Success(msg.into())
    }

    /// Create a warning message
    pub fn warn(msg: impl Into<String>) -> Self {
        Self::Warn(msg.into())
    }

    /// Print the message with appropriate formatting
    pub fn print(&self) {
        match self {
            Self::Info(msg) => {
                println!("{}[INFO]{} {}", COLOR_INFO, COLOR_RESET, msg);
            }
            Self::Success(msg) => {
                println!("{}[SUCCESS]{} {}", COLOR_SUCCESS, COLOR_RESET, msg);
            }
            Self::Warn(msg) => {
                println!("{}[WARN]{} {}", COLOR_WARN, COLOR_RESET, msg);
            }
        }
    }
}

/// Print session startup message
pub fn print_session_starting(mode: &str, api_url: &str) {
    SessionMessage::info(format!("Starting {} mode, polling {}", mode, api_url)).print();
}

/// Print session shutdown message
pub fn print_session_shutdown() {
    SessionMessage::info("Shutting down...").print();
}

/// Print session exit message
pub fn print_session_exit_success() {
    SessionMessage::success("Sensor dashboard exited successfully").print();
}

/// One-line console rendering of what the dashboard would currently show.
pub fn display_state_message(state: &DisplayState) -> SessionMessage {
    match state {
        DisplayState::Loading => SessionMessage::info(LOADING_TEXT),
        DisplayState::Failed(message) => SessionMessage::warn(format!("{} {}", ERROR_TITLE, message)),
        DisplayState::Ready(snapshot) => SessionMessage::success(format!(
            "Total Records: {} | Average Temp: {} | Max Temp: {} | Average Humidity: {} | Sensors: {}",
            snapshot.total_records,
            format_stat_value(snapshot.average_temperature, "°C"),
            format_stat_value(snapshot.max_temperature, "°C"),
            format_stat_value(snapshot.average_humidity, "%"),
            snapshot.records_per_sensor.len()
        )),
    }
}
