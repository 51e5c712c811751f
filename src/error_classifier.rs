use crate::analytics::error::FetchError;
use crate::logging::LogLevel;

#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Log level for a failed poll. Display is the same whatever the level.
    pub fn classify_fetch_error(&self, error: &FetchError) -> LogLevel {
        match error {
            // Non-critical: temporary server issues
            FetchError::Http { status, .. } if *status == 429 => LogLevel::Info,
            FetchError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Critical: wrong endpoint, auth, or a payload we cannot read
            FetchError::Http { status, .. } if (400..=499).contains(status) => LogLevel::Error,
            FetchError::Decode(_) => LogLevel::Error,

            // Network issues - usually temporary
            _ => LogLevel::Warn,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}
