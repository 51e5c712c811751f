pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains all configuration constants for the dashboard,
    //! organized by functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Maximum number of buffered events between the poller and the UI
    pub const EVENT_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // ENDPOINT CONFIGURATION
    // =============================================================================

    /// Analytics endpoint used when nothing overrides it.
    pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api/v1/analytics";

    /// Environment variable that overrides the analytics endpoint.
    pub const API_URL_ENV_VAR: &str = "DASHBOARD_API_URL";

    /// Directory (under $HOME) holding the persisted configuration.
    pub const CONFIG_DIR: &str = ".sensor-dashboard";

    /// Name of the persisted configuration file.
    pub const CONFIG_FILE: &str = "config.json";

    // =============================================================================
    // POLLING CONFIGURATION
    // =============================================================================

    /// Refresh polling configuration
    pub mod polling {
        use std::time::Duration;

        /// Fixed interval between analytics polls (milliseconds)
        pub const POLL_INTERVAL_MS: u64 = 5_000;

        /// Connect timeout for a single poll (seconds)
        pub const CONNECT_TIMEOUT_SECS: u64 = 10;

        /// Total request timeout for a single poll (seconds)
        pub const REQUEST_TIMEOUT_SECS: u64 = 10;

        /// Helper function to get the poll interval
        pub const fn poll_interval() -> Duration {
            Duration::from_millis(POLL_INTERVAL_MS)
        }

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }

    // =============================================================================
    // DISPLAY CONFIGURATION
    // =============================================================================

    /// Message shown whenever the latest poll failed, whatever the cause.
    pub const FETCH_FAILURE_MESSAGE: &str =
        "Could not connect to the backend. Please ensure it's running and reachable.";

    /// Maximum number of raw readings rendered in the readings table.
    pub const MAX_TABLE_ROWS: usize = 10;

    /// How long the splash screen stays up unless a key is pressed (milliseconds)
    pub const SPLASH_DURATION_MS: u64 = 2_000;
}
