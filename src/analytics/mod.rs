use crate::analytics::error::FetchError;
use crate::environment::Environment;

pub(crate) mod client;
pub use client::AnalyticsClient;
pub mod error;
pub mod types;

pub use types::{AnalyticsSnapshot, SensorReading};

#[cfg(test)]
use mockall::automock;

/// Anything that can produce one analytics snapshot per call.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait AnalyticsSource: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Performs one poll against the analytics endpoint.
    async fn fetch_snapshot(&self) -> Result<AnalyticsSnapshot, FetchError>;
}
