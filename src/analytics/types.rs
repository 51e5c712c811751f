//! Analytics payload types
//!
//! Field names follow the backend's JSON; the Rust names are the ones the
//! rest of the dashboard uses.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One raw reading as reported by the backend.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SensorReading {
    /// Opaque point in time, displayed as-is.
    pub timestamp: String,
    pub sensor_id: String,
    pub temperature: f64,
    pub humidity: f64,
}

/// The complete payload of one successful poll.
///
/// Snapshots are never patched: every successful poll produces a new one
/// that replaces the previous one wholesale.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnalyticsSnapshot {
    pub total_records: u64,
    #[serde(rename = "average_temp")]
    pub average_temperature: f64,
    #[serde(rename = "max_temp")]
    pub max_temperature: f64,
    #[serde(rename = "min_temp")]
    pub min_temperature: f64,
    pub average_humidity: f64,
    pub records_per_sensor: HashMap<String, u64>,
    /// Order is the server's; it is never re-sorted.
    #[serde(rename = "raw_data")]
    pub raw_readings: Vec<SensorReading>,
}
