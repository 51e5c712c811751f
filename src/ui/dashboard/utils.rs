//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::analytics::SensorReading;
use crate::consts::cli_consts::MAX_TABLE_ROWS;
use crate::events::Worker;
use ratatui::prelude::Color;
use std::collections::HashMap;
use std::fmt::Display;
use std::time::Duration;

/// Reading fields shown as table columns, in display order.
pub const READING_COLUMNS: [&str; 4] = ["timestamp", "sensor_id", "temperature", "humidity"];

/// One bar of the records-per-sensor chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartEntry {
    pub name: String,
    pub count: u64,
}

/// Get a ratatui color for a worker based on its type
pub fn get_worker_color(worker: &Worker) -> Color {
    match worker {
        Worker::Poller => Color::Cyan,
        Worker::Controller => Color::Yellow,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            if let Some(month_day) = date_part.get(5..10) {
                if let Some(hour_min_sec) = time_part.get(0..8) {
                    return format!("{} {}", month_day, hour_min_sec);
                }
            }
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Shorten transport errors that would otherwise flood the log panel.
pub fn clean_http_error_message(msg: &str) -> String {
    if msg.contains("error sending request") && msg.contains("timed out") {
        return msg
            .split(": error sending request")
            .next()
            .map(|prefix| format!("{}: request timed out", prefix))
            .unwrap_or_else(|| msg.to_string());
    }
    if msg.contains("error sending request") {
        return msg
            .split(": error sending request")
            .next()
            .map(|prefix| format!("{}: backend unreachable", prefix))
            .unwrap_or_else(|| msg.to_string());
    }
    msg.to_string()
}

/// One chart entry per key of `records_per_sensor`, sorted by name.
pub fn chart_entries(records_per_sensor: &HashMap<String, u64>) -> Vec<ChartEntry> {
    let mut entries: Vec<ChartEntry> = records_per_sensor
        .iter()
        .map(|(name, count)| ChartEntry {
            name: name.clone(),
            count: *count,
        })
        .collect();
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    entries
}

/// The readings shown in the table: the first ten, in backend order.
pub fn table_rows(readings: &[SensorReading]) -> &[SensorReading] {
    &readings[..readings.len().min(MAX_TABLE_ROWS)]
}

/// Column header for a reading field, e.g. `sensor_id` -> `SENSOR ID`.
pub fn column_header(field: &str) -> String {
    field.replace('_', " ").to_uppercase()
}

/// Cell values for one reading, matching [`READING_COLUMNS`].
pub fn reading_cells(reading: &SensorReading) -> [String; 4] {
    [
        reading.timestamp.clone(),
        reading.sensor_id.clone(),
        reading.temperature.to_string(),
        reading.humidity.to_string(),
    ]
}

/// A summary value followed by its unit, without rounding.
pub fn format_stat_value(value: impl Display, unit: &str) -> String {
    format!("{}{}", value, unit)
}

pub fn format_uptime(uptime: Duration) -> String {
    let secs = uptime.as_secs();
    if secs >= 86400 {
        format!(
            "{}d {}h {}m",
            secs / 86400,
            (secs % 86400) / 3600,
            (secs % 3600) / 60
        )
    } else if secs >= 3600 {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(i: usize) -> SensorReading {
        SensorReading {
            timestamp: format!("2024-05-01T10:00:{:02}", i),
            sensor_id: format!("sensor-{}", i),
            temperature: 20.0 + i as f64,
            humidity: 40.0,
        }
    }

    #[test]
    fn test_table_shows_at_most_ten_rows_in_order() {
        let readings: Vec<_> = (0..25).map(reading).collect();
        let rows = table_rows(&readings);
        assert_eq!(rows.len(), 10);
        assert_eq!(rows, &readings[..10]);

        let few: Vec<_> = (0..3).map(reading).collect();
        assert_eq!(table_rows(&few), few.as_slice());
        assert!(table_rows(&[]).is_empty());
    }

    #[test]
    fn test_one_chart_entry_per_sensor() {
        let records = HashMap::from([
            ("s2".to_string(), 7),
            ("s1".to_string(), 3),
            ("s3".to_string(), 0),
        ]);
        let entries = chart_entries(&records);
        assert_eq!(entries.len(), 3);
        for entry in &entries {
            assert_eq!(records.get(&entry.name), Some(&entry.count));
        }
        assert!(chart_entries(&HashMap::new()).is_empty());
    }

    #[test]
    fn test_column_header() {
        assert_eq!(column_header("sensor_id"), "SENSOR ID");
        assert_eq!(column_header("humidity"), "HUMIDITY");
        assert_eq!(READING_COLUMNS.map(column_header)[0], "TIMESTAMP");
    }

    #[test]
    fn test_stat_values_are_not_rounded() {
        assert_eq!(format_stat_value(21.5, "°C"), "21.5°C");
        assert_eq!(format_stat_value(21.456, "°C"), "21.456°C");
        assert_eq!(format_stat_value(55.25, "%"), "55.25%");
        assert_eq!(format_stat_value(42u64, ""), "42");
    }

    #[test]
    fn test_reading_cells_follow_column_order() {
        let cells = reading_cells(&reading(1));
        assert_eq!(cells[0], "2024-05-01T10:00:01");
        assert_eq!(cells[1], "sensor-1");
        assert_eq!(cells[2], "21");
        assert_eq!(cells[3], "40");
    }

    #[test]
    fn test_format_compact_timestamp() {
        assert_eq!(
            format_compact_timestamp("2024-05-01 10:15:30"),
            "05-01 10:15:30"
        );
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }

    #[test]
    fn test_clean_http_error_message() {
        let raw = "Poll #3 failed: Network failure: error sending request for url (http://127.0.0.1:8000/)";
        assert_eq!(
            clean_http_error_message(raw),
            "Poll #3 failed: Network failure: backend unreachable"
        );
        assert_eq!(clean_http_error_message("all good"), "all good");
    }

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(Duration::from_secs(75)), "1m 15s");
        assert_eq!(format_uptime(Duration::from_secs(3_725)), "1h 2m 5s");
        assert_eq!(format_uptime(Duration::from_secs(90_061)), "1d 1h 1m");
    }
}
