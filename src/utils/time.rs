//! Timestamp parsing and formatting utilities

use std::time::Duration;

/// Convert an `H:MM:SS` / `HH:MM:SS` timestamp to whole seconds.
///
/// Returns `None` for anything else, including minute or second fields of 60 or more.
pub fn timestamp_to_seconds(timestamp: &str) -> Option<u64> {
    let parts: Vec<&str> = timestamp.trim().split(':').collect();
    if parts.len() != 3 {
        return None;
    }

    let (hours, minutes, seconds) = (parts[0], parts[1], parts[2]);
    if hours.is_empty() || hours.len() > 2 || minutes.len() != 2 || seconds.len() != 2 {
        return None;
    }
    if !parts.iter().all(|p| p.bytes().all(|b| b.is_ascii_digit())) {
        return None;
    }

    let hours: u64 = hours.parse().ok()?;
    let minutes: u64 = minutes.parse().ok()?;
    let seconds: u64 = seconds.parse().ok()?;

    if minutes >= 60 || seconds >= 60 {
        return None;
    }

    Some(hours * 3600 + minutes * 60 + seconds)
}

/// Format a duration as HH:MM:SS.mmm for log output
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    let milliseconds = duration.subsec_millis();

    format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, seconds, milliseconds)
}
