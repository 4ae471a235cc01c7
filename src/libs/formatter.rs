//! Time formatting for the session log and notifications.
//!
//! ## Format Specifications
//!
//! ### Duration Format
//! Durations follow the `H:MM:SS` pattern:
//! - Hours are not padded and are not wrapped at 24
//! - Minutes and seconds are zero-padded to 2 digits
//! - Fractions of a second are dropped
//! - Negative durations are treated as `0:00:00`
//!
//! ### Timestamp Format
//! Timestamps are ISO-8601 strings in local time with an explicit offset,
//! e.g. `2025-01-15T09:30:00+01:00`.
//!
//! ## Examples
//!
//! ```rust
//! use standup::libs::formatter::format_duration;
//!
//! assert_eq!(format_duration(5025.0), "1:23:45");
//! assert_eq!(format_duration(90000.0), "25:00:00");
//! ```

use chrono::{DateTime, Local, SecondsFormat};

/// Formats a number of seconds as `H:MM:SS`.
///
/// ```rust
/// use standup::libs::formatter::format_duration;
///
/// assert_eq!(format_duration(0.0), "0:00:00");
/// assert_eq!(format_duration(59.9), "0:00:59");
/// assert_eq!(format_duration(3600.0), "1:00:00");
/// assert_eq!(format_duration(-5.0), "0:00:00");
/// ```
pub fn format_duration(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 { seconds.trunc() as u64 } else { 0 };
    let hours = total / 3600;
    let mins = (total % 3600) / 60;
    let secs = total % 60;
    format!("{}:{:02}:{:02}", hours, mins, secs)
}

/// Converts a wall-clock timestamp (seconds since the Unix epoch) to local time.
pub fn to_local(timestamp: f64) -> Option<DateTime<Local>> {
    if !timestamp.is_finite() {
        return None;
    }
    let secs = timestamp.floor();
    // Microsecond precision, the resolution the clocks are sampled at.
    let micros = ((timestamp - secs) * 1_000_000.0).round().min(999_999.0) as u32;
    let nanos = micros * 1_000;
    DateTime::from_timestamp(secs as i64, nanos).map(|utc| utc.with_timezone(&Local))
}

/// Formats a wall-clock timestamp as a local-time ISO-8601 string with offset.
///
/// Out-of-range values are written as the raw number rather than dropped.
pub fn format_timestamp(timestamp: f64) -> String {
    match to_local(timestamp) {
        Some(local) => local.to_rfc3339_opts(SecondsFormat::AutoSi, false),
        None => timestamp.to_string(),
    }
}
