//! Session log: one CSV row per finished work or break session.
//!
//! ```text
//! Activity Type;Start Time;End Time;Duration (HH:MM:SS)
//! Work;2025-01-15T09:00:00+01:00;2025-01-15T10:02:00+01:00;1:02:00
//! Break;2025-01-15T10:02:00+01:00;2025-01-15T10:15:30+01:00;0:13:30
//! ```
//!
//! Writing never fails from the caller's point of view: I/O errors are
//! reported and the row is skipped.

use crate::libs::config::AppConfig;
use crate::libs::csv_log;
use crate::libs::formatter::{format_duration, format_timestamp};
use crate::libs::messages::Message;
use crate::libs::state::ActivityType;
use crate::{msg_debug, msg_error};
use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Sessions this short or shorter are not worth a row.
pub const MINIMUM_SESSION_DURATION_SECONDS: f64 = 1.0;

/// Whether a session of `duration` seconds is long enough to be recorded.
pub fn should_log_session(duration: f64) -> bool {
    duration > MINIMUM_SESSION_DURATION_SECONDS
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionRecord {
    #[serde(rename = "Activity Type")]
    pub activity_type: ActivityType,
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "End Time")]
    pub end_time: String,
    #[serde(rename = "Duration (HH:MM:SS)")]
    pub duration: String,
}

impl SessionRecord {
    pub fn new(activity_type: ActivityType, start_time: f64, end_time: f64, duration: f64) -> Self {
        Self {
            activity_type,
            start_time: format_timestamp(start_time),
            end_time: format_timestamp(end_time),
            duration: format_duration(duration),
        }
    }
}

/// Appends finished sessions to the configured CSV file.
///
/// Clones share the "already truncated" flag, so in test mode the file is
/// emptied exactly once per run no matter which clone writes first.
#[derive(Clone, Default)]
pub struct SessionLogger {
    truncated: Arc<AtomicBool>,
}

impl SessionLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self, config: &AppConfig, activity_type: ActivityType, start_time: f64, end_time: f64, duration: f64) {
        let Some(path) = config.csv_file.as_deref() else {
            return;
        };

        if !should_log_session(duration) {
            return;
        }

        let record = SessionRecord::new(activity_type, start_time, end_time, duration);
        match self.write(path, config.test_mode, &record) {
            Ok(()) => msg_debug!(Message::SessionLogged(activity_type.to_string(), record.duration.clone())),
            Err(e) => msg_error!(Message::SessionLogFailed(e.to_string())),
        }
    }

    fn write(&self, path: &Path, test_mode: bool, record: &SessionRecord) -> Result<()> {
        if test_mode && !self.truncated.swap(true, Ordering::SeqCst) {
            csv_log::truncate(path)?;
        }
        csv_log::append_record(path, record)
    }
}
