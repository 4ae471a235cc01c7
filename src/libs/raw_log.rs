//! Raw input telemetry, aggregated per collection interval.
//!
//! The input listener bumps lock-free counters for every event. A background
//! thread drains them every [`COLLECTION_INTERVAL`] and appends one summary
//! row to `<session log stem>_raw.csv`, together with the most recent active
//! window titles:
//!
//! ```text
//! timestamp;mouse_moves_count;mouse_clicks_count;mouse_scrolls_count;key_presses_count;activity_detected;active_window_1;active_window_2;active_window_3;active_window_4;active_window_5
//! 2025-01-15T09:00:05+01:00;112;3;0;41;true;main.rs - editor;Inbox - browser;;;
//! ```

use crate::libs::clock::Clock;
use crate::libs::csv_log;
use crate::libs::formatter::format_timestamp;
use crate::libs::input::Producer;
use crate::libs::messages::Message;
use crate::libs::window::{SharedWindows, MAX_WINDOW_TITLES};
use crate::{msg_debug, msg_error};
use anyhow::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Length of one aggregation window.
pub const COLLECTION_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    MouseMove,
    MouseClick,
    MouseScroll,
    KeyPress,
}

/// Event counts for one interval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActivitySummary {
    pub mouse_moves: u64,
    pub mouse_clicks: u64,
    pub mouse_scrolls: u64,
    pub key_presses: u64,
}

impl ActivitySummary {
    pub fn activity_detected(&self) -> bool {
        self.mouse_moves + self.mouse_clicks + self.mouse_scrolls + self.key_presses > 0
    }
}

/// Counters shared between the input listener and the raw logger.
#[derive(Debug, Default)]
pub struct RawActivityCounters {
    mouse_moves: AtomicU64,
    mouse_clicks: AtomicU64,
    mouse_scrolls: AtomicU64,
    key_presses: AtomicU64,
}

impl RawActivityCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, kind: InputKind) {
        let counter = match kind {
            InputKind::MouseMove => &self.mouse_moves,
            InputKind::MouseClick => &self.mouse_clicks,
            InputKind::MouseScroll => &self.mouse_scrolls,
            InputKind::KeyPress => &self.key_presses,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns the counts since the previous drain and resets them to zero.
    pub fn drain(&self) -> ActivitySummary {
        ActivitySummary {
            mouse_moves: self.mouse_moves.swap(0, Ordering::Relaxed),
            mouse_clicks: self.mouse_clicks.swap(0, Ordering::Relaxed),
            mouse_scrolls: self.mouse_scrolls.swap(0, Ordering::Relaxed),
            key_presses: self.key_presses.swap(0, Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Serialize)]
struct RawActivityRecord {
    timestamp: String,
    mouse_moves_count: u64,
    mouse_clicks_count: u64,
    mouse_scrolls_count: u64,
    key_presses_count: u64,
    activity_detected: bool,
    active_window_1: String,
    active_window_2: String,
    active_window_3: String,
    active_window_4: String,
    active_window_5: String,
}

/// Appends one interval summary to the raw log at `path`.
pub fn write_summary(
    path: &Path,
    timestamp: f64,
    summary: &ActivitySummary,
    windows: [String; MAX_WINDOW_TITLES],
) -> Result<()> {
    let [active_window_1, active_window_2, active_window_3, active_window_4, active_window_5] = windows;
    let record = RawActivityRecord {
        timestamp: format_timestamp(timestamp),
        mouse_moves_count: summary.mouse_moves,
        mouse_clicks_count: summary.mouse_clicks,
        mouse_scrolls_count: summary.mouse_scrolls,
        key_presses_count: summary.key_presses,
        activity_detected: summary.activity_detected(),
        active_window_1,
        active_window_2,
        active_window_3,
        active_window_4,
        active_window_5,
    };
    csv_log::append_record(path, &record)
}

/// Background thread that writes one summary row per interval.
pub struct RawActivityLogger {
    stop_tx: mpsc::Sender<()>,
    handle: JoinHandle<()>,
}

impl RawActivityLogger {
    /// Starts the logger. With `truncate_first` the file is emptied before the first row.
    pub fn spawn(
        path: PathBuf,
        counters: Arc<RawActivityCounters>,
        windows: SharedWindows,
        clock: Arc<dyn Clock>,
        interval: Duration,
        truncate_first: bool,
    ) -> Result<Self> {
        if truncate_first {
            csv_log::truncate(&path)?;
        }

        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        msg_debug!(Message::RawLogStarted(path.display().to_string()));

        let handle = thread::Builder::new().name("raw-activity-logger".into()).spawn(move || loop {
            let stopping = !matches!(stop_rx.recv_timeout(interval), Err(RecvTimeoutError::Timeout));

            let summary = counters.drain();
            let titles = windows.lock().slots();
            if let Err(e) = write_summary(&path, clock.wall(), &summary, titles) {
                msg_error!(Message::RawLogFailed(e.to_string()));
            }

            if stopping {
                break;
            }
        })?;

        Ok(Self { stop_tx, handle })
    }
}

impl Producer for RawActivityLogger {
    fn name(&self) -> &'static str {
        "raw activity logger"
    }

    /// Flushes the partial interval and joins the thread.
    fn stop(self: Box<Self>) {
        let name = self.name();
        let RawActivityLogger { stop_tx, handle } = *self;
        let _ = stop_tx.send(());
        if handle.join().is_err() {
            msg_error!(Message::ProducerPanicked(name.to_string()));
        }
    }
}
