//! Active window telemetry.
//!
//! [`WindowMonitor`] polls the focused window once per
//! [`WINDOW_POLL_INTERVAL`] and keeps the last [`MAX_WINDOW_TITLES`] distinct
//! titles, most recent first, for the raw activity log.

use crate::libs::input::Producer;
use crate::libs::messages::Message;
use crate::msg_error;
use active_win_pos_rs::get_active_window;
use anyhow::Result;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

pub const MAX_WINDOW_TITLES: usize = 5;

pub const WINDOW_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Recorded when no window has focus or the platform lookup fails.
pub const NO_WINDOW_TITLE: &str = "No active window";

/// Most-recent-first list of distinct window titles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentWindows {
    titles: VecDeque<String>,
}

/// Title list shared between the poller and the raw logger.
pub type SharedWindows = Arc<Mutex<RecentWindows>>;

impl RecentWindows {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves `title` to the front. A title seen earlier is not duplicated and
    /// the oldest entry falls off once the list is full.
    pub fn push(&mut self, title: &str) {
        if self.titles.front().is_some_and(|front| front == title) {
            return;
        }
        if let Some(pos) = self.titles.iter().position(|t| t == title) {
            self.titles.remove(pos);
        }
        self.titles.push_front(title.to_string());
        self.titles.truncate(MAX_WINDOW_TITLES);
    }

    pub fn titles(&self) -> Vec<&str> {
        self.titles.iter().map(String::as_str).collect()
    }

    /// One entry per CSV column; unused slots are empty.
    pub fn slots(&self) -> [String; MAX_WINDOW_TITLES] {
        std::array::from_fn(|i| self.titles.get(i).cloned().unwrap_or_default())
    }
}

/// Title of the focused window as reported by the OS.
pub fn active_window_title() -> String {
    match get_active_window() {
        Ok(window) => window.title,
        Err(_) => NO_WINDOW_TITLE.to_string(),
    }
}

/// Background thread feeding [`RecentWindows`].
pub struct WindowMonitor {
    stop_tx: mpsc::Sender<()>,
    handle: JoinHandle<()>,
}

impl WindowMonitor {
    pub fn spawn(windows: SharedWindows, interval: Duration) -> Result<Self> {
        Self::spawn_with(windows, interval, active_window_title)
    }

    /// Like [`WindowMonitor::spawn`] with a custom title source. The first
    /// poll happens immediately.
    pub fn spawn_with<F>(windows: SharedWindows, interval: Duration, mut poll: F) -> Result<Self>
    where
        F: FnMut() -> String + Send + 'static,
    {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let handle = thread::Builder::new().name("window-monitor".into()).spawn(move || loop {
            let title = poll();
            windows.lock().push(&title);

            if !matches!(stop_rx.recv_timeout(interval), Err(RecvTimeoutError::Timeout)) {
                break;
            }
        })?;

        Ok(Self { stop_tx, handle })
    }
}

impl Producer for WindowMonitor {
    fn name(&self) -> &'static str {
        "window monitor"
    }

    fn stop(self: Box<Self>) {
        let name = self.name();
        let WindowMonitor { stop_tx, handle } = *self;
        let _ = stop_tx.send(());
        if handle.join().is_err() {
            msg_error!(Message::ProducerPanicked(name.to_string()));
        }
    }
}
