//! Input event producers.
//!
//! A dedicated thread runs `rdev::listen` and turns every pointer move, button
//! press, wheel scroll and key press into an activity mark plus a raw counter
//! bump. The callback does no I/O and takes one short lock, so it never holds
//! up the event stream.

use crate::libs::activity::ActivityTracker;
use crate::libs::messages::Message;
use crate::libs::raw_log::{InputKind, RawActivityCounters};
use crate::msg_error;
use anyhow::Result;
use rdev::{listen, Event, EventType};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

const LISTENER_RETRY_DELAY: Duration = Duration::from_secs(1);

/// A background context that feeds the monitor and must be stopped on shutdown.
pub trait Producer: Send {
    fn name(&self) -> &'static str;

    fn stop(self: Box<Self>);
}

/// Maps an rdev event to the kind of input it represents, if it counts as activity.
pub fn input_kind(event_type: &EventType) -> Option<InputKind> {
    match event_type {
        EventType::MouseMove { .. } => Some(InputKind::MouseMove),
        EventType::ButtonPress(_) => Some(InputKind::MouseClick),
        EventType::Wheel { .. } => Some(InputKind::MouseScroll),
        EventType::KeyPress(_) => Some(InputKind::KeyPress),
        _ => None,
    }
}

/// Global keyboard and mouse listener.
pub struct InputListener {
    stopped: Arc<AtomicBool>,
}

impl InputListener {
    /// Spawns the listener thread. A failed listener is restarted after a short delay.
    pub fn spawn(tracker: ActivityTracker, counters: Arc<RawActivityCounters>) -> Result<Self> {
        let stopped = Arc::new(AtomicBool::new(false));
        let shared_stopped = stopped.clone();

        thread::Builder::new().name("input-listener".into()).spawn(move || loop {
            let tracker = tracker.clone();
            let counters = counters.clone();
            let callback_stopped = shared_stopped.clone();

            let result = listen(move |event: Event| {
                if callback_stopped.load(Ordering::Relaxed) {
                    return;
                }
                if let Some(kind) = input_kind(&event.event_type) {
                    tracker.on_activity();
                    counters.record(kind);
                }
            });

            match result {
                Err(e) if !shared_stopped.load(Ordering::Relaxed) => {
                    msg_error!(Message::InputListenerFailed(format!("{:?}", e)));
                    thread::sleep(LISTENER_RETRY_DELAY);
                }
                _ => break,
            }
        })?;

        Ok(Self { stopped })
    }
}

impl Producer for InputListener {
    fn name(&self) -> &'static str {
        "input listener"
    }

    /// `rdev::listen` cannot be interrupted, so the thread is left detached
    /// and the callback turns into a no-op.
    fn stop(self: Box<Self>) {
        self.stopped.store(true, Ordering::Relaxed);
    }
}
