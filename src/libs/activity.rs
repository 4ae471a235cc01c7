//! Last-activity bookkeeping shared between input producers and the tick loop.
//!
//! Input callbacks run on their own threads and only ever call
//! [`ActivityTracker::on_activity`]. The state machine reads the stored pair once
//! per tick. The wall and monotonic values are stored as one [`ActivityStamp`]
//! behind a single lock, so a reader never sees a wall value from one event
//! mixed with a monotonic value from another.

use crate::libs::clock::Clock;
use parking_lot::Mutex;
use std::sync::Arc;

/// Wall-clock and monotonic time of one activity event, always written together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivityStamp {
    pub wall: f64,
    pub monotonic: f64,
}

/// Cloneable handle to the last-activity marker.
#[derive(Clone)]
pub struct ActivityTracker {
    clock: Arc<dyn Clock>,
    last: Arc<Mutex<ActivityStamp>>,
}

impl ActivityTracker {
    /// Creates a tracker seeded with the current time of `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        let stamp = ActivityStamp {
            wall: clock.wall(),
            monotonic: clock.monotonic(),
        };
        Self {
            clock,
            last: Arc::new(Mutex::new(stamp)),
        }
    }

    /// Records "now" as the latest activity. Safe to call from any thread; last write wins.
    pub fn on_activity(&self) {
        let stamp = ActivityStamp {
            wall: self.clock.wall(),
            monotonic: self.clock.monotonic(),
        };
        *self.last.lock() = stamp;
    }

    pub fn last_activity(&self) -> ActivityStamp {
        *self.last.lock()
    }

    pub fn get_last_activity_time(&self) -> f64 {
        self.last_activity().wall
    }

    pub fn get_last_activity_monotonic(&self) -> f64 {
        self.last_activity().monotonic
    }

    /// Overrides the marker during startup or resume.
    ///
    /// Without an explicit monotonic value the wall time is taken to correspond
    /// to the current monotonic instant.
    pub fn set_last_activity_time(&self, wall: f64, monotonic: Option<f64>) {
        let monotonic = monotonic.unwrap_or_else(|| self.clock.monotonic());
        *self.last.lock() = ActivityStamp { wall, monotonic };
    }
}
