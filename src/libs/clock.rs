//! Time sources used by the state machine.
//!
//! Two clocks are read side by side. The wall clock (seconds since the Unix
//! epoch) keeps counting while the host is suspended and is what gets written
//! to the session log. The monotonic clock is immune to NTP corrections and
//! DST changes, but stands still while the machine sleeps. Comparing the two
//! is how the state machine notices a suspend/resume cycle.
//!
//! Components never read time directly; they receive an `Arc<dyn Clock>` so
//! tests can drive time by hand with [`ManualClock`].

use chrono::Utc;
use parking_lot::Mutex;
use std::time::Instant;

/// A pair of time sources: wall clock and monotonic clock, both in seconds.
pub trait Clock: Send + Sync {
    /// Seconds since the Unix epoch.
    fn wall(&self) -> f64;

    /// Seconds since an arbitrary, process-local anchor.
    fn monotonic(&self) -> f64;
}

/// Production clock backed by `chrono::Utc` and `std::time::Instant`.
pub struct SystemClock {
    anchor: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { anchor: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn wall(&self) -> f64 {
        Utc::now().timestamp_micros() as f64 / 1_000_000.0
    }

    fn monotonic(&self) -> f64 {
        self.anchor.elapsed().as_secs_f64()
    }
}

/// Hand-driven clock for tests and simulations.
///
/// `advance` moves both clocks. `suspend` moves only the wall clock, the way a
/// sleeping host does; a negative value models the wall clock being set back.
pub struct ManualClock {
    now: Mutex<(f64, f64)>,
}

impl ManualClock {
    pub fn new(wall: f64, monotonic: f64) -> Self {
        Self {
            now: Mutex::new((wall, monotonic)),
        }
    }

    pub fn advance(&self, secs: f64) {
        let mut now = self.now.lock();
        now.0 += secs;
        now.1 += secs;
    }

    pub fn suspend(&self, secs: f64) {
        self.now.lock().0 += secs;
    }
}

impl Clock for ManualClock {
    fn wall(&self) -> f64 {
        self.now.lock().0
    }

    fn monotonic(&self) -> f64 {
        self.now.lock().1
    }
}
