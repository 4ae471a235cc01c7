//! Orchestrator: wires the tracker, state machine, session log and state file
//! together, owns the tick loop and runs the shutdown sequence.
//!
//! ## Lifecycle
//!
//! 1. [`App::startup`] loads the runtime state file and reconciles it with the
//!    time that passed while the process was not running
//! 2. [`App::run`] ticks the state machine until a shutdown signal arrives,
//!    saving the state every `break_duration_sec`
//! 3. [`App::shutdown`] persists the state, logs the unfinished session and
//!    stops the input producers
//!
//! The periodic save bounds what an abrupt kill or power loss can lose to one
//! save window.

use crate::libs::activity::ActivityTracker;
use crate::libs::clock::Clock;
use crate::libs::config::AppConfig;
use crate::libs::formatter::format_duration;
use crate::libs::handler::StateHandler;
use crate::libs::input::Producer;
use crate::libs::messages::Message;
use crate::libs::notifier::Notifier;
use crate::libs::persistence::{PersistedState, StatePersistence};
use crate::libs::raw_log::COLLECTION_INTERVAL;
use crate::libs::session_log::{should_log_session, SessionLogger};
use crate::libs::state::{ActivityType, AppState, State};
use crate::{msg_debug, msg_info};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::time;

/// Pause between state machine ticks.
pub const TICK_INTERVAL: Duration = Duration::from_secs(5);

/// Faster tick used in test mode.
pub const TEST_TICK_INTERVAL: Duration = Duration::from_secs(1);

const TEST_MODE_DURATION_MULTIPLIER: u32 = 3;
const TEST_MODE_BUFFER: Duration = Duration::from_secs(1);

/// Decides when the tick loop writes the runtime state, measured on the
/// monotonic clock.
#[derive(Debug, Clone, Copy)]
pub struct SaveCadence {
    every: f64,
    last_save: f64,
}

impl SaveCadence {
    pub fn new(every: f64, started: f64) -> Self {
        Self { every, last_save: started }
    }

    /// True once `every` seconds have passed since the last save; restarts the window.
    pub fn due(&mut self, now: f64) -> bool {
        if now - self.last_save < self.every {
            return false;
        }
        self.last_save = now;
        true
    }
}

pub struct App {
    config: AppConfig,
    clock: Arc<dyn Clock>,
    tracker: ActivityTracker,
    session_log: SessionLogger,
    notifier: Arc<dyn Notifier>,
    handler: StateHandler,
    persistence: StatePersistence,
    producers: Mutex<Vec<Box<dyn Producer>>>,
}

impl App {
    pub fn new(config: AppConfig, clock: Arc<dyn Clock>, notifier: Arc<dyn Notifier>) -> Self {
        let tracker = ActivityTracker::new(clock.clone());
        let session_log = SessionLogger::new();
        let handler = StateHandler::new(clock.clone(), tracker.clone(), session_log.clone(), notifier.clone());

        Self {
            config,
            clock,
            tracker,
            session_log,
            notifier,
            handler,
            persistence: StatePersistence::new(),
            producers: Mutex::new(Vec::new()),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn tracker(&self) -> &ActivityTracker {
        &self.tracker
    }

    pub fn clock(&self) -> Arc<dyn Clock> {
        self.clock.clone()
    }

    /// Registers a producer to be stopped by [`App::shutdown`].
    pub fn add_producer(&self, producer: Box<dyn Producer>) {
        self.producers.lock().push(producer);
    }

    pub fn tick_interval(&self) -> Duration {
        if self.config.test_mode {
            TEST_TICK_INTERVAL
        } else {
            TICK_INTERVAL
        }
    }

    /// Loads the saved runtime state, reconciles it and saves the result.
    pub fn startup(&self) -> AppState {
        let saved = self.persistence.load(&self.config);
        let app_state = self.resume(saved);
        self.save(&app_state);
        app_state
    }

    /// Rebuilds the runtime state from a saved snapshot.
    ///
    /// A saved ACTIVE session whose last input is at least `break_duration_sec`
    /// old ended while the monitor was down, at `last_activity + break_duration_sec`.
    /// It is logged retroactively and the monitor resumes IDLE from that point.
    /// Anything else resumes the saved state as is, with the monotonic anchors
    /// taken from now. Missing or unusable values fall back to a fresh start.
    pub fn resume(&self, saved: Option<PersistedState>) -> AppState {
        let now_wall = self.clock.wall();
        let now_mono = self.clock.monotonic();
        let fresh = AppState::initial(now_wall, now_mono);

        let Some(saved) = saved else {
            msg_info!(Message::StartingFresh);
            self.tracker
                .set_last_activity_time(fresh.session_start_time, Some(fresh.session_start_monotonic));
            return fresh;
        };

        let current_state = saved
            .current_state
            .as_deref()
            .and_then(State::from_name)
            .unwrap_or(fresh.current_state);
        let session_start = saved
            .session_start_time
            .filter(|t| t.is_finite())
            .unwrap_or(fresh.session_start_time);
        let break_reminder_shown = saved.break_reminder_shown.unwrap_or(false);
        let last_activity = saved
            .last_activity_time
            .filter(|t| t.is_finite())
            .unwrap_or(session_start);

        let break_secs = self.config.break_duration_sec as f64;
        let downtime_gap = now_wall - last_activity;

        if current_state == State::Active && downtime_gap >= break_secs {
            let implied_end = last_activity + break_secs;
            let work = implied_end - session_start;

            if should_log_session(work) {
                self.session_log
                    .log(&self.config, ActivityType::Work, session_start, implied_end, work);
            }
            self.notifier.show(
                &Message::WelcomeBackHeader.to_string(),
                &Message::WelcomeBackBreakLasted(format_duration(now_wall - implied_end)).to_string(),
                &Message::WelcomeBackNewSession.to_string(),
            );
            msg_info!(Message::ResumeClosedWorkSession(format_duration(work)));

            self.tracker.set_last_activity_time(last_activity, Some(now_mono));
            return fresh.begin_session(State::Idle, implied_end, now_mono);
        }

        msg_info!(Message::ResumedState(current_state.name().to_string()));
        self.tracker.set_last_activity_time(now_wall, Some(now_mono));
        AppState {
            current_state,
            session_start_time: session_start,
            session_start_monotonic: now_mono,
            activation_candidate_start_monotonic: None,
            break_reminder_shown,
        }
    }

    pub fn save(&self, app_state: &AppState) {
        self.persistence
            .save(&self.config, app_state, self.tracker.get_last_activity_time());
    }

    pub fn tick(&self, app_state: AppState) -> AppState {
        self.handler.tick(app_state, &self.config)
    }

    /// Save cadence of one `break_duration_sec`, starting now.
    pub fn save_cadence(&self) -> SaveCadence {
        SaveCadence::new(self.config.break_duration_sec as f64, self.clock.monotonic())
    }

    /// One loop iteration: tick the state machine, then save if the cadence is due.
    pub fn step(&self, app_state: AppState, cadence: &mut SaveCadence) -> AppState {
        let app_state = self.tick(app_state);
        if cadence.due(self.clock.monotonic()) {
            self.save(&app_state);
        }
        app_state
    }

    /// Ticks until `shutdown` resolves (or, in test mode, until the test run
    /// length elapses) and returns the final state.
    ///
    /// A dropped sender counts as a shutdown request.
    pub async fn run(&self, mut app_state: AppState, mut shutdown: oneshot::Receiver<()>) -> AppState {
        let tick = self.tick_interval();
        let test_run_limit = (COLLECTION_INTERVAL * TEST_MODE_DURATION_MULTIPLIER + TEST_MODE_BUFFER).as_secs_f64();
        let started = self.clock.monotonic();
        let mut cadence = self.save_cadence();

        if self.config.test_mode {
            msg_info!(Message::MonitorTestMode);
        }
        msg_info!(Message::MonitorStarted {
            work_duration: self.config.work_duration_sec,
            break_duration: self.config.break_duration_sec,
            activation_threshold: self.config.activation_threshold_sec,
        });

        loop {
            app_state = self.step(app_state, &mut cadence);

            if self.config.test_mode && self.clock.monotonic() - started >= test_run_limit {
                msg_info!(Message::MonitorTestModeExiting(test_run_limit as u64));
                break;
            }

            tokio::select! {
                _ = &mut shutdown => {
                    msg_info!(Message::MonitorShuttingDown);
                    break;
                }
                _ = time::sleep(tick) => {}
            }
        }

        app_state
    }

    /// The one shutdown sequence, used by every exit path: persist the state,
    /// log the unfinished session, then stop the producers.
    pub fn shutdown(&self, app_state: &AppState) {
        msg_info!(Message::ShutdownSavingSession);
        self.save(app_state);

        let duration = self.handler.session_duration(app_state);
        if should_log_session(duration) {
            self.session_log.log(
                &self.config,
                app_state.current_state.activity_type(),
                app_state.session_start_time,
                self.clock.wall(),
                duration,
            );
        }

        let producers = std::mem::take(&mut *self.producers.lock());
        for producer in producers {
            let name = producer.name();
            producer.stop();
            msg_debug!(Message::ProducerStopped(name.to_string()));
        }

        msg_info!(Message::MonitorStopped);
    }
}
