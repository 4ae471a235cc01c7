//! The activity state machine.
//!
//! Once per tick the orchestrator hands the current [`AppState`] to
//! [`StateHandler::tick`], which returns the next state. A tick may also append
//! one row to the session log and show one notification; when both happen
//! the row is written first.
//!
//! ## States
//!
//! ```text
//!            no input for break_duration_sec
//!   ACTIVE ───────────────────────────────────▶ IDLE
//!     ▲                                           │
//!     │   dense input sustained for               │
//!     └──────── activation_threshold_sec ─────────┘
//! ```
//!
//! ## Dual-Clock Elapsed Time
//!
//! Every "time since X" is measured on both clocks. The monotonic delta is
//! used normally because it ignores wall-clock corrections. When the wall
//! delta exceeds it by more than [`SLEEP_DETECTION_THRESHOLD_SECONDS`] the
//! host was suspended, and the wall delta is used so the sleep counts as
//! real elapsed time.
//!
//! ## Debounced Activation
//!
//! A single bump of the mouse must not end a break. While IDLE, recent input
//! starts an activation candidate; it is confirmed only if input keeps
//! arriving at least every `activation_threshold_sec / 10` seconds for
//! `activation_threshold_sec` seconds. A gap cancels the candidate.

use crate::libs::activity::ActivityTracker;
use crate::libs::clock::Clock;
use crate::libs::config::{AppConfig, DEFAULT_BREAK_MESSAGE};
use crate::libs::formatter::format_duration;
use crate::libs::messages::Message;
use crate::libs::notifier::Notifier;
use crate::libs::session_log::{should_log_session, SessionLogger};
use crate::libs::state::{AppState, State};
use crate::{msg_debug, msg_info};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Wall-minus-monotonic drift above which a suspend/resume is assumed.
pub const SLEEP_DETECTION_THRESHOLD_SECONDS: f64 = 60.0;

/// The maximum gap between input events during activation is the
/// activation threshold divided by this.
pub const ACTIVATION_GAP_DIVISOR: f64 = 10.0;

const PUSHUPS_PER_MINUTE: f64 = 1.0 / 10.0;
const SECONDS_PER_MINUTE: f64 = 60.0;

/// Picks the authoritative elapsed time from the two clock deltas.
///
/// ```rust
/// use standup::libs::handler::reconcile_elapsed;
///
/// // Clocks agree: the monotonic delta wins.
/// assert_eq!(reconcile_elapsed(30.5, 30.0), 30.0);
/// // An hour of suspend: only the wall clock saw it.
/// assert_eq!(reconcile_elapsed(3700.0, 2.0), 3700.0);
/// ```
pub fn reconcile_elapsed(wall_delta: f64, monotonic_delta: f64) -> f64 {
    if wall_delta - monotonic_delta > SLEEP_DETECTION_THRESHOLD_SECONDS {
        wall_delta
    } else {
        monotonic_delta
    }
}

/// Suggested exercise for a work session: one pushup per ten minutes, rounded up.
pub fn pushup_goal(session_seconds: f64) -> u64 {
    let goal = session_seconds * PUSHUPS_PER_MINUTE / SECONDS_PER_MINUTE;
    goal.ceil().max(0.0) as u64
}

/// Decides transitions, reminders and session boundaries.
pub struct StateHandler {
    clock: Arc<dyn Clock>,
    tracker: ActivityTracker,
    session_log: SessionLogger,
    notifier: Arc<dyn Notifier>,
    /// Number of reminders shown so far; selects the next break message.
    reminders_shown: AtomicUsize,
}

impl StateHandler {
    pub fn new(clock: Arc<dyn Clock>, tracker: ActivityTracker, session_log: SessionLogger, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            clock,
            tracker,
            session_log,
            notifier,
            reminders_shown: AtomicUsize::new(0),
        }
    }

    /// Runs the handler for the state the machine is currently in.
    pub fn tick(&self, app_state: AppState, config: &AppConfig) -> AppState {
        match app_state.current_state {
            State::Active => self.handle_active_state(app_state, config),
            State::Idle => self.handle_idle_state(app_state, config),
        }
    }

    /// Seconds since the last recorded input, using the dual-clock rule.
    pub fn time_since_last_activity(&self) -> f64 {
        self.time_since_last_activity_at(self.clock.wall(), self.clock.monotonic())
    }

    /// Length of the current session so far, using the dual-clock rule.
    pub fn session_duration(&self, app_state: &AppState) -> f64 {
        session_duration_at(app_state, self.clock.wall(), self.clock.monotonic())
    }

    /// ACTIVE tick: end the work session after `break_duration_sec` without
    /// input, otherwise remind once the session reaches `work_duration_sec`.
    pub fn handle_active_state(&self, app_state: AppState, config: &AppConfig) -> AppState {
        let now_wall = self.clock.wall();
        let now_mono = self.clock.monotonic();
        let since_activity = self.time_since_last_activity_at(now_wall, now_mono);

        if since_activity >= config.break_duration_sec as f64 {
            return self.transition_to_idle(app_state, config, now_wall, now_mono);
        }

        let session = session_duration_at(&app_state, now_wall, now_mono);
        if !app_state.break_reminder_shown && session >= config.work_duration_sec as f64 {
            return self.show_break_reminder(app_state, config, session);
        }

        app_state
    }

    /// IDLE tick: track the activation candidate and end the break once
    /// dense input has been sustained for `activation_threshold_sec`.
    pub fn handle_idle_state(&self, app_state: AppState, config: &AppConfig) -> AppState {
        let now_wall = self.clock.wall();
        let now_mono = self.clock.monotonic();
        let since_activity = self.time_since_last_activity_at(now_wall, now_mono);

        let threshold = config.activation_threshold_sec as f64;
        let max_inter_event_gap = threshold / ACTIVATION_GAP_DIVISOR;
        // A zero threshold has no density requirement: any recent input activates.
        let too_sparse = threshold > 0.0 && since_activity >= max_inter_event_gap;

        if since_activity >= config.break_duration_sec as f64 || too_sparse {
            if app_state.activation_candidate_start_monotonic.is_some() {
                msg_debug!(Message::ActivationCandidateCancelled);
                return app_state.with_candidate(None);
            }
            return app_state;
        }

        let candidate = match app_state.activation_candidate_start_monotonic {
            Some(candidate) => candidate,
            None if threshold > 0.0 => {
                msg_debug!(Message::ActivationCandidateStarted);
                return app_state.with_candidate(Some(now_mono));
            }
            None => now_mono,
        };

        if now_mono - candidate >= threshold {
            return self.transition_to_active(app_state, config, now_wall, now_mono);
        }

        app_state
    }

    fn time_since_last_activity_at(&self, now_wall: f64, now_mono: f64) -> f64 {
        let last = self.tracker.last_activity();
        reconcile_elapsed(now_wall - last.wall, now_mono - last.monotonic)
    }

    fn transition_to_idle(&self, app_state: AppState, config: &AppConfig, now_wall: f64, now_mono: f64) -> AppState {
        msg_info!(Message::TransitionToIdle);
        let session = session_duration_at(&app_state, now_wall, now_mono);

        if should_log_session(session) {
            self.session_log.log(
                config,
                app_state.current_state.activity_type(),
                app_state.session_start_time,
                now_wall,
                session,
            );
        }

        app_state.begin_session(State::Idle, now_wall, now_mono)
    }

    /// Ends the break. The new work session starts with the reminder flag cleared.
    fn transition_to_active(&self, app_state: AppState, config: &AppConfig, now_wall: f64, now_mono: f64) -> AppState {
        msg_info!(Message::TransitionToActive);
        let break_duration = session_duration_at(&app_state, now_wall, now_mono);

        if should_log_session(break_duration) {
            self.session_log.log(
                config,
                app_state.current_state.activity_type(),
                app_state.session_start_time,
                now_wall,
                break_duration,
            );
            self.notifier.show(
                &Message::WelcomeBackHeader.to_string(),
                &Message::WelcomeBackBreakLasted(format_duration(break_duration)).to_string(),
                &Message::WelcomeBackNewSession.to_string(),
            );
        }

        app_state.begin_session(State::Active, now_wall, now_mono)
    }

    fn show_break_reminder(&self, app_state: AppState, config: &AppConfig, session: f64) -> AppState {
        let header = self.next_break_message(config);
        self.notifier.show(
            &header,
            &Message::BreakReminderActiveFor(format_duration(session)).to_string(),
            &Message::BreakReminderPushupGoal(pushup_goal(session)).to_string(),
        );
        msg_info!(Message::BreakReminderTriggered);
        app_state.with_break_reminder_shown(true)
    }

    /// Rotates through the configured break messages in order.
    fn next_break_message(&self, config: &AppConfig) -> String {
        let index = self.reminders_shown.fetch_add(1, Ordering::Relaxed);
        if config.break_messages.is_empty() {
            return DEFAULT_BREAK_MESSAGE.to_string();
        }
        config.break_messages[index % config.break_messages.len()].clone()
    }
}

fn session_duration_at(app_state: &AppState, now_wall: f64, now_mono: f64) -> f64 {
    reconcile_elapsed(
        now_wall - app_state.session_start_time,
        now_mono - app_state.session_start_monotonic,
    )
}
