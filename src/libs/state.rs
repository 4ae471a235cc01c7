//! Runtime state of the activity monitor.
//!
//! [`AppState`] is a small `Copy` value. The state machine never mutates it in
//! place: every transition builds a new value through one of the with-changes
//! constructors below and hands it back to the tick loop.

use serde::Serialize;
use std::fmt;

/// Whether the user is currently working or away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Idle,
    Active,
}

impl State {
    /// Name used in the runtime state file.
    pub fn name(&self) -> &'static str {
        match self {
            State::Idle => "IDLE",
            State::Active => "ACTIVE",
        }
    }

    pub fn from_name(name: &str) -> Option<State> {
        match name {
            "IDLE" => Some(State::Idle),
            "ACTIVE" => Some(State::Active),
            _ => None,
        }
    }

    /// The kind of session this state represents in the session log.
    pub fn activity_type(&self) -> ActivityType {
        match self {
            State::Active => ActivityType::Work,
            State::Idle => ActivityType::Break,
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Value of the `Activity Type` column of the session log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActivityType {
    Work,
    Break,
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityType::Work => write!(f, "Work"),
            ActivityType::Break => write!(f, "Break"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppState {
    pub current_state: State,
    /// Wall-clock start of the current work or break session.
    pub session_start_time: f64,
    /// Monotonic timestamp of the same instant.
    pub session_start_monotonic: f64,
    /// Set while IDLE once dense activity has been seen but not yet confirmed.
    pub activation_candidate_start_monotonic: Option<f64>,
    /// A break reminder already fired for the current ACTIVE session.
    pub break_reminder_shown: bool,
}

impl AppState {
    /// State at process start: IDLE since `now`.
    pub fn initial(wall: f64, monotonic: f64) -> Self {
        Self {
            current_state: State::Idle,
            session_start_time: wall,
            session_start_monotonic: monotonic,
            activation_candidate_start_monotonic: None,
            break_reminder_shown: false,
        }
    }

    /// Starts a new session in `state` at the given instant.
    ///
    /// Clears the activation candidate and the break reminder flag.
    pub fn begin_session(self, state: State, wall: f64, monotonic: f64) -> Self {
        Self {
            current_state: state,
            session_start_time: wall,
            session_start_monotonic: monotonic,
            activation_candidate_start_monotonic: None,
            break_reminder_shown: false,
        }
    }

    pub fn with_candidate(self, candidate: Option<f64>) -> Self {
        Self {
            activation_candidate_start_monotonic: candidate,
            ..self
        }
    }

    pub fn with_break_reminder_shown(self, shown: bool) -> Self {
        Self {
            break_reminder_shown: shown,
            ..self
        }
    }
}
