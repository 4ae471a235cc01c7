//! Display implementation for standup messages.
//!
//! All user-facing text lives here, including the lines shown in desktop
//! notifications, so wording changes never touch the state machine.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === MONITOR MESSAGES ===
            Message::MonitorStarted {
                work_duration,
                break_duration,
                activation_threshold,
            } => format!(
                "Monitor is running with work time {}s, break time {}s, activation threshold {}s",
                work_duration, break_duration, activation_threshold
            ),
            Message::MonitorTestMode => "Running in test mode".to_string(),
            Message::MonitorTestModeExiting(secs) => format!("Test run finished after {}s", secs),
            Message::MonitorShuttingDown => "Shutting down monitor...".to_string(),
            Message::MonitorStopped => "Monitor stopped".to_string(),
            Message::ShutdownSavingSession => "Saving state and logging the current session...".to_string(),

            // === SIGNAL MESSAGES ===
            Message::WatcherReceivedSigterm => "Received SIGTERM, shutting down gracefully...".to_string(),
            Message::WatcherReceivedSigint => "Received SIGINT, shutting down gracefully...".to_string(),
            Message::WatcherReceivedCtrlC => "Received Ctrl+C, shutting down gracefully...".to_string(),
            Message::WatcherCtrlCListenFailed(error) => format!("Failed to listen for Ctrl+C: {}", error),
            Message::WatcherSignalHandlerFailed(error) => format!("Failed to install signal handler: {}", error),
            Message::WatcherSignalHandlingNotSupported => "Warning: Signal handling not supported on this platform".to_string(),

            // === STATE MACHINE MESSAGES ===
            Message::TransitionToIdle => "No activity for the break duration, switching to IDLE".to_string(),
            Message::TransitionToActive => "Sustained activity detected, switching to ACTIVE".to_string(),
            Message::ActivationCandidateStarted => "Activity detected while idle, waiting for it to persist".to_string(),
            Message::ActivationCandidateCancelled => "Activity stopped, activation cancelled".to_string(),
            Message::BreakReminderTriggered => "Break reminder shown".to_string(),

            // === NOTIFICATION TEXT ===
            Message::BreakReminderActiveFor(duration) => format!("You've been active for {}.", duration),
            Message::BreakReminderPushupGoal(count) => format!("Now your goal is to do {} pushups!", count),
            Message::WelcomeBackHeader => "Welcome Back!".to_string(),
            Message::WelcomeBackBreakLasted(duration) => format!("Your break lasted {}.", duration),
            Message::WelcomeBackNewSession => "Starting new session.".to_string(),
            Message::NotificationShown(header, body) => format!("Notification: {} | {}", header, body),
            Message::NotificationFailed(error) => format!("Failed to show notification: {}", error),

            // === SESSION LOG MESSAGES ===
            Message::SessionLogged(activity, duration) => format!("Logged {} session of {}", activity, duration),
            Message::SessionLogFailed(error) => format!("Failed to write session log: {}", error),

            // === RUNTIME STATE MESSAGES ===
            Message::StateSaved(path) => format!("State saved to {}", path),
            Message::StateSaveFailed(error) => format!("Failed to save state: {}", error),
            Message::StateLoaded(path) => format!("State loaded from {}", path),
            Message::StateLoadFailed(error) => format!("Failed to load state, starting fresh: {}", error),
            Message::StateCleared(path) => format!("State file {} removed", path),
            Message::StateClearFailed(error) => format!("Failed to remove state file: {}", error),
            Message::StateReset => "Saved state has been reset".to_string(),
            Message::StartingFresh => "No saved state found, starting a new session".to_string(),
            Message::ResumedState(state) => format!("Resumed {} session from saved state", state),
            Message::ResumeClosedWorkSession(duration) => {
                format!("Work session of {} ended while the monitor was not running", duration)
            }

            // === STATUS MESSAGES ===
            Message::StatusHeader => "Standup status".to_string(),
            Message::StatusState(state) => format!("State:            {}", state),
            Message::StatusSessionStart(time) => format!("Session started:  {}", time),
            Message::StatusLastActivity(time) => format!("Last activity:    {}", time),
            Message::StatusBreakReminder(shown) => {
                format!("Break reminder:   {}", if *shown { "shown" } else { "not shown" })
            }
            Message::StatusStateFile(path) => format!("State file:       {}", path),
            Message::StatusNoSavedState => "No saved state. The monitor has not run yet or was reset.".to_string(),

            // === INPUT MESSAGES ===
            Message::InputListenerFailed(error) => format!("Error in rdev listener: {}", error),
            Message::RawLogStarted(path) => format!("Writing raw activity to {}", path),
            Message::RawLogFailed(error) => format!("Failed to write raw activity log: {}", error),
            Message::WindowMonitorFailed(error) => format!("Failed to start the active window monitor: {}", error),
            Message::ProducerStopped(name) => format!("Stopped {}", name),
            Message::ProducerPanicked(name) => format!("The {} thread panicked", name),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigLoaded(path) => format!("Configuration loaded from {}", path),
            Message::ConfigInvalid(error) => format!("Invalid configuration: {}", error),
        };

        write!(f, "{}", text)
    }
}
