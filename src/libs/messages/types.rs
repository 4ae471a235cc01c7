#[derive(Debug, Clone)]
pub enum Message {
    // === MONITOR MESSAGES ===
    MonitorStarted {
        work_duration: u64,
        break_duration: u64,
        activation_threshold: u64,
    },
    MonitorTestMode,
    MonitorTestModeExiting(u64), // seconds
    MonitorShuttingDown,
    MonitorStopped,
    ShutdownSavingSession,

    // === SIGNAL MESSAGES ===
    WatcherReceivedSigterm,
    WatcherReceivedSigint,
    WatcherReceivedCtrlC,
    WatcherCtrlCListenFailed(String),
    WatcherSignalHandlerFailed(String),
    WatcherSignalHandlingNotSupported,

    // === STATE MACHINE MESSAGES ===
    TransitionToIdle,
    TransitionToActive,
    ActivationCandidateStarted,
    ActivationCandidateCancelled,
    BreakReminderTriggered,

    // === NOTIFICATION TEXT ===
    BreakReminderActiveFor(String), // H:MM:SS
    BreakReminderPushupGoal(u64),
    WelcomeBackHeader,
    WelcomeBackBreakLasted(String), // H:MM:SS
    WelcomeBackNewSession,
    NotificationShown(String, String), // header, body
    NotificationFailed(String),

    // === SESSION LOG MESSAGES ===
    SessionLogged(String, String), // activity type, duration
    SessionLogFailed(String),

    // === RUNTIME STATE MESSAGES ===
    StateSaved(String), // path
    StateSaveFailed(String),
    StateLoaded(String), // path
    StateLoadFailed(String),
    StateCleared(String), // path
    StateClearFailed(String),
    StateReset,
    StartingFresh,
    ResumedState(String),            // state name
    ResumeClosedWorkSession(String), // duration

    // === STATUS MESSAGES ===
    StatusHeader,
    StatusState(String),
    StatusSessionStart(String),
    StatusLastActivity(String),
    StatusBreakReminder(bool),
    StatusStateFile(String),
    StatusNoSavedState,

    // === INPUT MESSAGES ===
    InputListenerFailed(String),
    RawLogStarted(String), // path
    RawLogFailed(String),
    WindowMonitorFailed(String),
    ProducerStopped(String),
    ProducerPanicked(String),

    // === CONFIGURATION MESSAGES ===
    ConfigLoaded(String), // path
    ConfigInvalid(String),
}
