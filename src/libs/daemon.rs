//! Foreground monitor process with graceful signal handling.
//!
//! [`run_with_signal_handling`] builds the [`App`], starts the input
//! producers, ticks until SIGTERM/SIGINT (Ctrl+C on Windows) and then runs
//! the shutdown sequence, so an interrupted session is still logged.

use crate::libs::app::App;
use crate::libs::clock::SystemClock;
use crate::libs::config::AppConfig;
use crate::libs::input::InputListener;
use crate::libs::messages::Message;
use crate::libs::notifier::DesktopNotifier;
use crate::libs::raw_log::{RawActivityCounters, RawActivityLogger, COLLECTION_INTERVAL};
use crate::libs::window::{RecentWindows, WindowMonitor, WINDOW_POLL_INTERVAL};
use parking_lot::Mutex;
use crate::{msg_error, msg_info};
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::oneshot;

pub async fn run_with_signal_handling(config: AppConfig) -> Result<()> {
    let app = App::new(config, Arc::new(SystemClock::new()), Arc::new(DesktopNotifier::new()));

    let counters = Arc::new(RawActivityCounters::new());
    let listener = InputListener::spawn(app.tracker().clone(), counters.clone())?;
    app.add_producer(Box::new(listener));

    if let Some(raw_path) = app.config().raw_log_file() {
        let windows = Arc::new(Mutex::new(RecentWindows::new()));
        match WindowMonitor::spawn(windows.clone(), WINDOW_POLL_INTERVAL) {
            Ok(monitor) => app.add_producer(Box::new(monitor)),
            Err(e) => msg_error!(Message::WindowMonitorFailed(e.to_string())),
        }

        let truncate = app.config().test_mode;
        match RawActivityLogger::spawn(raw_path, counters, windows, app.clock(), COLLECTION_INTERVAL, truncate) {
            Ok(raw_logger) => app.add_producer(Box::new(raw_logger)),
            Err(e) => msg_error!(Message::RawLogFailed(e.to_string())),
        }
    }

    let app_state = app.startup();
    let app_state = app.run(app_state, shutdown_signal()).await;
    app.shutdown(&app_state);

    Ok(())
}

/// Returns a receiver that resolves on the first termination signal.
///
/// If no handler can be installed the sender is parked forever, so the
/// monitor keeps running instead of treating the dropped sender as a shutdown.
pub fn shutdown_signal() -> oneshot::Receiver<()> {
    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    #[cfg(unix)]
    {
        tokio::spawn(async move {
            use tokio::signal::unix::{signal, SignalKind};

            let handlers = signal(SignalKind::terminate()).and_then(|sigterm| Ok((sigterm, signal(SignalKind::interrupt())?)));
            let (mut sigterm, mut sigint) = match handlers {
                Ok(handlers) => handlers,
                Err(e) => {
                    msg_error!(Message::WatcherSignalHandlerFailed(e.to_string()));
                    park(shutdown_tx).await;
                    return;
                }
            };

            tokio::select! {
                _ = sigterm.recv() => {
                    msg_info!(Message::WatcherReceivedSigterm);
                }
                _ = sigint.recv() => {
                    msg_info!(Message::WatcherReceivedSigint);
                }
            }

            let _ = shutdown_tx.send(());
        });
    }

    #[cfg(windows)]
    {
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    msg_info!(Message::WatcherReceivedCtrlC);
                    let _ = shutdown_tx.send(());
                }
                Err(e) => {
                    msg_error!(Message::WatcherCtrlCListenFailed(e.to_string()));
                    park(shutdown_tx).await;
                }
            }
        });
    }

    #[cfg(not(any(unix, windows)))]
    {
        crate::msg_warning!(Message::WatcherSignalHandlingNotSupported);
        tokio::spawn(park(shutdown_tx));
    }

    shutdown_rx
}

async fn park(shutdown_tx: oneshot::Sender<()>) {
    std::future::pending::<()>().await;
    drop(shutdown_tx);
}
