//! Core library modules for the standup monitor.
//!
//! ## Features
//!
//! - **Activity Tracking**: Input listener, last-activity stamps, raw telemetry, active window titles
//! - **State Machine**: Dual-clock elapsed time, debounced activation, reminders
//! - **Persistence**: Session CSV log and the runtime state file used for resume
//! - **Infrastructure**: Configuration, data storage, messaging, notifications
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use standup::libs::app::App;
//! use standup::libs::clock::SystemClock;
//! use standup::libs::config::{AppConfig, ConfigOverrides};
//! use standup::libs::notifier::DesktopNotifier;
//!
//! let config = AppConfig::load(None, &ConfigOverrides::default())?;
//! let app = App::new(config, Arc::new(SystemClock::new()), Arc::new(DesktopNotifier::new()));
//! let state = app.startup();
//! app.shutdown(&state);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod activity;
pub mod app;
pub mod clock;
pub mod config;
pub mod csv_log;
pub mod daemon;
pub mod data_storage;
pub mod formatter;
pub mod handler;
pub mod input;
pub mod messages;
pub mod notifier;
pub mod persistence;
pub mod raw_log;
pub mod session_log;
pub mod state;
pub mod window;
