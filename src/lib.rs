//! # Standup - desktop activity monitor
//!
//! Watches global keyboard and mouse input, tells work sessions from breaks
//! and reminds the user to get up after a configured amount of work.
//!
//! ## Features
//!
//! - **Dual-Clock State Machine**: Sleep and suspend count as elapsed time
//! - **Debounced Activation**: A stray mouse bump does not end a break
//! - **Session Log**: One CSV row per finished work or break session
//! - **Resume**: Survives restarts, crashes and power loss via a state file
//! - **Notifications**: Break reminders and welcome-back messages
//!
//! ## Usage
//!
//! ```rust,no_run
//! use standup::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod libs;
