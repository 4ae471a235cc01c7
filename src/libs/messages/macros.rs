//! Macros for user-facing output and logging.
//!
//! Every macro routes a [`Message`](super::Message) to one of two sinks:
//!
//! ```text
//! msg_info!(..) ──▶ STANDUP_DEBUG or RUST_LOG set? ──yes──▶ tracing::info!
//!                                                  └─no───▶ println!
//! ```
//!
//! In normal mode the monitor prints short status lines; with debug mode on
//! the same messages become structured tracing events and `msg_debug!`
//! output appears as well.
//!
//! ```rust
//! use standup::{msg_info, msg_error};
//! use standup::libs::messages::Message;
//!
//! msg_info!(Message::MonitorStopped);
//! msg_error!(Message::StateSaveFailed("disk full".to_string()));
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Returns `true` if `STANDUP_DEBUG` or `RUST_LOG` is set. Checked once per process.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("STANDUP_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Routes one line to `tracing` in debug mode or to a std print macro otherwise.
#[doc(hidden)]
#[macro_export]
macro_rules! __msg_emit {
    ($level:ident, $print:ident, $prefix:literal, $msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::$level!("{}{}", $prefix, $msg);
        } else {
            $print!("{}{}", $prefix, $msg);
        }
    };
}

/// Prints a plain message. With `true` the message is padded by blank lines.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(info, println, "\n", format!("{}\n", $msg))
    };
}

/// Prints a success message with ✅ prefix.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "✅ ", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(info, println, "\n✅ ", format!("{}\n", $msg))
    };
}

/// Prints an error message with ❌ prefix. Goes to stderr in normal mode.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        $crate::__msg_emit!(error, eprintln, "❌ ", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(error, eprintln, "\n❌ ", format!("{}\n", $msg))
    };
}

/// Prints a warning message with ⚠️ prefix.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        $crate::__msg_emit!(warn, println, "⚠️ ", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(warn, println, "\n⚠️ ", format!("{}\n", $msg))
    };
}

/// Prints an informational message with ℹ️ prefix.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "ℹ️ ", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(info, println, "\nℹ️ ", format!("{}\n", $msg))
    };
}

/// Debug-only message with 🔍 prefix. Nothing is printed in normal mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Builds an `anyhow::Error` from a message.
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}
