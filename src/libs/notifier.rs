//! User-visible desktop notifications.
//!
//! Notifications are best effort. A missing notification daemon or a denied
//! permission is reported and otherwise ignored; the monitor keeps running.

use crate::libs::messages::Message;
use crate::{msg_error, msg_info};
use notify_rust::Notification;

/// Application name shown by the desktop notification service.
pub const NOTIFICATION_APP_NAME: &str = "Standup!";

/// Fire-and-forget notification sink.
pub trait Notifier: Send + Sync {
    /// Shows a notification with a header and one or two body lines.
    /// An empty `line2` is omitted.
    fn show(&self, header: &str, line1: &str, line2: &str);
}

/// Notifier backed by the operating system's notification service.
#[derive(Debug, Default, Clone, Copy)]
pub struct DesktopNotifier;

impl DesktopNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for DesktopNotifier {
    fn show(&self, header: &str, line1: &str, line2: &str) {
        let body = message_body(line1, line2);
        match Notification::new().appname(NOTIFICATION_APP_NAME).summary(header).body(&body).show() {
            Ok(_) => msg_info!(Message::NotificationShown(header.to_string(), line1.to_string())),
            Err(e) => msg_error!(Message::NotificationFailed(e.to_string())),
        }
    }
}

fn message_body(line1: &str, line2: &str) -> String {
    if line2.is_empty() {
        line1.to_string()
    } else {
        format!("{}\n{}", line1, line2)
    }
}
