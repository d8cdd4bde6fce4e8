//! Browser implementations of the notification, diagnostics and
//! navigation capabilities.

use super::{Diagnostics, Navigator, Notifier};
use crate::types::{LogEntry, LogLevel};

/// Blocking `window.alert`.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        if let Err(e) = gloo_utils::window().alert_with_message(message) {
            log::warn!("alert() refused: {:?}", e);
        }
    }
}

/// Forwards diagnostics to the console through `log`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleDiagnostics;

impl Diagnostics for ConsoleDiagnostics {
    fn record(&self, entry: LogEntry) {
        match entry.level {
            LogLevel::Error => log::error!("[{}] {}", entry.timestamp, entry.message),
            LogLevel::Warning => log::warn!("[{}] {}", entry.timestamp, entry.message),
        }
    }
}

/// Navigation through `window.location`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowNavigator;

impl Navigator for WindowNavigator {
    fn navigate(&self, path: &str) {
        if let Err(e) = gloo_utils::window().location().set_href(path) {
            log::error!("Failed to navigate to {}: {:?}", path, e);
        }
    }
}
