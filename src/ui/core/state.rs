//! Application-level view state owned by the app shell.
//!
//! Holds the single notification slot and the refresh signal that tells the
//! status bar to fetch again. Components never reach this state through
//! globals; the shell passes what they need.

use super::actions::{FocusPane, NotificationKind};
use std::time::{Duration, Instant};

/// A transient success or error banner.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub expires_at: Instant,
}

/// Opaque counter whose change, not its value, triggers a status fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RefreshSignal(u64);

impl RefreshSignal {
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    notification: Option<Notification>,
    notification_timeout: Duration,
    refresh: RefreshSignal,
    pub focus: FocusPane,
    /// Backend version reported by `GET /`
    pub backend_version: Option<String>,
}

impl AppState {
    pub fn new(notification_timeout: Duration) -> Self {
        Self {
            notification: None,
            notification_timeout,
            refresh: RefreshSignal::default(),
            focus: FocusPane::default(),
            backend_version: None,
        }
    }

    /// Replace the current notification. The new one expires on its own timer.
    pub fn show_notification(&mut self, kind: NotificationKind, message: impl Into<String>, now: Instant) {
        self.notification = Some(Notification {
            kind,
            message: message.into(),
            expires_at: now + self.notification_timeout,
        });
    }

    /// Drop the notification once its display window has passed.
    /// Returns true when something was removed.
    pub fn expire_notifications(&mut self, now: Instant) -> bool {
        match &self.notification {
            Some(notification) if now >= notification.expires_at => {
                self.notification = None;
                true
            }
            _ => false,
        }
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn refresh_signal(&self) -> RefreshSignal {
        self.refresh
    }

    /// Advance the refresh signal so the status bar fetches again
    pub fn advance_refresh(&mut self) -> RefreshSignal {
        self.refresh = self.refresh.next();
        self.refresh
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Duration::from_secs(crate::constants::DEFAULT_NOTIFICATION_TIMEOUT_SECS))
    }
}
