//! Notifications

use crate::{store::CartObserver, time::now_ms};

/// How long a notification stays fully visible, in milliseconds.
pub const VISIBLE_MS: i64 = 3000;

/// How long a notification takes to fade out after its visible window.
pub const FADE_MS: i64 = 300;

/// A transient user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    message: String,
    shown_at: i64,
}

impl Notification {
    /// Returns the message text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the instant the notification appeared, in milliseconds since
    /// the epoch.
    pub fn shown_at(&self) -> i64 {
        self.shown_at
    }

    /// Whether the notification is still fully visible at the given instant.
    #[must_use]
    pub fn visible(&self, now: i64) -> bool {
        now - self.shown_at <= VISIBLE_MS
    }

    /// Whether the notification has finished its full show-fade cycle at the
    /// given instant and can be dropped.
    #[must_use]
    pub fn finished(&self, now: i64) -> bool {
        now - self.shown_at > VISIBLE_MS + FADE_MS
    }
}

/// Fire-and-forget stack of transient notifications.
///
/// There are no timers: expiry is evaluated against a caller-supplied
/// instant, and [`NotificationCenter::sweep`] drops finished notifications.
/// Overlapping notifications stack independently; no de-duplication.
#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    notifications: Vec<Notification>,
}

impl NotificationCenter {
    /// Create an empty notification center.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a notification shown at the given instant.
    pub fn push(&mut self, message: impl Into<String>, now: i64) {
        self.notifications.push(Notification {
            message: message.into(),
            shown_at: now,
        });
    }

    /// List the notifications still fully visible at the given instant, in
    /// the order they appeared.
    pub fn active(&self, now: i64) -> impl Iterator<Item = &Notification> {
        self.notifications
            .iter()
            .filter(move |notification| notification.visible(now))
    }

    /// Drop notifications that have finished their show-fade cycle.
    pub fn sweep(&mut self, now: i64) {
        self.notifications
            .retain(|notification| !notification.finished(now));
    }

    /// Get the number of notifications still tracked (visible or fading).
    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    /// Check if no notifications are tracked.
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }
}

impl CartObserver for NotificationCenter {
    fn notice(&mut self, message: &str) {
        self.push(message, now_ms());
    }
}
