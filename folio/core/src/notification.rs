//! Transient notifications ("toasts")

use std::time::{Duration, Instant};

/// How long a notification stays on screen
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotifyLevel {
    Success,
    Error,
}

/// A short-lived message shown over the page
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub level: NotifyLevel,
    pub message: String,
    pub raised_at: Instant,
}

impl Notification {
    pub fn success(message: impl Into<String>, now: Instant) -> Self {
        Self {
            level: NotifyLevel::Success,
            message: message.into(),
            raised_at: now,
        }
    }

    pub fn error(message: impl Into<String>, now: Instant) -> Self {
        Self {
            level: NotifyLevel::Error,
            message: message.into(),
            raised_at: now,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.raised_at) >= NOTIFICATION_TTL
    }
}
