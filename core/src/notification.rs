//! Dismissible, auto-expiring messages raised by failed submissions.

use std::time::{Duration, Instant};

/// How long a notification stays up unless dismissed earlier.
pub const AUTO_HIDE: Duration = Duration::from_secs(6);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub raised_at: Instant,
    pub auto_hide: Duration,
}

impl Notification {
    pub fn error(message: impl Into<String>) -> Self {
        Self::error_at(message, Instant::now())
    }

    pub fn error_at(message: impl Into<String>, raised_at: Instant) -> Self {
        Self {
            message: message.into(),
            raised_at,
            auto_hide: AUTO_HIDE,
        }
    }

    pub fn is_visible_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.raised_at) < self.auto_hide
    }
}
