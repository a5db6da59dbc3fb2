//! Success notification with auto-dismiss

use std::time::{Duration, Instant};

/// How long a notification stays up unless closed (6 seconds)
pub const DEFAULT_NOTIFICATION_DURATION: Duration = Duration::from_millis(6000);

/// Transient message shown above the form
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    /// When the notification appeared
    pub shown_at: Instant,
    pub duration: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>, shown_at: Instant, duration: Duration) -> Self {
        Self {
            message: message.into(),
            shown_at,
            duration,
        }
    }

    /// Notification for a freshly registered member
    pub fn membership_created(id: &str, shown_at: Instant, duration: Duration) -> Self {
        Self::new(
            format!("Your loyalty membership created with ID {id}"),
            shown_at,
            duration,
        )
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.duration
    }

    /// Fraction of display time left, eased for the countdown bar (1.0 → 0.0)
    pub fn remaining_ratio_at(&self, now: Instant) -> f32 {
        if self.is_expired_at(now) {
            return 0.0;
        }
        let elapsed = now.saturating_duration_since(self.shown_at);
        let progress = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        1.0 - simple_easing::cubic_out(progress)
    }
}
