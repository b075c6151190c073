/*
[INPUT]:  Success, warning and error messages raised by UI actions
[OUTPUT]: Short-lived notification stack for rendering
[POS]:    Notification layer - transient toasts
[UPDATE]: When notification lifetime or levels change
*/

use std::collections::VecDeque;
use std::time::{Duration, Instant};

pub const NOTIFICATION_TTL: Duration = Duration::from_secs(4);
pub const MAX_NOTIFICATIONS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub created_at: Instant,
}

#[derive(Debug)]
pub struct Notifications {
    entries: VecDeque<Notification>,
    ttl: Duration,
}

impl Default for Notifications {
    fn default() -> Self {
        Self::with_ttl(NOTIFICATION_TTL)
    }
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: VecDeque::new(),
            ttl,
        }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(NotificationLevel::Success, message.into());
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(NotificationLevel::Warning, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(NotificationLevel::Error, message.into());
    }

    pub fn push(&mut self, level: NotificationLevel, message: String) {
        match level {
            NotificationLevel::Success => tracing::info!(%message, "notification"),
            NotificationLevel::Warning => tracing::warn!(%message, "notification"),
            NotificationLevel::Error => tracing::error!(%message, "notification"),
        }
        if self.entries.len() >= MAX_NOTIFICATIONS {
            self.entries.pop_front();
        }
        self.entries.push_back(Notification {
            level,
            message,
            created_at: Instant::now(),
        });
    }

    /// Drop notifications older than the configured lifetime
    pub fn prune(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.entries
            .retain(|entry| now.saturating_duration_since(entry.created_at) < ttl);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
