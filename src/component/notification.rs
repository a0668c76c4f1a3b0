//! Transient status messages with a single-shot dismissal deadline.

use std::time::{Duration, Instant};

/// How long a notification stays visible.
pub const DISMISS_AFTER: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    /// Increases with every notification shown by the same slot.
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
    pub expires_at: Instant,
}

/// Holds at most one notification. Showing a new one supersedes the old one,
/// and a late dismissal aimed at the old one is ignored.
#[derive(Debug, Default)]
pub struct NotificationSlot {
    current: Option<Notification>,
    next_id: u64,
}

impl NotificationSlot {
    pub fn show(&mut self, kind: NotificationKind, message: impl Into<String>, now: Instant) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.current = Some(Notification {
            id,
            kind,
            message: message.into(),
            expires_at: now + DISMISS_AFTER,
        });
        id
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Clears the notification if it is still the one identified by `id`.
    pub fn dismiss(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
            return true;
        }
        false
    }

    /// Clears the notification once its deadline has passed.
    pub fn dismiss_expired(&mut self, now: Instant) -> bool {
        if self.current.as_ref().is_some_and(|n| now >= n.expires_at) {
            self.current = None;
            return true;
        }
        false
    }
}
