//! Transient notifications shown over the game screen.

use crate::config::ToastDurations;
use crate::games::tictactoe::{Notification, NotificationKind};
use std::time::{Duration, Instant};
use tracing::{debug, instrument};

/// Most toasts kept at once; older ones are dropped first.
pub const MAX_TOASTS: usize = 3;

/// A notification with an expiry time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Headline.
    pub title: String,
    /// Detail line.
    pub description: String,
    /// Which kind of event produced it.
    pub kind: NotificationKind,
    /// When it disappears.
    pub expires_at: Instant,
}

/// Newest-last queue of live toasts.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    durations: ToastDurations,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    /// Creates an empty queue using the given display durations.
    pub fn new(durations: ToastDurations) -> Self {
        Self {
            durations,
            toasts: Vec::new(),
        }
    }

    /// Adds a toast for `notification`, shown from `now`.
    #[instrument(skip(self))]
    pub fn push(&mut self, notification: Notification, now: Instant) {
        let ttl: Duration = self.durations.for_kind(notification.kind());
        debug!(%notification, ttl_ms = ttl.as_millis() as u64, "Toast queued");
        self.toasts.push(Toast {
            title: notification.title().to_string(),
            description: notification.description(),
            kind: notification.kind(),
            expires_at: now + ttl,
        });
        if self.toasts.len() > MAX_TOASTS {
            let excess = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(..excess);
        }
    }

    /// Drops every toast that has expired by `now`.
    pub fn prune(&mut self, now: Instant) {
        self.toasts.retain(|t| t.expires_at > now);
    }

    /// Live toasts, newest first.
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().rev()
    }

    /// Number of live toasts.
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// True when nothing is shown.
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
