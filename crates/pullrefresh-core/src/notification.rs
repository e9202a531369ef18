#![forbid(unsafe_code)]

//! Notifications delivered to the host.
//!
//! Gesture and lifecycle notifications share one [`NotificationQueue`] so the
//! host observes them in the order they happened, including completions that
//! arrive through a [`CompletionHandle`] outside the widget.

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex};

use crate::lifecycle::{CompletionHandle, CompletionReason};

/// Something the host may want to react to.
#[derive(Clone, PartialEq)]
pub enum PullNotification {
    /// A downward pull was confirmed.
    PullStart,
    /// The pull distance changed.
    PullMove { distance: f32 },
    /// The pull was released, at any distance.
    PullEnd,
    /// A refresh started. Call `complete` when the host is done.
    RefreshTriggered { complete: CompletionHandle },
    /// The refresh session ended.
    RefreshCompleted { reason: CompletionReason },
}

impl PullNotification {
    /// Stable event name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::PullStart => "pull-start",
            Self::PullMove { .. } => "pull-move",
            Self::PullEnd => "pull-end",
            Self::RefreshTriggered { .. } => "refresh-triggered",
            Self::RefreshCompleted { .. } => "refresh-completed",
        }
    }

    /// The completion handle carried by `RefreshTriggered`.
    #[must_use]
    pub fn completion(&self) -> Option<&CompletionHandle> {
        match self {
            Self::RefreshTriggered { complete } => Some(complete),
            _ => None,
        }
    }
}

impl fmt::Debug for PullNotification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PullMove { distance } => write!(f, "{}({distance})", self.name()),
            Self::RefreshTriggered { complete } => {
                write!(f, "{}(session {})", self.name(), complete.session())
            }
            Self::RefreshCompleted { reason } => write!(f, "{}({reason:?})", self.name()),
            _ => f.write_str(self.name()),
        }
    }
}

/// Shared FIFO of notifications.
///
/// Clones refer to the same queue.
#[derive(Clone, Default)]
pub struct NotificationQueue {
    inner: Arc<Mutex<VecDeque<PullNotification>>>,
}

impl NotificationQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, notification: PullNotification) {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(notification);
    }

    /// Take every queued notification, oldest first.
    pub fn drain(&self) -> Vec<PullNotification> {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .drain(..)
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for NotificationQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationQueue")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_wire_names() {
        assert_eq!(PullNotification::PullStart.name(), "pull-start");
        assert_eq!(PullNotification::PullMove { distance: 1.0 }.name(), "pull-move");
        assert_eq!(PullNotification::PullEnd.name(), "pull-end");
        assert_eq!(
            PullNotification::RefreshCompleted {
                reason: CompletionReason::Timeout
            }
            .name(),
            "refresh-completed"
        );
    }

    #[test]
    fn queue_is_fifo_and_shared() {
        let q = NotificationQueue::new();
        let other = q.clone();
        q.push(PullNotification::PullStart);
        other.push(PullNotification::PullEnd);
        assert_eq!(q.len(), 2);
        assert_eq!(
            other.drain(),
            vec![PullNotification::PullStart, PullNotification::PullEnd]
        );
        assert!(q.is_empty());
    }

    #[test]
    fn debug_format() {
        let n = PullNotification::PullMove { distance: 12.5 };
        assert_eq!(format!("{n:?}"), "pull-move(12.5)");
        assert_eq!(format!("{:?}", PullNotification::PullEnd), "pull-end");
    }
}
