#![forbid(unsafe_code)]

//! Refresh lifecycle: trigger, completion, and auto-complete.
//!
//! [`RefreshController`] owns the in-flight flag. Each successful
//! [`trigger`](RefreshController::trigger) opens a session, queues
//! `RefreshTriggered` carrying a [`CompletionHandle`] bound to that session,
//! and arms a deadline [`AUTO_COMPLETE_DELAY`] in the future. The host drives
//! the deadline by calling [`poll`](RefreshController::poll).
//!
//! # Invariants
//!
//! 1. At most one session is in flight. Triggering while in flight is a no-op
//!    and queues nothing.
//! 2. Each session queues exactly one `RefreshCompleted`, whichever of host
//!    handle, manual completion, or deadline gets there first.
//! 3. A handle only ever ends its own session. Handles from earlier sessions
//!    are inert.
//! 4. The deadline is cleared together with the session, so a stale deadline
//!    can never complete a later session.
//!
//! # Threading
//!
//! State lives behind a mutex so completion handles may be invoked from any
//! thread. Poisoned locks are recovered rather than propagated.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, Weak};

use web_time::{Duration, Instant};

use crate::notification::{NotificationQueue, PullNotification};

/// Time after which an unfinished refresh completes itself.
pub const AUTO_COMPLETE_DELAY: Duration = Duration::from_millis(2000);

/// Who ended a refresh session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompletionReason {
    /// The host called the session's [`CompletionHandle`].
    Host,
    /// [`RefreshController::complete`] was called directly.
    Manual,
    /// The auto-complete deadline passed.
    Timeout,
}

#[derive(Debug, Clone, Copy)]
struct Session {
    id: u64,
    deadline: Instant,
}

#[derive(Debug, Default)]
struct LifecycleState {
    next_id: u64,
    active: Option<Session>,
    epoch: u64,
}

struct Shared {
    state: Mutex<LifecycleState>,
    queue: NotificationQueue,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, LifecycleState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// End the active session, optionally only if it is `session`.
    fn finish(&self, session: Option<u64>, reason: CompletionReason) -> bool {
        let mut state = self.lock();
        let Some(active) = state.active else {
            return false;
        };
        if let Some(id) = session
            && id != active.id
        {
            return false;
        }
        state.active = None;
        state.epoch = state.epoch.wrapping_add(1);
        #[cfg(feature = "tracing")]
        match reason {
            CompletionReason::Timeout => {
                tracing::info!(session = active.id, "refresh auto-completed")
            }
            _ => tracing::debug!(session = active.id, ?reason, "refresh completed"),
        }
        self.queue.push(PullNotification::RefreshCompleted { reason });
        true
    }
}

// ---------------------------------------------------------------------------
// RefreshController
// ---------------------------------------------------------------------------

/// Owner of the refresh in-flight flag.
///
/// Clones share state.
#[derive(Clone)]
pub struct RefreshController {
    shared: Arc<Shared>,
}

impl RefreshController {
    /// Controller with its own notification queue.
    #[must_use]
    pub fn new() -> Self {
        Self::with_queue(NotificationQueue::new())
    }

    /// Controller that queues lifecycle notifications into `queue`.
    #[must_use]
    pub fn with_queue(queue: NotificationQueue) -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(LifecycleState::default()),
                queue,
            }),
        }
    }

    #[must_use]
    pub fn queue(&self) -> &NotificationQueue {
        &self.shared.queue
    }

    /// Whether a refresh session is open.
    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.shared.lock().active.is_some()
    }

    /// Id of the open session, if any.
    #[must_use]
    pub fn session(&self) -> Option<u64> {
        self.shared.lock().active.map(|s| s.id)
    }

    /// When the open session will auto-complete.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.shared.lock().active.map(|s| s.deadline)
    }

    /// Counter bumped on every session open and close.
    ///
    /// Lets adapters notice completions that happened through a handle.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.shared.lock().epoch
    }

    /// Open a refresh session.
    ///
    /// Returns the session's completion handle, or `None` if a session was
    /// already in flight (nothing is queued in that case).
    pub fn trigger(&self, now: Instant) -> Option<CompletionHandle> {
        let mut state = self.shared.lock();
        if state.active.is_some() {
            #[cfg(feature = "tracing")]
            tracing::debug!("refresh already in flight, trigger ignored");
            return None;
        }
        let id = state.next_id;
        state.next_id = state.next_id.wrapping_add(1);
        state.active = Some(Session {
            id,
            deadline: now + AUTO_COMPLETE_DELAY,
        });
        state.epoch = state.epoch.wrapping_add(1);

        let handle = CompletionHandle {
            session: id,
            shared: Arc::downgrade(&self.shared),
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(session = id, "refresh triggered");
        self.shared.queue.push(PullNotification::RefreshTriggered {
            complete: handle.clone(),
        });
        Some(handle)
    }

    /// End whatever session is in flight.
    ///
    /// Returns `false` (and queues nothing) if none was.
    pub fn complete(&self) -> bool {
        self.shared.finish(None, CompletionReason::Manual)
    }

    /// Fire the auto-complete if the open session's deadline has passed.
    ///
    /// Returns `true` if this call completed the session.
    pub fn poll(&self, now: Instant) -> bool {
        let due = {
            let state = self.shared.lock();
            state
                .active
                .filter(|s| now >= s.deadline)
                .map(|s| s.id)
        };
        match due {
            Some(id) => self.shared.finish(Some(id), CompletionReason::Timeout),
            None => false,
        }
    }
}

impl Default for RefreshController {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RefreshController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.shared.lock();
        f.debug_struct("RefreshController")
            .field("session", &state.active.map(|s| s.id))
            .field("epoch", &state.epoch)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// CompletionHandle
// ---------------------------------------------------------------------------

/// Single-use completion callback for one refresh session.
///
/// Only the first call that finds its session still open has any effect.
/// Handles do not keep the controller alive; once the widget is gone they
/// become inert.
#[derive(Clone)]
pub struct CompletionHandle {
    session: u64,
    shared: Weak<Shared>,
}

impl CompletionHandle {
    /// End this handle's session.
    ///
    /// Returns `true` if this call ended it; `false` if it had already ended
    /// (by any path) or the controller is gone.
    pub fn complete(&self) -> bool {
        self.shared
            .upgrade()
            .is_some_and(|shared| shared.finish(Some(self.session), CompletionReason::Host))
    }

    /// Whether this handle's session is over.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.shared
            .upgrade()
            .is_none_or(|shared| shared.lock().active.is_none_or(|s| s.id != self.session))
    }

    #[must_use]
    pub fn session(&self) -> u64 {
        self.session
    }
}

impl PartialEq for CompletionHandle {
    fn eq(&self, other: &Self) -> bool {
        self.session == other.session && Weak::ptr_eq(&self.shared, &other.shared)
    }
}

impl fmt::Debug for CompletionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionHandle")
            .field("session", &self.session)
            .field("resolved", &self.is_resolved())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
