#![forbid(unsafe_code)]

//! Core: the pull-to-refresh state machine.
//!
//! # Role in pullrefresh
//! `pullrefresh-core` holds every piece of behavior that has invariants or
//! timing, with no rendering access:
//! - **Gesture recognition**: direction disambiguation and live pull distance
//!   ([`gesture`]).
//! - **Refresh lifecycle**: the in-flight flag, single-use completion handles,
//!   and the auto-complete deadline ([`lifecycle`]).
//! - **Indicator derivation**: display state, text, armed flag, and offset
//!   ([`indicator`]).
//! - **Options**: the validated option store ([`config`]).
//!
//! # How it fits in the system
//! `pullrefresh-widget` feeds [`PullInput`] values in, applies the resulting
//! [`IndicatorView`] to a surface, and forwards [`PullNotification`]s to the
//! host. Time is always passed in explicitly, so every transition here is
//! deterministic and testable without a clock.

pub mod config;
pub mod event;
pub mod gesture;
pub mod indicator;
pub mod lifecycle;
pub mod logging;
pub mod notification;

pub use config::{ConfigError, DEFAULT_THRESHOLD, PullOptions, TextOverrides, Threshold};
pub use event::PullInput;
pub use gesture::{
    DIRECTION_DEAD_ZONE, GestureEvent, GesturePhase, GestureState, PointerGate, PullRecognizer,
    crosses_threshold,
};
pub use indicator::{DisplayState, IndicatorPosition, IndicatorView};
pub use lifecycle::{AUTO_COMPLETE_DELAY, CompletionHandle, CompletionReason, RefreshController};
pub use notification::{NotificationQueue, PullNotification};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, info, trace, warn};
