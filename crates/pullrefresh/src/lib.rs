#![forbid(unsafe_code)]

//! Pull-to-refresh public facade crate.
//!
//! Re-exports the widget, its options and notifications, and the
//! translation registry, and offers a prelude for day-to-day usage.
//!
//! ```
//! use pullrefresh::prelude::*;
//!
//! let mut widget = PullToRefresh::with_global_translations(PullOptions::default());
//! let now = Instant::now();
//! widget.handle(&PullInput::down(0.0), now);
//! widget.handle(&PullInput::move_to(120.0), now);
//! widget.handle(&PullInput::PointerUp, now);
//!
//! let handle = widget
//!     .drain_notifications()
//!     .iter()
//!     .find_map(|n| n.completion().cloned())
//!     .unwrap();
//! assert!(handle.complete());
//! ```

// --- Core re-exports -------------------------------------------------------

pub use pullrefresh_core::{
    AUTO_COMPLETE_DELAY, CompletionHandle, CompletionReason, ConfigError, DEFAULT_THRESHOLD,
    DIRECTION_DEAD_ZONE, DisplayState, IndicatorPosition, IndicatorView, PullInput,
    PullNotification, PullOptions, TextOverrides, Threshold,
};

// --- I18n re-exports -------------------------------------------------------

pub use pullrefresh_i18n::{
    I18nError, LangContext, TextSlot, TranslationRegistry, TranslationSet, register_translations,
};

// --- Widget re-exports -----------------------------------------------------

pub use pullrefresh_widget::{
    Announce, IndicatorFrame, IndicatorSurface, PullToRefresh, RecordingSurface,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for pull-to-refresh hosts.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An option value was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A translation table could not be loaded.
    #[error(transparent)]
    I18n(#[from] I18nError),
}

/// Standard result type for pull-to-refresh APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        CompletionHandle, Error, IndicatorFrame, IndicatorSurface, PullInput, PullNotification,
        PullOptions, PullToRefresh, Result, TextSlot, Threshold, TranslationRegistry,
        TranslationSet,
    };

    pub use web_time::{Duration, Instant};

    pub use crate::{core, i18n, widget};
}

pub use pullrefresh_core as core;
pub use pullrefresh_i18n as i18n;
pub use pullrefresh_widget as widget;
