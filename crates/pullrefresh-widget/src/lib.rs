#![forbid(unsafe_code)]

//! Pull-to-refresh widget adapter.
//!
//! # Role in pullrefresh
//! `pullrefresh-widget` connects the state machine in `pullrefresh-core` to a
//! host: it routes pointer and scroll input, keeps the indicator in sync,
//! and exposes the notification stream the host listens to.
//!
//! # Rendering
//! The widget never draws. Each change produces an [`IndicatorFrame`] that
//! is handed to the attached [`IndicatorSurface`]; closures work as surfaces.
//!
//! ```
//! use pullrefresh_core::{PullInput, PullOptions};
//! use pullrefresh_i18n::TranslationRegistry;
//! use pullrefresh_widget::{PullToRefresh, RecordingSurface};
//! use web_time::Instant;
//!
//! let frames = RecordingSurface::new();
//! let mut widget = PullToRefresh::new(PullOptions::default(), TranslationRegistry::new())
//!     .with_surface(frames.clone());
//! let now = Instant::now();
//! widget.handle(&PullInput::down(0.0), now);
//! widget.handle(&PullInput::move_to(100.0), now);
//! assert_eq!(frames.last().unwrap().view.text, "Release to refresh");
//! ```

pub mod surface;
pub mod widget;

pub use surface::{Announce, IndicatorFrame, IndicatorSurface, RecordingSurface};
pub use widget::PullToRefresh;
