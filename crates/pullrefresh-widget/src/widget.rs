#![forbid(unsafe_code)]

//! The pull-to-refresh widget.
//!
//! [`PullToRefresh`] is the thin adapter between device input and the
//! state machine in `pullrefresh-core`. It owns the option store, forwards
//! pointer and scroll input to the recognizer, starts and ends refresh
//! sessions, and pushes indicator frames to the attached surface.
//!
//! # Invariants
//!
//! 1. `pull-end` is queued before the `refresh-triggered` or indicator reset
//!    that follows it.
//! 2. Every refresh session, however it ends, leaves the indicator reset.
//! 3. State transitions happen whether or not a surface is attached.
//!
//! # Timing
//!
//! The widget keeps no clock. Hosts pass `now` with each input and call
//! [`poll`](PullToRefresh::poll) regularly (e.g. on each animation frame) to
//! run the auto-complete deadline and deferred announcement re-enable.

use pullrefresh_core::{
    CompletionHandle, ConfigError, DisplayState, GestureEvent, GesturePhase, IndicatorPosition,
    IndicatorView,
    NotificationQueue, PointerGate, PullInput, PullNotification, PullOptions, PullRecognizer,
    RefreshController, Threshold, crosses_threshold,
};
use pullrefresh_i18n::{LangContext, TextSlot, TranslationRegistry, TranslationSet};
use web_time::Instant;

use crate::surface::{Announce, IndicatorFrame, IndicatorSurface};

/// A pull-to-refresh widget instance.
pub struct PullToRefresh {
    options: PullOptions,
    registry: TranslationRegistry,
    lang: LangContext,
    texts: TranslationSet,

    recognizer: PullRecognizer,
    controller: RefreshController,
    queue: NotificationQueue,
    seen_epoch: u64,

    scroll_offset: f32,
    listening: bool,
    /// A gesture was in progress when listeners were detached. It is kept,
    /// but no longer drives the indicator until a new pointer-down.
    detached_gesture: bool,

    view: IndicatorView,
    position: IndicatorPosition,
    announce: Announce,
    reenable_pending: bool,

    surface: Option<Box<dyn IndicatorSurface>>,
}

impl std::fmt::Debug for PullToRefresh {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PullToRefresh")
            .field("state", &self.view.state)
            .field("distance", &self.recognizer.distance())
            .field("listening", &self.listening)
            .field("surface", &self.surface.is_some())
            .finish()
    }
}

impl PullToRefresh {
    /// Create a widget resolving its messages through `registry`.
    #[must_use]
    pub fn new(options: PullOptions, registry: TranslationRegistry) -> Self {
        let lang = LangContext {
            instance: options.lang.clone(),
            ..LangContext::default()
        };
        let texts = registry.resolve(lang.effective());
        let view = IndicatorView::idle(&texts, &options.texts);
        let queue = NotificationQueue::new();
        let controller = RefreshController::with_queue(queue.clone());
        let seen_epoch = controller.epoch();
        let listening = !options.disabled;
        Self {
            options,
            registry,
            lang,
            texts,
            recognizer: PullRecognizer::new(),
            controller,
            queue,
            seen_epoch,
            scroll_offset: 0.0,
            listening,
            detached_gesture: false,
            view,
            position: IndicatorPosition::default(),
            announce: Announce::Assertive,
            reenable_pending: false,
            surface: None,
        }
    }

    /// Create a widget backed by the process-wide translation registry.
    #[must_use]
    pub fn with_global_translations(options: PullOptions) -> Self {
        Self::new(options, TranslationRegistry::global().clone())
    }

    /// Attach a surface and render the current frame to it.
    #[must_use]
    pub fn with_surface(mut self, surface: impl IndicatorSurface + 'static) -> Self {
        self.attach_surface(surface);
        self
    }

    pub fn attach_surface(&mut self, surface: impl IndicatorSurface + 'static) {
        self.surface = Some(Box::new(surface));
        self.render();
    }

    pub fn detach_surface(&mut self) -> Option<Box<dyn IndicatorSurface>> {
        self.surface.take()
    }

    // --- Input ---------------------------------------------------------

    /// Feed one input sample.
    pub fn handle(&mut self, input: &PullInput, now: Instant) {
        self.sync_lifecycle();
        if let PullInput::Scroll { offset } = *input {
            self.on_scroll(offset);
            return;
        }
        if !self.listening {
            return;
        }
        let gate = PointerGate {
            scroll_offset: self.scroll_offset,
            refreshing: self.controller.is_in_flight(),
            disabled: self.options.disabled,
        };
        let restart = matches!(input, PullInput::PointerDown { .. }) && gate.allows_pull();
        if self.detached_gesture {
            // Only a fresh pointer-down that the gate accepts replaces it.
            if !restart {
                return;
            }
            self.detached_gesture = false;
        }
        if restart && self.view.state != DisplayState::Idle {
            // A new sequence replaces a pull that never saw its release.
            self.reset_indicator();
        }
        for event in self.recognizer.process(input, gate) {
            match event {
                GestureEvent::Start => self.queue.push(PullNotification::PullStart),
                GestureEvent::Move { distance } => {
                    self.queue.push(PullNotification::PullMove { distance });
                    #[cfg(feature = "tracing")]
                    tracing::trace!(distance, "pull move");
                    self.refresh_view();
                }
                GestureEvent::End { distance } => {
                    self.queue.push(PullNotification::PullEnd);
                    let triggered = crosses_threshold(distance, self.options.threshold)
                        && self.trigger_refresh(now).is_some();
                    if !triggered {
                        self.settle_indicator();
                    }
                }
            }
        }
    }

    /// Record the container's scroll offset without other side effects.
    pub fn set_scroll_offset(&mut self, offset: f32) {
        self.scroll_offset = offset;
    }

    fn on_scroll(&mut self, offset: f32) {
        self.scroll_offset = offset;
        // Native scrolling took over; the gesture itself is left alone.
        if offset > 0.0 && !self.controller.is_in_flight() {
            self.reset_indicator();
        }
    }

    // --- Lifecycle -----------------------------------------------------

    /// Start a refresh as if the user had pulled past the threshold.
    ///
    /// Returns `None` if a refresh is already in flight.
    pub fn trigger_refresh(&mut self, now: Instant) -> Option<CompletionHandle> {
        let handle = self.controller.trigger(now)?;
        self.seen_epoch = self.controller.epoch();
        self.refresh_view();
        Some(handle)
    }

    /// End the refresh in flight, if any.
    pub fn complete_refresh(&mut self) -> bool {
        let done = self.controller.complete();
        self.sync_lifecycle();
        done
    }

    /// Run time-driven work: the auto-complete deadline and the deferred
    /// announcement re-enable.
    pub fn poll(&mut self, now: Instant) {
        self.controller.poll(now);
        self.sync_lifecycle();
        if self.reenable_pending {
            self.reenable_pending = false;
            self.announce = Announce::Assertive;
            self.render();
        }
    }

    /// Pick up session changes made outside the widget (handles, timeout).
    fn sync_lifecycle(&mut self) {
        let epoch = self.controller.epoch();
        if epoch == self.seen_epoch {
            return;
        }
        self.seen_epoch = epoch;
        self.settle_indicator();
    }

    /// Show the refreshing indicator if a session is open, else reset.
    fn settle_indicator(&mut self) {
        if self.controller.is_in_flight() {
            self.refresh_view();
        } else {
            self.reset_indicator();
        }
    }

    // --- Notifications -------------------------------------------------

    /// Take all pending notifications, oldest first.
    pub fn drain_notifications(&mut self) -> Vec<PullNotification> {
        self.sync_lifecycle();
        self.queue.drain()
    }

    /// The shared notification queue.
    #[must_use]
    pub fn notifications(&self) -> &NotificationQueue {
        &self.queue
    }

    // --- Options -------------------------------------------------------

    #[must_use]
    pub fn options(&self) -> &PullOptions {
        &self.options
    }

    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.options.threshold
    }

    /// Set the threshold from a number. Invalid values keep the old one.
    pub fn set_threshold(&mut self, value: i64) -> Result<Threshold, ConfigError> {
        let result = self.options.set_threshold(value);
        if result.is_ok() {
            self.refresh_view();
        }
        result
    }

    /// Set the threshold from attribute text. Invalid text keeps the old one.
    pub fn set_threshold_attr(&mut self, text: &str) -> Result<Threshold, ConfigError> {
        let result = self.options.set_threshold_attr(text);
        if result.is_ok() {
            self.refresh_view();
        }
        result
    }

    /// Override (or with `None`, un-override) one message.
    pub fn set_text(&mut self, slot: TextSlot, text: Option<String>) {
        self.options.texts.set(slot, text);
        self.refresh_view();
    }

    /// Set the instance language tag.
    pub fn set_lang(&mut self, tag: Option<String>) {
        self.options.lang = tag.clone();
        self.lang.instance = tag;
        self.reload_translations();
    }

    /// Replace the ancestor and document tags, keeping the instance tag.
    pub fn set_lang_context(&mut self, ancestors: Vec<String>, document: Option<String>) {
        self.lang.ancestors = ancestors;
        self.lang.document = document;
        self.reload_translations();
    }

    #[must_use]
    pub fn lang_context(&self) -> &LangContext {
        &self.lang
    }

    /// Re-resolve messages, e.g. after new translations were registered.
    pub fn reload_translations(&mut self) {
        self.texts = self.registry.resolve(self.lang.effective());
        #[cfg(feature = "tracing")]
        tracing::debug!(lang = self.lang.effective(), "translations resolved");
        self.refresh_view();
    }

    /// Messages currently in use.
    #[must_use]
    pub fn translations(&self) -> &TranslationSet {
        &self.texts
    }

    /// Enable or disable the widget.
    ///
    /// Disabling stops input from reaching the recognizer and resets the
    /// indicator (unless a refresh is in flight). A pull already confirmed is
    /// not cancelled; it stops receiving input and no longer shows, even
    /// after re-enabling, until a new pointer-down starts a gesture.
    pub fn set_disabled(&mut self, disabled: bool) {
        if self.options.disabled == disabled {
            return;
        }
        self.options.disabled = disabled;
        self.listening = !disabled;
        #[cfg(feature = "tracing")]
        tracing::debug!(disabled, "listeners toggled");
        if disabled && self.recognizer.state().is_active() {
            self.detached_gesture = true;
        }
        self.settle_indicator();
    }

    pub fn set_disable_selection(&mut self, disable: bool) {
        self.options.disable_selection = disable;
        self.render();
    }

    // --- State ---------------------------------------------------------

    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        self.controller.is_in_flight()
    }

    #[must_use]
    pub fn is_pulling(&self) -> bool {
        self.recognizer.is_pulling()
    }

    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Live pull distance.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.recognizer.distance()
    }

    /// What the indicator currently shows.
    #[must_use]
    pub fn indicator(&self) -> &IndicatorView {
        &self.view
    }

    #[must_use]
    pub fn position(&self) -> IndicatorPosition {
        self.position
    }

    #[must_use]
    pub fn announce(&self) -> Announce {
        self.announce
    }

    /// The frame the surface last received (or would have).
    #[must_use]
    pub fn frame(&self) -> IndicatorFrame {
        IndicatorFrame {
            view: self.view.clone(),
            position: self.position,
            announce: self.announce,
            selection_disabled: self.options.disable_selection,
            lang: self.lang.effective().to_string(),
        }
    }

    // --- Indicator -----------------------------------------------------

    fn refresh_view(&mut self) {
        let (phase, distance) = if self.detached_gesture {
            (GesturePhase::Idle, 0.0)
        } else {
            (self.recognizer.phase(), self.recognizer.distance())
        };
        let state = DisplayState::derive(
            phase,
            distance,
            self.options.threshold,
            self.controller.is_in_flight(),
        );
        self.view = IndicatorView::compose(state, &self.texts, &self.options.texts);
        self.position = IndicatorPosition::compute(state, distance, self.options.threshold);
        self.render();
    }

    fn reset_indicator(&mut self) {
        self.view = IndicatorView::idle(&self.texts, &self.options.texts);
        self.position = IndicatorPosition::default();
        self.announce = Announce::Off;
        self.reenable_pending = true;
        self.render();
    }

    fn render(&mut self) {
        let frame = self.frame();
        let Some(surface) = self.surface.as_mut() else {
            #[cfg(feature = "tracing")]
            tracing::trace!("no surface attached, render skipped");
            return;
        };
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "PullToRefresh",
            state = ?frame.view.state,
            offset = frame.position.offset
        )
        .entered();
        surface.apply(&frame);
    }
}
