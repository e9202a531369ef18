#![forbid(unsafe_code)]

//! Pull gesture recognition: turns pointer samples into pull events.
//!
//! [`PullRecognizer`] watches a single pointer sequence that starts while the
//! scrollable container is at its top and decides whether it is a downward
//! pull or an ordinary upward scroll.
//!
//! # State Machine
//!
//! ```text
//!            down (gate open)             |dy| > 5, dy > 0
//!   Idle ─────────────────────▶ Pending ───────────────────▶ Confirmed ◀─┐
//!    ▲                            │      → Start, Move(dy)       │  │    │ move, dy > 0
//!    │                            │ |dy| > 5, dy < 0             │  └────┘ → Move(dy)
//!    └────────────────────────────┘  (silent)                    │ up / cancel
//!    └───────────────────────────────────────────────────────────┘  → End
//! ```
//!
//! The confirming move reports its distance right away: it yields `Start`
//! followed by `Move`, so hosts see the live distance from the first frame of
//! the pull.
//!
//! # Invariants
//!
//! 1. `Start` is emitted at most once per pointer sequence, and only after a
//!    downward movement larger than [`DIRECTION_DEAD_ZONE`].
//! 2. An upward movement past the dead zone while pending emits nothing.
//! 3. Every `Start` is eventually followed by exactly one `End` unless the
//!    recognizer is [`reset`](PullRecognizer::reset) or stops receiving input.
//! 4. `Move` distances are recomputed from the start point on every sample,
//!    never accumulated, and are always positive.
//! 5. After `End` the live distance is zero.
//!
//! # Failure Modes
//!
//! - Once confirmed, moving back above the start point only suppresses
//!   `Move`; it does not cancel the pull.
//! - A pointer-down with the gate closed leaves all state untouched.

use crate::config::Threshold;
use crate::event::PullInput;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Vertical travel, in pixels, before the direction of a pull is decided.
pub const DIRECTION_DEAD_ZONE: f32 = 5.0;

/// Conditions under which a pointer-down may start a pull.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerGate {
    /// Current scroll offset of the container.
    pub scroll_offset: f32,
    /// Whether a refresh is in flight.
    pub refreshing: bool,
    /// Whether the widget is disabled.
    pub disabled: bool,
}

impl PointerGate {
    /// Gate for an enabled widget at the top of its container.
    #[must_use]
    pub const fn open() -> Self {
        Self {
            scroll_offset: 0.0,
            refreshing: false,
            disabled: false,
        }
    }

    /// Whether a pull may begin.
    #[must_use]
    pub fn allows_pull(&self) -> bool {
        self.scroll_offset == 0.0 && !self.refreshing && !self.disabled
    }
}

impl Default for PointerGate {
    fn default() -> Self {
        Self::open()
    }
}

/// Whether releasing at `distance` should trigger a refresh.
///
/// Strict: a pull of exactly `threshold` pixels does not trigger.
#[inline]
#[must_use]
pub fn crosses_threshold(distance: f32, threshold: Threshold) -> bool {
    distance > 0.0 && distance > threshold.as_f32()
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Recognition phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GesturePhase {
    /// No pointer sequence is being tracked.
    #[default]
    Idle,
    /// Pointer is down; direction not yet decided.
    Pending,
    /// Direction decided: this is a pull.
    Confirmed,
}

/// Snapshot of the tracked gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureState {
    pub phase: GesturePhase,
    /// Pointer y at pointer-down.
    pub start_y: f32,
    /// Latest `y - start_y`. Only meaningful while not idle.
    pub delta_y: f32,
}

impl GestureState {
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase != GesturePhase::Idle
    }

    #[inline]
    #[must_use]
    pub fn is_confirmed(&self) -> bool {
        self.phase == GesturePhase::Confirmed
    }

    /// Live pull distance: the delta while confirmed, zero otherwise.
    #[inline]
    #[must_use]
    pub fn distance(&self) -> f32 {
        if self.is_confirmed() { self.delta_y } else { 0.0 }
    }
}

/// Output of the recognizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// A downward pull was confirmed.
    Start,
    /// The pull distance changed to a positive value.
    Move { distance: f32 },
    /// The confirmed pull was released with the given final distance.
    End { distance: f32 },
}

// ---------------------------------------------------------------------------
// PullRecognizer
// ---------------------------------------------------------------------------

/// Stateful recognizer for the pull gesture.
///
/// Call [`process`](PullRecognizer::process) for each pointer input together
/// with the current [`PointerGate`]. Scroll inputs are accepted and ignored;
/// scroll handling is a visual concern of the caller.
#[derive(Debug, Clone, Default)]
pub struct PullRecognizer {
    state: GestureState,
}

impl PullRecognizer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one input, returning the events it produced.
    ///
    /// The confirming move yields both `Start` and `Move`.
    pub fn process(&mut self, input: &PullInput, gate: PointerGate) -> Vec<GestureEvent> {
        let mut out = Vec::with_capacity(2);
        match *input {
            PullInput::PointerDown { y } => self.on_pointer_down(y, gate),
            PullInput::PointerMove { y } => self.on_pointer_move(y, &mut out),
            PullInput::PointerUp | PullInput::PointerCancel => self.on_release(&mut out),
            PullInput::Scroll { .. } => {}
        }
        out
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> &GestureState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.state.phase
    }

    /// Live pull distance (zero unless confirmed).
    #[inline]
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.state.distance()
    }

    /// Whether a confirmed pull is in progress.
    #[inline]
    #[must_use]
    pub fn is_pulling(&self) -> bool {
        self.state.is_confirmed()
    }

    /// Drop any tracked gesture without emitting events.
    pub fn reset(&mut self) {
        self.state = GestureState::default();
    }
}

// ---------------------------------------------------------------------------
// Internal event handlers
// ---------------------------------------------------------------------------

impl PullRecognizer {
    fn on_pointer_down(&mut self, y: f32, gate: PointerGate) {
        if !gate.allows_pull() {
            return;
        }
        self.state = GestureState {
            phase: GesturePhase::Pending,
            start_y: y,
            delta_y: 0.0,
        };
        #[cfg(feature = "tracing")]
        tracing::trace!(start_y = y, "pull pending");
    }

    fn on_pointer_move(&mut self, y: f32, out: &mut Vec<GestureEvent>) {
        let delta = y - self.state.start_y;
        match self.state.phase {
            GesturePhase::Idle => {}
            GesturePhase::Pending => {
                self.state.delta_y = delta;
                if delta.abs() <= DIRECTION_DEAD_ZONE {
                    return;
                }
                if delta < 0.0 {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(delta, "upward movement, pull abandoned");
                    self.reset();
                    return;
                }
                self.state.phase = GesturePhase::Confirmed;
                #[cfg(feature = "tracing")]
                tracing::debug!(delta, "pull confirmed");
                out.push(GestureEvent::Start);
                out.push(GestureEvent::Move { distance: delta });
            }
            GesturePhase::Confirmed => {
                self.state.delta_y = delta;
                if delta > 0.0 {
                    out.push(GestureEvent::Move { distance: delta });
                }
            }
        }
    }

    fn on_release(&mut self, out: &mut Vec<GestureEvent>) {
        if self.state.is_confirmed() {
            let distance = self.state.delta_y;
            #[cfg(feature = "tracing")]
            tracing::debug!(distance, "pull released");
            out.push(GestureEvent::End { distance });
        }
        self.reset();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn down(y: f32) -> PullInput {
        PullInput::PointerDown { y }
    }

    fn mv(y: f32) -> PullInput {
        PullInput::PointerMove { y }
    }

    fn feed(gr: &mut PullRecognizer, inputs: &[PullInput]) -> Vec<GestureEvent> {
        inputs
            .iter()
            .flat_map(|i| gr.process(i, PointerGate::open()))
            .collect()
    }

    // --- Pointer-down gating ---

    #[test]
    fn down_at_top_goes_pending() {
        let mut gr = PullRecognizer::new();
        let events = gr.process(&down(10.0), PointerGate::open());
        assert!(events.is_empty());
        assert_eq!(gr.phase(), GesturePhase::Pending);
        assert_eq!(gr.state().start_y, 10.0);
    }

    #[test]
    fn down_while_scrolled_is_ignored() {
        let mut gr = PullRecognizer::new();
        let gate = PointerGate {
            scroll_offset: 1.0,
            ..PointerGate::open()
        };
        gr.process(&down(0.0), gate);
        assert_eq!(gr.phase(), GesturePhase::Idle);
    }

    #[test]
    fn down_while_refreshing_is_ignored() {
        let mut gr = PullRecognizer::new();
        let gate = PointerGate {
            refreshing: true,
            ..PointerGate::open()
        };
        gr.process(&down(0.0), gate);
        assert_eq!(gr.phase(), GesturePhase::Idle);
    }

    #[test]
    fn down_while_disabled_is_ignored() {
        let mut gr = PullRecognizer::new();
        let gate = PointerGate {
            disabled: true,
            ..PointerGate::open()
        };
        gr.process(&down(0.0), gate);
        assert_eq!(gr.phase(), GesturePhase::Idle);
    }

    #[test]
    fn closed_gate_leaves_existing_state() {
        let mut gr = PullRecognizer::new();
        feed(&mut gr, &[down(0.0), mv(20.0)]);
        let gate = PointerGate {
            disabled: true,
            ..PointerGate::open()
        };
        gr.process(&down(50.0), gate);
        assert!(gr.is_pulling());
        assert_eq!(gr.state().start_y, 0.0);
    }

    // --- Dead zone ---

    #[test]
    fn moves_within_dead_zone_stay_pending() {
        let mut gr = PullRecognizer::new();
        let events = feed(&mut gr, &[down(0.0), mv(3.0), mv(-5.0), mv(5.0)]);
        assert!(events.is_empty());
        assert_eq!(gr.phase(), GesturePhase::Pending);
    }

    #[test]
    fn upward_past_dead_zone_cancels_silently() {
        let mut gr = PullRecognizer::new();
        let events = feed(&mut gr, &[down(100.0), mv(94.0), mv(200.0), PullInput::PointerUp]);
        assert!(events.is_empty());
        assert_eq!(gr.phase(), GesturePhase::Idle);
    }

    #[test]
    fn downward_past_dead_zone_confirms() {
        let mut gr = PullRecognizer::new();
        let events = feed(&mut gr, &[down(0.0), mv(6.0)]);
        assert_eq!(
            events,
            vec![GestureEvent::Start, GestureEvent::Move { distance: 6.0 }]
        );
        assert!(gr.is_pulling());
    }

    // --- Confirmed moves ---

    #[test]
    fn distance_is_recomputed_not_accumulated() {
        let mut gr = PullRecognizer::new();
        let events = feed(&mut gr, &[down(10.0), mv(30.0), mv(50.0), mv(40.0)]);
        assert_eq!(
            events,
            vec![
                GestureEvent::Start,
                GestureEvent::Move { distance: 20.0 },
                GestureEvent::Move { distance: 40.0 },
                GestureEvent::Move { distance: 30.0 },
            ]
        );
        assert_eq!(gr.distance(), 30.0);
    }

    #[test]
    fn non_positive_distance_emits_nothing_and_does_not_cancel() {
        let mut gr = PullRecognizer::new();
        feed(&mut gr, &[down(10.0), mv(30.0)]);
        let events = feed(&mut gr, &[mv(10.0), mv(-40.0)]);
        assert!(events.is_empty());
        assert!(gr.is_pulling());
        let events = feed(&mut gr, &[mv(12.0)]);
        assert_eq!(events, vec![GestureEvent::Move { distance: 2.0 }]);
    }

    // --- Release ---

    #[test]
    fn release_emits_end_with_final_distance() {
        let mut gr = PullRecognizer::new();
        let events = feed(&mut gr, &[down(0.0), mv(100.0), PullInput::PointerUp]);
        assert_eq!(events.last(), Some(&GestureEvent::End { distance: 100.0 }));
        assert_eq!(gr.phase(), GesturePhase::Idle);
        assert_eq!(gr.distance(), 0.0);
    }

    #[test]
    fn cancel_behaves_like_up() {
        let mut gr = PullRecognizer::new();
        let events = feed(&mut gr, &[down(0.0), mv(30.0), PullInput::PointerCancel]);
        assert_eq!(events.last(), Some(&GestureEvent::End { distance: 30.0 }));
        assert_eq!(gr.phase(), GesturePhase::Idle);
    }

    #[test]
    fn release_while_pending_is_silent() {
        let mut gr = PullRecognizer::new();
        let events = feed(&mut gr, &[down(0.0), mv(2.0), PullInput::PointerUp]);
        assert!(events.is_empty());
        assert_eq!(gr.phase(), GesturePhase::Idle);
    }

    #[test]
    fn release_after_moving_back_up_reports_negative_distance() {
        let mut gr = PullRecognizer::new();
        let events = feed(
            &mut gr,
            &[down(50.0), mv(80.0), mv(20.0), PullInput::PointerUp],
        );
        assert_eq!(events.last(), Some(&GestureEvent::End { distance: -30.0 }));
    }

    #[test]
    fn move_without_down_is_ignored() {
        let mut gr = PullRecognizer::new();
        let events = feed(&mut gr, &[mv(100.0), PullInput::PointerUp]);
        assert!(events.is_empty());
    }

    #[test]
    fn scroll_input_is_ignored() {
        let mut gr = PullRecognizer::new();
        feed(&mut gr, &[down(0.0), mv(20.0)]);
        let events = feed(&mut gr, &[PullInput::Scroll { offset: 30.0 }]);
        assert!(events.is_empty());
        assert!(gr.is_pulling());
    }

    #[test]
    fn reset_clears_everything() {
        let mut gr = PullRecognizer::new();
        feed(&mut gr, &[down(0.0), mv(20.0)]);
        gr.reset();
        assert_eq!(*gr.state(), GestureState::default());
        assert!(feed(&mut gr, &[PullInput::PointerUp]).is_empty());
    }

    #[test]
    fn new_down_restarts_tracking() {
        let mut gr = PullRecognizer::new();
        feed(&mut gr, &[down(0.0), mv(40.0)]);
        let events = feed(&mut gr, &[down(100.0), mv(103.0)]);
        assert!(events.is_empty());
        assert_eq!(gr.phase(), GesturePhase::Pending);
    }

    // --- Threshold ---

    #[test]
    fn threshold_is_strict() {
        let t = Threshold::new(80);
        assert!(!crosses_threshold(80.0, t));
        assert!(crosses_threshold(80.5, t));
        assert!(!crosses_threshold(0.0, Threshold::new(0)));
        assert!(crosses_threshold(0.1, Threshold::new(0)));
        assert!(!crosses_threshold(-10.0, Threshold::new(0)));
    }

    #[test]
    fn gate_default_is_open() {
        assert!(PointerGate::default().allows_pull());
    }
}
