#![forbid(unsafe_code)]

//! Indicator state derivation and positioning.
//!
//! Everything here is a pure function of gesture state, threshold, and
//! whether a refresh is in flight. Callers recompute on each relevant change
//! instead of storing derived values.

use pullrefresh_i18n::{TextSlot, TranslationSet};

use crate::config::{TextOverrides, Threshold};
use crate::gesture::{GesturePhase, crosses_threshold};

/// What the indicator is currently communicating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayState {
    #[default]
    Idle,
    PullingBelowThreshold,
    PullingAboveThreshold,
    Refreshing,
}

impl DisplayState {
    /// Derive the display state. Refreshing wins over any gesture.
    #[must_use]
    pub fn derive(
        phase: GesturePhase,
        distance: f32,
        threshold: Threshold,
        refreshing: bool,
    ) -> Self {
        if refreshing {
            return Self::Refreshing;
        }
        match phase {
            GesturePhase::Confirmed if crosses_threshold(distance, threshold) => {
                Self::PullingAboveThreshold
            }
            GesturePhase::Confirmed => Self::PullingBelowThreshold,
            GesturePhase::Idle | GesturePhase::Pending => Self::Idle,
        }
    }

    /// Whether releasing now would trigger (or a refresh is running).
    #[inline]
    #[must_use]
    pub const fn is_armed(self) -> bool {
        matches!(self, Self::PullingAboveThreshold | Self::Refreshing)
    }

    /// Which message this state shows.
    #[must_use]
    pub const fn slot(self) -> TextSlot {
        match self {
            Self::Idle | Self::PullingBelowThreshold => TextSlot::Indicator,
            Self::PullingAboveThreshold => TextSlot::Release,
            Self::Refreshing => TextSlot::Refreshing,
        }
    }
}

/// Text and armed flag to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorView {
    pub state: DisplayState,
    pub text: String,
    pub armed: bool,
}

impl IndicatorView {
    /// Pick the message for `state`: the per-instance override for its slot
    /// if set, else the localized message.
    #[must_use]
    pub fn compose(state: DisplayState, texts: &TranslationSet, overrides: &TextOverrides) -> Self {
        let slot = state.slot();
        let text = overrides.get(slot).unwrap_or_else(|| texts.get(slot));
        Self {
            state,
            text: text.to_string(),
            armed: state.is_armed(),
        }
    }

    /// The idle view.
    #[must_use]
    pub fn idle(texts: &TranslationSet, overrides: &TextOverrides) -> Self {
        Self::compose(DisplayState::Idle, texts, overrides)
    }
}

/// Where the indicator sits, for the renderer to apply.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IndicatorPosition {
    /// Downward offset in pixels.
    pub offset: f32,
    /// Pull progress toward the threshold, `0.0..=1.0`.
    pub progress: f32,
}

impl IndicatorPosition {
    /// Map display state and live distance to a position.
    ///
    /// While pulling the indicator follows the pointer; while refreshing it
    /// parks at the threshold.
    #[must_use]
    pub fn compute(state: DisplayState, distance: f32, threshold: Threshold) -> Self {
        match state {
            DisplayState::Idle => Self::default(),
            DisplayState::Refreshing => Self {
                offset: threshold.as_f32(),
                progress: 1.0,
            },
            DisplayState::PullingBelowThreshold | DisplayState::PullingAboveThreshold => {
                let offset = distance.max(0.0);
                let progress = if threshold.pixels() == 0 {
                    if offset > 0.0 { 1.0 } else { 0.0 }
                } else {
                    (offset / threshold.as_f32()).clamp(0.0, 1.0)
                };
                Self { offset, progress }
            }
        }
    }

    /// Whether the indicator is pulled into view at all.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.offset > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T80: Threshold = Threshold::new(80);

    fn spanish() -> TranslationSet {
        TranslationSet::new(
            "Desliza hacia abajo para actualizar",
            "Suelta para actualizar",
            "Actualizando...",
        )
    }

    #[test]
    fn derive_covers_all_states() {
        use GesturePhase::*;
        assert_eq!(DisplayState::derive(Idle, 0.0, T80, false), DisplayState::Idle);
        assert_eq!(DisplayState::derive(Pending, 3.0, T80, false), DisplayState::Idle);
        assert_eq!(
            DisplayState::derive(Confirmed, 50.0, T80, false),
            DisplayState::PullingBelowThreshold
        );
        assert_eq!(
            DisplayState::derive(Confirmed, 80.0, T80, false),
            DisplayState::PullingBelowThreshold
        );
        assert_eq!(
            DisplayState::derive(Confirmed, 81.0, T80, false),
            DisplayState::PullingAboveThreshold
        );
        assert_eq!(
            DisplayState::derive(Confirmed, 200.0, T80, true),
            DisplayState::Refreshing
        );
        assert_eq!(DisplayState::derive(Idle, 0.0, T80, true), DisplayState::Refreshing);
    }

    #[test]
    fn armed_flag() {
        assert!(!DisplayState::Idle.is_armed());
        assert!(!DisplayState::PullingBelowThreshold.is_armed());
        assert!(DisplayState::PullingAboveThreshold.is_armed());
        assert!(DisplayState::Refreshing.is_armed());
    }

    #[test]
    fn compose_uses_localized_text() {
        let texts = spanish();
        let none = TextOverrides::default();
        let v = IndicatorView::compose(DisplayState::PullingAboveThreshold, &texts, &none);
        assert_eq!(v.text, "Suelta para actualizar");
        assert!(v.armed);
        let v = IndicatorView::compose(DisplayState::Refreshing, &texts, &none);
        assert_eq!(v.text, "Actualizando...");
        let v = IndicatorView::idle(&texts, &none);
        assert_eq!(v.text, "Desliza hacia abajo para actualizar");
        assert!(!v.armed);
    }

    #[test]
    fn indicator_override_only_covers_its_slot() {
        let texts = spanish();
        let overrides = TextOverrides {
            indicator: Some("Tira".into()),
            ..TextOverrides::default()
        };
        let idle = IndicatorView::compose(DisplayState::Idle, &texts, &overrides);
        let below = IndicatorView::compose(DisplayState::PullingBelowThreshold, &texts, &overrides);
        let above = IndicatorView::compose(DisplayState::PullingAboveThreshold, &texts, &overrides);
        assert_eq!(idle.text, "Tira");
        assert_eq!(below.text, "Tira");
        assert_eq!(above.text, "Suelta para actualizar");
    }

    #[test]
    fn release_and_refreshing_overrides() {
        let texts = TranslationSet::english();
        let overrides = TextOverrides {
            indicator: None,
            release: Some("Let go!".into()),
            refreshing: Some("Fetching".into()),
        };
        assert_eq!(
            IndicatorView::compose(DisplayState::PullingAboveThreshold, &texts, &overrides).text,
            "Let go!"
        );
        assert_eq!(
            IndicatorView::compose(DisplayState::Refreshing, &texts, &overrides).text,
            "Fetching"
        );
        assert_eq!(
            IndicatorView::compose(DisplayState::Idle, &texts, &overrides).text,
            "Pull down to refresh"
        );
    }

    #[test]
    fn position_follows_pull() {
        let p = IndicatorPosition::compute(DisplayState::PullingBelowThreshold, 40.0, T80);
        assert_eq!(p.offset, 40.0);
        assert_eq!(p.progress, 0.5);
        let p = IndicatorPosition::compute(DisplayState::PullingAboveThreshold, 160.0, T80);
        assert_eq!(p.offset, 160.0);
        assert_eq!(p.progress, 1.0);
    }

    #[test]
    fn position_clamps_negative_distance() {
        let p = IndicatorPosition::compute(DisplayState::PullingBelowThreshold, -20.0, T80);
        assert_eq!(p, IndicatorPosition::default());
        assert!(!p.is_visible());
    }

    #[test]
    fn position_parks_at_threshold_while_refreshing() {
        let p = IndicatorPosition::compute(DisplayState::Refreshing, 0.0, T80);
        assert_eq!(p.offset, 80.0);
        assert_eq!(p.progress, 1.0);
    }

    #[test]
    fn position_idle_is_hidden() {
        let p = IndicatorPosition::compute(DisplayState::Idle, 50.0, T80);
        assert!(!p.is_visible());
    }

    #[test]
    fn zero_threshold_progress() {
        let zero = Threshold::new(0);
        let p = IndicatorPosition::compute(DisplayState::PullingAboveThreshold, 3.0, zero);
        assert_eq!(p.progress, 1.0);
        let p = IndicatorPosition::compute(DisplayState::PullingBelowThreshold, 0.0, zero);
        assert_eq!(p.progress, 0.0);
    }
}
