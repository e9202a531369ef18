#![forbid(unsafe_code)]

//! Input accepted by the recognizer and widget.
//!
//! Coordinates are client-space pixels; only the vertical axis matters.
//! A single pointer is assumed: hosts with multi-touch input should forward
//! the primary pointer only.

/// Raw pointer and container input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PullInput {
    /// Primary pointer pressed at `y`.
    PointerDown { y: f32 },
    /// Pointer moved to `y` while pressed.
    PointerMove { y: f32 },
    /// Pointer released.
    PointerUp,
    /// The platform aborted the pointer sequence.
    PointerCancel,
    /// The scrollable container scrolled to `offset` (0 = top).
    Scroll { offset: f32 },
}

impl PullInput {
    #[must_use]
    pub const fn down(y: f32) -> Self {
        Self::PointerDown { y }
    }

    #[must_use]
    pub const fn move_to(y: f32) -> Self {
        Self::PointerMove { y }
    }

    #[must_use]
    pub const fn scroll(offset: f32) -> Self {
        Self::Scroll { offset }
    }

    /// Whether this input belongs to a pointer sequence.
    #[must_use]
    pub const fn is_pointer(&self) -> bool {
        !matches!(self, Self::Scroll { .. })
    }

    /// Whether this input ends a pointer sequence.
    #[must_use]
    pub const fn is_release(&self) -> bool {
        matches!(self, Self::PointerUp | Self::PointerCancel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification() {
        assert!(PullInput::down(0.0).is_pointer());
        assert!(PullInput::move_to(3.0).is_pointer());
        assert!(!PullInput::scroll(10.0).is_pointer());
        assert!(PullInput::PointerUp.is_release());
        assert!(PullInput::PointerCancel.is_release());
        assert!(!PullInput::down(0.0).is_release());
    }
}
