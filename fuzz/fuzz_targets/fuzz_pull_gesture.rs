#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pullrefresh_core::{
    CompletionHandle, DisplayState, PullInput, PullNotification, PullOptions, Threshold,
};
use pullrefresh_i18n::TranslationRegistry;
use pullrefresh_widget::PullToRefresh;
use web_time::{Duration, Instant};

#[derive(Debug, Arbitrary)]
enum Op {
    Down(i16),
    Move(i16),
    Up,
    Cancel,
    Scroll(u8),
    Advance(u16),
    Trigger,
    Complete,
    CompleteHandle(u8),
    Disable(bool),
    Threshold(u16),
}

fuzz_target!(|ops: Vec<Op>| {
    let mut widget = PullToRefresh::new(PullOptions::default(), TranslationRegistry::new());
    let mut now = Instant::now();
    let mut handles: Vec<CompletionHandle> = Vec::new();
    let mut in_flight = 0i64;

    for op in ops.into_iter().take(512) {
        match op {
            Op::Down(y) => widget.handle(&PullInput::down(f32::from(y)), now),
            Op::Move(y) => widget.handle(&PullInput::move_to(f32::from(y)), now),
            Op::Up => widget.handle(&PullInput::PointerUp, now),
            Op::Cancel => widget.handle(&PullInput::PointerCancel, now),
            Op::Scroll(o) => widget.handle(&PullInput::scroll(f32::from(o)), now),
            Op::Advance(ms) => {
                now += Duration::from_millis(u64::from(ms));
                widget.poll(now);
            }
            Op::Trigger => {
                widget.trigger_refresh(now);
            }
            Op::Complete => {
                widget.complete_refresh();
            }
            Op::CompleteHandle(i) => {
                if !handles.is_empty() {
                    handles[usize::from(i) % handles.len()].complete();
                }
            }
            Op::Disable(d) => widget.set_disabled(d),
            Op::Threshold(t) => {
                let _ = widget.set_threshold(i64::from(t));
            }
        }

        // Triggers and completions must alternate.
        for n in widget.drain_notifications() {
            match n {
                PullNotification::RefreshTriggered { complete } => {
                    in_flight += 1;
                    handles.push(complete);
                }
                PullNotification::RefreshCompleted { .. } => in_flight -= 1,
                _ => {}
            }
            assert!((0..=1).contains(&in_flight), "unbalanced refresh notifications");
        }
        assert_eq!(widget.is_refreshing(), in_flight == 1);
        if widget.is_refreshing() {
            assert_eq!(widget.indicator().state, DisplayState::Refreshing);
        }
        assert!(widget.threshold() <= Threshold::new(u32::from(u16::MAX)));
    }
});
