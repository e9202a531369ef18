#![no_main]

use pullrefresh_core::{PullOptions, Threshold};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let mut options = PullOptions::default();
    let before = options.threshold;
    match options.set_threshold_attr(text) {
        Ok(t) => {
            assert_eq!(options.threshold, t);
            assert_eq!(Threshold::parse(&t.pixels().to_string()), Ok(t));
        }
        Err(_) => assert_eq!(options.threshold, before, "rejected value changed threshold"),
    }
});
