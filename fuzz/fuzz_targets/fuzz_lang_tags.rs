#![no_main]

use libfuzzer_sys::fuzz_target;
use pullrefresh_i18n::{LangContext, TranslationRegistry, base_language};

fuzz_target!(|tags: (String, Vec<String>, Option<String>)| {
    let (instance, ancestors, document) = tags;
    let ctx = LangContext {
        instance: Some(instance.clone()),
        ancestors,
        document,
    };
    let tag = ctx.effective();
    assert!(!tag.trim().is_empty());

    // Resolution never fails and never yields empty messages.
    let registry = TranslationRegistry::new();
    let set = registry.resolve(tag);
    assert!(!set.indicator.is_empty());
    assert!(!set.release.is_empty());
    assert!(!set.refreshing.is_empty());

    if let Some(base) = base_language(&instance) {
        assert!(!base.bytes().any(|b| b.is_ascii_uppercase()));
        assert!(!base.contains(['-', '_']));
    }
});
