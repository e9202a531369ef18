//! Property-based invariant tests for translation resolution.
//!
//! 1. resolve never panics and always returns a set known to the registry
//! 2. Region subtags never change the resolved set
//! 3. Unknown codes resolve to English
//! 4. Overrides shadow built-ins verbatim
//! 5. base_language output is lowercase with no separators
//! 6. LangContext always yields a non-blank tag

use pullrefresh_i18n::builtin::BUILTINS;
use pullrefresh_i18n::{LangContext, TranslationRegistry, TranslationSet, base_language};
use proptest::prelude::*;

fn builtin_code() -> impl Strategy<Value = &'static str> {
    (0..BUILTINS.len()).prop_map(|i| BUILTINS[i].code)
}

fn message() -> impl Strategy<Value = String> {
    "[a-zA-Z .]{0,24}"
}

// ═════════════════════════════════════════════════════════════════════════
// 1. resolve never panics
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn resolve_never_panics(tag in "\\PC{0,16}") {
        let reg = TranslationRegistry::new();
        let set = reg.resolve(&tag);
        prop_assert!(!set.indicator.is_empty());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Region subtags are ignored
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn region_subtag_ignored(code in builtin_code(), region in "[A-Za-z0-9]{1,4}") {
        let reg = TranslationRegistry::new();
        let dashed = format!("{code}-{region}");
        let underscored = format!("{code}_{region}");
        prop_assert_eq!(reg.resolve(&dashed), reg.resolve(code));
        prop_assert_eq!(reg.resolve(&underscored), reg.resolve(code));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Unknown codes resolve to English
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn unknown_code_is_english(code in "[a-z]{3,6}") {
        prop_assume!(BUILTINS.iter().all(|e| e.code != code));
        let reg = TranslationRegistry::new();
        prop_assert_eq!(reg.resolve(&code), TranslationSet::english());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Overrides are returned verbatim
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn override_returned_verbatim(
        code in builtin_code(),
        indicator in message(),
        release in message(),
        refreshing in message(),
    ) {
        let reg = TranslationRegistry::new();
        let set = TranslationSet::new(indicator, release, refreshing);
        reg.register_one(code, set.clone());
        prop_assert_eq!(reg.resolve(code), set);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. base_language normal form
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn base_language_normal_form(tag in "[A-Za-z_-]{0,12}") {
        if let Some(code) = base_language(&tag) {
            prop_assert!(!code.is_empty());
            prop_assert!(!code.contains('-'));
            prop_assert!(!code.contains('_'));
            prop_assert_eq!(code.clone(), code.to_ascii_lowercase());
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. LangContext always yields a usable tag
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn lang_context_effective_non_blank(
        instance in proptest::option::of("[a-z ]{0,4}"),
        ancestors in proptest::collection::vec("[a-z ]{0,4}", 0..4),
        document in proptest::option::of("[a-z ]{0,4}"),
    ) {
        let ctx = LangContext { instance, ancestors, document };
        prop_assert!(!ctx.effective().trim().is_empty());
    }
}
