#![forbid(unsafe_code)]

//! Translation sets and the shared override registry.
//!
//! # Invariants
//! 1. [`TranslationRegistry::resolve`] always returns a complete set.
//! 2. Overrides shadow built-ins per language code, never per field.
//! 3. The override table only grows or replaces entries; it is never cleared.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};

use crate::builtin::{self, BuiltinEntry};
use crate::lang::base_language;

/// The three indicator messages for one language.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TranslationSet {
    /// Shown while idle or pulling below the threshold.
    #[cfg_attr(feature = "serde", serde(default))]
    pub indicator: String,
    /// Shown while pulling past the threshold.
    #[cfg_attr(feature = "serde", serde(default))]
    pub release: String,
    /// Shown while a refresh is in flight.
    #[cfg_attr(feature = "serde", serde(default))]
    pub refreshing: String,
}

/// Selects one of the three messages of a [`TranslationSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextSlot {
    Indicator,
    Release,
    Refreshing,
}

impl TranslationSet {
    #[must_use]
    pub fn new(
        indicator: impl Into<String>,
        release: impl Into<String>,
        refreshing: impl Into<String>,
    ) -> Self {
        Self {
            indicator: indicator.into(),
            release: release.into(),
            refreshing: refreshing.into(),
        }
    }

    /// The English set every unknown language falls back to.
    #[must_use]
    pub fn english() -> Self {
        Self::from(builtin::fallback())
    }

    /// Message for the given slot.
    #[must_use]
    pub fn get(&self, slot: TextSlot) -> &str {
        match slot {
            TextSlot::Indicator => &self.indicator,
            TextSlot::Release => &self.release,
            TextSlot::Refreshing => &self.refreshing,
        }
    }
}

impl From<&BuiltinEntry> for TranslationSet {
    fn from(entry: &BuiltinEntry) -> Self {
        Self::new(entry.indicator, entry.release, entry.refreshing)
    }
}

/// Built-in catalog plus registered overrides.
///
/// Clones share the same override table, so a registry handed to several
/// widgets sees every later registration. Use [`TranslationRegistry::new`]
/// for an isolated table and [`TranslationRegistry::global`] for the
/// process-wide one.
#[derive(Clone, Default)]
pub struct TranslationRegistry {
    overrides: Arc<RwLock<HashMap<String, TranslationSet>>>,
}

impl std::fmt::Debug for TranslationRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationRegistry")
            .field("overrides", &self.override_count())
            .finish()
    }
}

impl TranslationRegistry {
    /// Registry with an empty override table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry.
    pub fn global() -> &'static TranslationRegistry {
        static GLOBAL: OnceLock<TranslationRegistry> = OnceLock::new();
        GLOBAL.get_or_init(TranslationRegistry::new)
    }

    /// Merge `table` into the overrides.
    ///
    /// Each entry replaces any previous override for the same base code.
    /// Entries whose key has no usable base code are skipped.
    pub fn register<I, K>(&self, table: I)
    where
        I: IntoIterator<Item = (K, TranslationSet)>,
        K: AsRef<str>,
    {
        let mut overrides = self.overrides.write().unwrap_or_else(|e| e.into_inner());
        for (tag, set) in table {
            if let Some(code) = base_language(tag.as_ref()) {
                overrides.insert(code, set);
            }
        }
    }

    /// Register a single language.
    pub fn register_one(&self, tag: &str, set: TranslationSet) {
        self.register([(tag, set)]);
    }

    /// Merge a JSON object of `{ code: { indicator, release, refreshing } }`.
    ///
    /// Missing fields become empty strings; the shape is not checked further.
    #[cfg(feature = "serde")]
    pub fn register_json(&self, json: &str) -> Result<usize, crate::I18nError> {
        let table: HashMap<String, TranslationSet> =
            serde_json::from_str(json).map_err(|e| crate::I18nError::Parse(e.to_string()))?;
        let count = table.len();
        self.register(table);
        Ok(count)
    }

    /// Resolve a language tag to its messages.
    ///
    /// Region subtags are ignored. Overrides win over built-ins; anything
    /// unknown resolves to English.
    #[must_use]
    pub fn resolve(&self, tag: &str) -> TranslationSet {
        let Some(code) = base_language(tag) else {
            return TranslationSet::english();
        };
        if let Some(set) = self
            .overrides
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&code)
        {
            return set.clone();
        }
        builtin::lookup(&code)
            .map(TranslationSet::from)
            .unwrap_or_else(TranslationSet::english)
    }

    /// Whether an override is registered for the tag's base code.
    #[must_use]
    pub fn has_override(&self, tag: &str) -> bool {
        base_language(tag).is_some_and(|code| {
            self.overrides
                .read()
                .unwrap_or_else(|e| e.into_inner())
                .contains_key(&code)
        })
    }

    /// Number of registered overrides.
    #[must_use]
    pub fn override_count(&self) -> usize {
        self.overrides.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Every code with messages available, sorted.
    #[must_use]
    pub fn languages(&self) -> Vec<String> {
        let mut codes: Vec<String> = builtin::BUILTINS
            .iter()
            .map(|e| e.code.to_string())
            .collect();
        codes.extend(
            self.overrides
                .read()
                .unwrap_or_else(|e| e.into_inner())
                .keys()
                .cloned(),
        );
        codes.sort_unstable();
        codes.dedup();
        codes
    }
}

/// Merge `table` into the process-wide registry.
pub fn register_translations<I, K>(table: I)
where
    I: IntoIterator<Item = (K, TranslationSet)>,
    K: AsRef<str>,
{
    TranslationRegistry::global().register(table);
}
