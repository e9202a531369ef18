#![forbid(unsafe_code)]

//! Localization for the pull-to-refresh indicator.
//!
//! Provides the three indicator messages per language, a shared override
//! registry layered on top of a built-in catalog, and the language-tag
//! precedence chain used to pick a language for a widget instance.
//!
//! # Role in pullrefresh
//! `pullrefresh-i18n` is a leaf crate. The widget resolves its effective
//! language tag through [`LangContext`], then asks a [`TranslationRegistry`]
//! for the [`TranslationSet`] to display. Resolution never fails: unknown
//! languages fall back to English.
//!
//! # Example
//! ```
//! use pullrefresh_i18n::{TranslationRegistry, TranslationSet};
//!
//! let registry = TranslationRegistry::new();
//! assert_eq!(registry.resolve("es-MX"), registry.resolve("es"));
//! assert_eq!(registry.resolve("xx"), TranslationSet::english());
//! ```

pub mod builtin;
pub mod catalog;
pub mod lang;

pub use catalog::{TextSlot, TranslationRegistry, TranslationSet, register_translations};
pub use lang::{DEFAULT_LANG, LangContext, base_language};

/// Errors raised while loading external translation tables.
#[derive(Debug, thiserror::Error)]
pub enum I18nError {
    /// The table document could not be parsed.
    #[error("invalid translation table: {0}")]
    Parse(String),
}
