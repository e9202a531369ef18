#![forbid(unsafe_code)]

//! Language tag normalization and precedence.

/// Tag used when nothing in the chain names a language.
pub const DEFAULT_LANG: &str = "en";

/// Reduce a language tag to its lowercase primary subtag.
///
/// `"es-MX"` and `"es_mx"` both become `"es"`. Returns `None` for blank tags.
///
/// ```
/// use pullrefresh_i18n::base_language;
///
/// assert_eq!(base_language("pt-BR").as_deref(), Some("pt"));
/// assert_eq!(base_language("  "), None);
/// ```
#[must_use]
pub fn base_language(tag: &str) -> Option<String> {
    let primary = tag.trim().split(['-', '_']).next()?.trim();
    if primary.is_empty() {
        return None;
    }
    Some(primary.to_ascii_lowercase())
}

/// Where a widget instance can pick up its language from.
///
/// Sources are consulted in order: the instance's own tag, the nearest
/// ancestor carrying a tag, the document tag, then [`DEFAULT_LANG`].
/// Blank tags count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LangContext {
    /// Tag set directly on the widget.
    pub instance: Option<String>,
    /// Ancestor tags, nearest first.
    pub ancestors: Vec<String>,
    /// Document-level tag.
    pub document: Option<String>,
}

impl LangContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn instance(mut self, tag: impl Into<String>) -> Self {
        self.instance = Some(tag.into());
        self
    }

    /// Append an ancestor tag. Call from the nearest ancestor outwards.
    #[must_use]
    pub fn ancestor(mut self, tag: impl Into<String>) -> Self {
        self.ancestors.push(tag.into());
        self
    }

    #[must_use]
    pub fn document(mut self, tag: impl Into<String>) -> Self {
        self.document = Some(tag.into());
        self
    }

    /// The tag that wins the precedence chain.
    #[must_use]
    pub fn effective(&self) -> &str {
        let present = |tag: &&str| !tag.trim().is_empty();
        self.instance
            .as_deref()
            .filter(present)
            .or_else(|| self.ancestors.iter().map(String::as_str).find(present))
            .or_else(|| self.document.as_deref().filter(present))
            .unwrap_or(DEFAULT_LANG)
    }
}
