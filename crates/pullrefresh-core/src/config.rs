#![forbid(unsafe_code)]

//! Widget options and threshold validation.
//!
//! [`PullOptions`] is the single store for everything a host can configure.
//! Threshold input arrives either as text (attribute-style) or as a number
//! (property-style); both paths go through [`Threshold::try_from`] so they
//! accept and reject exactly the same values.

use std::fmt;
use std::str::FromStr;

use pullrefresh_i18n::TextSlot;

/// Default pull distance, in pixels, needed to arm a refresh.
pub const DEFAULT_THRESHOLD: u32 = 80;

/// Rejected option input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("threshold is not a number: {0:?}")]
    NotNumeric(String),
    #[error("threshold must not be negative: {0}")]
    Negative(i64),
    #[error("threshold out of range: {0}")]
    OutOfRange(i64),
}

/// Minimum downward pull distance, in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "i64", into = "u32")
)]
pub struct Threshold(u32);

impl Threshold {
    pub const DEFAULT: Self = Self(DEFAULT_THRESHOLD);

    #[must_use]
    pub const fn new(pixels: u32) -> Self {
        Self(pixels)
    }

    #[inline]
    #[must_use]
    pub const fn pixels(self) -> u32 {
        self.0
    }

    #[inline]
    #[must_use]
    pub fn as_f32(self) -> f32 {
        self.0 as f32
    }

    /// Parse attribute text. Surrounding whitespace is ignored.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let trimmed = text.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| ConfigError::NotNumeric(trimmed.to_string()))?;
        Self::try_from(value)
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for Threshold {
    type Error = ConfigError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 0 {
            return Err(ConfigError::Negative(value));
        }
        u32::try_from(value)
            .map(Self)
            .map_err(|_| ConfigError::OutOfRange(value))
    }
}

impl FromStr for Threshold {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Threshold> for u32 {
    fn from(t: Threshold) -> Self {
        t.0
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

/// Per-instance replacements for the localized messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TextOverrides {
    pub indicator: Option<String>,
    pub release: Option<String>,
    pub refreshing: Option<String>,
}

impl TextOverrides {
    /// Override for the slot, if one is set.
    #[must_use]
    pub fn get(&self, slot: TextSlot) -> Option<&str> {
        match slot {
            TextSlot::Indicator => self.indicator.as_deref(),
            TextSlot::Release => self.release.as_deref(),
            TextSlot::Refreshing => self.refreshing.as_deref(),
        }
    }

    pub fn set(&mut self, slot: TextSlot, text: Option<String>) {
        let target = match slot {
            TextSlot::Indicator => &mut self.indicator,
            TextSlot::Release => &mut self.release,
            TextSlot::Refreshing => &mut self.refreshing,
        };
        *target = text;
    }
}

/// Everything a host can configure on a widget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PullOptions {
    /// Distance that arms a refresh.
    pub threshold: Threshold,
    /// Message overrides.
    pub texts: TextOverrides,
    /// Language tag set on the instance itself.
    pub lang: Option<String>,
    /// Ignore new gestures.
    pub disabled: bool,
    /// Suppress selection styling while pulling. Cosmetic only.
    pub disable_selection: bool,
}

impl PullOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn threshold(mut self, threshold: Threshold) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub fn indicator_text(mut self, text: impl Into<String>) -> Self {
        self.texts.indicator = Some(text.into());
        self
    }

    #[must_use]
    pub fn release_text(mut self, text: impl Into<String>) -> Self {
        self.texts.release = Some(text.into());
        self
    }

    #[must_use]
    pub fn refreshing_text(mut self, text: impl Into<String>) -> Self {
        self.texts.refreshing = Some(text.into());
        self
    }

    #[must_use]
    pub fn lang(mut self, tag: impl Into<String>) -> Self {
        self.lang = Some(tag.into());
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn disable_selection(mut self, disable: bool) -> Self {
        self.disable_selection = disable;
        self
    }

    /// Set the threshold from a number, keeping the current value on error.
    pub fn set_threshold(&mut self, value: i64) -> Result<Threshold, ConfigError> {
        self.apply_threshold(Threshold::try_from(value))
    }

    /// Set the threshold from attribute text, keeping the current value on error.
    pub fn set_threshold_attr(&mut self, text: &str) -> Result<Threshold, ConfigError> {
        self.apply_threshold(Threshold::parse(text))
    }

    fn apply_threshold(
        &mut self,
        parsed: Result<Threshold, ConfigError>,
    ) -> Result<Threshold, ConfigError> {
        match parsed {
            Ok(t) => {
                self.threshold = t;
                Ok(t)
            }
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %err, kept = self.threshold.pixels(), "threshold rejected");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_threshold_is_80() {
        assert_eq!(Threshold::default().pixels(), 80);
        assert_eq!(PullOptions::default().threshold, Threshold::new(80));
    }

    #[test]
    fn parse_accepts_non_negative_integers() {
        assert_eq!(Threshold::parse("0"), Ok(Threshold::new(0)));
        assert_eq!(Threshold::parse(" 120 "), Ok(Threshold::new(120)));
        assert_eq!("45".parse::<Threshold>(), Ok(Threshold::new(45)));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(Threshold::parse("abc"), Err(ConfigError::NotNumeric(_))));
        assert!(matches!(Threshold::parse(""), Err(ConfigError::NotNumeric(_))));
        assert!(matches!(Threshold::parse("12.5"), Err(ConfigError::NotNumeric(_))));
    }

    #[test]
    fn parse_rejects_negative() {
        assert_eq!(Threshold::parse("-1"), Err(ConfigError::Negative(-1)));
    }

    #[test]
    fn try_from_rejects_out_of_range() {
        let big = i64::from(u32::MAX) + 1;
        assert_eq!(Threshold::try_from(big), Err(ConfigError::OutOfRange(big)));
    }

    #[test]
    fn invalid_input_keeps_previous_value() {
        let mut opts = PullOptions::new();
        opts.set_threshold(150).unwrap();
        assert!(opts.set_threshold(-5).is_err());
        assert_eq!(opts.threshold.pixels(), 150);
        assert!(opts.set_threshold_attr("lots").is_err());
        assert_eq!(opts.threshold.pixels(), 150);
    }

    #[test]
    fn both_paths_share_validation() {
        let mut by_number = PullOptions::new();
        let mut by_text = PullOptions::new();
        for (n, s) in [(0, "0"), (-3, "-3"), (99, "99")] {
            assert_eq!(by_number.set_threshold(n), by_text.set_threshold_attr(s));
        }
        assert_eq!(by_number, by_text);
    }

    #[test]
    fn builder_sets_fields() {
        let opts = PullOptions::new()
            .threshold(Threshold::new(10))
            .indicator_text("Pull")
            .release_text("Let go")
            .refreshing_text("Loading")
            .lang("de")
            .disabled(true)
            .disable_selection(true);
        assert_eq!(opts.threshold.pixels(), 10);
        assert_eq!(opts.texts.get(TextSlot::Indicator), Some("Pull"));
        assert_eq!(opts.texts.get(TextSlot::Release), Some("Let go"));
        assert_eq!(opts.texts.get(TextSlot::Refreshing), Some("Loading"));
        assert_eq!(opts.lang.as_deref(), Some("de"));
        assert!(opts.disabled);
        assert!(opts.disable_selection);
    }

    #[test]
    fn overrides_set_and_clear() {
        let mut texts = TextOverrides::default();
        texts.set(TextSlot::Release, Some("Go".into()));
        assert_eq!(texts.get(TextSlot::Release), Some("Go"));
        texts.set(TextSlot::Release, None);
        assert_eq!(texts.get(TextSlot::Release), None);
    }

    #[test]
    fn threshold_display() {
        assert_eq!(Threshold::new(80).to_string(), "80px");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn options_deserialize_with_validation() {
        let opts: PullOptions =
            serde_json::from_str(r#"{"threshold": 40, "lang": "fr"}"#).unwrap();
        assert_eq!(opts.threshold.pixels(), 40);
        assert_eq!(opts.lang.as_deref(), Some("fr"));
        assert!(serde_json::from_str::<PullOptions>(r#"{"threshold": -1}"#).is_err());
    }
}
