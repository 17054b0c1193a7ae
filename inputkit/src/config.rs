//! # Configuration
//!
//! Immutable data consumed by the validators and prompts:
//! - the format patterns (see [`crate::format`])
//! - the boolean keyword sets, English and Spanish
//! - the sentinels returned by the sentinel-style numeric prompts
//!
//! With the `json-config` feature a [`PromptConfig`] can also be loaded from
//! JSON, e.g. to supply a custom keyword set:
//!
//! ```rust,ignore
//! use inputkit::config::PromptConfig;
//!
//! let config = PromptConfig::from_json(r#"{
//!     "keywords": { "truthy": ["oui", "1"], "falsy": ["non", "0"] },
//!     "int_sentinel": -99
//! }"#)?;
//! ```
use inputkit_core::{InvalidReason, ValidationOutcome};
use std::{fmt::Display, str::FromStr};

#[cfg(feature = "json-config")]
use serde::{Deserialize, Serialize};

/// Local-part runs separated by single dots, `@`, dot-terminated labels and a 2 to 7 letter TLD.
pub const EMAIL_PATTERN: &str =
    r"^[a-zA-Z0-9_+&*-]+(?:\.[a-zA-Z0-9_+&*-]+)*@(?:[a-zA-Z0-9-]+\.)+[a-zA-Z]{2,7}$";

/// Optional `+` country code, optional parenthesised area code, separated digit groups.
pub const PHONE_FLEXIBLE_PATTERN: &str =
    r"(?-u)^\+?\d{1,4}?[-.\s]?\(?\d{1,3}?\)?[-.\s]?\d{1,4}[-.\s]?\d{1,4}[-.\s]?\d{1,9}$";

pub const PHONE_STRICT_PATTERN: &str = r"(?-u)^\d{10,15}$";

pub const DATE_ISO_PATTERN: &str = r"(?-u)^\d{4}-\d{2}-\d{2}$";

pub const ISBN_PATTERN: &str = r"(?-u)^(?:\d{9}[0-9X]|\d{13})$";

pub const CREDIT_CARD_PATTERN: &str = r"(?-u)^(?:\d{16}|\d{15})$";

pub const DEFAULT_INT_SENTINEL: i32 = -1;
pub const DEFAULT_FLOAT_SENTINEL: f32 = -1.0;

/// Which built-in boolean keyword set to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeywordLocale {
    #[default]
    English,
    Spanish,
}

impl Display for KeywordLocale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::English => write!(f, "english"),
            Self::Spanish => write!(f, "spanish"),
        }
    }
}

impl FromStr for KeywordLocale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "english" | "en" => Ok(Self::English),
            "spanish" | "es" => Ok(Self::Spanish),
            other => Err(ConfigError::UnknownLocale(other.to_string())),
        }
    }
}

/// Tokens accepted as `true` and as `false` by the boolean prompt.
///
/// Matching is case-insensitive. A token in neither list is rejected with
/// [`InvalidReason::ParseFailure`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json-config", derive(Serialize, Deserialize))]
pub struct BooleanKeywordSet {
    pub truthy: Vec<String>,
    pub falsy: Vec<String>,
}

impl BooleanKeywordSet {
    pub fn new<T, F>(truthy: T, falsy: F) -> Self
    where
        T: IntoIterator,
        T::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        Self {
            truthy: truthy.into_iter().map(Into::into).collect(),
            falsy: falsy.into_iter().map(Into::into).collect(),
        }
    }

    /// `true`/`yes`/`1` and `false`/`no`/`0`.
    pub fn english() -> Self {
        Self::new(["true", "yes", "1"], ["false", "no", "0"])
    }

    /// `true`/`si`/`1` and `false`/`no`/`0`.
    pub fn spanish() -> Self {
        Self::new(["true", "si", "1"], ["false", "no", "0"])
    }

    pub fn for_locale(locale: KeywordLocale) -> Self {
        match locale {
            KeywordLocale::English => Self::english(),
            KeywordLocale::Spanish => Self::spanish(),
        }
    }

    /// Maps a token to its boolean value.
    pub fn resolve(&self, token: &str) -> ValidationOutcome<bool> {
        let token = token.to_lowercase();
        let contains = |keywords: &[String]| keywords.iter().any(|k| k.to_lowercase() == token);

        if contains(&self.truthy) {
            ValidationOutcome::Valid(true)
        } else if contains(&self.falsy) {
            ValidationOutcome::Valid(false)
        } else {
            ValidationOutcome::Invalid(InvalidReason::ParseFailure)
        }
    }

    /// Rejects empty lists and keywords present in both lists.
    pub fn check(&self) -> Result<(), ConfigError> {
        if self.truthy.is_empty() || self.falsy.is_empty() {
            return Err(ConfigError::EmptyKeywords);
        }

        match self.truthy.iter().find(|t| {
            self.falsy
                .iter()
                .any(|f| f.to_lowercase() == t.to_lowercase())
        }) {
            Some(both) => Err(ConfigError::OverlappingKeyword(both.clone())),
            None => Ok(()),
        }
    }
}

impl Default for BooleanKeywordSet {
    fn default() -> Self {
        Self::english()
    }
}

/// Settings shared by every prompt of a [`crate::terminal::Prompt`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "json-config", serde(default))]
pub struct PromptConfig {
    pub keywords: BooleanKeywordSet,
    /// Returned by [`crate::terminal::Prompt::ask_int`] on failure.
    pub int_sentinel: i32,
    /// Returned by [`crate::terminal::Prompt::ask_float`] on failure.
    pub float_sentinel: f32,
}

impl PromptConfig {
    pub fn english() -> Self {
        Self::for_locale(KeywordLocale::English)
    }

    pub fn spanish() -> Self {
        Self::for_locale(KeywordLocale::Spanish)
    }

    pub fn for_locale(locale: KeywordLocale) -> Self {
        Self {
            keywords: BooleanKeywordSet::for_locale(locale),
            int_sentinel: DEFAULT_INT_SENTINEL,
            float_sentinel: DEFAULT_FLOAT_SENTINEL,
        }
    }
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self::english()
    }
}

/// Errors raised while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    UnknownLocale(String),
    EmptyKeywords,
    OverlappingKeyword(String),
    #[cfg(feature = "json-config")]
    Json(serde_json::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownLocale(l) => write!(f, "Unknown keyword locale => {} (english, spanish)", l),
            Self::EmptyKeywords => write!(f, "Both truthy and falsy keyword lists must be non-empty"),
            Self::OverlappingKeyword(k) => {
                write!(f, "The keyword {} is both truthy and falsy", k)
            }
            #[cfg(feature = "json-config")]
            Self::Json(e) => write!(f, "Invalid configuration json => {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            #[cfg(feature = "json-config")]
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "json-config")] {
        impl PromptConfig {
            /// Loads a configuration from JSON. Missing fields fall back to the
            /// English defaults; the keyword set is checked before returning.
            pub fn from_json(json: &str) -> Result<Self, ConfigError> {
                let config: PromptConfig = serde_json::from_str(json).map_err(ConfigError::Json)?;
                config.keywords.check()?;
                tracing::debug!(
                    truthy = ?config.keywords.truthy,
                    falsy = ?config.keywords.falsy,
                    "loaded prompt configuration"
                );
                Ok(config)
            }

            pub fn to_json(&self) -> Result<String, ConfigError> {
                serde_json::to_string_pretty(self).map_err(ConfigError::Json)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_keywords() {
        let set = BooleanKeywordSet::english();
        assert_eq!(set.resolve("yes"), ValidationOutcome::Valid(true));
        assert_eq!(set.resolve("TRUE"), ValidationOutcome::Valid(true));
        assert_eq!(set.resolve("1"), ValidationOutcome::Valid(true));
        assert_eq!(set.resolve("No"), ValidationOutcome::Valid(false));
        assert_eq!(set.resolve("0"), ValidationOutcome::Valid(false));
        assert_eq!(
            set.resolve("si"),
            ValidationOutcome::Invalid(InvalidReason::ParseFailure)
        );
    }

    #[test]
    fn test_spanish_keywords() {
        let set = BooleanKeywordSet::spanish();
        assert_eq!(set.resolve("SI"), ValidationOutcome::Valid(true));
        assert_eq!(set.resolve("false"), ValidationOutcome::Valid(false));
        assert!(set.resolve("yes").is_invalid());
        assert!(set.resolve("maybe").is_invalid());
    }

    #[test]
    fn test_keyword_check() {
        assert!(BooleanKeywordSet::english().check().is_ok());

        let empty = BooleanKeywordSet::new(Vec::<String>::new(), ["no"]);
        assert!(matches!(empty.check(), Err(ConfigError::EmptyKeywords)));

        let overlap = BooleanKeywordSet::new(["y", "ok"], ["n", "OK"]);
        match overlap.check() {
            Err(ConfigError::OverlappingKeyword(k)) => assert_eq!(k, "ok"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_locale_from_str() {
        assert_eq!("es".parse::<KeywordLocale>().unwrap(), KeywordLocale::Spanish);
        assert_eq!("English".parse::<KeywordLocale>().unwrap(), KeywordLocale::English);

        let err = "klingon".parse::<KeywordLocale>().unwrap_err();
        assert_eq!(
            format!("{}", err),
            "Unknown keyword locale => klingon (english, spanish)"
        );
    }

    #[test]
    fn test_default_config() {
        let config = PromptConfig::default();
        assert_eq!(config.keywords, BooleanKeywordSet::english());
        assert_eq!(config.int_sentinel, -1);
        assert_eq!(config.float_sentinel, -1.0);
        assert_eq!(PromptConfig::spanish().keywords, BooleanKeywordSet::spanish());
    }

    #[cfg(feature = "json-config")]
    #[test]
    fn test_config_from_json() {
        let config = PromptConfig::from_json(
            r#"{"keywords": {"truthy": ["oui"], "falsy": ["non"]}, "int_sentinel": -99}"#,
        )
        .unwrap();
        assert_eq!(config.int_sentinel, -99);
        assert_eq!(config.float_sentinel, -1.0);
        assert_eq!(config.keywords.resolve("OUI"), ValidationOutcome::Valid(true));

        let err = PromptConfig::from_json(r#"{"keywords": {"truthy": ["x"], "falsy": ["x"]}}"#);
        assert!(matches!(err, Err(ConfigError::OverlappingKeyword(_))));

        assert!(matches!(
            PromptConfig::from_json("not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[cfg(feature = "json-config")]
    #[test]
    fn test_config_json_roundtrip_of_spanish() {
        let json = PromptConfig::spanish().to_json().unwrap();
        assert_eq!(PromptConfig::from_json(&json).unwrap(), PromptConfig::spanish());
    }
}
