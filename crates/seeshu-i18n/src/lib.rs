//! seeshu-i18n
//!
//! Static translation catalogs and the language-preference context object.
//! Lookup semantics: requested language, then the English catalog, then the
//! key itself. No process-global state — the preference is an explicit
//! object created at application start and mutated only through its setter.

pub mod catalog;

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Language {
    English,
    Hindi,
    Bengali,
    Tamil,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::Hindi,
        Language::Bengali,
        Language::Tamil,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Hindi => "hindi",
            Language::Bengali => "bengali",
            Language::Tamil => "tamil",
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown language: {0}")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "english" => Ok(Language::English),
            "hindi" => Ok(Language::Hindi),
            "bengali" => Ok(Language::Bengali),
            "tamil" => Ok(Language::Tamil),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

/// Look up a UI string.
///
/// Falls back to English for keys the requested catalog lacks, and to the
/// key itself when no catalog has it.
pub fn translate(language: Language, key: &str) -> &str {
    lookup(language, key)
        .or_else(|| lookup(Language::English, key))
        .unwrap_or(key)
}

fn lookup(language: Language, key: &str) -> Option<&'static str> {
    catalog::table(language)
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
}

/// The language preference for one running session.
///
/// Created once at startup (English by default), read by every view, and
/// changed only through [`LanguagePreference::set_language`].
#[derive(Debug, Clone)]
pub struct LanguagePreference {
    language: Language,
}

impl LanguagePreference {
    pub fn new() -> Self {
        Self {
            language: Language::English,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Translate against the current preference.
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        translate(self.language, key)
    }
}

impl Default for LanguagePreference {
    fn default() -> Self {
        Self::new()
    }
}
