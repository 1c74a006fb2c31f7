//! Languages known to the phrase engine and the process-wide selector.

pub mod plural;

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::AgoError;

pub use plural::{PluralForm, select_form, word_for};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Language {
    #[default]
    English,
    Russian,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Russian];

    /// Parse a language tag such as `en`, `RU` or `ru_RU`.
    ///
    /// Only the primary subtag is significant, so region variants resolve to
    /// the same language.
    pub fn from_code(code: &str) -> Result<Self, AgoError> {
        let primary = code
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match primary.as_str() {
            "en" => Ok(Language::English),
            "ru" => Ok(Language::Russian),
            _ => Err(AgoError::UnsupportedLanguage(code.to_string())),
        }
    }

    /// Like [`Language::from_code`], but unknown tags degrade to English.
    pub fn from_code_or_default(code: &str) -> Self {
        match Self::from_code(code) {
            Ok(lang) => lang,
            Err(e) => {
                warn!(code = code, error = %e, "Falling back to default language");
                Language::default()
            }
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Russian => "ru",
        }
    }

    /// Word appended after the magnitude and noun.
    pub fn suffix(self) -> &'static str {
        match self {
            Language::English => "ago",
            Language::Russian => "назад",
        }
    }

    /// Fixed phrase for "active within the last minute".
    pub fn online(self) -> &'static str {
        match self {
            Language::English => "Online",
            Language::Russian => "В сети",
        }
    }

    fn to_tag(self) -> u8 {
        match self {
            Language::English => 0,
            Language::Russian => 1,
        }
    }

    fn from_tag(tag: u8) -> Self {
        match tag {
            1 => Language::Russian,
            _ => Language::English,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = AgoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl TryFrom<String> for Language {
    type Error = AgoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_code(&value)
    }
}

impl From<Language> for String {
    fn from(lang: Language) -> Self {
        lang.code().to_string()
    }
}

static CURRENT: AtomicU8 = AtomicU8::new(0);

/// Set the process-wide language used by [`crate::ago`].
pub fn set(lang: Language) {
    debug!(lang = %lang, "Language selected");
    CURRENT.store(lang.to_tag(), Ordering::Relaxed);
}

/// Set the process-wide language from a tag, falling back to English.
pub fn set_code(code: &str) -> Language {
    let lang = Language::from_code_or_default(code);
    set(lang);
    lang
}

/// The process-wide language, English until [`set`] is called.
pub fn get() -> Language {
    Language::from_tag(CURRENT.load(Ordering::Relaxed))
}
