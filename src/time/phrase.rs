use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::AgoError;
use crate::lang::{self, Language, select_form, word_for};
use crate::time::{ONLINE_THRESHOLD, PhraseFlags, select_unit};
use crate::util::config::AgoConfig;

/// Format `elapsed` seconds using the process-wide language.
pub fn ago(elapsed: i64, flags: PhraseFlags) -> Result<String, AgoError> {
    ago_in(elapsed, flags, lang::get())
}

/// Format `elapsed` seconds as a relative phrase in `lang`.
///
/// Negative durations are rejected rather than clamped.
pub fn ago_in(elapsed: i64, flags: PhraseFlags, lang: Language) -> Result<String, AgoError> {
    let elapsed = u64::try_from(elapsed).map_err(|_| AgoError::InvalidDuration(elapsed))?;

    if flags.contains(PhraseFlags::ONLINE) && elapsed < ONLINE_THRESHOLD {
        return Ok(lang.online().to_string());
    }

    let (unit, magnitude) = select_unit(elapsed);
    let form = select_form(magnitude, lang);
    let noun = word_for(unit, form, lang);
    debug!(elapsed, ?unit, magnitude, ?form, %lang, "Selected unit");

    if flags.contains(PhraseFlags::NO_SUFFIX) {
        Ok(format!("{magnitude} {noun}"))
    } else {
        Ok(format!("{magnitude} {noun} {}", lang.suffix()))
    }
}

/// Format the time between two instants. The caller supplies `now`.
pub fn ago_between(
    then: &DateTime<Utc>,
    now: &DateTime<Utc>,
    flags: PhraseFlags,
    lang: Language,
) -> Result<String, AgoError> {
    let elapsed = now.signed_duration_since(then).num_seconds();
    ago_in(elapsed, flags, lang)
}

/// Format the time since `then`, reading the clock once.
pub fn ago_since(
    then: &DateTime<Utc>,
    flags: PhraseFlags,
    lang: Language,
) -> Result<String, AgoError> {
    ago_between(then, &Utc::now(), flags, lang)
}

/// A language and default flags bundled for one caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ago {
    pub lang: Language,
    pub flags: PhraseFlags,
}

impl Ago {
    pub fn new(lang: Language) -> Self {
        Self {
            lang,
            flags: PhraseFlags::empty(),
        }
    }

    pub fn with_flags(mut self, flags: PhraseFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn from_config(config: &AgoConfig) -> Self {
        Self {
            lang: config.language(),
            flags: config.flags(),
        }
    }

    pub fn format(&self, elapsed: i64) -> Result<String, AgoError> {
        ago_in(elapsed, self.flags, self.lang)
    }

    /// Format with `flags` instead of the defaults.
    pub fn format_with(&self, elapsed: i64, flags: PhraseFlags) -> Result<String, AgoError> {
        ago_in(elapsed, flags, self.lang)
    }

    pub fn between(&self, then: &DateTime<Utc>, now: &DateTime<Utc>) -> Result<String, AgoError> {
        ago_between(then, now, self.flags, self.lang)
    }
}
