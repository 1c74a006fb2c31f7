//! Elapsed-time bucketing and the "time ago" phrase engine.

mod phrase;

use bitflags::bitflags;

pub use phrase::{Ago, ago, ago_between, ago_in, ago_since};

const SECOND: u64 = 1;
const MINUTE: u64 = 60 * SECOND;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const WEEK: u64 = 7 * DAY;
const MONTH: u64 = 30 * DAY;
const YEAR: u64 = 365 * DAY;

/// Below this many seconds `ONLINE` replaces the phrase.
pub const ONLINE_THRESHOLD: u64 = MINUTE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl TimeUnit {
    /// Finest to coarsest.
    pub const ALL: [TimeUnit; 7] = [
        TimeUnit::Second,
        TimeUnit::Minute,
        TimeUnit::Hour,
        TimeUnit::Day,
        TimeUnit::Week,
        TimeUnit::Month,
        TimeUnit::Year,
    ];

    /// Length of one unit in seconds. Months are 30 days and years 365.
    pub const fn seconds(self) -> u64 {
        match self {
            TimeUnit::Second => SECOND,
            TimeUnit::Minute => MINUTE,
            TimeUnit::Hour => HOUR,
            TimeUnit::Day => DAY,
            TimeUnit::Week => WEEK,
            TimeUnit::Month => MONTH,
            TimeUnit::Year => YEAR,
        }
    }
}

/// Pick the coarsest unit whose magnitude is at least one.
///
/// A unit's lower bound is its own length, so `3600` lands on one hour rather
/// than sixty minutes. Zero stays in seconds with a magnitude of zero.
pub fn select_unit(elapsed: u64) -> (TimeUnit, u64) {
    TimeUnit::ALL
        .iter()
        .rev()
        .find(|unit| elapsed >= unit.seconds())
        .map(|&unit| (unit, elapsed / unit.seconds()))
        .unwrap_or((TimeUnit::Second, elapsed))
}

bitflags! {
    /// Formatting options for a phrase. Flags combine freely.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PhraseFlags: u8 {
        /// Leave off the trailing "ago".
        const NO_SUFFIX = 1 << 0;
        /// Under a minute, say "Online" instead.
        const ONLINE = 1 << 1;
    }
}
