pub mod error;
pub mod lang;
pub mod time;
pub mod util;

pub use error::AgoError;
pub use lang::{Language, PluralForm};
pub use time::{Ago, PhraseFlags, TimeUnit, ago, ago_between, ago_in, ago_since};
