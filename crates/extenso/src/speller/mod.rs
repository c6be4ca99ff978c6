//! The Portuguese amount speller.
//!
//! Amounts are split into whole reais and centavos, the reais are decomposed
//! into base-1000 groups, each group is spelled from the lexicon, and the
//! groups are joined with scale words and connectives.

mod error;
mod formatter;
mod group;
pub mod lexicon;
mod rounding;
mod scale;

pub use error::VerbalizeError;
pub use formatter::verbalize;
pub use group::spell_group;
pub use rounding::round_cents;
pub use scale::{MAX_SUPPORTED, spell_integer};

pub(crate) use formatter::spell_amount;
pub(crate) use rounding::split_amount;
