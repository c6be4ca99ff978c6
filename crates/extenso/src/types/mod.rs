mod amount;
mod digit_group;
mod phrase;
mod real;
mod unit;

pub use amount::Amount;
pub use digit_group::DigitGroup;
pub use phrase::{Token, WordPhrase};
pub use real::Real;
pub use unit::CurrencyUnit;
