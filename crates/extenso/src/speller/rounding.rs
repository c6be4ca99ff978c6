//! Splitting a float amount into reais and rounded centavos.
//!
//! Rounding works on the shortest decimal text that round-trips to the
//! float, the same digits `Display` prints. `1.005` is rounded as the
//! decimal 1.005 rather than as its binary approximation 1.00499999....

use std::iter::repeat;

use tracing::trace;

use crate::speller::VerbalizeError;
use crate::speller::lexicon::largest_scale;
use crate::speller::scale::MAX_SUPPORTED;
use crate::types::Amount;

/// Rounds a fraction in `[0, 1)` to whole centavos, half-up.
///
/// Only the first three decimal digits matter: the third one decides the
/// rounding. The result is in `0..=100`; 100 means the fraction carries
/// into a whole real.
///
/// ```
/// use extenso::speller::round_cents;
///
/// assert_eq!(round_cents(0.01234), 1);
/// assert_eq!(round_cents(0.005), 1);
/// assert_eq!(round_cents(0.145), 15);
/// assert_eq!(round_cents(0.9899999999999999), 99);
/// ```
pub fn round_cents(fraction: f64) -> u8 {
    let text = fraction.to_string();
    let digits = text.split_once('.').map_or("", |(_, digits)| digits);
    cents_from_digits(digits)
}

/// Half-up centavos from the decimal digits after the point.
fn cents_from_digits(digits: &str) -> u8 {
    let mut digits = digits
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .chain(repeat(0));
    let mut next = || digits.next().unwrap_or(0);
    let (tenths, hundredths, thousandths) = (next(), next(), next());
    tenths * 10 + hundredths + u8::from(thousandths >= 5)
}

/// Validates `amount` and splits it into whole reais and centavos.
pub(crate) fn split_amount(amount: f64) -> Result<Amount, VerbalizeError> {
    if amount.is_nan() || amount < 0.0 {
        return Err(VerbalizeError::InvalidAmount { amount });
    }
    // Also rejects infinity.
    if amount >= MAX_SUPPORTED as f64 {
        return Err(unsupported(amount));
    }
    // -0.0 prints with a sign.
    if amount == 0.0 {
        return Ok(Amount::default());
    }

    let text = amount.to_string();
    let (whole, digits) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let mut units: u128 = whole.parse().map_err(|_| unsupported(amount))?;
    let mut cents = cents_from_digits(digits);
    if cents >= 100 {
        units += 1;
        cents = 0;
    }
    trace!(amount, units = %units, cents, "split amount");
    Ok(Amount::from_parts(units, cents))
}

fn unsupported(amount: f64) -> VerbalizeError {
    VerbalizeError::UnsupportedMagnitude {
        value: amount.to_string(),
        largest: largest_scale(),
    }
}
