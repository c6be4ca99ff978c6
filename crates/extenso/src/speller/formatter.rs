use tracing::debug;

use crate::speller::VerbalizeError;
use crate::speller::group::spell_group;
use crate::speller::lexicon::UNITS;
use crate::speller::scale::spell_integer;
use crate::types::{Amount, CurrencyUnit, DigitGroup, WordPhrase};

/// Spells a monetary amount in reais as Portuguese words.
///
/// The fraction is rounded half-up to whole centavos. An amount of exactly
/// zero is "zero real".
///
/// # Errors
///
/// - [`VerbalizeError::InvalidAmount`] if `amount` is negative or NaN.
/// - [`VerbalizeError::UnsupportedMagnitude`] if the whole part needs a scale
///   word beyond "decilhão".
///
/// # Examples
///
/// ```
/// use extenso::{VerbalizeError, verbalize};
///
/// assert_eq!(verbalize(2015.0).unwrap(), "dois mil e quinze reais");
/// assert_eq!(verbalize(0.0).unwrap(), "zero real");
/// assert!(matches!(verbalize(-1.0), Err(VerbalizeError::InvalidAmount { .. })));
/// ```
pub fn verbalize(amount: f64) -> Result<String, VerbalizeError> {
    let result = Amount::from_f64(amount).and_then(Amount::to_words);
    if let Err(e) = &result {
        debug!(amount, error = %e, "cannot spell amount");
    }
    result
}

/// Assembles the full phrase for a split amount.
pub(crate) fn spell_amount(amount: Amount) -> Result<WordPhrase, VerbalizeError> {
    let mut phrase = WordPhrase::new();

    if amount.is_zero() {
        phrase.push_word(UNITS[0]);
        phrase.push_word(CurrencyUnit::Real.singular());
        return Ok(phrase);
    }

    let units = amount.units();
    if units != 0 {
        phrase.append(spell_integer(units)?);
        phrase.push_word(CurrencyUnit::Real.word_for(units));
    }

    // Centavos are below one hundred and never take a scale word.
    let cents = amount.cents();
    if cents != 0 {
        if !phrase.is_empty() {
            phrase.push_and();
        }
        phrase.append(spell_group(DigitGroup::from(cents)));
        phrase.push_word(CurrencyUnit::Centavo.word_for(u128::from(cents)));
    }

    Ok(phrase)
}
