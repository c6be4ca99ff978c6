use tracing::trace;

use crate::speller::VerbalizeError;
use crate::speller::group::spell_group;
use crate::speller::lexicon::{SCALES, largest_scale, scale};
use crate::types::{DigitGroup, WordPhrase};

/// First integer that would need a scale word beyond the lexicon (10^36).
pub const MAX_SUPPORTED: u128 = 1000u128.pow(SCALES.len() as u32 + 1);

/// Spells a whole number with scale words and connectives.
///
/// Zero yields an empty phrase and exactly one thousand is the bare "mil".
/// Groups are joined with commas, except that the last join is "e" when the
/// final spoken group is the units group.
///
/// # Errors
///
/// Returns [`VerbalizeError::UnsupportedMagnitude`] for `n >= MAX_SUPPORTED`.
///
/// # Examples
///
/// ```
/// use extenso::speller::spell_integer;
///
/// let phrase = spell_integer(775_398_007).unwrap();
/// assert_eq!(
///     phrase.to_string(),
///     "setecentos e setenta e cinco milhões, trezentos e noventa e oito mil e sete"
/// );
/// assert_eq!(spell_integer(1000).unwrap().to_string(), "mil");
/// ```
pub fn spell_integer(n: u128) -> Result<WordPhrase, VerbalizeError> {
    if n >= MAX_SUPPORTED {
        return Err(VerbalizeError::UnsupportedMagnitude {
            value: n.to_string(),
            largest: largest_scale(),
        });
    }
    if n == 1000 {
        return Ok(WordPhrase::word(SCALES[0].singular));
    }

    // (level, phrase) for each non-zero group, least significant first.
    let spoken: Vec<(usize, WordPhrase)> = DigitGroup::split(n)
        .enumerate()
        .filter(|(_, group)| !group.is_zero())
        .map(|(level, group)| (level, spell_scaled_group(level, group)))
        .collect();
    trace!(n = %n, groups = spoken.len(), "decomposed integer");

    let ends_with_units = spoken.first().is_some_and(|(level, _)| *level == 0);
    let total = spoken.len();
    let mut phrase = WordPhrase::new();
    for (i, (_, group)) in spoken.into_iter().rev().enumerate() {
        if i > 0 {
            if i + 1 == total && ends_with_units {
                phrase.push_and();
            } else {
                phrase.push_comma();
            }
        }
        phrase.append(group);
    }
    Ok(phrase)
}

/// Spells one group followed by its scale word.
fn spell_scaled_group(level: usize, group: DigitGroup) -> WordPhrase {
    let Some(word) = scale(level) else {
        return spell_group(group);
    };
    let mut phrase = spell_group(group);
    phrase.push_word(word.for_group(group.value()));
    phrase
}
