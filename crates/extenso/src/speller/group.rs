use crate::speller::lexicon::{HUNDRED, HUNDREDS, TENS, UNITS};
use crate::types::{DigitGroup, WordPhrase};

/// Spells a single group in `0..=999`, with no scale word.
///
/// Zero yields an empty phrase; callers decide whether to say "zero".
///
/// ```
/// use extenso::DigitGroup;
/// use extenso::speller::spell_group;
///
/// let group = DigitGroup::new(119).unwrap();
/// assert_eq!(spell_group(group).to_string(), "cento e dezenove");
/// ```
pub fn spell_group(group: DigitGroup) -> WordPhrase {
    let mut phrase = WordPhrase::new();
    push_group(&mut phrase, group.value());
    phrase
}

fn push_group(phrase: &mut WordPhrase, n: u16) {
    match n {
        0 => {}
        1..=19 => phrase.push_word(UNITS[usize::from(n)]),
        20..=99 => {
            let tens = n.div_euclid(10);
            let rest = n % 10;
            phrase.push_word(TENS[usize::from(tens - 2)]);
            if rest != 0 {
                phrase.push_and();
                phrase.push_word(UNITS[usize::from(rest)]);
            }
        }
        100 => phrase.push_word(HUNDRED),
        _ => {
            let hundreds = n.div_euclid(100);
            let rest = n % 100;
            phrase.push_word(HUNDREDS[usize::from(hundreds - 1)]);
            if rest != 0 {
                phrase.push_and();
                push_group(phrase, rest);
            }
        }
    }
}
