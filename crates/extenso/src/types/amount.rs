use crate::speller::{self, VerbalizeError};

/// A monetary amount split into whole reais and centavos.
///
/// `cents` is always in `0..=99`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount {
    units: u128,
    cents: u8,
}

impl Amount {
    /// Validates `amount` and rounds its fraction half-up to whole centavos.
    ///
    /// A fraction that rounds to a full real carries into the units.
    ///
    /// ```
    /// use extenso::Amount;
    ///
    /// let amount = Amount::from_f64(42.69).unwrap();
    /// assert_eq!((amount.units(), amount.cents()), (42, 69));
    ///
    /// let carried = Amount::from_f64(0.995).unwrap();
    /// assert_eq!((carried.units(), carried.cents()), (1, 0));
    /// ```
    pub fn from_f64(amount: f64) -> Result<Self, VerbalizeError> {
        speller::split_amount(amount)
    }

    /// Builds an amount from an exact number of centavos.
    ///
    /// ```
    /// use extenso::Amount;
    ///
    /// let amount = Amount::from_cents(123_456);
    /// assert_eq!((amount.units(), amount.cents()), (1234, 56));
    /// ```
    pub fn from_cents(total: u128) -> Self {
        Self {
            units: total.div_euclid(100),
            cents: (total % 100) as u8,
        }
    }

    pub(crate) fn from_parts(units: u128, cents: u8) -> Self {
        debug_assert!(cents < 100, "cents out of range: {cents}");
        Self { units, cents }
    }

    /// Whole reais.
    pub fn units(self) -> u128 {
        self.units
    }

    /// Centavos, in `0..=99`.
    pub fn cents(self) -> u8 {
        self.cents
    }

    pub fn is_zero(self) -> bool {
        self.units == 0 && self.cents == 0
    }

    /// Spells this amount out in words.
    pub fn to_words(self) -> Result<String, VerbalizeError> {
        speller::spell_amount(self).map(String::from)
    }
}
