use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// A unit of the Brazilian currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyUnit {
    /// Whole reais.
    Real,

    /// Hundredths of a real.
    Centavo,
}

impl CurrencyUnit {
    pub fn singular(self) -> &'static str {
        match self {
            CurrencyUnit::Real => "real",
            CurrencyUnit::Centavo => "centavo",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            CurrencyUnit::Real => "reais",
            CurrencyUnit::Centavo => "centavos",
        }
    }

    /// Selects the word agreeing with `count`.
    ///
    /// Only exactly one takes the singular; zero is plural.
    ///
    /// ```
    /// use extenso::CurrencyUnit;
    ///
    /// assert_eq!(CurrencyUnit::Real.word_for(1), "real");
    /// assert_eq!(CurrencyUnit::Real.word_for(0), "reais");
    /// assert_eq!(CurrencyUnit::Centavo.word_for(2), "centavos");
    /// ```
    pub fn word_for(self, count: u128) -> &'static str {
        if count == 1 {
            self.singular()
        } else {
            self.plural()
        }
    }
}

impl Display for CurrencyUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.singular())
    }
}
