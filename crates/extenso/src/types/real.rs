use serde::{Deserialize, Serialize};

use crate::speller::{VerbalizeError, verbalize};

/// A value in reais, the currency of Brazil.
///
/// # Example
///
/// ```
/// use extenso::Real;
///
/// let price = Real::new(1.99);
/// assert_eq!(price.por_extenso().unwrap(), "um real e noventa e nove centavos");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Real(f64);

impl Real {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the value written out in words.
    pub fn por_extenso(self) -> Result<String, VerbalizeError> {
        verbalize(self.0)
    }

    /// Alias for [`Real::por_extenso`].
    pub fn to_words(self) -> Result<String, VerbalizeError> {
        self.por_extenso()
    }
}

impl From<f64> for Real {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<u32> for Real {
    fn from(value: u32) -> Self {
        Self(f64::from(value))
    }
}

impl From<Real> for f64 {
    fn from(real: Real) -> Self {
        real.0
    }
}
