//! Spells monetary amounts in Brazilian reais as Portuguese words.
//!
//! ```
//! use extenso::{Real, verbalize};
//!
//! assert_eq!(verbalize(42.69).unwrap(), "quarenta e dois reais e sessenta e nove centavos");
//! assert_eq!(Real::new(1000.0).por_extenso().unwrap(), "mil reais");
//! ```

pub mod speller;
pub mod types;

pub use speller::{VerbalizeError, verbalize};
pub use types::{Amount, CurrencyUnit, DigitGroup, Real, Token, WordPhrase};
