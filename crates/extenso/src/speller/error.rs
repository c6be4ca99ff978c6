//! Error types for amount spelling.

use thiserror::Error;

/// An error that prevents an amount from being spelled out.
///
/// Both variants are terminal for the call: no partial phrase is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VerbalizeError {
    /// The amount is negative or not a number.
    #[error("cannot spell {amount}: amount must be a non-negative number")]
    InvalidAmount { amount: f64 },

    /// The amount needs a scale word beyond the largest one in the lexicon.
    #[error("amount {value} is too large to spell, the largest supported scale is '{largest}'")]
    UnsupportedMagnitude { value: String, largest: &'static str },
}
