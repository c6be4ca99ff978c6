//! Parsing of amount literals given on the command line.
//!
//! Accepts `42.69`, `42,69`, `1.234,56` and an optional `R$` prefix. When a
//! comma is present it is the decimal separator and dots group thousands.

use thiserror::Error;

/// A malformed amount literal, with the byte offset of the problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    /// No digits at all.
    #[error("expected a number")]
    Empty { offset: usize },

    /// A character that cannot appear in an amount.
    #[error("unexpected character '{found}'")]
    UnexpectedChar { offset: usize, found: char },

    /// A second decimal separator.
    #[error("more than one decimal separator")]
    DuplicateSeparator { offset: usize },
}

impl LiteralError {
    pub fn offset(&self) -> usize {
        match self {
            LiteralError::Empty { offset }
            | LiteralError::UnexpectedChar { offset, .. }
            | LiteralError::DuplicateSeparator { offset } => *offset,
        }
    }

    pub fn help(&self) -> Option<&'static str> {
        match self {
            LiteralError::DuplicateSeparator { .. } => {
                Some("use ',' for decimals and '.' for thousands, e.g. 1.234,56")
            }
            LiteralError::UnexpectedChar { .. } | LiteralError::Empty { .. } => {
                Some("amounts look like 42.69, 42,69 or R$ 1.234,56")
            }
        }
    }
}

/// Parse an amount literal into a float.
///
/// A leading `-`, before or after `R$`, is kept so the speller can reject
/// negative amounts itself.
pub fn parse_amount(raw: &str) -> Result<f64, LiteralError> {
    let trimmed = raw.trim_start();
    let mut offset = raw.len() - trimmed.len();
    let mut body = trimmed;
    let mut normalized = String::with_capacity(body.len());

    // A sign may come before the currency prefix, as in "-R$ 5".
    if let Some(rest) = body.strip_prefix('-') {
        let rest_trimmed = rest.trim_start();
        if rest_trimmed.starts_with("R$") {
            normalized.push('-');
            offset += body.len() - rest_trimmed.len();
            body = rest_trimmed;
        }
    }
    if let Some(rest) = body.strip_prefix("R$") {
        let rest_trimmed = rest.trim_start();
        offset += body.len() - rest_trimmed.len();
        body = rest_trimmed;
    }
    let body = body.trim_end();

    let (decimal, thousands) = if body.contains(',') {
        (',', Some('.'))
    } else {
        ('.', None)
    };

    let mut seen_decimal = false;
    let mut has_digits = false;
    for (i, ch) in body.char_indices() {
        match ch {
            '0'..='9' => {
                has_digits = true;
                normalized.push(ch);
            }
            '-' if i == 0 && normalized.is_empty() => normalized.push(ch),
            c if c == decimal => {
                if seen_decimal {
                    return Err(LiteralError::DuplicateSeparator { offset: offset + i });
                }
                seen_decimal = true;
                normalized.push('.');
            }
            c if Some(c) == thousands && !seen_decimal => {}
            found => {
                return Err(LiteralError::UnexpectedChar {
                    offset: offset + i,
                    found,
                });
            }
        }
    }

    if !has_digits {
        return Err(LiteralError::Empty { offset });
    }
    normalized
        .parse::<f64>()
        .map_err(|_| LiteralError::Empty { offset })
}
