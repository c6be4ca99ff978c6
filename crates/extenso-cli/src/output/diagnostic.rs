//! Miette diagnostic wrapper for malformed amount literals.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::input::LiteralError;

/// A miette-compatible diagnostic pointing at the bad character of a literal.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid amount: {message}")]
#[diagnostic(code(extenso::amount))]
pub struct AmountDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl AmountDiagnostic {
    /// Create a diagnostic from a literal error and the argument it came from.
    pub fn from_literal_error(position: usize, raw: &str, err: &LiteralError) -> Self {
        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = err.offset().min(raw.len());
        let len = usize::from(offset < raw.len());

        AmountDiagnostic {
            src: NamedSource::new(format!("amount #{position}"), raw.to_string()),
            span: (offset, len).into(),
            message: err.to_string(),
            help: err.help().map(str::to_string),
        }
    }
}
