//! CLI command implementations.

mod spell;
mod table;

pub use spell::{run_spell, SpellArgs};
pub use table::{run_table, TableArgs};

use miette::Report;
use tracing::debug;

use crate::input::parse_amount;
use crate::output::AmountDiagnostic;

/// Parse every literal, stopping at the first malformed one.
///
/// On failure the diagnostic has already been printed to stderr.
fn parse_literals(raw: &[String]) -> Result<Vec<(String, f64)>, i32> {
    raw.iter()
        .enumerate()
        .map(|(i, literal)| match parse_amount(literal) {
            Ok(value) => {
                debug!(literal = literal.as_str(), value, "parsed amount");
                Ok((literal.clone(), value))
            }
            Err(e) => {
                let diagnostic = AmountDiagnostic::from_literal_error(i + 1, literal, &e);
                eprintln!("{:?}", Report::new(diagnostic));
                Err(exitcode::USAGE)
            }
        })
        .collect()
}
