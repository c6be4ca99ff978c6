//! Implementation of the `extenso spell` command.

use extenso::verbalize;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use super::parse_literals;

/// Arguments for the spell command.
#[derive(Debug, clap::Args)]
pub struct SpellArgs {
    /// Amounts in reais (e.g. 42.69, 42,69, "R$ 1.234,56")
    #[arg(required = true, allow_hyphen_values = true)]
    pub amounts: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one amount.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SpellResult {
    Words { amount: String, words: String },
    Error { amount: String, error: String },
}

/// Run the spell command.
pub fn run_spell(args: SpellArgs) -> miette::Result<i32> {
    let literals = match parse_literals(&args.amounts) {
        Ok(literals) => literals,
        Err(code) => return Ok(code),
    };

    let results: Vec<SpellResult> = literals
        .into_iter()
        .map(|(amount, value)| match verbalize(value) {
            Ok(words) => SpellResult::Words { amount, words },
            Err(e) => SpellResult::Error {
                amount,
                error: e.to_string(),
            },
        })
        .collect();
    let any_failed = results
        .iter()
        .any(|r| matches!(r, SpellResult::Error { .. }));

    if args.json {
        let output = serde_json::to_string_pretty(&results)
            .map_err(|e| miette::miette!("Failed to serialize results: {}", e))?;
        println!("{}", output);
    } else {
        for result in &results {
            match result {
                SpellResult::Words { words, .. } => println!("{}", words),
                SpellResult::Error { amount, error } => eprintln!(
                    "{}: {}",
                    amount,
                    error.if_supports_color(Stream::Stderr, |text| text.red())
                ),
            }
        }
    }

    if any_failed {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
