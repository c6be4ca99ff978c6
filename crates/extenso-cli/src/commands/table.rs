//! Implementation of the `extenso table` command.

use extenso::verbalize;

use super::parse_literals;
use crate::output::table::{format_spelling_table, SpellingRow};

/// Arguments for the table command.
#[derive(Debug, clap::Args)]
pub struct TableArgs {
    /// Amounts in reais (e.g. 42.69, 42,69, "R$ 1.234,56")
    #[arg(required = true, allow_hyphen_values = true)]
    pub amounts: Vec<String>,
}

/// Run the table command.
pub fn run_table(args: TableArgs) -> miette::Result<i32> {
    let literals = match parse_literals(&args.amounts) {
        Ok(literals) => literals,
        Err(code) => return Ok(code),
    };

    let rows: Vec<SpellingRow> = literals
        .into_iter()
        .map(|(amount, value)| SpellingRow {
            amount,
            words: verbalize(value).map_err(|e| e.to_string()),
        })
        .collect();

    println!("{}", format_spelling_table(&rows));

    if rows.iter().any(|row| row.words.is_err()) {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
