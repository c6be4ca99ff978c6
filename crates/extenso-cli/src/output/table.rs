//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};

/// One spelled amount as shown in a table row.
pub struct SpellingRow {
    /// The literal as given on the command line.
    pub amount: String,
    /// The words, or the error message.
    pub words: Result<String, String>,
}

/// Format spelled amounts as an ASCII table.
pub fn format_spelling_table(rows: &[SpellingRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Amount", "Por extenso"]);

    for row in rows {
        let words = match &row.words {
            Ok(words) => words.clone(),
            Err(error) => format!("error: {error}"),
        };
        table.add_row(vec![row.amount.clone(), words]);
    }

    table
}
