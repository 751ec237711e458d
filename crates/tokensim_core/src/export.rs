//! CSV rendering of result rows
//!
//! Produces RFC 4180 text: a header row followed by one record per result
//! with a leading 1-based index. Writing the text to disk is left to the
//! caller.

use crate::model::IterationResult;

pub const CSV_HEADER: [&str; 10] = [
    "Iteration",
    "ID",
    "Valuation",
    "Sold Percentage",
    "Sold Value",
    "Sold Tokens",
    "Remaining Tokens",
    "Accumulative Value",
    "Left Token Stack Value",
    "Total Value",
];

const LINE_ENDING: &str = "\r\n";

/// `$` followed by exactly two decimals, no grouping separators
pub fn format_money(value: f64) -> String {
    format!("${value:.2}")
}

/// Field values for one record, in header order
pub fn csv_record(index: usize, row: &IterationResult) -> [String; 10] {
    [
        index.to_string(),
        row.simulation_id.clone(),
        format_money(row.valuation),
        row.sold_percentage_formatted(),
        format_money(row.sold_value),
        row.sold_tokens.to_string(),
        row.remaining_tokens.to_string(),
        format_money(row.accumulative_value),
        format_money(row.remaining_value),
        format_money(row.total_value),
    ]
}

/// Render the header and every row
pub fn to_csv<'a>(rows: impl IntoIterator<Item = &'a IterationResult>) -> String {
    let mut out = String::new();
    push_line(&mut out, CSV_HEADER.iter().copied());

    for (i, row) in rows.into_iter().enumerate() {
        let record = csv_record(i + 1, row);
        push_line(&mut out, record.iter().map(String::as_str));
    }

    out
}

fn push_line<'a>(out: &mut String, fields: impl Iterator<Item = &'a str>) {
    for (i, field) in fields.enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&escape_field(field));
    }
    out.push_str(LINE_ENDING);
}

fn escape_field(field: &str) -> std::borrow::Cow<'_, str> {
    if field.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\"")).into()
    } else {
        field.into()
    }
}
