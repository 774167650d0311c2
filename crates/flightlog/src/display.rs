//! Fixed-width table rendering for flight records.

use std::fmt::Write as _;
use std::io::{self, Write};

use crate::record::{Record, NUMBER, POINT, TYPE};

/// Message shown when there is nothing to list.
pub const DEFAULT_EMPTY_MESSAGE: &str = "Flight list is empty.";

const INDEX_WIDTH: usize = 4;
const POINT_WIDTH: usize = 30;
const NUMBER_WIDTH: usize = 10;
const TYPE_WIDTH: usize = 20;

/// Horizontal rule framing the table.
fn rule() -> String {
    format!(
        "+-{}-+-{}-+-{}-+-{}-+",
        "-".repeat(INDEX_WIDTH),
        "-".repeat(POINT_WIDTH),
        "-".repeat(NUMBER_WIDTH),
        "-".repeat(TYPE_WIDTH),
    )
}

/// Render `records` as a table, or `empty_message` when there are none.
///
/// The returned text ends with a newline.
#[must_use]
pub fn render_table<'a, I>(records: I, empty_message: &str) -> String
where
    I: IntoIterator<Item = &'a Record>,
{
    let records: Vec<&Record> = records.into_iter().collect();
    if records.is_empty() {
        return format!("{empty_message}\n");
    }

    let rule = rule();
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(
        out,
        "| {:^INDEX_WIDTH$} | {:^POINT_WIDTH$} | {:^NUMBER_WIDTH$} | {:^TYPE_WIDTH$} |",
        "No", "Destination", "Flight No", "Aircraft type",
    );
    let _ = writeln!(out, "{rule}");
    for (idx, record) in records.iter().enumerate() {
        let _ = writeln!(
            out,
            "| {:>INDEX_WIDTH$} | {:<POINT_WIDTH$} | {:<NUMBER_WIDTH$} | {:>TYPE_WIDTH$} |",
            idx + 1,
            record.display_field(POINT, ""),
            record.display_field(NUMBER, "0"),
            record.display_field(TYPE, ""),
        );
    }
    let _ = writeln!(out, "{rule}");
    out
}

/// Write the table for `records` to `out`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn display<'a, W, I>(out: &mut W, records: I, empty_message: &str) -> io::Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = &'a Record>,
{
    out.write_all(render_table(records, empty_message).as_bytes())?;
    out.flush()
}
