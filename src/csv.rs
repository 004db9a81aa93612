// src/csv.rs
use std::mem::take;

use crate::data::Record;

/* ---------------- Parsing ---------------- */

/// Parse NAICS-style CSV text into records keyed by the header line.
///
/// - First line is the header; every later non-blank line becomes one `Record`.
/// - Fields may be wrapped in double quotes; a comma inside quotes is content.
/// - No `""` escapes and no multi-line fields.
/// - A single trailing `\r` is dropped from every line (CRLF input).
///
/// Malformed quoting is not an error: an unterminated quote swallows the
/// rest of the line, commas included, into the current field.
pub fn parse_records(text: &str) -> Vec<Record> {
    let mut lines = text.split('\n').map(trim_cr);

    let headers = match lines.next() {
        Some(first) => parse_header(first),
        None => return Vec::new(),
    };

    lines
        .filter(|line| !is_blank(line))
        .map(|line| Record::from_parts(&headers, split_fields(line)))
        .collect()
}

/// Split the header line on every comma, then strip at most one leading and
/// one trailing `"` from each name. Quotes are not honoured as grouping here.
pub fn parse_header(line: &str) -> Vec<String> {
    line.split(',')
        .map(|name| strip_outer_quotes(name).to_string())
        .collect()
}

/// Split one data line into raw field values using the quote-toggle scan.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(take(&mut field)),
            _ => field.push(ch),
        }
    }

    // Last field, even if a quote was left open.
    fields.push(field);
    fields
}

/// Remove one leading and one trailing `"`, independently.
fn strip_outer_quotes(s: &str) -> &str {
    let s = s.strip_prefix('"').unwrap_or(s);
    s.strip_suffix('"').unwrap_or(s)
}

/// A line is blank when every char is Unicode White_Space other than
/// NEL (U+0085), or a byte-order mark (U+FEFF).
pub fn is_blank(line: &str) -> bool {
    line.chars()
        .all(|c| c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}'))
}

#[inline]
fn trim_cr(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}
