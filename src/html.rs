// src/html.rs
// Static HTML output for the NAICS table.
// Cell values are written verbatim; callers own any escaping they need.

use std::fmt::Write;

use crate::config::options::RenderOptions;
use crate::data::Record;

/// Record keys read into the four table cells, in column order.
pub const CELL_KEYS: [&str; 4] = ["Code", "Description", "Level", "Parent_Code"];

/// Column labels shown in the table header.
pub const COLUMN_LABELS: [&str; 4] = ["Code", "Description", "Level", "Parent Code"];

const STYLE: &str = r#"    <style>
        body {
            font-family: sans-serif;
            line-height: 1.6;
            margin: 20px;
            background-color: #f9f9f9;
            color: #333;
        }

        h1 {
            text-align: center;
            color: #444;
        }

        table {
            width: 100%;
            border-collapse: collapse;
            margin-top: 20px;
            box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
            background-color: #fff;
        }

        th,
        td {
            padding: 10px 12px;
            text-align: left;
            border-bottom: 1px solid #eee;
        }

        th {
            background-color: #f2f2f2;
            font-weight: 600;
            color: #555;
        }

        tr:hover {
            background-color: #f5f5f5;
        }

        td:first-child,
        th:first-child {
            width: 10%;
            /* Adjust width for Code */
        }

        td:nth-child(2),
        th:nth-child(2) {
            width: 60%;
            /* Adjust width for Description */
        }

        td:nth-child(3),
        th:nth-child(3) {
            width: 15%;
            /* Adjust width for Level */
        }

        td:nth-child(4),
        th:nth-child(4) {
            width: 15%;
            /* Adjust width for Parent Code */
        }
    </style>
"#;

/// One `<tr>` block per record, joined by newlines. No sorting or filtering.
pub fn render_rows(records: &[Record]) -> String {
    let mut out = String::new();

    for (i, rec) in records.iter().enumerate() {
        if i > 0 { out.push('\n'); }
        out.push_str("            <tr>\n");
        for key in CELL_KEYS {
            // String writes are infallible
            let _ = writeln!(out, "                <td>{}</td>", rec.get_or_empty(key));
        }
        out.push_str("            </tr>");
    }

    out
}

/// Full document: preamble, style block, heading, header row and body rows.
pub fn render_document(records: &[Record], opts: &RenderOptions) -> String {
    let mut out = String::with_capacity(STYLE.len() + records.len() * 160 + 1024);

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n\n<head>\n");
    out.push_str("    <meta charset=\"UTF-8\">\n");
    out.push_str("    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    let _ = writeln!(out, "    <title>{}</title>", opts.title);
    out.push_str(STYLE);
    out.push_str("</head>\n\n<body>\n");
    let _ = writeln!(out, "    <h1>{}</h1>", opts.heading);
    out.push_str("    \n    <table>\n        <thead>\n            <tr>\n");
    for label in COLUMN_LABELS {
        let _ = writeln!(out, "                <th>{label}</th>");
    }
    out.push_str("            </tr>\n        </thead>\n        <tbody>\n");
    out.push_str(&render_rows(records));
    out.push_str("\n        </tbody>\n    </table>\n</body>\n\n</html>");

    out
}
