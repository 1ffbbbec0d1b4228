//! Aligned plain-text rendering of a header list + row matrix.

use std::io::{self, Write};

/// Write `headers` and `rows` as an aligned table.
///
/// Column widths are auto-sized to the widest cell, columns are joined by
/// `" | "`, and the header is underlined with `-` runs joined by `"-+-"`.
/// Every row is emitted in matrix order; this layer never filters.
pub fn render_matrix<W: Write>(
    headers: &[String],
    rows: &[Vec<String>],
    out: &mut W,
) -> io::Result<()> {
    if headers.is_empty() {
        writeln!(out, "(no headers)")?;
        return Ok(());
    }

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (idx, value) in row.iter().enumerate() {
            if idx < widths.len() {
                widths[idx] = widths[idx].max(value.chars().count());
            }
        }
    }

    writeln!(out, "{}", format_row(headers, &widths))?;
    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    writeln!(out, "{}", separator.join("-+-"))?;

    for row in rows {
        writeln!(out, "{}", format_row(row, &widths))?;
    }
    Ok(())
}

fn format_row(values: &[String], widths: &[usize]) -> String {
    widths
        .iter()
        .enumerate()
        .map(|(idx, width)| {
            let value = values.get(idx).map(String::as_str).unwrap_or("");
            format!("{value:<width$}")
        })
        .collect::<Vec<_>>()
        .join(" | ")
}
