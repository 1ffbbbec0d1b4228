//! Heading and table extraction from a parsed HTML document.
//!
//! Pure functions over `scraper::Html`: locate the first heading whose text
//! contains a target substring, then convert the first table following it
//! into a header list and a rectangular row matrix. Nothing here touches the
//! network and the input tree is never mutated.

use std::sync::OnceLock;

use scraper::{ElementRef, Html, Selector};

use crate::error::{AppError, Result};
use crate::text::normalize;

/// Find the first heading (h1..h6, document order) whose normalized text
/// contains `needle`, case-insensitively.
pub fn locate_heading<'a>(document: &'a Html, needle: &str) -> Result<ElementRef<'a>> {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    let selector = SELECTOR.get_or_init(|| Selector::parse("h1, h2, h3, h4, h5, h6").unwrap());

    // One combined selector keeps a single document-order pass; selecting
    // per level and merging would change which heading counts as "first".
    let needle_lower = needle.to_lowercase();
    document
        .select(selector)
        .find(|heading| element_text(*heading).to_lowercase().contains(&needle_lower))
        .ok_or_else(|| AppError::not_found(format!("Heading containing '{needle}' not found")))
}

/// Convert the first table after `heading` into `(headers, rows)`.
///
/// The table may appear anywhere later in document order, not only as a
/// direct sibling. Rows are padded or truncated to the header count, so the
/// returned matrix is always rectangular.
pub fn extract_table(heading: ElementRef<'_>) -> Result<(Vec<String>, Vec<Vec<String>>)> {
    let table = following_table(heading).ok_or_else(|| {
        AppError::not_found(format!(
            "No <table> found after heading '{}'",
            element_text(heading)
        ))
    })?;
    Ok(table_to_matrix(table))
}

/// Walk forward from `start` in document order to the next `<table>` element.
///
/// The successor of a node is its first child, else its next sibling, else
/// the nearest ancestor's next sibling. Returns None once the walk runs off
/// the end of the document.
fn following_table(start: ElementRef<'_>) -> Option<ElementRef<'_>> {
    let mut node = *start;
    loop {
        node = if let Some(child) = node.first_child() {
            child
        } else {
            let mut current = node;
            loop {
                if let Some(sibling) = current.next_sibling() {
                    break sibling;
                }
                current = current.parent()?;
            }
        };
        if let Some(element) = ElementRef::wrap(node) {
            if element.value().name() == "table" {
                return Some(element);
            }
        }
    }
}

fn table_to_matrix(table: ElementRef<'_>) -> (Vec<String>, Vec<Vec<String>>) {
    static ROW_SELECTOR: OnceLock<Selector> = OnceLock::new();
    static CELL_SELECTOR: OnceLock<Selector> = OnceLock::new();
    static HEADER_CELL_SELECTOR: OnceLock<Selector> = OnceLock::new();
    let row_selector = ROW_SELECTOR.get_or_init(|| Selector::parse("tr").unwrap());
    let cell_selector = CELL_SELECTOR.get_or_init(|| Selector::parse("th, td").unwrap());
    let header_cell_selector = HEADER_CELL_SELECTOR.get_or_init(|| Selector::parse("th").unwrap());

    // Descendant selection covers thead/tbody wrappers.
    let rows: Vec<ElementRef> = table.select(row_selector).collect();
    if rows.is_empty() {
        return (Vec::new(), Vec::new());
    }

    let header_row_idx = rows
        .iter()
        .position(|tr| tr.select(header_cell_selector).next().is_some());

    let (headers, data_rows) = match header_row_idx {
        Some(idx) => {
            let headers = header_texts(rows[idx].select(header_cell_selector));
            (headers, &rows[idx + 1..])
        }
        // No <th> anywhere: first row's cells become the headers.
        None => {
            let headers = header_texts(rows[0].select(cell_selector));
            (headers, &rows[1..])
        }
    };

    tracing::debug!(
        columns = headers.len(),
        candidate_rows = data_rows.len(),
        "extracted table shape"
    );

    let mut data = Vec::new();
    for tr in data_rows {
        let mut values: Vec<String> = tr.select(cell_selector).map(element_text).collect();
        if values.is_empty() {
            continue;
        }
        // Pads with "" or truncates, keeping the matrix rectangular.
        values.resize(headers.len(), String::new());
        data.push(values);
    }

    (headers, data)
}

fn header_texts<'a>(cells: impl Iterator<Item = ElementRef<'a>>) -> Vec<String> {
    cells
        .enumerate()
        .map(|(idx, cell)| {
            let text = element_text(cell);
            if text.is_empty() {
                format!("col{}", idx + 1)
            } else {
                text
            }
        })
        .collect()
}

/// Normalized text content of an element, text nodes joined by spaces.
fn element_text(element: ElementRef<'_>) -> String {
    normalize(&element.text().collect::<Vec<_>>().join(" "))
}
