//! Fetches a public status page, finds the table after a named heading, and
//! renders it as aligned text.
//!
//! The pipeline is a sequence of pure stages composed by the binary:
//! `fetch_html` -> `Html::parse_document` -> `locate_heading` ->
//! `extract_table` -> `render_matrix`. Each stage is independently testable
//! and none of them holds state across calls.

pub mod error;
pub mod extractor;
pub mod fetch;
pub mod render;
pub mod text;

pub use error::{AppError, Result};
pub use extractor::{extract_table, locate_heading};
pub use fetch::{fetch_html, DEFAULT_TIMEOUT};
pub use render::render_matrix;
pub use text::normalize;
