//! PDF document access: per-page text and best-effort table grids.

mod reader;
mod tables;

pub use reader::PdfReader;
pub use tables::{detect_tables, TableGrid};

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Narrow contract over a paginated document source.
///
/// Table extraction is fallible per page; callers are expected to treat a
/// failed page as an empty table set and keep going.
pub trait PageProvider {
    /// Number of pages in the document.
    fn page_count(&self) -> u32;

    /// Extract plain text from a page (1-indexed).
    fn page_text(&self, page: u32) -> Result<String>;

    /// Extract table grids located on a page (1-indexed).
    fn page_tables(&self, page: u32) -> Result<Vec<TableGrid>>;
}
