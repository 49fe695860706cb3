//! PDF page access using lopdf and pdf-extract.

use lopdf::Document;
use tracing::debug;

use super::{detect_tables, PageProvider, Result, TableGrid};
use crate::error::PdfError;

/// PDF reader backed by lopdf, with pdf-extract as a text fallback.
pub struct PdfReader {
    document: Option<Document>,
    raw_data: Vec<u8>,
}

impl PdfReader {
    /// Create an empty reader; call [`PdfReader::load`] before use.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
        }
    }

    /// Load a PDF from bytes.
    pub fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            // Save decrypted document to raw_data for pdf_extract
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    fn document(&self) -> Result<&Document> {
        self.document
            .as_ref()
            .ok_or_else(|| PdfError::Parse("No document loaded".to_string()))
    }

    /// Slice the whole-document text evenly across pages.
    ///
    /// Used when lopdf cannot decode a page's content stream; pdf-extract
    /// only produces document-level text, so the split is approximate.
    fn fallback_page_text(&self, page: u32) -> Result<String> {
        let full_text = pdf_extract::extract_text_from_mem(&self.raw_data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))?;

        let page_count = self.page_count() as usize;
        if page_count == 0 {
            return Ok(String::new());
        }

        let lines: Vec<&str> = full_text.lines().collect();
        let lines_per_page = lines.len() / page_count;
        let start = ((page - 1) as usize) * lines_per_page;
        let end = (page as usize) * lines_per_page;

        Ok(lines[start.min(lines.len())..end.min(lines.len())].join("\n"))
    }
}

impl Default for PdfReader {
    fn default() -> Self {
        Self::new()
    }
}

impl PageProvider for PdfReader {
    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn page_text(&self, page: u32) -> Result<String> {
        let doc = self.document()?;

        if !doc.get_pages().contains_key(&page) {
            return Err(PdfError::InvalidPage(page));
        }

        match doc.extract_text(&[page]) {
            Ok(text) => Ok(text),
            Err(e) => {
                debug!("lopdf text extraction failed on page {}: {}", page, e);
                self.fallback_page_text(page)
            }
        }
    }

    fn page_tables(&self, page: u32) -> Result<Vec<TableGrid>> {
        // Table detection runs over a fresh text pass; a failure here is
        // recoverable per page and must not abort the document scan.
        let text = self
            .page_text(page)
            .map_err(|e| PdfError::TableExtraction(e.to_string()))?;

        Ok(detect_tables(&text))
    }
}
