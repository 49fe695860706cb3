//! Core library for numex financial PDF number extraction.
//!
//! This crate provides:
//! - PDF page access (text and best-effort table grids)
//! - Heuristic scanning of numeric tokens, spelled-out digits, and
//!   magnitude modifiers
//! - Value interpretation (comma stripping, parenthesized negatives,
//!   magnitude scaling)
//! - The document pipeline that aggregates records and selects the
//!   largest interpreted value

pub mod error;
pub mod models;
pub mod pdf;
pub mod pipeline;
pub mod scan;

pub use error::{NumexError, PdfError, Result};
pub use models::{ExtractedNumber, GenAiConfig, InterpretedValue, Modifier, NumexConfig};
pub use pdf::{detect_tables, PageProvider, PdfReader, TableGrid};
pub use pipeline::{finish_scan, scan_document, scan_page, ScanOutcome};
pub use scan::{interpret_value, scan_numbers, scan_table, scan_text, written_number};
