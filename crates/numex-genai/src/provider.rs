//! Provider contract for delegated document extraction.

use std::path::Path;

use async_trait::async_trait;

use crate::{NumberResponse, Result};

/// Trait for hosted document-understanding providers.
///
/// A provider takes a local PDF, hands it to a hosted model, and returns
/// the single largest interpreted number as a schema-validated record.
/// Extraction quality is the provider's concern, not ours.
#[async_trait]
pub trait GenAiProvider: Send + Sync {
    /// Upload the document and ask the model for the largest number.
    async fn largest_number(&self, pdf_path: &Path) -> Result<NumberResponse>;
}

/// Built-in extraction prompt, overridable through configuration.
pub const DEFAULT_PROMPT: &str = "\
## Task: Comprehensive Numerical Data Extraction from PDF

Extract every numerical value in the attached financial PDF and interpret
its magnitude, then return ONLY the single largest interpreted value as a
JSON object with these fields:

1. raw_value: the number exactly as it appears, including commas,
   periods, or parentheses (e.g. \"1,088.6\", \"28,239.2\", \"(364.7)\").
2. context: a short label describing the number, taken from surrounding
   text, table row/column headers, or the table title. Prefer some
   context over none.
3. modifier: one of \"Millions\" (Million/M/$M), \"Billions\"
   (Billion/B), \"Thousands\" (Thousand/K), \"Percent\" (percent/%), or
   \"None\". Modifier words are case-insensitive.
4. interpreted_value: the fully expanded number. Examples:
   1,088.6 Millions -> 1088600000; (46.6) Millions -> -46600000;
   2.0 Percent -> 0.02; 33,848 None -> 33848.
5. page_number: the 1-indexed page where the number appears.
6. table_name: the title of the table the number came from, or an empty
   string for running text.

Rules:
- Table headers such as \"(Dollars in Millions)\" or \"($M)\" apply their
  modifier to every number in their scope.
- A modifier word immediately following a number beats a table-header
  modifier.
- Numbers in parentheses are negative: (46.6) reads as -46.6.
- Spelled-out digit words (one, two, three, ...) count as numbers.
";
