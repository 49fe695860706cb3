//! Document pipeline: page iteration, aggregation, and reduction.

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::models::{ExtractedNumber, InterpretedValue};
use crate::pdf::{PageProvider, TableGrid};
use crate::scan::{scan_table, scan_text};

/// Outcome of a full document scan.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    /// Every parseable record, in scan order.
    pub records: Vec<ExtractedNumber>,
    /// The record with the largest interpreted value, if any.
    pub largest: Option<ExtractedNumber>,
}

/// Scan a single page's text and table grids.
pub fn scan_page(text: &str, tables: &[TableGrid], page_number: u32) -> Vec<ExtractedNumber> {
    let mut records = scan_text(text, page_number);
    for grid in tables {
        records.extend(scan_table(grid, text, page_number));
    }
    records
}

/// Run the full extraction pipeline over a document.
///
/// Pages are processed strictly in order, one at a time. A page whose
/// table extraction fails contributes zero table records and the scan
/// continues; any other failure aborts the run.
pub fn scan_document<P: PageProvider>(provider: &P) -> Result<ScanOutcome> {
    let total_pages = provider.page_count();
    debug!("Scanning document with {} pages", total_pages);

    let mut records = Vec::new();
    for page in 1..=total_pages {
        info!("Processing page {}", page);

        let text = provider.page_text(page)?;
        let tables = match provider.page_tables(page) {
            Ok(tables) => tables,
            Err(e) => {
                warn!("Error reading tables on page {}: {}", page, e);
                Vec::new()
            }
        };

        records.extend(scan_page(&text, &tables, page));
    }

    Ok(finish_scan(records))
}

/// Drop unparseable records and select the largest interpreted value.
///
/// Ties are broken by scan order: the earliest record wins.
pub fn finish_scan(records: Vec<ExtractedNumber>) -> ScanOutcome {
    let records: Vec<ExtractedNumber> = records
        .into_iter()
        .filter(|r| r.interpreted_value.is_some())
        .collect();

    let largest = records
        .iter()
        .filter_map(|r| r.interpreted_value.map(|v| (v, r)))
        .fold(
            None::<(InterpretedValue, &ExtractedNumber)>,
            |best, (value, record)| match best {
                Some((best_value, _)) if !(value > best_value) => best,
                _ => Some((value, record)),
            },
        )
        .map(|(_, record)| record.clone());

    ScanOutcome { records, largest }
}
