//! Numeric fact extraction from table grids.

use crate::models::{ExtractedNumber, Modifier};
use crate::pdf::TableGrid;

use super::{interpret_value, scan_numbers};

/// Extract numeric facts from a table grid.
///
/// Row 0 is the header row, column 0 the row-label column. An inline
/// modifier in a cell wins over the header-derived modifier; cells fall
/// back to the header modifier only when they carry none of their own.
pub fn scan_table(grid: &TableGrid, page_text: &str, page_number: u32) -> Vec<ExtractedNumber> {
    let mut records = Vec::new();
    if grid.is_empty() {
        return records;
    }

    let table_name = resolve_table_name(grid, page_text, page_number);
    let header_mod = header_modifier(grid);
    let rows = grid.rows();

    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, cell) in row.iter().enumerate() {
            let cell = cell.trim();

            // Header cells are only scanned when they are themselves numeric.
            if row_idx == 0 && !is_numeric_cell(cell) {
                continue;
            }

            for token in scan_numbers(cell) {
                let modifier = if token.modifier != Modifier::None {
                    token.modifier
                } else {
                    header_mod
                };

                let row_label = if col_idx > 0 {
                    row.first().map(String::as_str).unwrap_or("")
                } else {
                    ""
                };
                let col_label = if row_idx > 0 {
                    rows[0].get(col_idx).map(String::as_str).unwrap_or("")
                } else {
                    ""
                };

                let context = format!("{} {}", row_label, col_label).trim().to_string();
                let context = if context.is_empty() {
                    table_name.clone()
                } else {
                    context
                };

                let interpreted_value = interpret_value(&token.raw, modifier);
                records.push(ExtractedNumber {
                    raw_value: token.raw,
                    context,
                    modifier,
                    interpreted_value,
                    page_number,
                    table_name: table_name.clone(),
                });
            }
        }
    }

    records
}

/// Resolve a table's title.
///
/// The first page-text line containing any header cell as a substring
/// wins; otherwise the header row joined with spaces; otherwise a page
/// placeholder.
fn resolve_table_name(grid: &TableGrid, page_text: &str, page_number: u32) -> String {
    let mut title = String::new();

    if let Some(header) = grid.header() {
        for line in page_text.lines() {
            if header.iter().any(|cell| line.contains(cell.as_str())) {
                title = line.trim().to_string();
                break;
            }
        }

        if title.is_empty() {
            title = header.join(" ").trim().to_string();
        }
    }

    if title.is_empty() {
        title = format!("Table on Page {}", page_number);
    }

    title
}

/// First header cell declaring a magnitude, scanned in column order.
fn header_modifier(grid: &TableGrid) -> Modifier {
    let Some(header) = grid.header() else {
        return Modifier::None;
    };

    for cell in header {
        let cell = cell.to_lowercase();
        if cell.contains("million") || cell.contains("$m") {
            return Modifier::Millions;
        } else if cell.contains("billion") {
            return Modifier::Billions;
        } else if cell.contains("thousand") {
            return Modifier::Thousands;
        } else if cell.contains("percent") || cell.contains('%') {
            return Modifier::Percent;
        }
    }

    Modifier::None
}

/// True when the cell text is digits only once commas and dots are removed.
fn is_numeric_cell(cell: &str) -> bool {
    let stripped: String = cell.chars().filter(|c| *c != ',' && *c != '.').collect();
    !stripped.is_empty() && stripped.chars().all(|c| c.is_ascii_digit())
}
