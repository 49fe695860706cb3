//! Best-effort table grid detection from extracted page text.
//!
//! PDF text extraction flattens lattice tables into column-aligned lines.
//! A run of two or more consecutive lines that split into the same number
//! of columns (two or more) is treated as one table grid.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Column boundary: a tab or a run of two or more whitespace characters.
    static ref COLUMN_SPLIT: Regex = Regex::new(r"\t|\s{2,}").unwrap();
}

/// A rectangular grid of cell text extracted from a detected table.
///
/// Row 0 is the header row; column 0 holds row labels.
#[derive(Debug, Clone, Default)]
pub struct TableGrid {
    rows: Vec<Vec<String>>,
}

impl TableGrid {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// All rows, header first.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// The header row, when the grid has one.
    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(|r| r.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Split a line into cells at tab or multi-space boundaries.
fn split_columns(line: &str) -> Vec<String> {
    COLUMN_SPLIT
        .split(line.trim())
        .map(|cell| cell.trim().to_string())
        .filter(|cell| !cell.is_empty())
        .collect()
}

/// Detect table grids in a page's text.
///
/// Non-tabular lines (fewer than two columns) and width changes end the
/// current run; runs shorter than two rows are discarded.
pub fn detect_tables(text: &str) -> Vec<TableGrid> {
    let mut tables = Vec::new();
    let mut current: Vec<Vec<String>> = Vec::new();

    let mut flush = |rows: &mut Vec<Vec<String>>| {
        if rows.len() >= 2 {
            tables.push(TableGrid::new(std::mem::take(rows)));
        } else {
            rows.clear();
        }
    };

    for line in text.lines() {
        let cells = split_columns(line);

        if cells.len() >= 2 {
            let width_changed = current
                .last()
                .is_some_and(|prev| prev.len() != cells.len());
            if width_changed {
                flush(&mut current);
            }
            current.push(cells);
        } else {
            flush(&mut current);
        }
    }
    flush(&mut current);

    tables
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn grid_rows(grid: &TableGrid) -> Vec<Vec<&str>> {
        grid.rows()
            .iter()
            .map(|r| r.iter().map(|c| c.as_str()).collect())
            .collect()
    }

    #[test]
    fn test_split_columns() {
        assert_eq!(
            split_columns("Revenue   1,088.6   1,213.4"),
            vec!["Revenue", "1,088.6", "1,213.4"]
        );
        assert_eq!(split_columns("Item\t5.0"), vec!["Item", "5.0"]);
        assert_eq!(split_columns("single words only"), vec!["single words only"]);
    }

    #[test]
    fn test_detect_aligned_block() {
        let text = "AFWCF Financial Summary\n\
                    Category  FY 2023  FY 2024\n\
                    Revenue   1,088.6  1,213.4\n\
                    Expenses  (364.7)  (401.2)\n\
                    \n\
                    Narrative text continues here.";

        let tables = detect_tables(text);
        assert_eq!(tables.len(), 1);
        assert_eq!(
            grid_rows(&tables[0]),
            vec![
                vec!["Category", "FY 2023", "FY 2024"],
                vec!["Revenue", "1,088.6", "1,213.4"],
                vec!["Expenses", "(364.7)", "(401.2)"],
            ]
        );
    }

    #[test]
    fn test_width_change_splits_grids() {
        let text = "A  B\n\
                    C  D\n\
                    E  F  G\n\
                    H  I  J";

        let tables = detect_tables(text);
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].rows()[0].len(), 2);
        assert_eq!(tables[1].rows()[0].len(), 3);
    }

    #[test]
    fn test_single_tabular_line_is_discarded() {
        let text = "prose line\nOnly  One  Row\nmore prose";
        assert!(detect_tables(text).is_empty());
    }

    #[test]
    fn test_no_tables_in_plain_prose() {
        let text = "Total Revenue was 1,088.6 Million in FY23.\nAnother line.";
        assert!(detect_tables(text).is_empty());
    }
}
