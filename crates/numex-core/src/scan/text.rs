//! Numeric fact extraction from running page text.

use crate::models::{ExtractedNumber, Modifier};

use super::{interpret_value, scan_numbers, written_number};

/// Extract numeric facts from a page's text, line by line.
///
/// Two independent passes run over each line: spelled-out digit words and
/// literal numeric tokens. A token matching both passes is emitted twice;
/// deduplication is intentionally not performed.
pub fn scan_text(page_text: &str, page_number: u32) -> Vec<ExtractedNumber> {
    let mut records = Vec::new();

    for line in page_text.lines() {
        // Pass 1: spelled-out digit words, context is a +/-3 word window.
        let words: Vec<&str> = line.split_whitespace().collect();
        for (idx, word) in words.iter().enumerate() {
            if let Some(digit) = written_number(word) {
                let window_start = idx.saturating_sub(3);
                let window_end = (idx + 4).min(words.len());
                let context = words[window_start..window_end].join(" ");

                records.push(ExtractedNumber {
                    raw_value: digit.to_string(),
                    context,
                    modifier: Modifier::None,
                    interpreted_value: interpret_value(digit, Modifier::None),
                    page_number,
                    table_name: String::new(),
                });
            }
        }

        // Pass 2: numeric tokens, context is a +/-50 character window.
        for token in scan_numbers(line) {
            let context = context_window(line, token.start, token.end, 50);
            let context = if context.is_empty() {
                format!("Page {} - No clear context", page_number)
            } else {
                context
            };

            let interpreted_value = interpret_value(&token.raw, token.modifier);
            records.push(ExtractedNumber {
                raw_value: token.raw,
                context,
                modifier: token.modifier,
                interpreted_value,
                page_number,
                table_name: String::new(),
            });
        }
    }

    records
}

/// Take up to `width` characters either side of the `[start, end)` byte
/// span, staying on char boundaries, and trim the result.
fn context_window(line: &str, start: usize, end: usize, width: usize) -> String {
    let head: usize = line[..start]
        .chars()
        .rev()
        .take(width)
        .map(|c| c.len_utf8())
        .sum();
    let tail: usize = line[end..].chars().take(width).map(|c| c.len_utf8()).sum();

    line[start - head..end + tail].trim().to_string()
}
