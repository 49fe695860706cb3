//! Finite-state scan for numeric tokens in a line of text.
//!
//! A token is an optional opening parenthesis, one to three leading
//! digits, any number of comma-grouped three-digit blocks, an optional
//! decimal fraction, an optional closing parenthesis, and an optional
//! trailing magnitude token separated by whitespace. Matches are
//! non-overlapping and found left to right; scanning resumes after the
//! full match, trailing magnitude token included.

use crate::models::Modifier;

/// Trailing magnitude tokens, tried leftmost-first. Prefix match with no
/// word boundary: "Millions" matches "million" and leaves the "s" behind.
const MODIFIER_TOKENS: &[&str] = &[
    "million", "billion", "thousand", "percent", "m", "b", "k", "%",
];

/// A numeric token found in a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberToken {
    /// The literal as it appeared, parentheses and commas included.
    pub raw: String,
    /// Modifier derived from the trailing magnitude token, if any.
    pub modifier: Modifier,
    /// Byte offset of the literal's first character.
    pub start: usize,
    /// Byte offset one past the end of the full match (magnitude token
    /// included when present).
    pub end: usize,
}

/// Scan a line for numeric tokens.
pub fn scan_numbers(line: &str) -> Vec<NumberToken> {
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < line.len() {
        if let Some(token) = match_at(line, i) {
            i = token.end;
            tokens.push(token);
        } else {
            i += line[i..].chars().next().map_or(1, |c| c.len_utf8());
        }
    }

    tokens
}

/// Try to match one numeric token starting exactly at byte offset `start`.
fn match_at(line: &str, start: usize) -> Option<NumberToken> {
    let bytes = line.as_bytes();
    let mut j = start;

    if bytes.get(j) == Some(&b'(') {
        j += 1;
    }

    // One to three leading digits.
    let digits_start = j;
    while j < bytes.len() && j - digits_start < 3 && bytes[j].is_ascii_digit() {
        j += 1;
    }
    if j == digits_start {
        return None;
    }

    // Comma-grouped blocks of exactly three digits.
    while bytes.get(j) == Some(&b',')
        && j + 3 < bytes.len()
        && bytes[j + 1].is_ascii_digit()
        && bytes[j + 2].is_ascii_digit()
        && bytes[j + 3].is_ascii_digit()
    {
        j += 4;
    }

    // Optional decimal fraction.
    if bytes.get(j) == Some(&b'.') && bytes.get(j + 1).is_some_and(|b| b.is_ascii_digit()) {
        j += 2;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
    }

    if bytes.get(j) == Some(&b')') {
        j += 1;
    }

    let literal_end = j;

    // Lookahead: whitespace then a magnitude token.
    let mut k = literal_end;
    for ch in line[literal_end..].chars() {
        if !ch.is_whitespace() {
            break;
        }
        k += ch.len_utf8();
    }

    let mut modifier = Modifier::None;
    let mut end = literal_end;
    let rest = &bytes[k..];
    for candidate in MODIFIER_TOKENS {
        let len = candidate.len();
        if rest.len() >= len && rest[..len].eq_ignore_ascii_case(candidate.as_bytes()) {
            modifier = Modifier::normalize(&line[k..k + len]);
            end = k + len;
            break;
        }
    }

    Some(NumberToken {
        raw: line[start..literal_end].to_string(),
        modifier,
        start,
        end,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn raws(line: &str) -> Vec<String> {
        scan_numbers(line).into_iter().map(|t| t.raw).collect()
    }

    #[test]
    fn test_plain_and_grouped_numbers() {
        assert_eq!(raws("Revenue was 33,848 in total"), vec!["33,848"]);
        assert_eq!(raws("5.0 and 1,088.6"), vec!["5.0", "1,088.6"]);
    }

    #[test]
    fn test_leading_digits_cap_at_three() {
        // Four adjacent digits split the way the pattern dictates.
        assert_eq!(raws("1234"), vec!["123", "4"]);
        assert_eq!(raws("12,34"), vec!["12", "34"]);
    }

    #[test]
    fn test_parenthesized_negative_form() {
        let tokens = scan_numbers("a loss of (364.7) was booked");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].raw, "(364.7)");
    }

    #[test]
    fn test_unbalanced_parens_stay_in_raw() {
        assert_eq!(raws("(46.6 and 46.6)"), vec!["(46.6", "46.6)"]);
    }

    #[test]
    fn test_trailing_modifier_words() {
        let tokens = scan_numbers("1,088.6 Million and 2.5B and 3 %");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].modifier, Modifier::Millions);
        assert_eq!(tokens[1].modifier, Modifier::Billions);
        assert_eq!(tokens[2].modifier, Modifier::Percent);
    }

    #[test]
    fn test_modifier_prefix_has_no_word_boundary() {
        // The trailing unit match has no word boundary, so the "m" of
        // "men" is picked up.
        let tokens = scan_numbers("3 men walked in");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].raw, "3");
        assert_eq!(tokens[0].modifier, Modifier::Millions);
    }

    #[test]
    fn test_match_span_includes_modifier() {
        let line = "was 1,088.6 Million in";
        let tokens = scan_numbers(line);
        assert_eq!(tokens.len(), 1);
        assert_eq!(&line[tokens[0].start..tokens[0].end], "1,088.6 Million");
    }

    #[test]
    fn test_scan_resumes_after_modifier() {
        // The "s" left over from "Millions" is not rescanned as a number.
        assert_eq!(raws("5 Millions 6"), vec!["5", "6"]);
    }

    #[test]
    fn test_comma_group_requires_three_digits() {
        assert_eq!(raws("1,2345"), vec!["1,234", "5"]);
    }

    #[test]
    fn test_no_numbers() {
        assert!(scan_numbers("no numeric content here").is_empty());
        assert!(scan_numbers("").is_empty());
    }
}
