//! Spelled-out digit lexicon.

/// Single-digit number words. Teens and compound forms ("twenty-one") are
/// deliberately not recognized.
const NUMBER_WORDS: &[(&str, &str)] = &[
    ("zero", "0"),
    ("one", "1"),
    ("two", "2"),
    ("three", "3"),
    ("four", "4"),
    ("five", "5"),
    ("six", "6"),
    ("seven", "7"),
    ("eight", "8"),
    ("nine", "9"),
];

/// Look up a spelled-out digit word, case-insensitively.
///
/// Returns the numeral as a string so it flows through the same value
/// interpretation path as literal numbers.
pub fn written_number(word: &str) -> Option<&'static str> {
    let word = word.trim().to_lowercase();
    NUMBER_WORDS
        .iter()
        .find(|(name, _)| *name == word)
        .map(|(_, digit)| *digit)
}
