//! Extracted number records and their normalized magnitude modifiers.

use serde::{Deserialize, Serialize};

/// Canonical magnitude modifier scaling a raw numeric string to its
/// real-world value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Modifier {
    /// Value is expressed in millions.
    Millions,
    /// Value is expressed in billions.
    Billions,
    /// Value is expressed in thousands.
    Thousands,
    /// Value is a percentage.
    Percent,
    /// No magnitude modifier.
    #[default]
    None,
}

impl Modifier {
    /// Normalize free-text unit words to a canonical modifier.
    ///
    /// Total over arbitrary input: anything outside the known synonym sets
    /// (including the empty string) maps to [`Modifier::None`].
    pub fn normalize(text: &str) -> Self {
        match text.trim().to_lowercase().as_str() {
            "million" | "millions" | "m" | "$m" => Modifier::Millions,
            "billion" | "billions" | "b" => Modifier::Billions,
            "thousand" | "thousands" | "k" => Modifier::Thousands,
            "percent" | "%" => Modifier::Percent,
            _ => Modifier::None,
        }
    }

    /// Canonical string form, identical to the serialized representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Modifier::Millions => "Millions",
            Modifier::Billions => "Billions",
            Modifier::Thousands => "Thousands",
            Modifier::Percent => "Percent",
            Modifier::None => "None",
        }
    }
}

impl std::fmt::Display for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully scaled numeric result of applying a modifier to a raw value.
///
/// Serialized untagged, so JSON output is the bare number: an integer when
/// the scaled result has no fractional part, a float otherwise.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InterpretedValue {
    /// Scaled result with no fractional part.
    Integer(i64),
    /// Scaled result with a fractional part.
    Decimal(f64),
}

impl InterpretedValue {
    /// The value as an `f64`, for magnitude comparisons.
    pub fn as_f64(&self) -> f64 {
        match *self {
            InterpretedValue::Integer(n) => n as f64,
            InterpretedValue::Decimal(x) => x,
        }
    }
}

impl PartialEq for InterpretedValue {
    fn eq(&self, other: &Self) -> bool {
        self.as_f64() == other.as_f64()
    }
}

impl PartialOrd for InterpretedValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.as_f64().partial_cmp(&other.as_f64())
    }
}

impl std::fmt::Display for InterpretedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            InterpretedValue::Integer(n) => write!(f, "{}", n),
            InterpretedValue::Decimal(x) => write!(f, "{}", x),
        }
    }
}

/// A numeric fact extracted from a document page.
///
/// Created once per scan match, normalized immediately, and never mutated
/// afterwards; the pipeline only filters whole batches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedNumber {
    /// The number exactly as it appeared, commas and parentheses included.
    pub raw_value: String,

    /// Human-readable label or surrounding-text snippet; never empty.
    pub context: String,

    /// Canonical magnitude modifier.
    pub modifier: Modifier,

    /// Fully scaled numeric value, absent when `raw_value` did not parse.
    pub interpreted_value: Option<InterpretedValue>,

    /// Source page, 1-indexed.
    pub page_number: u32,

    /// Resolved table title, empty for numbers found in running text.
    pub table_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_synonyms() {
        assert_eq!(Modifier::normalize("million"), Modifier::Millions);
        assert_eq!(Modifier::normalize("MILLION"), Modifier::Millions);
        assert_eq!(Modifier::normalize("M"), Modifier::Millions);
        assert_eq!(Modifier::normalize("$m"), Modifier::Millions);
        assert_eq!(Modifier::normalize("billions"), Modifier::Billions);
        assert_eq!(Modifier::normalize("b"), Modifier::Billions);
        assert_eq!(Modifier::normalize("Thousand"), Modifier::Thousands);
        assert_eq!(Modifier::normalize("k"), Modifier::Thousands);
        assert_eq!(Modifier::normalize("%"), Modifier::Percent);
        assert_eq!(Modifier::normalize("percent"), Modifier::Percent);
    }

    #[test]
    fn test_normalize_is_total() {
        assert_eq!(Modifier::normalize(""), Modifier::None);
        assert_eq!(Modifier::normalize("   "), Modifier::None);
        assert_eq!(Modifier::normalize("dollars"), Modifier::None);
        assert_eq!(Modifier::normalize("mm"), Modifier::None);
        assert_eq!(Modifier::normalize("  Million  "), Modifier::Millions);
    }

    #[test]
    fn test_modifier_serializes_as_canonical_string() {
        assert_eq!(
            serde_json::to_string(&Modifier::Millions).unwrap(),
            "\"Millions\""
        );
        assert_eq!(serde_json::to_string(&Modifier::None).unwrap(), "\"None\"");
    }

    #[test]
    fn test_interpreted_value_serializes_untagged() {
        assert_eq!(
            serde_json::to_string(&InterpretedValue::Integer(28_239_200_000)).unwrap(),
            "28239200000"
        );
        assert_eq!(
            serde_json::to_string(&InterpretedValue::Decimal(0.02)).unwrap(),
            "0.02"
        );
    }

    #[test]
    fn test_interpreted_value_ordering() {
        let a = InterpretedValue::Integer(1_000);
        let b = InterpretedValue::Decimal(999.5);
        assert!(a > b);
        assert_eq!(InterpretedValue::Integer(2), InterpretedValue::Decimal(2.0));
    }

    #[test]
    fn test_record_field_order_in_json() {
        let record = ExtractedNumber {
            raw_value: "1,088.6".to_string(),
            context: "Total Revenue FY 2023".to_string(),
            modifier: Modifier::Millions,
            interpreted_value: Some(InterpretedValue::Integer(1_088_600_000)),
            page_number: 9,
            table_name: String::new(),
        };

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            "{\"raw_value\":\"1,088.6\",\"context\":\"Total Revenue FY 2023\",\
             \"modifier\":\"Millions\",\"interpreted_value\":1088600000,\
             \"page_number\":9,\"table_name\":\"\"}"
        );
    }
}
