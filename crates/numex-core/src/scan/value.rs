//! Raw value interpretation: clean, parse, and scale.

use crate::models::{InterpretedValue, Modifier};

/// Convert a raw numeric string and its modifier into a scaled value.
///
/// Thousands separators are stripped; a value wrapped in matching
/// parentheses is negated. Returns `None` when the cleaned text does not
/// parse as a number — callers filter such records instead of failing.
pub fn interpret_value(raw_value: &str, modifier: Modifier) -> Option<InterpretedValue> {
    let cleaned = raw_value.replace(',', "");

    let negative = cleaned.starts_with('(') && cleaned.ends_with(')');
    let cleaned = if negative {
        format!("-{}", &cleaned[1..cleaned.len() - 1])
    } else {
        cleaned
    };

    let numeric: f64 = cleaned.trim().parse().ok()?;

    let scaled = match modifier {
        Modifier::Millions => numeric * 1_000_000.0,
        Modifier::Billions => numeric * 1_000_000_000.0,
        Modifier::Thousands => numeric * 1_000.0,
        Modifier::Percent => numeric / 100.0,
        Modifier::None => numeric,
    };

    if scaled.fract() == 0.0 && scaled.abs() <= i64::MAX as f64 {
        Some(InterpretedValue::Integer(scaled as i64))
    } else {
        Some(InterpretedValue::Decimal(scaled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn as_i64(value: Option<InterpretedValue>) -> i64 {
        match value {
            Some(InterpretedValue::Integer(n)) => n,
            other => panic!("expected integer, got {:?}", other),
        }
    }

    fn as_f64(value: Option<InterpretedValue>) -> f64 {
        match value {
            Some(InterpretedValue::Decimal(x)) => x,
            other => panic!("expected decimal, got {:?}", other),
        }
    }

    #[test]
    fn test_comma_handling() {
        assert_eq!(as_i64(interpret_value("33,848", Modifier::None)), 33_848);
    }

    #[test]
    fn test_millions_scale() {
        assert_eq!(
            as_i64(interpret_value("1,088.6", Modifier::Millions)),
            1_088_600_000
        );
    }

    #[test]
    fn test_billions_scale() {
        assert_eq!(
            as_i64(interpret_value("2.5", Modifier::Billions)),
            2_500_000_000
        );
    }

    #[test]
    fn test_thousands_scale() {
        assert_eq!(as_i64(interpret_value("12", Modifier::Thousands)), 12_000);
    }

    #[test]
    fn test_percent_scale() {
        assert_eq!(as_f64(interpret_value("2.0", Modifier::Percent)), 0.02);
    }

    #[test]
    fn test_parenthesized_negative() {
        assert_eq!(
            as_i64(interpret_value("(46.6)", Modifier::Millions)),
            -46_600_000
        );
        assert_eq!(as_f64(interpret_value("(364.7)", Modifier::None)), -364.7);
    }

    #[test]
    fn test_unbalanced_parens_do_not_parse() {
        assert_eq!(interpret_value("(46.6", Modifier::Millions), None);
        assert_eq!(interpret_value("46.6)", Modifier::Millions), None);
    }

    #[test]
    fn test_garbage_is_absent_not_an_error() {
        assert_eq!(interpret_value("", Modifier::None), None);
        assert_eq!(interpret_value("n/a", Modifier::None), None);
        assert_eq!(interpret_value("()", Modifier::None), None);
    }

    #[test]
    fn test_fractional_result_stays_decimal() {
        assert_eq!(as_f64(interpret_value("46.6", Modifier::None)), 46.6);
    }

    #[test]
    fn test_interpretation_is_deterministic() {
        let a = interpret_value("1,088.6", Modifier::Millions);
        let b = interpret_value("1,088.6", Modifier::Millions);
        assert_eq!(a, b);
    }
}
