//! Input coercion and shared validation helpers.
//!
//! Raw columns arrive as text cells or JSON values. Coercion is a separate,
//! explicit step: [`to_numeric`] and [`json_to_numeric`] drop anything that
//! does not read as a finite number, and [`require_numeric`] turns an empty
//! result into [`StatsError::NoNumericData`]. Engine routines only ever see
//! `&[f64]`.

use crate::stats::error::{StatsError, StatsResult};
use serde_json::Value;

/// Parse the leading decimal literal of a cell, the way spreadsheet-style
/// inputs are usually read: `"12.5kg"` reads as `12.5`, `"kg"` as nothing.
///
/// Leading whitespace is skipped. Non-finite results are rejected.
pub fn parse_numeric(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut j = frac_start;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        mantissa_digits += j - frac_start;
        end = j;
    }

    if mantissa_digits == 0 {
        return None;
    }

    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut j = end + 1;
        if j < len && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            end = j;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Coerce text cells into a sample, silently dropping non-numeric entries.
pub fn to_numeric<I, S>(raw: I) -> Vec<f64>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .filter_map(|cell| parse_numeric(cell.as_ref()))
        .collect()
}

/// Coerce JSON cells into a sample.
///
/// Numbers pass through, strings are parsed with [`parse_numeric`], and
/// everything else (null, booleans, arrays, objects) is dropped.
pub fn json_to_numeric(raw: &[Value]) -> Vec<f64> {
    raw.iter()
        .filter_map(|cell| match cell {
            Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
            Value::String(s) => parse_numeric(s),
            _ => None,
        })
        .collect()
}

/// Validate a coerced sample: it must contain at least one value.
pub fn require_numeric(values: Vec<f64>, context: &str) -> StatsResult<Vec<f64>> {
    if values.is_empty() {
        return Err(StatsError::NoNumericData {
            context: context.to_string(),
        });
    }
    Ok(values)
}

pub(crate) fn ensure_non_empty(xs: &[f64], context: &str) -> StatsResult<()> {
    if xs.is_empty() {
        return Err(StatsError::empty(context));
    }
    Ok(())
}

pub(crate) fn ensure_min_len(xs: &[f64], required: usize, context: &str) -> StatsResult<()> {
    ensure_non_empty(xs, context)?;
    if xs.len() < required {
        return Err(StatsError::insufficient(required, xs.len(), context));
    }
    Ok(())
}

pub(crate) fn ensure_same_len(a: &[f64], b: &[f64], context: &str) -> StatsResult<()> {
    if a.len() != b.len() {
        return Err(StatsError::length_mismatch(a.len(), b.len(), context));
    }
    Ok(())
}

/// Ascending copy of a sample; the input is never reordered.
pub(crate) fn sorted_copy(xs: &[f64]) -> Vec<f64> {
    let mut sorted = xs.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_numeric_prefix() {
        assert_eq!(parse_numeric("12.5"), Some(12.5));
        assert_eq!(parse_numeric("  -3"), Some(-3.0));
        assert_eq!(parse_numeric("12.5kg"), Some(12.5));
        assert_eq!(parse_numeric(".5"), Some(0.5));
        assert_eq!(parse_numeric("5."), Some(5.0));
        assert_eq!(parse_numeric("1e3"), Some(1000.0));
        assert_eq!(parse_numeric("2e"), Some(2.0));
        assert_eq!(parse_numeric("+7E-1x"), Some(0.7));
    }

    #[test]
    fn test_parse_numeric_rejects() {
        assert_eq!(parse_numeric(""), None);
        assert_eq!(parse_numeric("abc"), None);
        assert_eq!(parse_numeric("-"), None);
        assert_eq!(parse_numeric("."), None);
        assert_eq!(parse_numeric("NaN"), None);
        assert_eq!(parse_numeric("Infinity"), None);
        assert_eq!(parse_numeric("1e999"), None);
    }

    #[test]
    fn test_to_numeric_filters() {
        let cells = ["1", "", "two", "3.5", " 4 "];
        assert_eq!(to_numeric(cells), vec![1.0, 3.5, 4.0]);
    }

    #[test]
    fn test_json_to_numeric() {
        let cells = vec![json!(1), json!("2.5"), json!(null), json!(true), json!("x"), json!(-4.0)];
        assert_eq!(json_to_numeric(&cells), vec![1.0, 2.5, -4.0]);
    }

    #[test]
    fn test_require_numeric() {
        assert!(require_numeric(vec![1.0], "x").is_ok());
        let err = require_numeric(Vec::new(), "column x").unwrap_err();
        assert!(matches!(err, StatsError::NoNumericData { .. }));
    }

    #[test]
    fn test_ensure_helpers() {
        assert!(matches!(
            ensure_min_len(&[], 2, "t"),
            Err(StatsError::EmptyData { .. })
        ));
        assert!(matches!(
            ensure_min_len(&[1.0], 2, "t"),
            Err(StatsError::InsufficientData { required: 2, got: 1, .. })
        ));
        assert!(matches!(
            ensure_same_len(&[1.0], &[1.0, 2.0], "t"),
            Err(StatsError::LengthMismatch { expected: 1, got: 2, .. })
        ));
    }
}
