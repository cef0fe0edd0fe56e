//! String formatting utilities: padding, rounding, and CSV assembly.

use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use std::hash::BuildHasher;
use std::str::FromStr;

use crate::error::MolToolError;

/// Placeholder written for missing CSV cells.
pub const DEFAULT_NIL_STRING: &str = "N/A";

/// Pad a string with spaces to `width` characters.
///
/// Width is counted in `char`s, not display columns. Strings that already
/// have at least `width` characters are returned unchanged.
pub fn string_with_space(s: &str, width: usize, trailing: bool) -> String {
    let char_count = s.chars().count();
    if char_count >= width {
        return s.to_string();
    }
    let padding = " ".repeat(width - char_count);
    if trailing {
        format!("{}{}", s, padding)
    } else {
        format!("{}{}", padding, s)
    }
}

/// Same as [`string_with_space`] for anything printable.
pub fn to_print_with_space(item: impl Display, width: usize, trailing: bool) -> String {
    string_with_space(&item.to_string(), width, trailing)
}

/// Method form of [`string_with_space`].
pub trait WithSpace {
    fn with_space(&self, width: usize, trailing: bool) -> String;
}

impl WithSpace for str {
    fn with_space(&self, width: usize, trailing: bool) -> String {
        string_with_space(self, width, trailing)
    }
}

/// printf-style conversion used by [`srounded`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundOption {
    /// `f`: fixed-point
    #[default]
    Fixed,
    /// `e` / `E`: scientific with a signed two-digit exponent
    Exponent { upper: bool },
    /// `g` / `G`: the shorter of fixed and scientific, trailing zeros dropped
    General { upper: bool },
}

impl FromStr for RoundOption {
    type Err = MolToolError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "f" | "F" => Ok(RoundOption::Fixed),
            "e" => Ok(RoundOption::Exponent { upper: false }),
            "E" => Ok(RoundOption::Exponent { upper: true }),
            "g" => Ok(RoundOption::General { upper: false }),
            "G" => Ok(RoundOption::General { upper: true }),
            other => Err(MolToolError::InvalidInput(format!(
                "Unsupported format option: {} (use f, e or g)",
                other
            ))),
        }
    }
}

/// Render `value` with `digits` digits after the decimal point.
pub fn srounded(value: f64, digits: usize, option: RoundOption) -> String {
    if !value.is_finite() {
        return non_finite(value, option);
    }
    match option {
        RoundOption::Fixed => format!("{:.*}", digits, value),
        RoundOption::Exponent { upper } => exponent_form(value, digits, upper),
        RoundOption::General { upper } => general_form(value, digits, upper),
    }
}

/// [`srounded`] applied to every element.
pub fn srounded_all(values: &[f64], digits: usize, option: RoundOption) -> Vec<String> {
    values
        .iter()
        .map(|value| srounded(*value, digits, option))
        .collect()
}

/// [`srounded_all`] rendered as `[a, b, c]`.
pub fn srounded_string(values: &[f64], digits: usize, option: RoundOption) -> String {
    format!("[{}]", srounded_all(values, digits, option).join(", "))
}

fn non_finite(value: f64, option: RoundOption) -> String {
    let text = if value.is_nan() {
        "nan"
    } else if value.is_sign_negative() {
        "-inf"
    } else {
        "inf"
    };
    match option {
        RoundOption::Exponent { upper: true } | RoundOption::General { upper: true } => {
            text.to_uppercase()
        }
        _ => text.to_string(),
    }
}

/// Split Rust's `1.23e4` into mantissa and exponent.
fn split_exponent(value: f64, digits: usize) -> (String, i32) {
    let raw = format!("{:.*e}", digits, value);
    match raw.split_once('e') {
        Some((mantissa, exp)) => (mantissa.to_string(), exp.parse().unwrap_or(0)),
        None => (raw, 0),
    }
}

fn exponent_form(value: f64, digits: usize, upper: bool) -> String {
    let (mantissa, exp) = split_exponent(value, digits);
    join_exponent(&mantissa, exp, upper)
}

fn join_exponent(mantissa: &str, exp: i32, upper: bool) -> String {
    let sign = if exp < 0 { '-' } else { '+' };
    let marker = if upper { 'E' } else { 'e' };
    format!("{}{}{}{:02}", mantissa, marker, sign, exp.abs())
}

fn general_form(value: f64, digits: usize, upper: bool) -> String {
    let precision = digits.max(1);
    let (mantissa, exp) = split_exponent(value, precision - 1);
    if exp < -4 || exp >= precision as i32 {
        join_exponent(trim_zeros(&mantissa), exp, upper)
    } else {
        let decimals = (precision as i32 - 1 - exp).max(0) as usize;
        trim_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_zeros(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

/// A CSV row: anything that can look a cell up by column name.
pub trait RowLookup {
    fn cell(&self, key: &str) -> Option<String>;
}

impl<V: Display, S: BuildHasher> RowLookup for HashMap<String, V, S> {
    fn cell(&self, key: &str) -> Option<String> {
        self.get(key).map(|value| value.to_string())
    }
}

impl<V: Display> RowLookup for BTreeMap<String, V> {
    fn cell(&self, key: &str) -> Option<String> {
        self.get(key).map(|value| value.to_string())
    }
}

impl RowLookup for serde_json::Map<String, serde_json::Value> {
    fn cell(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            serde_json::Value::Null => None,
            serde_json::Value::String(text) => Some(text.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// Build CSV text: the header line, then one line per row.
///
/// Missing cells become `nil_string`. Values are written verbatim, so a
/// value containing a comma will shift the columns of its row.
pub fn create_csv_string<H, R>(header: &[H], rows: &[R], nil_string: &str) -> String
where
    H: AsRef<str>,
    R: RowLookup,
{
    let columns: Vec<&str> = header.iter().map(|h| h.as_ref()).collect();
    let mut csv = columns.join(",");
    csv.push('\n');
    for row in rows {
        let line: Vec<String> = columns
            .iter()
            .map(|key| row.cell(key).unwrap_or_else(|| nil_string.to_string()))
            .collect();
        csv.push_str(&line.join(","));
        csv.push('\n');
    }
    csv
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_with_space_trailing() {
        assert_eq!(string_with_space("ab", 5, true), "ab   ");
    }

    #[test]
    fn test_string_with_space_leading() {
        assert_eq!(string_with_space("ab", 5, false), "   ab");
    }

    #[test]
    fn test_string_with_space_longer_than_width() {
        assert_eq!(string_with_space("abcdef", 3, true), "abcdef");
        assert_eq!(string_with_space("abc", 3, false), "abc");
    }

    #[test]
    fn test_string_with_space_counts_chars() {
        assert_eq!(string_with_space("Å", 3, true), "Å  ");
    }

    #[test]
    fn test_with_space_and_to_print() {
        assert_eq!("C".with_space(3, false), "  C");
        assert_eq!(to_print_with_space(42, 4, true), "42  ");
    }

    #[test]
    fn test_srounded_fixed() {
        assert_eq!(srounded(3.14159, 2, RoundOption::Fixed), "3.14");
        assert_eq!(srounded(2.0, 0, RoundOption::Fixed), "2");
        assert_eq!(srounded(-0.126, 1, RoundOption::default()), "-0.1");
    }

    #[test]
    fn test_srounded_exponent() {
        assert_eq!(
            srounded(12345.678, 2, RoundOption::Exponent { upper: false }),
            "1.23e+04"
        );
        assert_eq!(
            srounded(0.00012, 1, RoundOption::Exponent { upper: true }),
            "1.2E-04"
        );
    }

    #[test]
    fn test_srounded_general() {
        let general = RoundOption::General { upper: false };
        assert_eq!(srounded(3.14159, 3, general), "3.14");
        assert_eq!(srounded(100.0, 3, general), "100");
        assert_eq!(srounded(1234567.0, 3, general), "1.23e+06");
        assert_eq!(srounded(0.00001234, 2, general), "1.2e-05");
    }

    #[test]
    fn test_srounded_non_finite() {
        assert_eq!(srounded(f64::NAN, 2, RoundOption::Fixed), "nan");
        assert_eq!(
            srounded(f64::NEG_INFINITY, 2, RoundOption::General { upper: true }),
            "-INF"
        );
    }

    #[test]
    fn test_srounded_string() {
        assert_eq!(
            srounded_string(&[1.0, 2.345], 1, RoundOption::Fixed),
            "[1.0, 2.3]"
        );
        assert_eq!(srounded_string(&[], 1, RoundOption::Fixed), "[]");
    }

    #[test]
    fn test_round_option_parse() {
        assert_eq!("f".parse::<RoundOption>().unwrap(), RoundOption::Fixed);
        assert_eq!(
            "E".parse::<RoundOption>().unwrap(),
            RoundOption::Exponent { upper: true }
        );
        assert!("x".parse::<RoundOption>().is_err());
    }

    #[test]
    fn test_csv_missing_key_uses_placeholder() {
        let mut row = HashMap::new();
        row.insert("a".to_string(), "1");
        let csv = create_csv_string(&["a", "b"], &[row], DEFAULT_NIL_STRING);
        assert_eq!(csv, "a,b\n1,N/A\n");
    }

    #[test]
    fn test_csv_custom_placeholder_and_order() {
        let mut first = BTreeMap::new();
        first.insert("y".to_string(), 2.5);
        let mut second = BTreeMap::new();
        second.insert("x".to_string(), 1.0);
        second.insert("y".to_string(), 3.0);
        let csv = create_csv_string(&["x", "y"], &[first, second], "-");
        assert_eq!(csv, "x,y\n-,2.5\n1,3\n");
    }

    #[test]
    fn test_csv_no_rows() {
        let rows: Vec<BTreeMap<String, String>> = Vec::new();
        assert_eq!(create_csv_string(&["a"], &rows, "N/A"), "a\n");
    }

    #[test]
    fn test_csv_json_rows() {
        let value = serde_json::json!({"name": "C1", "mass": 12, "note": null});
        let row = value.as_object().unwrap().clone();
        let csv = create_csv_string(&["name", "mass", "note"], &[row], "N/A");
        assert_eq!(csv, "name,mass,note\nC1,12,N/A\n");
    }
}
