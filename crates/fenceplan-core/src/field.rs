//! Loosely typed numeric input fields
//!
//! Form fields and hand-edited plan files may hold a number, a numeric
//! string, or an empty string. [`FieldValue`] accepts all of them and
//! resolves to a well-typed `f64` before anything reaches the solver.

use crate::units::{parse_quantity, to_canonical, LengthUnit};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A numeric field as entered by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::Number(0.0)
    }
}

impl FieldValue {
    /// Numeric value, with anything unparseable treated as 0
    pub fn value(&self) -> f64 {
        match self {
            Self::Number(n) if n.is_finite() => *n,
            Self::Number(_) => 0.0,
            Self::Text(s) => parse_quantity(s),
        }
    }

    /// Value interpreted as a length in `unit`, converted to millimeters
    pub fn to_mm(&self, unit: LengthUnit) -> f64 {
        to_canonical(self.value(), unit)
    }

    /// The number the field holds, or `None` for blank or unparseable text
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n).filter(|n| n.is_finite()),
            Self::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        }
    }

    /// True when the field holds blank text
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(s) if s.trim().is_empty())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_and_text_agree() {
        let number = FieldValue::from(2.5);
        let text = FieldValue::from("2.5");
        assert_eq!(number.to_mm(LengthUnit::Meter), 2500.0);
        assert_eq!(text.to_mm(LengthUnit::Meter), 2500.0);
    }

    #[test]
    fn test_blank_and_garbage_are_zero() {
        assert_eq!(FieldValue::from("").value(), 0.0);
        assert!(FieldValue::from("  ").is_blank());
        assert_eq!(FieldValue::from("ten").value(), 0.0);
        assert_eq!(FieldValue::Number(f64::NAN).value(), 0.0);
        assert_eq!(FieldValue::default().to_mm(LengthUnit::Meter), 0.0);
    }

    #[test]
    fn test_as_number_keeps_only_numbers() {
        assert_eq!(FieldValue::from(" 3 ").as_number(), Some(3.0));
        assert_eq!(FieldValue::from(0.0).as_number(), Some(0.0));
        assert_eq!(FieldValue::from("abc").as_number(), None);
        assert_eq!(FieldValue::from("").as_number(), None);
        assert_eq!(FieldValue::Number(f64::INFINITY).as_number(), None);
    }

    #[test]
    fn test_deserialize_untagged() {
        let values: Vec<FieldValue> = serde_json::from_str(r#"[1.5, "2", ""]"#).unwrap();
        assert_eq!(values[0], FieldValue::Number(1.5));
        assert_eq!(values[1], FieldValue::Text("2".to_string()));
        assert!(values[2].is_blank());
    }
}
