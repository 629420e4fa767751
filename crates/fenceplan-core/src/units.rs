//! Unit conversion utilities
//!
//! Every quantity the layout solver works with is in millimeters. Plan files
//! and form fields express lengths in millimeters, centimeters or meters;
//! conversion happens once at the boundary.
//!
//! Conversion is permissive: blank, malformed or non-finite input becomes 0
//! instead of an error, so a half-filled form never stops a recomputation.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length unit selectable by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthUnit {
    /// Millimeters (canonical)
    #[serde(rename = "mm")]
    Millimeter,
    /// Centimeters
    #[serde(rename = "cm")]
    Centimeter,
    /// Meters
    #[serde(rename = "m")]
    Meter,
}

impl Default for LengthUnit {
    fn default() -> Self {
        Self::Millimeter
    }
}

impl LengthUnit {
    /// Number of millimeters in one unit
    pub fn mm_per_unit(self) -> f64 {
        match self {
            Self::Millimeter => 1.0,
            Self::Centimeter => 10.0,
            Self::Meter => 1000.0,
        }
    }

    /// Short label ("mm", "cm" or "m")
    pub fn label(self) -> &'static str {
        match self {
            Self::Millimeter => "mm",
            Self::Centimeter => "cm",
            Self::Meter => "m",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LengthUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mm" | "millimeter" | "millimeters" => Ok(Self::Millimeter),
            "cm" | "centimeter" | "centimeters" => Ok(Self::Centimeter),
            "m" | "meter" | "meters" => Ok(Self::Meter),
            other => Err(Error::InvalidUnit(other.to_string())),
        }
    }
}

/// Replace NaN and infinities with zero
fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Convert a value expressed in `unit` into millimeters
pub fn to_canonical(value: f64, unit: LengthUnit) -> f64 {
    finite_or_zero(value) * unit.mm_per_unit()
}

/// Convert millimeters into `unit`
pub fn from_canonical(value_mm: f64, unit: LengthUnit) -> f64 {
    finite_or_zero(value_mm) / unit.mm_per_unit()
}

/// Parse a loosely typed numeric field
///
/// Surrounding whitespace is ignored. Blank text, text that is not a number,
/// and non-finite numbers all yield 0.
pub fn parse_quantity(input: &str) -> f64 {
    let input = input.trim();
    if input.is_empty() {
        return 0.0;
    }
    input.parse::<f64>().map(finite_or_zero).unwrap_or(0.0)
}

/// Parse a length field expressed in `unit` into millimeters
pub fn parse_length(input: &str, unit: LengthUnit) -> f64 {
    to_canonical(parse_quantity(input), unit)
}

/// Format a millimeter value for display in `unit`
///
/// * `value_mm` - Value in millimeters
/// * `unit` - Display unit
/// * `digits` - Number of decimal places
pub fn format_length(value_mm: f64, unit: LengthUnit, digits: usize) -> String {
    format!("{:.*} {}", digits, from_canonical(value_mm, unit), unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_factors() {
        assert_eq!(to_canonical(2.5, LengthUnit::Meter), 2500.0);
        assert_eq!(to_canonical(12.0, LengthUnit::Centimeter), 120.0);
        assert_eq!(to_canonical(830.0, LengthUnit::Millimeter), 830.0);
        assert_eq!(from_canonical(15000.0, LengthUnit::Meter), 15.0);
        assert_eq!(from_canonical(20.0, LengthUnit::Centimeter), 2.0);
    }

    #[test]
    fn test_non_finite_is_zero() {
        assert_eq!(to_canonical(f64::NAN, LengthUnit::Meter), 0.0);
        assert_eq!(to_canonical(f64::INFINITY, LengthUnit::Millimeter), 0.0);
        assert_eq!(from_canonical(f64::NEG_INFINITY, LengthUnit::Meter), 0.0);
    }

    #[test]
    fn test_parse_quantity_permissive() {
        assert_eq!(parse_quantity("2.5"), 2.5);
        assert_eq!(parse_quantity("  10  "), 10.0);
        assert_eq!(parse_quantity("1e3"), 1000.0);
        assert_eq!(parse_quantity(""), 0.0);
        assert_eq!(parse_quantity("   "), 0.0);
        assert_eq!(parse_quantity("abc"), 0.0);
        assert_eq!(parse_quantity("2,5"), 0.0);
        assert_eq!(parse_quantity("NaN"), 0.0);
        assert_eq!(parse_quantity("inf"), 0.0);
    }

    #[test]
    fn test_parse_length() {
        assert_eq!(parse_length("0.005", LengthUnit::Meter), 5.0);
        assert_eq!(parse_length("", LengthUnit::Meter), 0.0);
        assert_eq!(parse_length("-1", LengthUnit::Centimeter), -10.0);
    }

    #[test]
    fn test_format_length() {
        assert_eq!(format_length(2500.0, LengthUnit::Meter, 2), "2.50 m");
        assert_eq!(format_length(60.0, LengthUnit::Meter, 3), "0.060 m");
        assert_eq!(format_length(4000.0, LengthUnit::Centimeter, 0), "400 cm");
        assert_eq!(format_length(830.0, LengthUnit::Millimeter, 0), "830 mm");
    }

    #[test]
    fn test_unit_from_str() {
        assert_eq!("mm".parse::<LengthUnit>().unwrap(), LengthUnit::Millimeter);
        assert_eq!(" CM ".parse::<LengthUnit>().unwrap(), LengthUnit::Centimeter);
        assert_eq!("meters".parse::<LengthUnit>().unwrap(), LengthUnit::Meter);
        assert!("inch".parse::<LengthUnit>().is_err());
    }
}
