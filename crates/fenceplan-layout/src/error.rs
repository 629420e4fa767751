//! Error types for the layout crate.
//!
//! The layout computation itself is total and never returns these. They are
//! produced by the opt-in strict validation of a plan, for callers that want
//! to reject degenerate input up front instead of computing with it.

use thiserror::Error;

/// Errors that can occur when a plan is validated strictly.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// The plan as a whole is inconsistent.
    #[error("Invalid plan: {0}")]
    InvalidPlan(String),

    /// A parameter validation error occurred.
    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),
}

/// Errors related to layout parameter validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A length that must be strictly positive is not.
    #[error("Parameter '{name}' must be greater than zero, got {value}")]
    NotPositive { name: String, value: f64 },

    /// A length that must not be negative is.
    #[error("Parameter '{name}' must not be negative, got {value}")]
    Negative { name: String, value: f64 },

    /// The gap tolerance band is inverted.
    #[error("Invalid gap range: minimum {min} exceeds maximum {max}")]
    InvertedGapRange { min: f64, max: f64 },
}

/// Result type alias for layout validation.
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Result type alias for parameter validation.
pub type ParameterResult<T> = Result<T, ParameterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_error_display() {
        let err = ParameterError::NotPositive {
            name: "panel_width".to_string(),
            value: 0.0,
        };
        assert_eq!(
            err.to_string(),
            "Parameter 'panel_width' must be greater than zero, got 0"
        );

        let err = ParameterError::InvertedGapRange {
            min: 20.0,
            max: 5.0,
        };
        assert_eq!(
            err.to_string(),
            "Invalid gap range: minimum 20 exceeds maximum 5"
        );
    }

    #[test]
    fn test_error_conversion() {
        let param_err = ParameterError::Negative {
            name: "min_gap".to_string(),
            value: -1.0,
        };
        let err: LayoutError = param_err.into();
        assert!(matches!(err, LayoutError::Parameter(_)));
        assert_eq!(
            err.to_string(),
            "Parameter error: Parameter 'min_gap' must not be negative, got -1"
        );
    }
}
