// ============================================================================
// Decimal Errors
// Error types for decimal construction and arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur while constructing or operating on a [`Decimal`].
///
/// [`Decimal`]: crate::Decimal
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DecimalError {
    /// Input could not be parsed into a mantissa/scale pair.
    /// Carries the offending input.
    MalformedValue(String),
    /// Result exceeded the i128 mantissa range
    Overflow,
    /// Attempted division by zero
    DivisionByZero,
}

impl fmt::Display for DecimalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecimalError::MalformedValue(input) => {
                write!(f, "malformed value: could not parse {input:?} as a decimal")
            }
            DecimalError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded the mantissa range")
            }
            DecimalError::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for DecimalError {}

/// Result type alias for decimal operations
pub type DecimalResult<T> = Result<T, DecimalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            DecimalError::MalformedValue("12a".to_string()).to_string(),
            "malformed value: could not parse \"12a\" as a decimal"
        );
        assert_eq!(DecimalError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            DecimalError::Overflow.to_string(),
            "arithmetic overflow: result exceeded the mantissa range"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(DecimalError::Overflow, DecimalError::Overflow);
        assert_ne!(
            DecimalError::Overflow,
            DecimalError::MalformedValue(String::new())
        );
    }
}
