// ============================================================================
// Construction Inputs
// Closed set of raw values accepted at every construction boundary
// ============================================================================

use crate::decimal::Decimal;

/// A raw value accepted by [`Decimal::parse`] and the `*_value` arithmetic
/// forms.
///
/// This is the single conversion boundary of the crate: every heterogeneous
/// operand is lifted into an `Input` and goes through the one parsing path.
/// Internal arithmetic only ever sees the canonical mantissa/scale pair.
///
/// [`Decimal::parse`]: crate::Decimal::parse
#[derive(Debug, Clone, Copy)]
pub enum Input<'a> {
    /// Absent value, parses to zero
    None,
    /// `false`/`true`, parsed as the integers 0/1
    Bool(bool),
    /// Integer, taken verbatim as a mantissa with scale 0
    Int(i64),
    /// Float, rendered to its shortest decimal string first; non-finite
    /// values are malformed
    Float(f64),
    /// String, parsed with the target format's separators
    Str(&'a str),
    /// Existing instance, copied structurally (no reparse)
    Decimal(&'a Decimal),
}

impl From<bool> for Input<'_> {
    fn from(value: bool) -> Self {
        Input::Bool(value)
    }
}

impl From<i32> for Input<'_> {
    fn from(value: i32) -> Self {
        Input::Int(value as i64)
    }
}

impl From<i64> for Input<'_> {
    fn from(value: i64) -> Self {
        Input::Int(value)
    }
}

impl From<f64> for Input<'_> {
    fn from(value: f64) -> Self {
        Input::Float(value)
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(value: &'a str) -> Self {
        Input::Str(value)
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(value: &'a String) -> Self {
        Input::Str(value.as_str())
    }
}

impl<'a> From<&'a Decimal> for Input<'a> {
    fn from(value: &'a Decimal) -> Self {
        Input::Decimal(value)
    }
}

impl<'a, T> From<Option<T>> for Input<'a>
where
    T: Into<Input<'a>>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Input::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_impls() {
        assert!(matches!(Input::from(true), Input::Bool(true)));
        assert!(matches!(Input::from(42i64), Input::Int(42)));
        assert!(matches!(Input::from(7i32), Input::Int(7)));
        assert!(matches!(Input::from(1.5f64), Input::Float(_)));
        assert!(matches!(Input::from("1.5"), Input::Str("1.5")));
        assert!(matches!(Input::from(None::<i64>), Input::None));
        assert!(matches!(Input::from(Some("2")), Input::Str("2")));
    }
}
