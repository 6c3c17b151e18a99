// ============================================================================
// Money Decimal Library
// Locale-aware fixed-point decimal arithmetic for monetary values
// ============================================================================

//! # Money Decimal
//!
//! A fixed-point decimal value type for monetary and other precise
//! fractional quantities, free of binary floating-point rounding error.
//!
//! ## Features
//!
//! - **Scaled-integer representation** (`mantissa × 10^-scale`) with exact
//!   scale-aligned addition, subtraction and multiplication
//! - **Heterogeneous construction** from strings, integers, floats and
//!   booleans through one explicit conversion boundary
//! - **Locale-aware parsing and rendering**: prefix/suffix, thousands
//!   grouping, configurable radix point, fixed decimal places with
//!   round half away from zero
//! - **Process-wide default format** with explicit get/set accessors,
//!   snapshotted per instance at construction
//!
//! ## Example
//!
//! ```rust
//! use money_decimal::{CompareOp, Decimal, DecimalFormat, FormatOptions};
//!
//! // Parse with explicit locale separators
//! let format = DecimalFormat::new()
//!     .with_thousands_separator(".")
//!     .with_decimal_separator(",");
//! let price = Decimal::parse_with("1.652.238,8", format).unwrap();
//!
//! // Raw operands are coerced with the left operand's format
//! let total = price.add_value("0,2").unwrap();
//! assert_eq!(
//!     total.format_with(&FormatOptions::new().decimal_places(2)),
//!     "1.652.239,00"
//! );
//!
//! // Equality is structural on (mantissa, scale); ordering is numeric
//! let a = Decimal::parse("1.0").unwrap();
//! let b = Decimal::parse("1.00").unwrap();
//! assert!(!a.compare(CompareOp::Eq, &b));
//! assert!(a.compare(CompareOp::Ge, &b));
//! ```

pub mod decimal;
pub mod error;
pub mod format;
pub mod input;

// Re-exports for convenience
pub use decimal::{CompareOp, Decimal};
pub use error::{DecimalError, DecimalResult};
pub use format::{
    default_format, reset_default_format, set_default_format, DecimalFormat, FormatOptions,
};
pub use input::Input;
