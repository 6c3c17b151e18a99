// ============================================================================
// Decimal Format Configuration
// Locale settings for rendering and parsing decimal values
// ============================================================================

use parking_lot::RwLock;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Complete Format Record
// ============================================================================

/// Locale configuration attached to every [`Decimal`].
///
/// All fields have concrete values; the built-in defaults are an empty
/// prefix/suffix, no thousands grouping, `.` as the radix point, and no
/// fixed decimal-place width.
///
/// [`Decimal`]: crate::Decimal
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecimalFormat {
    /// String emitted before the rendered number (e.g. a currency symbol)
    pub prefix: String,

    /// Separator inserted every 3 digits of the integer part, if any
    pub thousands_separator: Option<String>,

    /// The radix point used when parsing and rendering
    pub decimal_separator: String,

    /// Fixed fractional width for rendering; `None` prints every
    /// significant digit with no padding
    pub decimal_places: Option<u32>,

    /// String emitted after the rendered number
    pub suffix: String,
}

impl Default for DecimalFormat {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            thousands_separator: None,
            decimal_separator: ".".to_string(),
            decimal_places: None,
            suffix: String::new(),
        }
    }
}

impl DecimalFormat {
    /// Create a format with the built-in defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the prefix
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Builder method: set the thousands separator
    pub fn with_thousands_separator(mut self, separator: impl Into<String>) -> Self {
        self.thousands_separator = Some(separator.into());
        self
    }

    /// Builder method: set the decimal separator
    pub fn with_decimal_separator(mut self, separator: impl Into<String>) -> Self {
        self.decimal_separator = separator.into();
        self
    }

    /// Builder method: set a fixed fractional width
    pub fn with_decimal_places(mut self, places: u32) -> Self {
        self.decimal_places = Some(places);
        self
    }

    /// Builder method: set the suffix
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Apply a partial override on top of this format, field by field.
    ///
    /// Fields absent from `options` keep their current value.
    pub fn merge(&self, options: &FormatOptions) -> DecimalFormat {
        DecimalFormat {
            prefix: options.prefix.clone().unwrap_or_else(|| self.prefix.clone()),
            thousands_separator: options
                .thousands_separator
                .clone()
                .or_else(|| self.thousands_separator.clone()),
            decimal_separator: options
                .decimal_separator
                .clone()
                .unwrap_or_else(|| self.decimal_separator.clone()),
            decimal_places: options.decimal_places.or(self.decimal_places),
            suffix: options.suffix.clone().unwrap_or_else(|| self.suffix.clone()),
        }
    }
}

// ============================================================================
// Partial Format Record (per-call overrides)
// ============================================================================

/// Partial format used to override a [`DecimalFormat`] field by field,
/// either per rendering call or when patching the process-wide defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatOptions {
    pub prefix: Option<String>,
    pub thousands_separator: Option<String>,
    pub decimal_separator: Option<String>,
    pub decimal_places: Option<u32>,
    pub suffix: Option<String>,
}

impl FormatOptions {
    /// Create an empty override record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: override the prefix
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Builder method: override the thousands separator
    pub fn thousands_separator(mut self, separator: impl Into<String>) -> Self {
        self.thousands_separator = Some(separator.into());
        self
    }

    /// Builder method: override the decimal separator
    pub fn decimal_separator(mut self, separator: impl Into<String>) -> Self {
        self.decimal_separator = Some(separator.into());
        self
    }

    /// Builder method: override the fractional width
    pub fn decimal_places(mut self, places: u32) -> Self {
        self.decimal_places = Some(places);
        self
    }

    /// Builder method: override the suffix
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }
}

// ============================================================================
// Process-Wide Default Format
// ============================================================================

// None means "built-in defaults"; set_default_format stores a patched copy.
static DEFAULT_FORMAT: RwLock<Option<DecimalFormat>> = RwLock::new(None);

/// Snapshot of the process-wide default format.
///
/// Consulted once per construction when no explicit format is supplied;
/// instances never re-read it afterwards.
pub fn default_format() -> DecimalFormat {
    DEFAULT_FORMAT.read().clone().unwrap_or_default()
}

/// Replace the process-wide default format.
///
/// The partial record is applied on top of the BUILT-IN defaults, not on
/// top of the previous global value, so unset fields always fall back to
/// the library defaults.
pub fn set_default_format(options: FormatOptions) {
    *DEFAULT_FORMAT.write() = Some(DecimalFormat::default().merge(&options));
}

/// Restore the built-in default format.
pub fn reset_default_format() {
    *DEFAULT_FORMAT.write() = None;
}

// ============================================================================
// Digit Grouping
// ============================================================================

/// Insert `separator` every 3 digits from the right of an unsigned digit
/// string. The fractional part is never grouped.
pub(crate) fn group_digits(digits: &str, separator: &str) -> String {
    if separator.is_empty() {
        return digits.to_string();
    }

    let len = digits.len();
    let mut out = String::with_capacity(len + (len / 3) * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}
