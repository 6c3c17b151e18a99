// ============================================================================
// Decimal Value Type
// Scaled-integer decimal with locale-aware parsing and rendering
// ============================================================================

use crate::error::{DecimalError, DecimalResult};
use crate::format::{self, DecimalFormat, FormatOptions};
use crate::input::Input;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Fixed-point decimal value.
///
/// Internally stores `mantissa × 10^-scale` as an i128 mantissa and a u32
/// scale, together with the locale format the instance was constructed
/// with. `12.34` is held as mantissa `1234`, scale `2`.
///
/// The fractional digit count of the input is recorded verbatim: `"1.00"`
/// parses to mantissa `100`, scale `2`. Trailing fractional zeros are only
/// trimmed when rendering, so `"1.0"` and `"1.00"` are distinct under
/// structural equality while comparing equal under the numeric ordering
/// operators.
///
/// # Example
/// ```ignore
/// use money_decimal::{Decimal, FormatOptions};
///
/// let price = Decimal::parse("1652238.8")?;
/// let options = FormatOptions::new()
///     .thousands_separator(",")
///     .decimal_places(2);
/// assert_eq!(price.format_with(&options), "1,652,238.80");
/// ```
#[derive(Debug, Clone)]
pub struct Decimal {
    mantissa: i128,
    scale: u32,
    format: DecimalFormat,
}

/// Closed set of comparison operators accepted by [`Decimal::compare`].
///
/// `Eq`/`Ne` compare the stored `(mantissa, scale)` pair structurally; the
/// ordering operators compare the represented numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
}

// ============================================================================
// Scale Helpers
// ============================================================================

/// Result scale for division, trimmed down afterwards
const DIV_SCALE: u32 = 12;

#[inline]
fn pow10(n: u32) -> DecimalResult<i128> {
    10i128.checked_pow(n).ok_or(DecimalError::Overflow)
}

/// Bring two values to a common scale by scaling up the smaller-scale
/// mantissa. Returns the adjusted mantissas and the shared scale.
fn align(a: &Decimal, b: &Decimal) -> DecimalResult<(i128, i128, u32)> {
    match a.scale.cmp(&b.scale) {
        Ordering::Equal => Ok((a.mantissa, b.mantissa, a.scale)),
        Ordering::Less => {
            let factor = pow10(b.scale - a.scale)?;
            let ma = a
                .mantissa
                .checked_mul(factor)
                .ok_or(DecimalError::Overflow)?;
            Ok((ma, b.mantissa, b.scale))
        }
        Ordering::Greater => {
            let factor = pow10(a.scale - b.scale)?;
            let mb = b
                .mantissa
                .checked_mul(factor)
                .ok_or(DecimalError::Overflow)?;
            Ok((a.mantissa, mb, a.scale))
        }
    }
}

/// Rescale a mantissa down to `places` fractional digits with round half
/// away from zero. No-op when `places >= scale`.
fn rescale_round(mantissa: i128, scale: u32, places: u32) -> (i128, u32) {
    if places >= scale {
        return (mantissa, scale);
    }
    match 10i128.checked_pow(scale - places) {
        Some(divisor) => {
            let quotient = mantissa / divisor;
            let remainder = mantissa % divisor;
            let rounded = if remainder.unsigned_abs() * 2 >= divisor as u128 {
                if mantissa < 0 {
                    quotient - 1
                } else {
                    quotient + 1
                }
            } else {
                quotient
            };
            (rounded, places)
        }
        // The divisor exceeds any representable mantissa, everything rounds
        // to zero.
        None => (0, places),
    }
}

/// Split an absolute mantissa into its integer digit string and its
/// fractional digit string zero-padded to width `scale` (untrimmed).
fn split_digits(abs: u128, scale: u32) -> (String, String) {
    if scale == 0 {
        return (abs.to_string(), String::new());
    }
    match 10u128.checked_pow(scale) {
        Some(divisor) => (
            (abs / divisor).to_string(),
            format!("{:0>width$}", abs % divisor, width = scale as usize),
        ),
        // scale exceeds the mantissa's digit capacity, the value is all
        // fraction.
        None => (
            "0".to_string(),
            format!("{:0>width$}", abs, width = scale as usize),
        ),
    }
}

fn trim_trailing_zeros(mut digits: String) -> String {
    while digits.ends_with('0') {
        digits.pop();
    }
    digits
}

// ============================================================================
// Parsing
// ============================================================================

fn malformed(raw: &str) -> DecimalError {
    DecimalError::MalformedValue(raw.to_string())
}

/// Integer piece must be a canonical base-10 integer: optional leading `-`,
/// at least one digit, no `+`, no leading zeros (except `0` itself).
fn check_integer_piece(piece: &str) -> bool {
    let digits = piece.strip_prefix('-').unwrap_or(piece);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return false;
    }
    true
}

/// Strip a thousands separator from a grouped integer piece, validating the
///// grouping: first group 1-3 digits, every following group exactly 3.
fn ungroup(piece: &str, separator: &str) -> Option<String> {
    let (sign, body) = match piece.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", piece),
    };

    let mut groups = body.split(separator);
    let first = groups.next()?;
    if first.is_empty() || first.len() > 3 || !first.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let mut digits = String::with_capacity(piece.len());
    digits.push_str(sign);
    digits.push_str(first);
    for group in groups {
        if group.len() != 3 || !group.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.push_str(group);
    }
    Some(digits)
}

fn parse_str(raw: &str, format: &DecimalFormat) -> DecimalResult<(i128, u32)> {
    if raw.is_empty() {
        return Ok((0, 0));
    }

    let separator = format.decimal_separator.as_str();
    let (int_piece, frac_piece) = if separator.is_empty() {
        (raw, None)
    } else {
        let mut pieces = raw.splitn(3, separator);
        let int_piece = pieces.next().unwrap_or("");
        let frac_piece = pieces.next();
        if pieces.next().is_some() {
            // more than one decimal separator
            return Err(malformed(raw));
        }
        (int_piece, frac_piece)
    };

    let mut int_digits = int_piece.to_string();
    if let Some(thousands) = format
        .thousands_separator
        .as_deref()
        .filter(|s| !s.is_empty())
    {
        if frac_piece.is_some_and(|piece| piece.contains(thousands)) {
            return Err(malformed(raw));
        }
        if int_piece.contains(thousands) {
            int_digits = ungroup(int_piece, thousands).ok_or_else(|| malformed(raw))?;
        }
    }

    if !check_integer_piece(&int_digits) {
        return Err(malformed(raw));
    }

    let fraction = frac_piece.unwrap_or("");
    if !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed(raw));
    }
    let scale = fraction.len() as u32;

    let (negative, abs_digits) = match int_digits.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, int_digits.as_str()),
    };

    // Concatenate integer and fractional digits into the mantissa; i128
    // overflow surfaces as a malformed value.
    let concatenated = format!("{abs_digits}{fraction}");
    let magnitude: i128 = concatenated.parse().map_err(|_| malformed(raw))?;
    let mantissa = if negative { -magnitude } else { magnitude };

    Ok((mantissa, scale))
}

fn parse_float(value: f64) -> DecimalResult<(i128, u32)> {
    if !value.is_finite() {
        return Err(DecimalError::MalformedValue(value.to_string()));
    }
    if value == 0.0 {
        return Ok((0, 0));
    }
    // Rust's float Display always yields plain decimal notation with a `.`
    // radix point, so the string path applies with the built-in format.
    parse_str(&value.to_string(), &DecimalFormat::default())
}

// ============================================================================
// Construction
// ============================================================================

impl Decimal {
    /// Create from a raw mantissa/scale pair, adopting the process-wide
    /// default format.
    pub fn new(mantissa: i128, scale: u32) -> Self {
        Self {
            mantissa,
            scale,
            format: format::default_format(),
        }
    }

    /// The zero value (mantissa 0, scale 0).
    pub fn zero() -> Self {
        Self::new(0, 0)
    }

    /// Parse a raw input with the process-wide default format.
    ///
    /// Accepts anything convertible to [`Input`]: strings, integers,
    /// floats, booleans, existing instances, or an absent value. Empty
    /// strings, numeric zero, `false` and `None` all produce the zero
    /// value.
    ///
    /// A configured `prefix`/`suffix` is NOT stripped from string input;
    /// callers must remove currency symbols before parsing.
    ///
    /// # Errors
    /// Returns `MalformedValue` when a string cannot be reduced to a valid
    /// mantissa/scale pair: more than one decimal separator, inconsistent
    /// thousands grouping, a non-canonical integer part (leading `+`,
    /// leading zeros, stray characters), non-digit fractional characters,
    /// or a mantissa beyond the i128 range.
    pub fn parse<'a>(input: impl Into<Input<'a>>) -> DecimalResult<Self> {
        Self::parse_with(input, format::default_format())
    }

    /// Parse a raw input with an explicit format.
    ///
    /// The format supplies the separators used for string parsing and is
    /// attached to the resulting instance.
    pub fn parse_with<'a>(
        input: impl Into<Input<'a>>,
        format: DecimalFormat,
    ) -> DecimalResult<Self> {
        let (mantissa, scale) = match input.into() {
            Input::None => (0, 0),
            Input::Bool(value) => (value as i128, 0),
            Input::Int(value) => (value as i128, 0),
            Input::Float(value) => parse_float(value)?,
            Input::Str(value) => parse_str(value, &format)?,
            // structural copy, not a reparse
            Input::Decimal(value) => (value.mantissa, value.scale),
        };
        Ok(Self {
            mantissa,
            scale,
            format,
        })
    }

    /// `parse` with errors collapsed to `false`.
    pub fn is_valid<'a>(input: impl Into<Input<'a>>) -> bool {
        Self::parse(input).is_ok()
    }

    /// `parse_with` with errors collapsed to `false`.
    pub fn is_valid_with<'a>(input: impl Into<Input<'a>>, format: DecimalFormat) -> bool {
        Self::parse_with(input, format).is_ok()
    }

    /// Adopt a different format, keeping the value.
    pub fn with_format(mut self, format: DecimalFormat) -> Self {
        self.format = format;
        self
    }

    /// New instance with the same format, different value.
    fn derive(&self, mantissa: i128, scale: u32) -> Decimal {
        Decimal {
            mantissa,
            scale,
            format: self.format.clone(),
        }
    }
}

// ============================================================================
// Accessors
// ============================================================================

impl Decimal {
    /// The decimal value with its decimal point removed.
    #[inline]
    pub fn mantissa(&self) -> i128 {
        self.mantissa
    }

    /// Number of digits after the decimal point.
    #[inline]
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// The format attached at construction time.
    #[inline]
    pub fn format(&self) -> &DecimalFormat {
        &self.format
    }

    /// Check if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.mantissa == 0
    }

    /// Check if the value is positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.mantissa > 0
    }

    /// Check if the value is negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.mantissa < 0
    }

    /// The represented value as an f64 (`mantissa / 10^scale`).
    ///
    /// Values whose mantissa exceeds f64's exact-integer range lose
    /// precision; callers needing exactness use the string form.
    pub fn to_number(&self) -> f64 {
        self.mantissa as f64 / 10f64.powi(self.scale as i32)
    }
}

// ============================================================================
// Arithmetic
// ============================================================================

impl Decimal {
    /// Checked addition after scale alignment. Result scale is
    /// `max(scale_a, scale_b)`; the format is copied from `self`.
    ///
    /// # Errors
    /// Returns `Overflow` if alignment or the sum exceeds the i128 range.
    pub fn checked_add(&self, rhs: &Decimal) -> DecimalResult<Decimal> {
        let (ma, mb, scale) = align(self, rhs)?;
        let mantissa = ma.checked_add(mb).ok_or(DecimalError::Overflow)?;
        Ok(self.derive(mantissa, scale))
    }

    /// Checked subtraction: addition of the right operand with its mantissa
    /// sign flipped on a copy. The right operand is never mutated.
    ///
    /// # Errors
    /// Returns `Overflow` if alignment or the difference exceeds the i128
    /// range.
    pub fn checked_sub(&self, rhs: &Decimal) -> DecimalResult<Decimal> {
        let (ma, mb, scale) = align(self, rhs)?;
        let mantissa = ma.checked_sub(mb).ok_or(DecimalError::Overflow)?;
        Ok(self.derive(mantissa, scale))
    }

    /// Checked multiplication. Result mantissa is `ma * mb`, result scale
    /// is `scale_a + scale_b` (standard fixed-point semantics).
    ///
    /// # Errors
    /// Returns `Overflow` if the product exceeds the i128 range.
    pub fn checked_mul(&self, rhs: &Decimal) -> DecimalResult<Decimal> {
        let mantissa = self
            .mantissa
            .checked_mul(rhs.mantissa)
            .ok_or(DecimalError::Overflow)?;
        let scale = self
            .scale
            .checked_add(rhs.scale)
            .ok_or(DecimalError::Overflow)?;
        Ok(self.derive(mantissa, scale))
    }

    /// Checked division. The quotient is computed at 12 fractional digits
    /// with round half away from zero, then trailing zeros are trimmed off
    /// the result.
    ///
    /// # Errors
    /// Returns `DivisionByZero` for a zero divisor and `Overflow` if an
    /// intermediate exceeds the i128 range.
    pub fn checked_div(&self, rhs: &Decimal) -> DecimalResult<Decimal> {
        if rhs.mantissa == 0 {
            return Err(DecimalError::DivisionByZero);
        }

        // value = ma * 10^(sb + DIV_SCALE) / (mb * 10^sa), with the common
        // power of ten cancelled first.
        let num_exp = rhs
            .scale
            .checked_add(DIV_SCALE)
            .ok_or(DecimalError::Overflow)?;
        let den_exp = self.scale;
        let common = num_exp.min(den_exp);

        let numerator = self
            .mantissa
            .checked_mul(pow10(num_exp - common)?)
            .ok_or(DecimalError::Overflow)?;
        let denominator = rhs
            .mantissa
            .checked_mul(pow10(den_exp - common)?)
            .ok_or(DecimalError::Overflow)?;

        let quotient = numerator / denominator;
        let remainder = numerator % denominator;
        let mut mantissa = if remainder.unsigned_abs() * 2 >= denominator.unsigned_abs() {
            // round half away from zero, in the sign of the exact quotient
            if (numerator < 0) != (denominator < 0) {
                quotient - 1
            } else {
                quotient + 1
            }
        } else {
            quotient
        };

        let mut scale = DIV_SCALE;
        while mantissa != 0 && scale > 0 && mantissa % 10 == 0 {
            mantissa /= 10;
            scale -= 1;
        }
        if mantissa == 0 {
            scale = 0;
        }
        Ok(self.derive(mantissa, scale))
    }

    /// Pure addition. Panics on overflow - use `checked_add` in production.
    pub fn add(&self, rhs: &Decimal) -> Decimal {
        self.checked_add(rhs).expect("decimal addition overflow")
    }

    /// Pure subtraction. Panics on overflow - use `checked_sub` in
    /// production.
    pub fn sub(&self, rhs: &Decimal) -> Decimal {
        self.checked_sub(rhs).expect("decimal subtraction overflow")
    }

    /// Pure multiplication. Panics on overflow - use `checked_mul` in
    /// production.
    pub fn mul(&self, rhs: &Decimal) -> Decimal {
        self.checked_mul(rhs)
            .expect("decimal multiplication overflow")
    }

    /// Pure division. Panics on a zero divisor or overflow - use
    /// `checked_div` in production.
    pub fn div(&self, rhs: &Decimal) -> Decimal {
        self.checked_div(rhs)
            .expect("decimal division by zero or overflow")
    }

    /// In-place addition; returns `self` for chaining.
    pub fn add_mut(&mut self, rhs: &Decimal) -> &mut Self {
        let result = self.checked_add(rhs).expect("decimal addition overflow");
        self.mantissa = result.mantissa;
        self.scale = result.scale;
        self
    }

    /// In-place subtraction; returns `self` for chaining.
    pub fn sub_mut(&mut self, rhs: &Decimal) -> &mut Self {
        let result = self.checked_sub(rhs).expect("decimal subtraction overflow");
        self.mantissa = result.mantissa;
        self.scale = result.scale;
        self
    }

    /// In-place multiplication; returns `self` for chaining.
    pub fn mul_mut(&mut self, rhs: &Decimal) -> &mut Self {
        let result = self
            .checked_mul(rhs)
            .expect("decimal multiplication overflow");
        self.mantissa = result.mantissa;
        self.scale = result.scale;
        self
    }

    /// In-place division; returns `self` for chaining.
    pub fn div_mut(&mut self, rhs: &Decimal) -> &mut Self {
        let result = self
            .checked_div(rhs)
            .expect("decimal division by zero or overflow");
        self.mantissa = result.mantissa;
        self.scale = result.scale;
        self
    }

    /// Add a raw right operand, coercing it through [`Input`] with this
    /// instance's format.
    ///
    /// # Errors
    /// Propagates `MalformedValue` from coercion and `Overflow` from the
    /// addition.
    pub fn add_value<'a>(&self, rhs: impl Into<Input<'a>>) -> DecimalResult<Decimal> {
        let rhs = Decimal::parse_with(rhs, self.format.clone())?;
        self.checked_add(&rhs)
    }

    /// Subtract a raw right operand, coercing it through [`Input`] with
    /// this instance's format.
    pub fn sub_value<'a>(&self, rhs: impl Into<Input<'a>>) -> DecimalResult<Decimal> {
        let rhs = Decimal::parse_with(rhs, self.format.clone())?;
        self.checked_sub(&rhs)
    }

    /// Multiply by a raw right operand, coercing it through [`Input`] with
    /// this instance's format.
    pub fn mul_value<'a>(&self, rhs: impl Into<Input<'a>>) -> DecimalResult<Decimal> {
        let rhs = Decimal::parse_with(rhs, self.format.clone())?;
        self.checked_mul(&rhs)
    }

    /// Divide by a raw right operand, coercing it through [`Input`] with
    /// this instance's format.
    pub fn div_value<'a>(&self, rhs: impl Into<Input<'a>>) -> DecimalResult<Decimal> {
        let rhs = Decimal::parse_with(rhs, self.format.clone())?;
        self.checked_div(&rhs)
    }
}

// ============================================================================
// Comparison
// ============================================================================

impl Decimal {
    /// Apply a comparison operator.
    ///
    /// `Eq`/`Ne` are structural on the `(mantissa, scale)` pair: `1.0` and
    /// `1.00` are NOT equal. The ordering operators compare the represented
    /// numeric value, so the same pair satisfies both `Ge` and `Le`.
    pub fn compare(&self, op: CompareOp, other: &Decimal) -> bool {
        match op {
            CompareOp::Eq => self == other,
            CompareOp::Ne => self != other,
            CompareOp::Gt => self.numeric_cmp(other) == Ordering::Greater,
            CompareOp::Ge => self.numeric_cmp(other) != Ordering::Less,
            CompareOp::Lt => self.numeric_cmp(other) == Ordering::Less,
            CompareOp::Le => self.numeric_cmp(other) != Ordering::Greater,
        }
    }

    /// Compare the represented numeric values.
    ///
    /// Uses exact scale-aligned integer comparison; falls back to f64 only
    /// when alignment would overflow the mantissa range.
    pub fn numeric_cmp(&self, other: &Decimal) -> Ordering {
        if self.scale == other.scale {
            return self.mantissa.cmp(&other.mantissa);
        }
        match align(self, other) {
            Ok((ma, mb, _)) => ma.cmp(&mb),
            Err(_) => self
                .to_number()
                .partial_cmp(&other.to_number())
                .unwrap_or(Ordering::Equal),
        }
    }
}

/// Structural equality on the stored pair; the attached format does not
/// participate. Numerically-equal values at different scales are unequal.
impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.mantissa == other.mantissa && self.scale == other.scale
    }
}

impl Eq for Decimal {}

impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.mantissa.hash(state);
        self.scale.hash(state);
    }
}

// PartialOrd is deliberately not implemented: a numeric partial_cmp next to
// the structural eq would break the PartialOrd contract. Use numeric_cmp or
// compare for ordering.

// ============================================================================
// Rendering
// ============================================================================

impl Decimal {
    /// Render with this instance's format patched field by field by
    /// `options`.
    pub fn format_with(&self, options: &FormatOptions) -> String {
        self.render(&self.format.merge(options))
    }

    /// Integer digits of the absolute value, optionally grouped, with a
    /// leading `-` re-applied when the mantissa is negative.
    pub fn integer_part(&self, separator: Option<&str>) -> String {
        let (int_digits, _) = split_digits(self.mantissa.unsigned_abs(), self.scale);
        let grouped = match separator {
            Some(sep) => format::group_digits(&int_digits, sep),
            None => int_digits,
        };
        if self.mantissa < 0 {
            format!("-{grouped}")
        } else {
            grouped
        }
    }

    /// Fractional digits of the absolute value: the last `scale` digits
    /// zero-padded to width `scale`, then trailing zeros trimmed.
    ///
    /// With a target width: `Some(0)` yields an empty string; a width past
    /// the natural length pads right with zeros; a narrower width rounds
    /// half away from zero at that width (a carry past the leading digit is
    /// dropped, matching fixed-width fraction rendering).
    pub fn fractional_part(&self, places: Option<u32>) -> String {
        let (_, frac_digits) = split_digits(self.mantissa.unsigned_abs(), self.scale);
        let natural = trim_trailing_zeros(frac_digits);
        match places {
            None => natural,
            Some(0) => String::new(),
            Some(places) => {
                let width = places as usize;
                if natural.len() <= width {
                    let mut padded = natural;
                    while padded.len() < width {
                        padded.push('0');
                    }
                    padded
                } else {
                    let fraction = match 10u128.checked_pow(self.scale) {
                        Some(divisor) => self.mantissa.unsigned_abs() % divisor,
                        None => self.mantissa.unsigned_abs(),
                    };
                    let rounded = round_fraction(fraction, self.scale, places);
                    format!("{rounded:0>width$}")
                }
            }
        }
    }

    fn render(&self, format: &DecimalFormat) -> String {
        let (mantissa, scale) = match format.decimal_places {
            Some(places) if places < self.scale => {
                rescale_round(self.mantissa, self.scale, places)
            }
            _ => (self.mantissa, self.scale),
        };

        let (int_digits, frac_digits) = split_digits(mantissa.unsigned_abs(), scale);
        let mut fraction = trim_trailing_zeros(frac_digits);
        if let Some(places) = format.decimal_places {
            let width = places as usize;
            while fraction.len() < width {
                fraction.push('0');
            }
        }

        let integer = match format.thousands_separator.as_deref() {
            Some(sep) => format::group_digits(&int_digits, sep),
            None => int_digits,
        };

        let mut out = String::with_capacity(
            format.prefix.len() + integer.len() + fraction.len() + format.suffix.len() + 2,
        );
        out.push_str(&format.prefix);
        if mantissa < 0 {
            out.push('-');
        }
        out.push_str(&integer);
        if !fraction.is_empty() {
            out.push_str(&format.decimal_separator);
            out.push_str(&fraction);
        }
        out.push_str(&format.suffix);
        out
    }
}

/// Round a bare fraction value from `scale` digits down to `places` digits
/// (half away from zero), dropping any carry past the leading digit.
fn round_fraction(fraction: u128, scale: u32, places: u32) -> u128 {
    match 10u128.checked_pow(scale - places) {
        Some(divisor) => {
            let quotient = fraction / divisor;
            let remainder = fraction % divisor;
            let rounded = if remainder * 2 >= divisor {
                quotient + 1
            } else {
                quotient
            };
            match 10u128.checked_pow(places) {
                Some(modulus) => rounded % modulus,
                None => rounded,
            }
        }
        None => 0,
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&self.format))
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl std::str::FromStr for Decimal {
    type Err = DecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::parse(s)
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Decimal::new(value as i128, 0)
    }
}

impl From<i32> for Decimal {
    fn from(value: i32) -> Self {
        Decimal::new(value as i128, 0)
    }
}

impl From<bool> for Decimal {
    fn from(value: bool) -> Self {
        Decimal::new(value as i128, 0)
    }
}

// ============================================================================
// Operator Impls
// ============================================================================

// Infallible operator forms for ergonomics (panic on overflow - use
// checked_* in production).

impl std::ops::Add for Decimal {
    type Output = Decimal;

    fn add(self, rhs: Decimal) -> Decimal {
        self.checked_add(&rhs).expect("decimal addition overflow")
    }
}

impl std::ops::Add<&Decimal> for &Decimal {
    type Output = Decimal;

    fn add(self, rhs: &Decimal) -> Decimal {
        self.checked_add(rhs).expect("decimal addition overflow")
    }
}

impl std::ops::Sub for Decimal {
    type Output = Decimal;

    fn sub(self, rhs: Decimal) -> Decimal {
        self.checked_sub(&rhs).expect("decimal subtraction overflow")
    }
}

impl std::ops::Sub<&Decimal> for &Decimal {
    type Output = Decimal;

    fn sub(self, rhs: &Decimal) -> Decimal {
        self.checked_sub(rhs).expect("decimal subtraction overflow")
    }
}

impl std::ops::Mul for Decimal {
    type Output = Decimal;

    fn mul(self, rhs: Decimal) -> Decimal {
        self.checked_mul(&rhs)
            .expect("decimal multiplication overflow")
    }
}

impl std::ops::Mul<&Decimal> for &Decimal {
    type Output = Decimal;

    fn mul(self, rhs: &Decimal) -> Decimal {
        self.checked_mul(rhs)
            .expect("decimal multiplication overflow")
    }
}

impl std::ops::Div for Decimal {
    type Output = Decimal;

    fn div(self, rhs: Decimal) -> Decimal {
        self.checked_div(&rhs)
            .expect("decimal division by zero or overflow")
    }
}

impl std::ops::Div<&Decimal> for &Decimal {
    type Output = Decimal;

    fn div(self, rhs: &Decimal) -> Decimal {
        self.checked_div(rhs)
            .expect("decimal division by zero or overflow")
    }
}

impl std::ops::AddAssign for Decimal {
    fn add_assign(&mut self, rhs: Decimal) {
        self.add_mut(&rhs);
    }
}

impl std::ops::AddAssign<&Decimal> for Decimal {
    fn add_assign(&mut self, rhs: &Decimal) {
        self.add_mut(rhs);
    }
}

impl std::ops::SubAssign for Decimal {
    fn sub_assign(&mut self, rhs: Decimal) {
        self.sub_mut(&rhs);
    }
}

impl std::ops::SubAssign<&Decimal> for Decimal {
    fn sub_assign(&mut self, rhs: &Decimal) {
        self.sub_mut(rhs);
    }
}

impl std::ops::MulAssign for Decimal {
    fn mul_assign(&mut self, rhs: Decimal) {
        self.mul_mut(&rhs);
    }
}

impl std::ops::MulAssign<&Decimal> for Decimal {
    fn mul_assign(&mut self, rhs: &Decimal) {
        self.mul_mut(rhs);
    }
}

impl std::ops::DivAssign for Decimal {
    fn div_assign(&mut self, rhs: Decimal) {
        self.div_mut(&rhs);
    }
}

impl std::ops::DivAssign<&Decimal> for Decimal {
    fn div_assign(&mut self, rhs: &Decimal) {
        self.div_mut(rhs);
    }
}

impl std::ops::Neg for Decimal {
    type Output = Decimal;

    fn neg(mut self) -> Decimal {
        self.mantissa = -self.mantissa;
        self
    }
}

// ============================================================================
// Serde (optional)
// ============================================================================

#[cfg(feature = "serde")]
mod serde_impls {
    use super::Decimal;
    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt;

    /// Serializes as a plain number (`to_number`), for interchange formats
    /// that only know numerics. Exactness past f64's integer range requires
    /// the string form.
    impl Serialize for Decimal {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_f64(self.to_number())
        }
    }

    struct DecimalVisitor;

    impl Visitor<'_> for DecimalVisitor {
        type Value = Decimal;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a number or a decimal string")
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<Decimal, E> {
            Ok(Decimal::from(value))
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<Decimal, E> {
            Ok(Decimal::new(value as i128, 0))
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<Decimal, E> {
            Decimal::parse(value).map_err(E::custom)
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Decimal, E> {
            Decimal::parse(value).map_err(E::custom)
        }
    }

    impl<'de> Deserialize<'de> for Decimal {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
            deserializer.deserialize_any(DecimalVisitor)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
