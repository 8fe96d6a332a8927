// ============================================================================
// Decimal Value
// Arbitrary-precision (unscaled, scale, precision) decimal triple
// ============================================================================

use super::errors::{CodecError, CodecResult};
use super::fixed_width::{encode, EncodedDecimal};
use num_bigint::{BigInt, Sign};
use num_traits::{ToPrimitive, Zero};
use std::fmt;

/// Largest scale accepted by `rust_decimal::Decimal`
const RUST_DECIMAL_MAX_SCALE: i32 = 28;

/// Decimal number as an unscaled integer plus scale and precision metadata.
///
/// The represented value is `unscaled × 10^-scale`. Precision and scale are
/// carried alongside the number and are trusted: nothing here checks that
/// `unscaled` actually has at most `precision` digits.
///
/// # Example
/// ```
/// use decimal_literal::numeric::DecimalValue;
///
/// let price: DecimalValue = "123.45".parse().unwrap();
/// assert_eq!(price.scale(), 2);
/// assert_eq!(price.precision(), 5);
/// assert_eq!(price.to_string(), "123.45");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecimalValue {
    unscaled: BigInt,
    scale: i32,
    precision: i32,
}

/// Count of decimal digits in `|value|` (zero has one digit)
fn digit_count(value: &BigInt) -> usize {
    value.magnitude().to_str_radix(10).len()
}

impl DecimalValue {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from parts exactly as given by the caller.
    #[inline]
    pub fn new(unscaled: BigInt, scale: i32, precision: i32) -> Self {
        Self {
            unscaled,
            scale,
            precision,
        }
    }

    /// Create from an unscaled integer and scale, deriving the precision.
    ///
    /// Precision is the digit count of the unscaled integer, but never less
    /// than the scale (`0.05` has precision 2).
    pub fn from_unscaled(unscaled: impl Into<BigInt>, scale: i32) -> Self {
        let unscaled = unscaled.into();
        let digits = i32::try_from(digit_count(&unscaled)).unwrap_or(i32::MAX);
        Self {
            precision: digits.max(scale),
            unscaled,
            scale,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The value with its decimal point removed.
    #[inline]
    pub fn unscaled(&self) -> &BigInt {
        &self.unscaled
    }

    /// Digits to the right of the decimal point.
    #[inline]
    pub fn scale(&self) -> i32 {
        self.scale
    }

    /// Total significant digits.
    #[inline]
    pub fn precision(&self) -> i32 {
        self.precision
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.unscaled.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.unscaled.sign() == Sign::Minus
    }

    /// Consume the value and return its unscaled integer.
    #[inline]
    pub fn into_unscaled(self) -> BigInt {
        self.unscaled
    }

    // ========================================================================
    // Encoding
    // ========================================================================

    /// Encode the unscaled integer into exactly `byte_width` bytes.
    ///
    /// The scale does not influence the bytes; it travels separately.
    ///
    /// # Errors
    /// Returns `Overflow` if the value does not fit the width.
    pub fn encode(&self, byte_width: usize) -> CodecResult<EncodedDecimal> {
        encode(&self.unscaled, byte_width)
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let digits = self.unscaled.magnitude().to_str_radix(10);

        if self.scale <= 0 {
            // Negative scale shifts the point to the right
            let zeros = if self.is_zero() {
                0
            } else {
                self.scale.unsigned_abs() as usize
            };
            return write!(f, "{}{}{}", sign, digits, "0".repeat(zeros));
        }

        let scale = self.scale as usize;
        let padded = format!("{:0>width$}", digits, width = scale + 1);
        let (int_part, frac_part) = padded.split_at(padded.len() - scale);
        write!(f, "{}{}.{}", sign, int_part, frac_part)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl std::str::FromStr for DecimalValue {
    type Err = CodecError;

    /// Parse a plain decimal string.
    ///
    /// # Examples
    /// - "123.45" -> unscaled 12345, scale 2
    /// - "-0.001" -> unscaled -1, scale 3
    /// - "42" -> unscaled 42, scale 0
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let (is_negative, s) = if let Some(rest) = s.strip_prefix('-') {
            (true, rest)
        } else {
            (false, s.strip_prefix('+').unwrap_or(s))
        };

        let (int_str, frac_str) = match s.find('.') {
            Some(pos) => (&s[..pos], &s[pos + 1..]),
            None => (s, ""),
        };

        if int_str.is_empty() && frac_str.is_empty() {
            return Err(CodecError::InvalidInput);
        }
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(int_str) || !all_digits(frac_str) {
            return Err(CodecError::InvalidInput);
        }

        let combined = format!("{}{}", int_str, frac_str);
        let mut unscaled =
            BigInt::parse_bytes(combined.as_bytes(), 10).ok_or(CodecError::InvalidInput)?;
        if is_negative {
            unscaled = -unscaled;
        }

        let scale = i32::try_from(frac_str.len()).map_err(|_| CodecError::InvalidInput)?;
        Ok(Self::from_unscaled(unscaled, scale))
    }
}

// ============================================================================
// Conversion from/to rust_decimal (for API boundaries)
// ============================================================================

impl From<rust_decimal::Decimal> for DecimalValue {
    fn from(d: rust_decimal::Decimal) -> Self {
        // rust_decimal scales never exceed 28
        Self::from_unscaled(d.mantissa(), d.scale() as i32)
    }
}

impl DecimalValue {
    /// Convert to rust_decimal::Decimal.
    ///
    /// # Errors
    /// Returns `OutOfRange` if the scale is outside 0..=28 or the unscaled
    /// integer exceeds the 96-bit mantissa.
    pub fn to_decimal(&self) -> CodecResult<rust_decimal::Decimal> {
        if !(0..=RUST_DECIMAL_MAX_SCALE).contains(&self.scale) {
            return Err(CodecError::OutOfRange);
        }
        let mantissa = self.unscaled.to_i128().ok_or(CodecError::OutOfRange)?;
        rust_decimal::Decimal::try_from_i128_with_scale(mantissa, self.scale as u32)
            .map_err(|_| CodecError::OutOfRange)
    }
}

// ============================================================================
// Tests
// ============================================================================
