// ============================================================================
// Decimal Literal
// The { precision, scale, value } message embedded in the interchange format
// ============================================================================

use crate::domain::config::CodecConfig;
use crate::numeric::{decode_value, encode_i128, CodecResult, DecimalValue, EncodedDecimal};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Decimal literal ready to be placed into a literal expression.
///
/// `value` holds the unscaled integer as little-endian two's-complement,
/// sign-extended to the configured byte width. Precision and scale are
/// copied verbatim from the source value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecimalLiteral {
    precision: i32,
    scale: i32,
    value: EncodedDecimal,
}

impl DecimalLiteral {
    /// Build a literal from a decimal value at the configured width.
    ///
    /// # Errors
    /// - `InvalidWidth` if the configuration is invalid
    /// - `Overflow` if the value does not fit; the enclosing expression
    ///   cannot be translated
    pub fn encode(value: &DecimalValue, config: &CodecConfig) -> CodecResult<Self> {
        config.validate()?;
        let bytes = value.encode(config.byte_width)?;

        tracing::trace!(
            precision = value.precision(),
            scale = value.scale(),
            width = config.byte_width,
            "built decimal literal"
        );

        Ok(Self {
            precision: value.precision(),
            scale: value.scale(),
            value: bytes,
        })
    }

    /// Build a literal straight from a `rust_decimal::Decimal`.
    ///
    /// Equivalent to `encode(&DecimalValue::from(d), config)` without going
    /// through an arbitrary-precision integer.
    pub fn from_rust_decimal(d: rust_decimal::Decimal, config: &CodecConfig) -> CodecResult<Self> {
        config.validate()?;
        let mantissa = d.mantissa();
        let value = encode_i128(mantissa, config.byte_width)?;

        let digits = mantissa.unsigned_abs().checked_ilog10().map_or(1, |log| log + 1);
        // rust_decimal scales never exceed 28
        let scale = d.scale() as i32;

        Ok(Self {
            precision: (digits as i32).max(scale),
            scale,
            value,
        })
    }

    /// Create from already-encoded parts, e.g. a literal read off the wire.
    pub fn from_parts(precision: i32, scale: i32, value: EncodedDecimal) -> Self {
        Self {
            precision,
            scale,
            value,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn precision(&self) -> i32 {
        self.precision
    }

    #[inline]
    pub fn scale(&self) -> i32 {
        self.scale
    }

    /// Encoded bytes, least significant first.
    #[inline]
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    #[inline]
    pub fn byte_width(&self) -> usize {
        self.value.len()
    }

    /// Decode the literal back into a decimal value.
    ///
    /// # Errors
    /// Returns `InvalidWidth(0)` if the literal carries no bytes.
    pub fn to_value(&self) -> CodecResult<DecimalValue> {
        decode_value(&self.value, self.scale, self.precision)
    }
}
