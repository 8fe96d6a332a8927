// ============================================================================
// Fixed-Width Decimal Codec
// Little-endian two's-complement encoding of unscaled decimal integers
// ============================================================================

use super::decimal_value::DecimalValue;
use super::errors::{CodecError, CodecResult};
use num_bigint::{BigInt, Sign};
use smallvec::SmallVec;

/// Encoded decimal bytes, least significant byte first.
///
/// The default 16-byte width is stored inline without heap allocation.
pub type EncodedDecimal = SmallVec<[u8; 16]>;

// ============================================================================
// Width Computation
// ============================================================================

/// Number of bytes in the minimal two's-complement encoding of `value`.
///
/// This is the shortest length whose top bit still carries the sign, so
/// zero and -1 both need one byte, 128 needs two and -128 needs one.
pub fn minimal_width(value: &BigInt) -> usize {
    let magnitude_bits = if value.sign() == Sign::Minus {
        // significant bits of !v
        (-value - 1u32).bits()
    } else {
        value.bits()
    };
    (magnitude_bits as usize + 1).div_ceil(8)
}

#[inline]
fn i128_minimal_width(value: i128) -> usize {
    let redundant = if value < 0 {
        value.leading_ones()
    } else {
        value.leading_zeros()
    };
    ((128 - redundant + 1) as usize).div_ceil(8)
}

#[inline]
const fn pad_byte(negative: bool) -> u8 {
    if negative {
        0xFF
    } else {
        0x00
    }
}

// ============================================================================
// Encoding
// ============================================================================

/// Encode an unscaled decimal integer into exactly `byte_width` bytes.
///
/// The result is little-endian two's-complement: the minimal encoding of
/// `unscaled` occupies the low-order positions and the remaining high-order
/// positions are filled with the sign byte (`0xFF` for negatives, `0x00`
/// otherwise).
///
/// # Errors
/// Returns `Overflow` if the minimal encoding needs more than `byte_width`
/// bytes. The value is never truncated.
///
/// # Example
/// ```
/// use decimal_literal::numeric::encode;
/// use num_bigint::BigInt;
///
/// let bytes = encode(&BigInt::from(12345), 16).unwrap();
/// assert_eq!(&bytes[..3], &[0x39, 0x30, 0x00]);
/// assert_eq!(bytes.len(), 16);
/// ```
pub fn encode(unscaled: &BigInt, byte_width: usize) -> CodecResult<EncodedDecimal> {
    let minimal = unscaled.to_signed_bytes_le();
    if minimal.len() > byte_width {
        tracing::debug!(
            required = minimal.len(),
            width = byte_width,
            "decimal rejected: minimal encoding exceeds byte width"
        );
        return Err(CodecError::Overflow {
            required: minimal.len(),
            width: byte_width,
        });
    }

    // The most significant byte is last in little-endian order
    let msb = minimal.last().copied().unwrap_or(0);
    let mut encoded = EncodedDecimal::with_capacity(byte_width);
    encoded.extend_from_slice(&minimal);
    encoded.resize(byte_width, pad_byte(msb & 0x80 != 0));

    tracing::trace!(
        required = minimal.len(),
        width = byte_width,
        "encoded decimal"
    );
    Ok(encoded)
}

/// Encode a native 128-bit unscaled integer into exactly `byte_width` bytes.
///
/// Produces the same bytes as [`encode`] for every `i128` but never touches
/// the heap for widths up to 16.
///
/// # Errors
/// Returns `Overflow` if the minimal encoding needs more than `byte_width` bytes.
pub fn encode_i128(unscaled: i128, byte_width: usize) -> CodecResult<EncodedDecimal> {
    let required = i128_minimal_width(unscaled);
    if required > byte_width {
        tracing::debug!(
            required,
            width = byte_width,
            "decimal rejected: minimal encoding exceeds byte width"
        );
        return Err(CodecError::Overflow {
            required,
            width: byte_width,
        });
    }

    let bytes = unscaled.to_le_bytes();
    let copied = byte_width.min(bytes.len());
    let mut encoded = EncodedDecimal::with_capacity(byte_width);
    encoded.extend_from_slice(&bytes[..copied]);
    encoded.resize(byte_width, pad_byte(unscaled < 0));
    Ok(encoded)
}

// ============================================================================
// Decoding
// ============================================================================

/// Interpret `bytes` as a little-endian two's-complement integer.
///
/// # Errors
/// Returns `InvalidWidth(0)` for an empty buffer.
pub fn decode(bytes: &[u8]) -> CodecResult<BigInt> {
    if bytes.is_empty() {
        return Err(CodecError::InvalidWidth(0));
    }
    Ok(BigInt::from_signed_bytes_le(bytes))
}

/// Decode `bytes` into a [`DecimalValue`] carrying the given scale and precision.
///
/// Scale and precision are attached as-is; they are not checked against the
/// decoded magnitude.
pub fn decode_value(bytes: &[u8], scale: i32, precision: i32) -> CodecResult<DecimalValue> {
    decode(bytes).map(|unscaled| DecimalValue::new(unscaled, scale, precision))
}

// ============================================================================
// Tests
// ============================================================================
