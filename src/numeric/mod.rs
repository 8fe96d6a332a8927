// ============================================================================
// Numeric Module
// Unscaled decimal values and their fixed-width two's-complement encoding
// ============================================================================
//
// This module provides:
// - DecimalValue: (unscaled, scale, precision) triple with arbitrary precision
// - encode/decode: fixed-width little-endian two's-complement codec
// - CodecError: Error types for encoding, decoding and parsing
//
// Design principles:
// - No floating-point operations
// - All fallible operations return Result (no panics)
// - Output length always equals the requested byte width
// - Never truncate: values that do not fit are rejected

mod decimal_value;
mod errors;
mod fixed_width;

pub use decimal_value::DecimalValue;
pub use errors::{CodecError, CodecResult};
pub use fixed_width::{
    decode, decode_value, encode, encode_i128, minimal_width, EncodedDecimal,
};
