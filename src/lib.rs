// ============================================================================
// Decimal Literal Library
// Fixed-width two's-complement encoding of decimal literals
// ============================================================================

//! # Decimal Literal
//!
//! Encodes fixed-precision decimal values into the fixed-width byte layout
//! used by decimal literals of a columnar query interchange format:
//! `{ precision: int32, scale: int32, value: bytes(byte_width) }`.
//!
//! ## Features
//!
//! - **Byte-exact layout**: little-endian two's-complement, sign-extended
//! - **Arbitrary precision**: unscaled integers are never narrowed to 64 bits
//! - **Configurable width**: 16 bytes by default, any positive width allowed
//! - **No truncation**: values that do not fit are rejected with `Overflow`
//! - **Stateless**: every operation is a pure function, safe from any thread
//!
//! ## Example
//!
//! ```rust
//! use decimal_literal::prelude::*;
//!
//! let value: DecimalValue = "123.45".parse().unwrap();
//! let literal = DecimalLiteral::encode(&value, &CodecConfig::default()).unwrap();
//!
//! assert_eq!(literal.precision(), 5);
//! assert_eq!(literal.scale(), 2);
//! assert_eq!(&literal.value()[..2], &[0x39, 0x30]);
//! assert_eq!(literal.byte_width(), 16);
//! ```

pub mod domain;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{CodecConfig, DecimalLiteral, DEFAULT_BYTE_WIDTH};
    pub use crate::numeric::{
        decode, decode_value, encode, encode_i128, minimal_width, CodecError, CodecResult,
        DecimalValue, EncodedDecimal,
    };
    pub use num_bigint::BigInt;
}
