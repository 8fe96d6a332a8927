// ============================================================================
// Codec Errors
// Error types for fixed-width decimal encoding and decoding
// ============================================================================

use std::fmt;

/// Errors that can occur while encoding or decoding decimal literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodecError {
    /// The minimal two's-complement encoding needs more bytes than the target width
    Overflow {
        /// Bytes required by the minimal encoding
        required: usize,
        /// Bytes available in the target buffer
        width: usize,
    },
    /// Byte width is not usable (zero width, empty buffer)
    InvalidWidth(usize),
    /// Input string is not a plain decimal number
    InvalidInput,
    /// Value cannot be represented by the requested target type
    OutOfRange,
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::Overflow { required, width } => {
                write!(f, "decimal size greater than {} bytes: {}", width, required)
            },
            CodecError::InvalidWidth(width) => write!(f, "invalid byte width: {}", width),
            CodecError::InvalidInput => write!(f, "invalid input: could not parse decimal"),
            CodecError::OutOfRange => {
                write!(f, "value out of range for the target decimal type")
            },
        }
    }
}

impl std::error::Error for CodecError {}

/// Result type alias for codec operations
pub type CodecResult<T> = Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CodecError::Overflow {
                required: 17,
                width: 16
            }
            .to_string(),
            "decimal size greater than 16 bytes: 17"
        );
        assert_eq!(CodecError::InvalidWidth(0).to_string(), "invalid byte width: 0");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(CodecError::InvalidInput, CodecError::InvalidInput);
        assert_ne!(CodecError::InvalidInput, CodecError::OutOfRange);
    }
}
