// ============================================================================
// Domain Models Module
// Codec configuration and the decimal literal message
// ============================================================================

pub mod config;
pub mod literal;

pub use config::{CodecConfig, DEFAULT_BYTE_WIDTH};
pub use literal::DecimalLiteral;
