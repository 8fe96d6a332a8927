// ============================================================================
// Codec Configuration
// Byte width contract between the encoder and the consuming engine
// ============================================================================

use crate::numeric::{minimal_width, CodecError, CodecResult};
use num_bigint::BigInt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Byte width expected by the consuming engine (128-bit decimals)
pub const DEFAULT_BYTE_WIDTH: usize = 16;

/// Configuration for encoding decimal literals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CodecConfig {
    /// Exact length of every encoded value, in bytes
    pub byte_width: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            byte_width: DEFAULT_BYTE_WIDTH,
        }
    }
}

impl CodecConfig {
    /// Create a new configuration with the given byte width
    pub fn new(byte_width: usize) -> Self {
        Self { byte_width }
    }

    /// Builder method: Set byte width
    pub fn with_byte_width(mut self, byte_width: usize) -> Self {
        self.byte_width = byte_width;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> CodecResult<()> {
        if self.byte_width == 0 {
            return Err(CodecError::InvalidWidth(self.byte_width));
        }
        Ok(())
    }

    /// Largest precision whose every value fits the configured width.
    ///
    /// 16 bytes hold any 38-digit decimal, 32 bytes any 76-digit one.
    pub fn max_precision(&self) -> u32 {
        let mut precision = 0;
        let mut largest = BigInt::from(9u8);
        while minimal_width(&largest) <= self.byte_width {
            precision += 1;
            largest = largest * 10u8 + 9u8;
        }
        precision
    }

    /// Load a configuration from JSON. Missing fields take their defaults.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| format!("invalid codec config: {}", e))?;
        config.validate().map_err(|e| e.to_string())?;
        Ok(config)
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl CodecConfig {
    /// 128-bit decimals (16 bytes, precision up to 38)
    pub fn decimal128() -> Self {
        Self::new(16)
    }

    /// 256-bit decimals (32 bytes, precision up to 76)
    pub fn decimal256() -> Self {
        Self::new(32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CodecConfig::default();
        assert_eq!(config.byte_width, DEFAULT_BYTE_WIDTH);
        assert_eq!(config, CodecConfig::decimal128());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = CodecConfig::default().with_byte_width(8);
        assert_eq!(config.byte_width, 8);
    }

    #[test]
    fn test_validation() {
        let config = CodecConfig::new(0);
        assert_eq!(config.validate(), Err(CodecError::InvalidWidth(0)));
    }

    #[test]
    fn test_max_precision() {
        assert_eq!(CodecConfig::decimal128().max_precision(), 38);
        assert_eq!(CodecConfig::decimal256().max_precision(), 76);
        assert_eq!(CodecConfig::new(8).max_precision(), 18);
        assert_eq!(CodecConfig::new(1).max_precision(), 2);
        assert_eq!(CodecConfig::new(0).max_precision(), 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json() {
        let config = CodecConfig::from_json(r#"{"byte_width": 32}"#).unwrap();
        assert_eq!(config, CodecConfig::decimal256());

        let config = CodecConfig::from_json("{}").unwrap();
        assert_eq!(config, CodecConfig::default());

        assert!(CodecConfig::from_json(r#"{"byte_width": 0}"#).is_err());
        assert!(CodecConfig::from_json("not json").is_err());
    }
}
