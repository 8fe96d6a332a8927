// ============================================================================
// Logging Setup
// Optional tracing subscriber for binaries and tests embedding the codec
// ============================================================================
//
// The codec itself only emits `tracing` events:
// - TRACE: every successful encode (width, minimal length)
// - DEBUG: every value rejected for not fitting its byte width
//
// # Usage
//
// ```ignore
// decimal_literal::utils::init_logging();
// // RUST_LOG=decimal_literal=trace shows every encoded literal
// ```

/// Default filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "decimal_literal=info";

/// Install a global fmt subscriber filtered by `RUST_LOG`.
///
/// Returns `false` if a global subscriber was already installed.
#[cfg(feature = "logging")]
pub fn init_logging() -> bool {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}

// ============================================================================
// Stub implementation when logging feature is disabled
// ============================================================================

/// Install a global fmt subscriber filtered by `RUST_LOG`.
///
/// **Note:** This is a no-op stub. Enable the `logging` feature for output.
#[cfg(not(feature = "logging"))]
pub fn init_logging() -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "logging"))]
    #[test]
    fn test_stub_installs_nothing() {
        assert!(!init_logging());
    }

    #[cfg(feature = "logging")]
    #[test]
    fn test_second_init_is_rejected() {
        // Whichever call runs first wins; the next one must report failure
        init_logging();
        assert!(!init_logging());
    }
}
