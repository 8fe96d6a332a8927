// ============================================================================
// Utilities Module
// Helper functions for embedding the codec
// ============================================================================

mod logging;

// Re-export logging setup
pub use logging::{init_logging, DEFAULT_LOG_FILTER};
