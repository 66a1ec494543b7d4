//! Tracing/logging setup shared by every binary in the workspace.

/// Initialize process-wide tracing with JSON output.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(LogFormat::Json);
}

pub use self::tracing::{LogFormat, init_with};

/// Tracing configuration (filters, layers).
pub mod tracing;
