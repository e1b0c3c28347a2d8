//! Tracing and logging (shared setup).

/// Subscriber configuration (filters, output format).
pub mod config;

/// Subscriber installation.
pub mod subscriber;

pub use config::{LogFormat, TracingConfig};
pub use subscriber::try_init;

/// Initialize process-wide tracing from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    subscriber::init();
}
