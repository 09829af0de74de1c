//! Error types for the monitor.

use thiserror::Error;

/// Result type for monitor operations.
pub type MonitorResult<T> = Result<T, MonitorError>;

/// Errors that stop the monitor loop.
///
/// Scan and parse failures never surface here; only losing the terminal does.
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("Failed to write to terminal: {0}")]
    Terminal(#[from] std::io::Error),
}
