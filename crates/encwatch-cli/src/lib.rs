//! Shared plumbing for the encwatch binaries.

pub mod args;
pub mod logging;
pub mod signal;

pub use args::{MonitorArgs, WriterArgs};
pub use logging::init_tracing;
pub use signal::shutdown_signal;
