#![deny(unreachable_patterns)]
//! Live terminal view over a directory of job status files.
//!
//! This crate provides:
//! - A scanner that turns the status directory into sorted records
//! - A renderer that redraws the job table in place or appends it as plain lines
//! - The polling loop with interrupt-driven shutdown

pub mod config;
pub mod error;
pub mod monitor;
pub mod render;
pub mod scanner;

pub use config::{MonitorConfig, DEFAULT_REFRESH_INTERVAL};
pub use error::{MonitorError, MonitorResult};
pub use monitor::{run_monitor, SHUTDOWN_NOTICE};
pub use render::{
    format_line, DisplayMode, TerminalRenderer, CURSOR_UP, ERASE_LINE, LABEL_WIDTH,
};
pub use scanner::{read_status_file, scan_status_dir};
