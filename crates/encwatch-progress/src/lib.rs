#![deny(unreachable_patterns)]
//! FFmpeg progress tracking for a single transcoding job.
//!
//! This crate provides:
//! - Classification of `-progress` output lines into typed events
//! - A pure state reducer that turns events into a percent complete and
//!   decides when the status file is due for a rewrite
//! - Atomic publishing of the status file with a direct-write fallback
//! - The async driver tying stdin to the publisher

pub mod config;
pub mod error;
pub mod event;
pub mod publish;
pub mod tracker;
pub mod writer;

pub use config::WriterConfig;
pub use error::{ProgressError, ProgressResult};
pub use event::{classify_line, LineKind, ProgressEvent};
pub use publish::{publish_status, temp_path, FilePublisher, PublishOutcome, StatusPublisher};
pub use tracker::{
    ProgressTracker, DEFAULT_WRITE_INTERVAL, MIN_DURATION_SECS, NEAR_COMPLETE_PERCENT,
};
pub use writer::{run_writer, WriterSummary};
