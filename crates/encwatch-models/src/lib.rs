//! Shared data models for encwatch.
//!
//! This crate provides:
//! - The job status record published by the writer
//! - The pipe-delimited status-file wire format shared by writer and monitor
//! - Error types for decoding status lines

pub mod error;
pub mod status;

pub use error::{ModelError, ModelResult};
pub use status::{
    validate_job_name, JobStatus, StatusRecord, FIELD_DELIMITER, STATUS_FILE_EXTENSION,
    TEMP_FILE_SUFFIX,
};
