//! Error types for progress publishing.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for progress operations.
pub type ProgressResult<T> = Result<T, ProgressError>;

/// Errors that can occur while publishing a status file.
#[derive(Debug, Error)]
pub enum ProgressError {
    #[error("Failed to create status directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to stage status file {path}: {source}")]
    Stage {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to rename {from} to {to}: {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write status file {path}: {source}")]
    DirectWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ProgressError {
    /// Path the failed operation was targeting.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::CreateDir { path, .. }
            | Self::Stage { path, .. }
            | Self::DirectWrite { path, .. } => path,
            Self::Rename { to, .. } => to,
        }
    }
}
