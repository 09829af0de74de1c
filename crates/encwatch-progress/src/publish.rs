//! Atomic status-file publishing.
//!
//! The record is staged next to the destination and renamed over it, so a
//! concurrent reader sees either the previous line or the new one. When that
//! fails the record is written straight to the destination instead, and when
//! that fails too the update is dropped and the old record stays in place.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use encwatch_models::{JobStatus, TEMP_FILE_SUFFIX};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, trace};

use crate::error::{ProgressError, ProgressResult};

/// Result of a single publish attempt. Never an error for the caller.
#[derive(Debug)]
pub enum PublishOutcome {
    /// Staged and renamed into place
    Atomic,
    /// Staging failed; written directly to the destination
    Direct { atomic_error: ProgressError },
    /// Both strategies failed; previous record left as-is
    Dropped {
        atomic_error: ProgressError,
        direct_error: ProgressError,
    },
}

impl PublishOutcome {
    /// Whether the new record reached the destination.
    pub fn is_published(&self) -> bool {
        !matches!(self, Self::Dropped { .. })
    }
}

/// Sink for status records produced by the writer loop.
#[async_trait]
pub trait StatusPublisher: Send {
    /// Publish one record.
    async fn publish(&mut self, status: &JobStatus) -> PublishOutcome;
}

/// Publisher writing to a fixed status-file path.
#[derive(Debug, Clone)]
pub struct FilePublisher {
    path: PathBuf,
}

impl FilePublisher {
    /// Create a publisher for the given status file.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Destination path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl StatusPublisher for FilePublisher {
    async fn publish(&mut self, status: &JobStatus) -> PublishOutcome {
        let outcome = publish_status(&self.path, status).await;
        match &outcome {
            PublishOutcome::Atomic => {
                trace!(
                    job_file = %self.path.display(),
                    percent = status.percent,
                    "Status published"
                );
            }
            PublishOutcome::Direct { atomic_error } => {
                debug!(
                    job_file = %self.path.display(),
                    error = %atomic_error,
                    "Atomic publish failed, wrote directly"
                );
            }
            PublishOutcome::Dropped {
                atomic_error,
                direct_error,
            } => {
                debug!(
                    job_file = %direct_error.path().display(),
                    atomic_error = %atomic_error,
                    direct_error = %direct_error,
                    "Status update dropped"
                );
            }
        }
        outcome
    }
}

/// Sibling staging path for a status file (`job.txt` -> `job.txt.tmp`).
pub fn temp_path(path: impl AsRef<Path>) -> PathBuf {
    let mut staged: OsString = path.as_ref().as_os_str().to_owned();
    staged.push(TEMP_FILE_SUFFIX);
    PathBuf::from(staged)
}

/// Publish a status record to `path`, atomically if possible.
pub async fn publish_status(path: impl AsRef<Path>, status: &JobStatus) -> PublishOutcome {
    let path = path.as_ref();
    let contents = status.to_line();

    let atomic_error = match write_atomic(path, &contents).await {
        Ok(()) => return PublishOutcome::Atomic,
        Err(e) => e,
    };

    match write_direct(path, &contents).await {
        Ok(()) => PublishOutcome::Direct { atomic_error },
        Err(direct_error) => PublishOutcome::Dropped {
            atomic_error,
            direct_error,
        },
    }
}

/// Stage to the temp path, then rename over the destination.
async fn write_atomic(path: &Path, contents: &str) -> ProgressResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| ProgressError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }
    }

    let tmp = temp_path(path);

    if let Err(source) = write_file(&tmp, contents).await {
        let _ = fs::remove_file(&tmp).await;
        return Err(ProgressError::Stage { path: tmp, source });
    }

    if let Err(source) = fs::rename(&tmp, path).await {
        let _ = fs::remove_file(&tmp).await;
        return Err(ProgressError::Rename {
            from: tmp,
            to: path.to_path_buf(),
            source,
        });
    }

    Ok(())
}

/// Overwrite the destination in place.
async fn write_direct(path: &Path, contents: &str) -> ProgressResult<()> {
    write_file(path, contents)
        .await
        .map_err(|source| ProgressError::DirectWrite {
            path: path.to_path_buf(),
            source,
        })
}

/// Create/truncate, write, and flush to disk. The handle is closed on return.
async fn write_file(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut file = fs::File::create(path).await?;
    file.write_all(contents.as_bytes()).await?;
    file.sync_data().await?;
    Ok(())
}
