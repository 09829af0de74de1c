//! Writer configuration.

use std::path::PathBuf;
use std::time::Duration;

use crate::publish::FilePublisher;
use crate::tracker::{ProgressTracker, DEFAULT_WRITE_INTERVAL, MIN_DURATION_SECS};

/// Writer configuration.
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// Status file to publish to
    pub job_file: PathBuf,
    /// Job name recorded in the status file
    pub name: String,
    /// Expected total media duration in seconds
    pub duration_secs: f64,
    /// Minimum spacing between writes
    pub interval: Duration,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            job_file: PathBuf::from("progress.txt"),
            name: String::new(),
            duration_secs: MIN_DURATION_SECS,
            interval: DEFAULT_WRITE_INTERVAL,
        }
    }
}

impl WriterConfig {
    /// Fresh tracker for this job.
    pub fn tracker(&self) -> ProgressTracker {
        ProgressTracker::new(self.name.clone(), self.duration_secs, self.interval)
    }

    /// Publisher for this job's status file.
    pub fn publisher(&self) -> FilePublisher {
        FilePublisher::new(&self.job_file)
    }
}
