//! Progress state reducer.
//!
//! [`ProgressTracker`] owns everything the writer needs between lines: the
//! high-water elapsed time and the instant of the last publish. Each call to
//! [`ProgressTracker::observe`] is one step; it returns the record to publish
//! when a write is due.

use std::time::{Duration, Instant};

use encwatch_models::JobStatus;

use crate::event::{classify_line, LineKind, ProgressEvent};

/// Durations below this are raised to it.
pub const MIN_DURATION_SECS: f64 = 1.0;

/// Percent at or above which every line triggers a write.
pub const NEAR_COMPLETE_PERCENT: f64 = 99.9;

/// Default minimum spacing between writes.
pub const DEFAULT_WRITE_INTERVAL: Duration = Duration::from_secs(1);

/// Running progress state for one job.
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    name: String,
    duration_secs: f64,
    interval: Duration,
    elapsed_secs: f64,
    last_write: Option<Instant>,
}

impl ProgressTracker {
    /// Create a tracker for a job of the given total duration.
    pub fn new(name: impl Into<String>, duration_secs: f64, interval: Duration) -> Self {
        let duration_secs = if duration_secs.is_finite() {
            duration_secs.max(MIN_DURATION_SECS)
        } else {
            MIN_DURATION_SECS
        };

        Self {
            name: name.into(),
            duration_secs,
            interval,
            elapsed_secs: 0.0,
            last_write: None,
        }
    }

    /// Effective job duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    /// High-water elapsed media time in seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_secs
    }

    /// Percent complete, capped at 100.
    pub fn percent(&self) -> f64 {
        ((self.elapsed_secs / self.duration_secs) * 100.0).min(100.0)
    }

    /// Fold an event into the state. Elapsed time never moves backwards.
    pub fn apply(&mut self, event: ProgressEvent) {
        let elapsed = event.elapsed_seconds(self.duration_secs);
        if elapsed > self.elapsed_secs {
            self.elapsed_secs = elapsed;
        }
    }

    /// Process one input line, returning the record to publish if a write is due.
    ///
    /// Blank and malformed lines are skipped entirely. Unrecognized lines leave
    /// the state alone but still run the debounce check.
    pub fn observe(&mut self, line: &str, now: Instant) -> Option<JobStatus> {
        match classify_line(line) {
            LineKind::Blank | LineKind::Malformed => return None,
            LineKind::Event(event) => self.apply(event),
            LineKind::Other => {}
        }

        if !self.write_due(now) {
            return None;
        }

        self.last_write = Some(now);
        Some(self.snapshot())
    }

    /// Whether a write is due at `now`.
    pub fn write_due(&self, now: Instant) -> bool {
        if self.percent() >= NEAR_COMPLETE_PERCENT {
            return true;
        }
        match self.last_write {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.interval,
        }
    }

    /// Current state as a status record.
    pub fn snapshot(&self) -> JobStatus {
        let current = self.elapsed_secs.min(self.duration_secs).floor() as u64;
        JobStatus::new(self.name.clone(), self.percent(), current)
    }

    /// Terminal record written once the input stream is exhausted.
    pub fn finish(&mut self) -> JobStatus {
        self.elapsed_secs = self.duration_secs;
        JobStatus::new(
            self.name.clone(),
            100.0,
            self.duration_secs.floor() as u64,
        )
    }
}
