//! Job status records and the status-file wire format.
//!
//! A status file holds exactly one line:
//!
//! ```text
//! <name>|<percent with 2 decimals>|<integer elapsed seconds>
//! ```
//!
//! The writer owns the file and replaces it whole on every update; any number
//! of monitors read it concurrently.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Separator between fields of a status line.
pub const FIELD_DELIMITER: char = '|';

/// File name suffix the monitor recognizes as a status file.
pub const STATUS_FILE_EXTENSION: &str = ".txt";

/// Suffix appended to a status file path for the staging copy.
///
/// Appended to the full file name, so `job.txt` stages as `job.txt.tmp`,
/// which never matches [`STATUS_FILE_EXTENSION`].
pub const TEMP_FILE_SUFFIX: &str = ".tmp";

/// Completion state of a single job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobStatus {
    /// Declared job name (may be empty)
    pub name: String,
    /// Percent complete, 0.0..=100.0
    pub percent: f64,
    /// Elapsed media time in whole seconds
    pub current_seconds: u64,
}

/// Check that a job name survives the wire format unchanged.
///
/// The delimiter would split the name into extra fields and a line break
/// would end the record early; either way the monitor drops the file.
pub fn validate_job_name(name: &str) -> ModelResult<()> {
    if name.contains(|c| c == FIELD_DELIMITER || c == '\n' || c == '\r') {
        return Err(ModelError::InvalidName(name.to_string()));
    }
    Ok(())
}

impl JobStatus {
    /// Create a new status record.
    pub fn new(name: impl Into<String>, percent: f64, current_seconds: u64) -> Self {
        Self {
            name: name.into(),
            percent,
            current_seconds,
        }
    }

    /// Encode as a newline-terminated status line.
    pub fn to_line(&self) -> String {
        format!("{self}\n")
    }

    /// Decode the first line of a status file.
    ///
    /// Surrounding whitespace is trimmed and fields past the third are ignored.
    pub fn parse_line(line: &str) -> ModelResult<Self> {
        let line = line.trim();
        if line.is_empty() {
            return Err(ModelError::EmptyLine);
        }

        let parts: Vec<&str> = line.split(FIELD_DELIMITER).collect();
        if parts.len() < 3 {
            return Err(ModelError::MissingFields(parts.len()));
        }

        let percent = parts[1]
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite())
            .ok_or_else(|| ModelError::InvalidPercent(parts[1].to_string()))?;

        let current_seconds = parts[2]
            .trim()
            .parse::<u64>()
            .map_err(|_| ModelError::InvalidSeconds(parts[2].to_string()))?;

        Ok(Self {
            name: parts[0].to_string(),
            percent,
            current_seconds,
        })
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{:.2}{}{}",
            self.name, FIELD_DELIMITER, self.percent, FIELD_DELIMITER, self.current_seconds
        )
    }
}

impl FromStr for JobStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_line(s)
    }
}

/// A status file as seen by the monitor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusRecord {
    /// File name within the watched directory
    pub file_name: String,
    /// Decoded contents
    pub status: JobStatus,
}

impl StatusRecord {
    /// Display label: the declared job name, or the file name when unnamed.
    pub fn label(&self) -> &str {
        if self.status.name.is_empty() {
            &self.file_name
        } else {
            &self.status.name
        }
    }
}
