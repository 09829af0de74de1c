//! Status directory scanning.

use std::path::Path;

use encwatch_models::{JobStatus, StatusRecord, STATUS_FILE_EXTENSION};
use tokio::fs;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, trace};

/// Scan `dir` for status files and decode each one.
///
/// Records come back sorted by file name. Files that cannot be read or
/// decoded are left out of this cycle, and an unreadable directory yields no
/// records at all.
pub async fn scan_status_dir(dir: impl AsRef<Path>) -> Vec<StatusRecord> {
    let dir = dir.as_ref();

    let mut names = match list_status_files(dir).await {
        Ok(names) => names,
        Err(e) => {
            debug!(dir = %dir.display(), error = %e, "Status directory not readable");
            return Vec::new();
        }
    };
    names.sort();

    let mut records = Vec::with_capacity(names.len());
    for file_name in names {
        if let Some(status) = read_status_file(dir.join(&file_name)).await {
            records.push(StatusRecord { file_name, status });
        }
    }
    records
}

/// Decode the first line of a status file, if it holds a valid record.
pub async fn read_status_file(path: impl AsRef<Path>) -> Option<JobStatus> {
    let path = path.as_ref();

    let file = match fs::File::open(path).await {
        Ok(file) => file,
        Err(e) => {
            trace!(path = %path.display(), error = %e, "Status file vanished");
            return None;
        }
    };

    let mut line = String::new();
    if let Err(e) = BufReader::new(file).read_line(&mut line).await {
        trace!(path = %path.display(), error = %e, "Status file not readable");
        return None;
    }

    match JobStatus::parse_line(&line) {
        Ok(status) => Some(status),
        Err(e) => {
            trace!(path = %path.display(), error = %e, "Skipping malformed status file");
            None
        }
    }
}

async fn list_status_files(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut entries = fs::read_dir(dir).await?;
    let mut names = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if name.ends_with(STATUS_FILE_EXTENSION) {
            names.push(name);
        }
    }
    Ok(names)
}
