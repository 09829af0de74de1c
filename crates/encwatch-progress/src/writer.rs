//! Writer loop: progress stream in, status file out.

use std::time::Instant;

use encwatch_models::JobStatus;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

use crate::publish::StatusPublisher;
use crate::tracker::ProgressTracker;

/// Counters from one writer session.
#[derive(Debug, Clone, PartialEq)]
pub struct WriterSummary {
    /// Input lines read
    pub lines: u64,
    /// Publish attempts, including the final one
    pub writes: u64,
    /// Publish attempts that left the old record in place
    pub failed_writes: u64,
    /// Record published when the stream ended
    pub final_status: JobStatus,
}

/// Drive `tracker` from `reader` until end of input, publishing as it goes.
///
/// Lines are decoded lossily so stray non-UTF-8 bytes cannot end the session.
/// A read error is treated as end of input. The terminal 100% record is
/// always published last.
pub async fn run_writer<R, P>(
    mut reader: R,
    tracker: &mut ProgressTracker,
    publisher: &mut P,
) -> WriterSummary
where
    R: AsyncBufRead + Unpin,
    P: StatusPublisher + ?Sized,
{
    let mut buf = Vec::new();
    let mut lines = 0u64;
    let mut writes = 0u64;
    let mut failed_writes = 0u64;

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                debug!(error = %e, "Progress stream read failed, finishing");
                break;
            }
        }
        lines += 1;

        let line = String::from_utf8_lossy(&buf);
        if let Some(status) = tracker.observe(&line, Instant::now()) {
            writes += 1;
            if !publisher.publish(&status).await.is_published() {
                failed_writes += 1;
            }
        }
    }

    let final_status = tracker.finish();
    writes += 1;
    if !publisher.publish(&final_status).await.is_published() {
        failed_writes += 1;
    }

    info!(
        lines,
        writes,
        failed_writes,
        duration_secs = tracker.duration_secs(),
        "Progress stream finished"
    );

    WriterSummary {
        lines,
        writes,
        failed_writes,
        final_status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::publish::{FilePublisher, PublishOutcome};
    use crate::tracker::DEFAULT_WRITE_INTERVAL;
    use async_trait::async_trait;
    use std::time::Duration;
    use tempfile::TempDir;

    #[derive(Default)]
    struct RecordingPublisher {
        published: Vec<JobStatus>,
    }

    #[async_trait]
    impl StatusPublisher for RecordingPublisher {
        async fn publish(&mut self, status: &JobStatus) -> PublishOutcome {
            self.published.push(status.clone());
            PublishOutcome::Atomic
        }
    }

    #[tokio::test]
    async fn test_empty_stream_writes_once() {
        let mut tracker = ProgressTracker::new("job", 42.9, DEFAULT_WRITE_INTERVAL);
        let mut publisher = RecordingPublisher::default();

        let summary = run_writer(&b""[..], &mut tracker, &mut publisher).await;

        assert_eq!(summary.lines, 0);
        assert_eq!(summary.writes, 1);
        assert_eq!(publisher.published.len(), 1);
        assert_eq!(publisher.published[0].to_line(), "job|100.00|42\n");
    }

    #[tokio::test]
    async fn test_ffmpeg_block_stream() {
        let input = b"frame=10\nout_time_us=50000000\nout_time=00:00:50.000000\nprogress=continue\n\
                      frame=20\nout_time_us=100000000\nprogress=end\n";
        let mut tracker = ProgressTracker::new("clip", 100.0, Duration::from_secs(3600));
        let mut publisher = RecordingPublisher::default();

        let summary = run_writer(&input[..], &mut tracker, &mut publisher).await;

        assert_eq!(summary.lines, 7);
        // First line writes (nothing written yet), then only >= 99.9% lines
        // get past the long interval, then the final record.
        let lines: Vec<String> = publisher.published.iter().map(JobStatus::to_line).collect();
        assert_eq!(
            lines,
            vec![
                "clip|0.00|0\n",
                "clip|100.00|100\n",
                "clip|100.00|100\n",
                "clip|100.00|100\n",
            ]
        );
        assert_eq!(summary.writes, 4);
    }

    #[tokio::test]
    async fn test_non_utf8_input_does_not_stop_stream() {
        let input = b"\xff\xfe\nout_time_us=5000000\n";
        let mut tracker = ProgressTracker::new("", 10.0, Duration::ZERO);
        let mut publisher = RecordingPublisher::default();

        run_writer(&input[..], &mut tracker, &mut publisher).await;

        assert!(publisher
            .published
            .iter()
            .any(|s| s.current_seconds == 5 && s.percent == 50.0));
    }

    #[tokio::test]
    async fn test_final_record_on_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("job_1.txt");
        let mut tracker = ProgressTracker::new("job1", 3600.0, DEFAULT_WRITE_INTERVAL);
        let mut publisher = FilePublisher::new(&path);

        let input = b"out_time_us=1800000000\n";
        let summary = run_writer(&input[..], &mut tracker, &mut publisher).await;

        assert_eq!(summary.failed_writes, 0);
        assert_eq!(
            tokio::fs::read_to_string(&path).await.unwrap(),
            "job1|100.00|3600\n"
        );
    }
}
