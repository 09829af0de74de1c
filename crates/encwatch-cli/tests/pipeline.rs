//! End-to-end: writer binary fed a progress stream, read back by the scanner.

use std::process::Stdio;

use encwatch_monitor::{format_line, scan_status_dir};
use tempfile::TempDir;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

const FFMPEG_STREAM: &str = "\
frame=240
fps=48.00
out_time_us=10000000
out_time=00:00:10.000000
speed=2.0x
progress=continue
frame=480
out_time_us=20000000
out_time=00:00:20.000000
progress=continue
";

async fn run_writer_binary(args: &[&str], stdin: &str) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_encwatch-writer"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    let mut pipe = child.stdin.take().unwrap();
    pipe.write_all(stdin.as_bytes()).await.unwrap();
    drop(pipe);

    let status = child.wait().await.unwrap();
    assert!(status.success());
}

#[tokio::test]
async fn test_stream_closed_early_still_completes() {
    let dir = TempDir::new().unwrap();
    let job_file = dir.path().join("job_1.txt");

    run_writer_binary(
        &[
            "--duration",
            "40",
            "--job-file",
            job_file.to_str().unwrap(),
            "--name",
            "job1",
        ],
        FFMPEG_STREAM,
    )
    .await;

    assert_eq!(
        tokio::fs::read_to_string(&job_file).await.unwrap(),
        "job1|100.00|40\n"
    );

    let records = scan_status_dir(dir.path()).await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].file_name, "job_1.txt");
    assert!(format_line(&records[0]).ends_with("100.00%  40s"));
}

#[tokio::test]
async fn test_unnamed_jobs_listed_by_file_name() {
    let dir = TempDir::new().unwrap();

    for name in ["b.txt", "a.txt"] {
        let job_file = dir.path().join(name);
        run_writer_binary(
            &["--duration", "5", "--job-file", job_file.to_str().unwrap()],
            "",
        )
        .await;
    }

    let records = scan_status_dir(dir.path()).await;
    let labels: Vec<&str> = records.iter().map(|r| r.label()).collect();
    assert_eq!(labels, vec!["a.txt", "b.txt"]);
    assert!(records.iter().all(|r| r.status.current_seconds == 5));
}

#[tokio::test]
async fn test_name_with_delimiter_rejected_before_any_write() {
    let dir = TempDir::new().unwrap();
    let job_file = dir.path().join("job_1.txt");

    let status = Command::new(env!("CARGO_BIN_EXE_encwatch-writer"))
        .args([
            "--duration",
            "10",
            "--job-file",
            job_file.to_str().unwrap(),
            "--name",
            "a|b",
        ])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .unwrap();

    assert!(!status.success());
    assert!(!job_file.exists());
    assert!(scan_status_dir(dir.path()).await.is_empty());
}
