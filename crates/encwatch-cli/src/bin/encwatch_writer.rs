//! Status-file writer fed by FFmpeg `-progress` output on stdin.

use clap::Parser;
use tokio::io::BufReader;
use tracing::info;

use encwatch_cli::{init_tracing, WriterArgs};
use encwatch_progress::run_writer;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = WriterArgs::parse();
    init_tracing();

    let config = args.into_config();
    info!(
        job_file = %config.job_file.display(),
        name = %config.name,
        duration_secs = config.duration_secs,
        interval_ms = config.interval.as_millis() as u64,
        "Starting progress writer"
    );

    let mut tracker = config.tracker();
    let mut publisher = config.publisher();
    let stdin = BufReader::new(tokio::io::stdin());

    let summary = run_writer(stdin, &mut tracker, &mut publisher).await;
    info!(
        percent = summary.final_status.percent,
        writes = summary.writes,
        "Progress writer finished"
    );

    Ok(())
}
