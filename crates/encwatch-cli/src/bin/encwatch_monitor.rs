//! Live terminal table over a directory of job status files.

use clap::Parser;

use encwatch_cli::{init_tracing, shutdown_signal, MonitorArgs};
use encwatch_monitor::run_monitor;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = MonitorArgs::parse();
    init_tracing();

    let config = args.into_config();

    // Registered before the first scan so an early Ctrl-C still stops cleanly.
    let shutdown = shutdown_signal();

    let mut stdout = std::io::stdout().lock();
    run_monitor(&config, &mut stdout, shutdown).await?;

    Ok(())
}
