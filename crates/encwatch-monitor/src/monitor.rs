//! Polling loop.

use std::future::Future;
use std::io::Write;

use tracing::{debug, info};

use crate::config::MonitorConfig;
use crate::error::MonitorResult;
use crate::render::TerminalRenderer;
use crate::scanner::scan_status_dir;

/// Printed once when the loop is interrupted.
pub const SHUTDOWN_NOTICE: &str = "Monitor stopped";

/// Scan, render and sleep until `shutdown` resolves.
///
/// Each cycle starts from a fresh scan; only the renderer's line count
/// carries over. Returns the number of frames drawn.
pub async fn run_monitor<W, F>(
    config: &MonitorConfig,
    out: &mut W,
    shutdown: F,
) -> MonitorResult<u64>
where
    W: Write + ?Sized,
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    let mut renderer = TerminalRenderer::new(config.mode);
    let mut frames = 0u64;

    info!(
        dir = %config.dir.display(),
        refresh_ms = config.refresh.as_millis() as u64,
        mode = ?config.mode,
        "Monitor started"
    );

    loop {
        let frame = scan_status_dir(&config.dir).await;
        renderer.render(out, &frame)?;
        frames += 1;
        debug!(jobs = frame.len(), frame = frames, "Frame drawn");

        tokio::select! {
            _ = &mut shutdown => break,
            _ = tokio::time::sleep(config.refresh) => {}
        }
    }

    writeln!(out, "\n{SHUTDOWN_NOTICE}")?;
    out.flush()?;

    info!(frames, "Monitor stopped");
    Ok(frames)
}
