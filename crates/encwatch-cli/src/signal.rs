//! Interrupt handling for the monitor.

use std::future::Future;

use tracing::warn;

/// Install the interrupt listener now and return a future that resolves on Ctrl-C.
///
/// The handler is registered before this returns, so an interrupt that lands
/// before the future is first polled is still delivered to it instead of
/// killing the process.
pub fn shutdown_signal() -> impl Future<Output = ()> {
    #[cfg(unix)]
    let listener = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::interrupt());

    async move {
        #[cfg(unix)]
        match listener {
            Ok(mut sigint) => {
                sigint.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for interrupt: {}", e);
                std::future::pending::<()>().await;
            }
        }

        #[cfg(not(unix))]
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for interrupt: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
