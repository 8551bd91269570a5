//! Graceful shutdown on process signals.

use std::{fmt, io, time::Duration};

use salvo::server::ServerHandle;
use thiserror::Error;
use tokio::signal;
use tracing::info;

#[derive(Debug, Error)]
pub(crate) enum ShutdownSignalError {
    #[error("failed to install Ctrl+C handler: {0}")]
    CtrlC(#[source] io::Error),

    #[cfg(unix)]
    #[error("failed to install SIGTERM handler: {0}")]
    SigTerm(#[source] io::Error),
}

/// Signal that asked the server to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShutdownSignal {
    CtrlC,
    Terminate,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::CtrlC => "ctrl_c",
            Self::Terminate => "terminate",
        })
    }
}

/// Wait for a stop signal, then let in-flight requests drain for at most
/// `grace` before the server closes.
pub(crate) async fn listen(
    handle: ServerHandle,
    grace: Option<Duration>,
) -> Result<(), ShutdownSignalError> {
    let received = wait_for_signal().await?;

    info!(signal = %received, grace_secs = grace.map(|grace| grace.as_secs()), "shutting down");

    handle.stop_graceful(grace);

    Ok(())
}

#[cfg(unix)]
async fn wait_for_signal() -> Result<ShutdownSignal, ShutdownSignalError> {
    let mut terminate = signal::unix::signal(signal::unix::SignalKind::terminate())
        .map_err(ShutdownSignalError::SigTerm)?;

    tokio::select! {
        result = signal::ctrl_c() => {
            result.map_err(ShutdownSignalError::CtrlC)?;

            Ok(ShutdownSignal::CtrlC)
        }
        _ = terminate.recv() => Ok(ShutdownSignal::Terminate),
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() -> Result<ShutdownSignal, ShutdownSignalError> {
    signal::ctrl_c()
        .await
        .map_err(ShutdownSignalError::CtrlC)?;

    Ok(ShutdownSignal::CtrlC)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signals_render_as_log_labels() {
        assert_eq!(ShutdownSignal::CtrlC.to_string(), "ctrl_c");
        assert_eq!(ShutdownSignal::Terminate.to_string(), "terminate");
    }
}
