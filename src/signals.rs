use tracing::{error, info};

#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};

/// Signal that ended the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    /// SIGTERM
    Terminate,
    /// SIGINT / Ctrl+C
    Interrupt,
}

/// Resolve once the process is asked to stop
///
/// Handles:
/// - SIGTERM: graceful shutdown
/// - SIGINT: graceful shutdown
#[cfg(unix)]
pub async fn shutdown_signal() -> ShutdownSignal {
    let mut sigterm = match signal(SignalKind::terminate()) {
        Ok(sigterm) => sigterm,
        Err(e) => {
            error!("Failed to setup SIGTERM handler: {}", e);
            return wait_for_ctrl_c().await;
        }
    };

    tokio::select! {
        _ = sigterm.recv() => {
            info!("SIGTERM received, initiating graceful shutdown");
            ShutdownSignal::Terminate
        }
        signal = wait_for_ctrl_c() => signal,
    }
}

/// On Windows, only Ctrl+C is supported
#[cfg(not(unix))]
pub async fn shutdown_signal() -> ShutdownSignal {
    wait_for_ctrl_c().await
}

async fn wait_for_ctrl_c() -> ShutdownSignal {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("SIGINT received, initiating graceful shutdown"),
        Err(e) => {
            // Without a signal source the server can only be stopped by killing it
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    }
    ShutdownSignal::Interrupt
}
