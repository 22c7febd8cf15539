//! Process lifecycle: graceful shutdown of the server task.
//!
//! The server stops on whichever fires first: ctrl-c from the operator
//! (`shutdown_signal`) or a programmatic `Shutdown::trigger`, which is how
//! the integration tests stop spawned servers.

use tokio::sync::broadcast;

/// Programmatic shutdown trigger.
///
/// `main` (or a test) holds the `Shutdown` and hands a subscription to
/// `HttpServer::run`; triggering it drains in-flight requests and stops
/// the accept loop.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscription for one server task.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Ask subscribed tasks to stop. Safe to call with no subscribers.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for the operator shutdown signal (ctrl-c).
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install ctrl-c handler");
        return;
    }
    tracing::info!("Shutdown signal received");
}
