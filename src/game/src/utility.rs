use tokio::sync::broadcast;
use tracing::{error, info};

/// Fires once on Ctrl-C. Every listener should `resubscribe` from the returned receiver.
pub async fn create_shutdown_channel() -> broadcast::Receiver<()> {
    let (shutdown_sender, shutdown_receiver) = broadcast::channel::<()>(1);
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for ctrl-c: {}", e);
            // Keep the sender alive so listeners don't see a closed channel
            std::future::pending::<()>().await;
        }
        info!("Signal received, shutting down");
        let _ = shutdown_sender.send(());
    });
    shutdown_receiver
}
