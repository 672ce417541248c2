//! OS signals mapped onto `Message::Quit`
//!
//! In-flight analysis and history requests are not awaited; their tasks are
//! abandoned with the runtime.

use std::fmt;

use bugwise_core::prelude::*;
use tokio::sync::mpsc;

use crate::message::Message;

/// Signal that ended the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    Interrupt,
    Terminate,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShutdownSignal::Interrupt => f.write_str("SIGINT"),
            ShutdownSignal::Terminate => f.write_str("SIGTERM"),
        }
    }
}

/// Spawn a task that turns the first shutdown signal into `Message::Quit`
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        let signal = match wait_for_signal().await {
            Ok(signal) => signal,
            Err(e) => {
                error!("Signal handler error: {}", e);
                return;
            }
        };

        info!("{} received, abandoning outstanding requests", signal);
        if tx.send(Message::Quit).await.is_err() {
            debug!("Engine already gone when {} arrived", signal);
        }
    });
}

#[cfg(unix)]
async fn wait_for_signal() -> Result<ShutdownSignal> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint = signal(SignalKind::interrupt())
        .map_err(|e| Error::terminal(format!("Failed to create SIGINT handler: {}", e)))?;
    let mut sigterm = signal(SignalKind::terminate())
        .map_err(|e| Error::terminal(format!("Failed to create SIGTERM handler: {}", e)))?;

    Ok(tokio::select! {
        _ = sigint.recv() => ShutdownSignal::Interrupt,
        _ = sigterm.recv() => ShutdownSignal::Terminate,
    })
}

#[cfg(windows)]
async fn wait_for_signal() -> Result<ShutdownSignal> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("Failed to listen for Ctrl+C: {}", e)))?;
    Ok(ShutdownSignal::Interrupt)
}
