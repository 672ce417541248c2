//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use bugwise_client::AnalysisApi;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::message::Message;
use crate::UpdateAction;

/// Execute an action by spawning a background task.
///
/// Every task reports back through `msg_tx`; nothing here touches state.
pub fn handle_action<A>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, api: Arc<A>)
where
    A: AnalysisApi + Sync + 'static,
{
    match action {
        UpdateAction::SubmitAnalysis { request } => {
            tokio::spawn(async move {
                let result = api.submit(request).await;
                send_or_warn(&msg_tx, Message::SubmitCompleted { result }).await;
            });
        }

        UpdateAction::FetchHistory { seq } => {
            tokio::spawn(async move {
                let entries = api.fetch_history().await;
                debug!("History #{} fetched ({} entries)", seq, entries.len());
                send_or_warn(&msg_tx, Message::HistoryLoaded { seq, entries }).await;
            });
        }

        UpdateAction::CheckHealth => {
            tokio::spawn(async move {
                let result = api.health().await;
                send_or_warn(&msg_tx, Message::HealthChecked { result }).await;
            });
        }
    }
}

async fn send_or_warn(msg_tx: &mpsc::Sender<Message>, msg: Message) {
    if msg_tx.send(msg).await.is_err() {
        warn!("Message channel closed before background result was delivered");
    }
}
