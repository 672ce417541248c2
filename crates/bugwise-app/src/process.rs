//! Message processing
//!
//! Runs a message and its follow-ups through the TEA update function and
//! hands each resulting action to the spawner.

use std::sync::Arc;

use bugwise_client::AnalysisApi;
use tokio::sync::mpsc;

use crate::handler;
use crate::message::Message;
use crate::state::AppState;

use super::actions::handle_action;

/// Process a message through the TEA update function
pub fn process_message<A>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    api: &Arc<A>,
) where
    A: AnalysisApi + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), Arc::clone(api));
        }

        msg = result.message;
    }
}
