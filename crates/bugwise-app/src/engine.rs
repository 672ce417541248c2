//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the TEA state, the unified message channel and the
//! analysis service handle. Frontends feed it messages and read `state`.

use std::sync::Arc;

use bugwise_client::AnalysisApi;
use tokio::sync::mpsc;

use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;

/// Capacity of the unified message channel
const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine for Bugwise.
///
/// Encapsulates everything shared between the TUI and headless runners:
/// - TEA state management
/// - Message channel
/// - Analysis service handle
pub struct Engine<A> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, terminal events).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    api: Arc<A>,
}

impl<A> Engine<A>
where
    A: AnalysisApi + Sync + 'static,
{
    /// Create a new Engine around `state`.
    ///
    /// Must be called inside a tokio runtime: spawns the signal handler.
    pub fn new(state: AppState, api: A) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);

        signals::spawn_signal_handler(msg_tx.clone());

        Self {
            state,
            msg_tx,
            msg_rx,
            api: Arc::new(api),
        }
    }

    /// Run the startup sequence: restore the cached analysis, load history,
    /// probe the service.
    pub fn start(&mut self) {
        self.process_message(Message::Init);
    }

    /// Process a single message through the TEA update cycle.
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(&mut self.state, msg, &self.msg_tx, &self.api);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed. Used by the TUI runner
    /// which needs to drain all pending messages before rendering.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message and process it.
    ///
    /// Returns `false` once the channel has closed.
    pub async fn recv_and_process(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    pub fn api(&self) -> &Arc<A> {
        &self.api
    }
}
