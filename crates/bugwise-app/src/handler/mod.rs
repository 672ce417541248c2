//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `submission`: Submit validation and completion (the submission state machine)
//! - `history`: History refresh, sequencing and selection
//! - `keys`: Key event handlers

pub(crate) mod history;
pub(crate) mod keys;
pub(crate) mod submission;
pub(crate) mod update;


use bugwise_client::SubmitRequest;

use crate::message::Message;

// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Send the analysis request
    SubmitAnalysis { request: SubmitRequest },

    /// Fetch the history listing; the response is tagged with `seq`
    FetchHistory { seq: u64 },

    /// Probe the service health endpoint
    CheckHealth,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
