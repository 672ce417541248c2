//! bugwise-app - Application state and orchestration for Bugwise
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state management:
//! the submission state machine, the result and history views, the persistent
//! last-analysis cache, configuration loading, and the Engine that wires the
//! update loop to the analysis service.

pub mod actions;
pub mod cache;
pub mod config;
pub mod engine;
pub mod handler;
pub mod history_view;
pub mod input_key;
pub mod message;
pub mod process;
pub mod result_view;
pub mod signals;
pub mod state;

// Re-export primary types
pub use cache::{FileStore, KeyValueStore, MemoryStore, PersistentCache, LAST_ANALYSIS_KEY};
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use history_view::{HistoryRow, HistoryView};
pub use input_key::InputKey;
pub use message::Message;
pub use result_view::ResultView;
pub use state::{AppState, Focus, SubmissionOutcome, SubmissionPhase};
