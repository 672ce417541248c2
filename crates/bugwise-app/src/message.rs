//! Message types for the application (TEA pattern)

use bugwise_client::{HealthStatus, SubmitError};
use bugwise_core::{Analysis, HistoryEntry};

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (busy spinner)
    Tick,

    /// Quit immediately (Ctrl+C, Esc, signal handler)
    Quit,

    /// Startup: restore the cached analysis and load history
    Init,

    // ─────────────────────────────────────────────────────────
    // Form Messages
    // ─────────────────────────────────────────────────────────
    /// Move focus to the next field
    FocusNext,
    /// Move focus to the previous field
    FocusPrevious,
    /// Type a character into the focused input
    InputChar(char),
    /// Delete the last character of the focused input
    InputBackspace,
    /// Clear the focused input
    ClearInput,
    /// Bracketed paste into the focused input (may span lines)
    InputPaste(String),

    // ─────────────────────────────────────────────────────────
    // Submission Messages
    // ─────────────────────────────────────────────────────────
    /// User triggered the submit control
    Submit,
    /// Analysis request finished
    SubmitCompleted {
        result: Result<Analysis, SubmitError>,
    },

    // ─────────────────────────────────────────────────────────
    // History Messages
    // ─────────────────────────────────────────────────────────
    /// Request a fresh history listing
    RefreshHistory,
    /// History listing arrived for refresh number `seq`
    HistoryLoaded {
        seq: u64,
        entries: Vec<HistoryEntry>,
    },
    /// Move the history highlight up
    HistoryUp,
    /// Move the history highlight down
    HistoryDown,
    /// Activate a history row
    SelectHistoryEntry(usize),

    // ─────────────────────────────────────────────────────────
    // Cache / Service Messages
    // ─────────────────────────────────────────────────────────
    /// Forget the cached analysis
    ClearCache,
    /// Probe the service health endpoint
    CheckHealth,
    /// Health probe finished
    HealthChecked {
        result: Result<HealthStatus, SubmitError>,
    },
}
