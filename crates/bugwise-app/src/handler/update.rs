//! Main update function - handles state transitions (TEA pattern)

use bugwise_core::prelude::*;

use super::{history, keys, submission, UpdateAction, UpdateResult};
use crate::message::Message;
use crate::state::{AppPhase, AppState, Focus, ServiceStatus};

/// Process a message and update state
/// Returns an optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match keys::handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            if state.submission.is_busy() {
                state.submission.busy_frame = state.submission.busy_frame.wrapping_add(1);
            }
            UpdateResult::none()
        }

        Message::Init => {
            if let Some(analysis) = state.cache.load() {
                info!("Restored cached analysis");
                state.result_view.render(&analysis);
            }
            let seq = state.history_view.next_request();
            UpdateResult {
                message: Some(Message::CheckHealth),
                action: Some(UpdateAction::FetchHistory { seq }),
            }
        }

        // ─────────────────────────────────────────────────────────
        // Form Messages
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            state.focus = state.focus.next();
            UpdateResult::none()
        }

        Message::FocusPrevious => {
            state.focus = state.focus.previous();
            UpdateResult::none()
        }

        Message::InputChar(c) => {
            if let Some(input) = state.focused_input_mut() {
                input.push(c);
            }
            UpdateResult::none()
        }

        Message::InputBackspace => {
            if let Some(input) = state.focused_input_mut() {
                input.pop();
            }
            UpdateResult::none()
        }

        Message::ClearInput => {
            if let Some(input) = state.focused_input_mut() {
                input.clear();
            }
            UpdateResult::none()
        }

        // Pasted newlines never submit
        Message::InputPaste(text) => {
            let multiline = state.focus == Focus::BugText;
            if let Some(input) = state.focused_input_mut() {
                input.push_str(&normalize_paste(&text, multiline));
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Submission Messages
        // ─────────────────────────────────────────────────────────
        Message::Submit => submission::handle_submit(state),

        Message::SubmitCompleted { result } => submission::handle_submit_completed(state, result),

        // ─────────────────────────────────────────────────────────
        // History Messages
        // ─────────────────────────────────────────────────────────
        Message::RefreshHistory => history::handle_refresh(state),

        Message::HistoryLoaded { seq, entries } => {
            history::handle_history_loaded(state, seq, entries)
        }

        Message::HistoryUp => {
            state.history_view.select_previous();
            UpdateResult::none()
        }

        Message::HistoryDown => {
            state.history_view.select_next();
            UpdateResult::none()
        }

        Message::SelectHistoryEntry(index) => history::handle_select(state, index),

        // ─────────────────────────────────────────────────────────
        // Cache / Service Messages
        // ─────────────────────────────────────────────────────────
        Message::ClearCache => {
            state.cache.clear();
            info!("Cleared cached analysis");
            UpdateResult::none()
        }

        Message::CheckHealth => UpdateResult::action(UpdateAction::CheckHealth),

        Message::HealthChecked { result } => {
            state.service_status = match result {
                Ok(health) if health.is_ok() => ServiceStatus::Online {
                    message: health.message,
                },
                Ok(health) => {
                    warn!("Service reported status '{}'", health.status);
                    ServiceStatus::Offline
                }
                Err(e) => {
                    debug!("Health check failed: {}", e);
                    ServiceStatus::Offline
                }
            };
            UpdateResult::none()
        }
    }
}

/// Unify line endings; single-line inputs get spaces instead of line breaks
fn normalize_paste(text: &str, multiline: bool) -> String {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    if multiline {
        text
    } else {
        text.replace('\n', " ")
    }
}
