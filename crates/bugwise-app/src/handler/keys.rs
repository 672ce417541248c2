//! Key event handlers for the form and the history list

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus};

/// Convert key events to messages based on current focus
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Global bindings first
    match key {
        InputKey::CharCtrl('c') | InputKey::Esc => return Some(Message::Quit),
        InputKey::CharCtrl('r') => return Some(Message::RefreshHistory),
        InputKey::CharCtrl('k') => return Some(Message::ClearCache),
        InputKey::Tab => return Some(Message::FocusNext),
        InputKey::BackTab => return Some(Message::FocusPrevious),
        InputKey::F(5) => return Some(Message::CheckHealth),
        _ => {}
    }

    match state.focus {
        Focus::BugText | Focus::Language => handle_key_input(key),
        Focus::History => handle_key_history(state, key),
    }
}

/// Handle key events while a text input has focus
fn handle_key_input(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char(c) => Some(Message::InputChar(c)),
        InputKey::Backspace => Some(Message::InputBackspace),

        // Clear all input
        InputKey::CharCtrl('u') => Some(Message::ClearInput),

        // Enter triggers the submit control from either field
        InputKey::Enter => Some(Message::Submit),

        _ => None,
    }
}

/// Handle key events while the history list has focus
fn handle_key_history(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('k') | InputKey::Up => Some(Message::HistoryUp),
        InputKey::Char('j') | InputKey::Down => Some(Message::HistoryDown),
        InputKey::Enter | InputKey::Char(' ') => {
            if state.history_view.selectable_count() > 0 {
                Some(Message::SelectHistoryEntry(state.history_view.selected()))
            } else {
                None
            }
        }
        _ => None,
    }
}
