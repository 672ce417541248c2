//! Terminal event polling

use bugwise_app::message::Message;
use bugwise_app::InputKey;
use bugwise_core::prelude::*;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use std::time::Duration;

/// Poll timeout; also the spinner tick interval
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::F(n) => Some(InputKey::F(n)),
        _ => None,
    }
}

/// Poll for terminal events, producing a tick when nothing arrives
pub fn poll() -> Result<Option<Message>> {
    if !event::poll(POLL_INTERVAL)? {
        return Ok(Some(Message::Tick));
    }

    Ok(event_to_message(event::read()?))
}

/// Map one terminal event to a message. Releases and repeats are dropped.
pub fn event_to_message(event: Event) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == event::KeyEventKind::Press => {
            key_event_to_input(key).map(Message::Key)
        }
        // Requires bracketed paste; otherwise each pasted newline arrives as Enter
        Event::Paste(text) => Some(Message::InputPaste(text)),
        _ => None,
    }
}
