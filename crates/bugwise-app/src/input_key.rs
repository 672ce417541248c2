//! Abstract input key event, independent of terminal library.
//!
//! The TUI converts crossterm key events into `InputKey` at its boundary so
//! the update logic (and the headless runner) never depends on crossterm.

/// Keys the application reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Printable character
    Char(char),
    /// Character with Ctrl held (Ctrl+C, Ctrl+R, ...)
    CharCtrl(char),

    Up,
    Down,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,

    /// Function key (F1-F12)
    F(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_is_distinct_from_plain_char() {
        assert_ne!(InputKey::CharCtrl('c'), InputKey::Char('c'));
    }
}
