//! Terminal setup and restoration

use std::io;

use bugwise_core::prelude::*;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};

/// Enter the alternate screen with bracketed paste on, so a pasted stack
/// trace arrives as one event instead of a stream of keys and Enters
pub fn init() -> Result<ratatui::DefaultTerminal> {
    let terminal = ratatui::init();
    crossterm::execute!(io::stdout(), EnableBracketedPaste)?;
    Ok(terminal)
}

/// Undo [`init`]
pub fn restore() {
    if let Err(e) = crossterm::execute!(io::stdout(), DisableBracketedPaste) {
        warn!("Failed to disable bracketed paste: {}", e);
    }
    ratatui::restore();
}

/// Install a panic hook that puts the terminal back before the panic is reported
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore();
        error!("Panic: {}", panic_info);
        original_hook(panic_info);
    }));
}
