//! Centralized theme for the Bugwise TUI.
//!
//! - `palette` - Raw color constants
//! - `styles` - Semantic style builder functions

pub mod palette;
pub mod styles;
