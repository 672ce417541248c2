//! Headless mode - one-shot commands that print to stdout instead of the TUI
//!
//! Each command drives the same Engine the TUI uses, so validation, caching
//! and error reporting behave identically. Results are printed as pretty
//! JSON (analyses) or one label per line (history).

pub mod runner;

use std::io::{self, Write};

use bugwise_app::state::AppState;
use bugwise_app::HistoryRow;
use bugwise_core::Analysis;

/// Arguments of `bugwise analyze`
#[derive(Debug, Clone)]
pub struct AnalyzeInput {
    pub bug_text: String,
    pub language: Option<String>,
    pub context: Option<String>,
}

/// Write `analysis` to stdout as pretty JSON
pub fn print_analysis(analysis: &Analysis) -> color_eyre::Result<()> {
    let json = serde_json::to_string_pretty(analysis)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    stdout.flush()?;
    Ok(())
}

/// Write each history row label to stdout, with its timestamp when known
pub fn print_history(rows: &[HistoryRow]) -> color_eyre::Result<()> {
    let mut stdout = io::stdout().lock();
    for row in rows {
        match row {
            HistoryRow::Entry {
                label,
                created_at: Some(at),
                ..
            } => writeln!(stdout, "{}  ({})", label, at)?,
            _ => writeln!(stdout, "{}", row.label())?,
        }
    }
    stdout.flush()?;
    Ok(())
}

/// `bugwise last`: print the cached analysis, or nothing when the slot is empty
pub fn print_last(state: &AppState) -> color_eyre::Result<()> {
    match state.cache.load() {
        Some(analysis) => print_analysis(&analysis),
        None => Ok(()),
    }
}
