//! Main TUI runner - entry point and event loop

use bugwise_app::state::AppState;
use bugwise_app::Engine;
use bugwise_client::AnalysisApi;
use bugwise_core::prelude::*;

use crate::{event, render, terminal};

/// Run the TUI against `api` until the user quits
pub async fn run<A>(state: AppState, api: A) -> Result<()>
where
    A: AnalysisApi + Sync + 'static,
{
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    info!("Starting TUI against {}", state.base_url);
    let mut engine = Engine::new(state, api);

    let mut term = match terminal::init() {
        Ok(term) => term,
        Err(e) => {
            terminal::restore();
            return Err(e);
        }
    };

    // Restore cached analysis, kick off history load and health probe
    engine.start();

    let result = run_loop(&mut term, &mut engine);

    terminal::restore();
    info!("TUI exited");

    result
}

/// Main event loop: drain background results, draw, then wait for input
fn run_loop<A>(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine<A>) -> Result<()>
where
    A: AnalysisApi + Sync + 'static,
{
    while !engine.should_quit() {
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}
