//! Headless mode runner - drives the Engine without a terminal

use bugwise_app::message::Message;
use bugwise_app::state::{AppState, SubmissionOutcome};
use bugwise_app::Engine;
use bugwise_client::AnalysisApi;
use color_eyre::eyre::Result;
use tracing::{info, warn};

use super::{print_analysis, print_history, AnalyzeInput};

/// `bugwise analyze`: submit once and print the analysis.
///
/// Returns `Ok(false)` when the submission failed; the banner text has
/// already been written to stderr.
pub async fn run_analyze<A>(mut state: AppState, api: A, input: AnalyzeInput) -> Result<bool>
where
    A: AnalysisApi + Sync + 'static,
{
    state.bug_text = input.bug_text;
    state.language = input.language.unwrap_or_default();
    state.context = input.context;

    let mut engine = Engine::new(state, api);
    engine.process_message(Message::Submit);

    while engine.state.submission.is_busy() {
        if engine.should_quit() {
            warn!("Interrupted while waiting for analysis");
            return Ok(false);
        }
        if !engine.recv_and_process().await {
            break;
        }
    }

    match &engine.state.submission.last_outcome {
        Some(SubmissionOutcome::Succeeded) => {
            info!("Headless analysis succeeded");
            print_analysis(&engine.state.result_view.snapshot())?;
            Ok(true)
        }
        _ => {
            if let Some(message) = &engine.state.error_message {
                eprintln!("{}", message);
            }
            Ok(false)
        }
    }
}

/// `bugwise history`: fetch the history list and print one label per line
pub async fn run_history<A>(state: AppState, api: A) -> Result<()>
where
    A: AnalysisApi + Sync + 'static,
{
    let mut engine = Engine::new(state, api);
    engine.process_message(Message::RefreshHistory);

    while !engine.state.history_view.is_loaded() {
        if engine.should_quit() || !engine.recv_and_process().await {
            return Ok(());
        }
    }

    print_history(engine.state.history_view.rows())
}
