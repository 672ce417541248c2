//! Submission state machine: Idle → Validating → Submitting → Success | Failed → Idle

use bugwise_client::{SubmitError, SubmitRequest};
use bugwise_core::prelude::*;
use bugwise_core::{Analysis, ErrorKind};

use super::{UpdateAction, UpdateResult};
use crate::state::{
    AppState, SubmissionOutcome, SubmissionPhase, BUG_TEXT_REQUIRED_MESSAGE,
    BUG_TEXT_TOO_LONG_MESSAGE, GENERIC_ERROR_MESSAGE, MAX_BUG_TEXT_CHARS,
};

/// Build the request from raw form input, or the banner message explaining why not.
pub(crate) fn validate_input(
    bug_text: &str,
    language: &str,
    context: Option<&str>,
) -> std::result::Result<SubmitRequest, &'static str> {
    let bug_text = bug_text.trim();
    if bug_text.is_empty() {
        return Err(BUG_TEXT_REQUIRED_MESSAGE);
    }
    if bug_text.chars().count() > MAX_BUG_TEXT_CHARS {
        return Err(BUG_TEXT_TOO_LONG_MESSAGE);
    }

    let language = Some(language.trim())
        .filter(|l| !l.is_empty())
        .map(str::to_string);
    let context = context
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string);

    Ok(SubmitRequest::new(bug_text, language).with_context(context))
}

/// User triggered the submit control.
pub(crate) fn handle_submit(state: &mut AppState) -> UpdateResult {
    if !state.submission.control_enabled() {
        debug!("Submit ignored: a request is already outstanding");
        return UpdateResult::none();
    }

    state.hide_error();
    state.submission.transition(SubmissionPhase::Validating);

    let request = match validate_input(&state.bug_text, &state.language, state.context.as_deref())
    {
        Ok(request) => request,
        Err(message) => {
            state.submission.transition(SubmissionPhase::Failed);
            info!("{}: {}", ErrorKind::ValidationError, message);
            state.show_error(message);
            state.submission.last_outcome = Some(SubmissionOutcome::Failed {
                kind: ErrorKind::ValidationError,
                detail: message.to_string(),
            });
            state.submission.transition(SubmissionPhase::Idle);
            return UpdateResult::none();
        }
    };

    state.result_view.hide();
    state.submission.busy_frame = 0;
    state.submission.transition(SubmissionPhase::Submitting);
    info!(
        "Submitting bug for analysis ({} chars, language={:?})",
        request.bug_text.chars().count(),
        request.language
    );

    UpdateResult::action(UpdateAction::SubmitAnalysis { request })
}

/// The outstanding analysis request finished.
pub(crate) fn handle_submit_completed(
    state: &mut AppState,
    result: std::result::Result<Analysis, SubmitError>,
) -> UpdateResult {
    if !state.submission.is_busy() {
        warn!("Analysis completion arrived with no request outstanding; ignoring");
        return UpdateResult::none();
    }

    match result {
        Ok(analysis) => {
            state.submission.transition(SubmissionPhase::Success);

            // Order matters: render, persist, then refresh history
            state.result_view.render(&analysis);
            state.cache.save(&analysis);
            let seq = state.history_view.next_request();

            state.submission.last_outcome = Some(SubmissionOutcome::Succeeded);
            state.submission.transition(SubmissionPhase::Idle);
            info!("Analysis received ({} fix steps)", analysis.fix_steps.len());

            UpdateResult::action(UpdateAction::FetchHistory { seq })
        }
        Err(e) => {
            state.submission.transition(SubmissionPhase::Failed);
            error!("Analysis request failed [{}]: {}", e.kind(), e);

            state.show_error(GENERIC_ERROR_MESSAGE);
            state.submission.last_outcome = Some(SubmissionOutcome::Failed {
                kind: e.kind(),
                detail: e.to_string(),
            });
            state.submission.transition(SubmissionPhase::Idle);

            UpdateResult::none()
        }
    }
}
