//! History refresh and selection handlers

use bugwise_core::prelude::*;
use bugwise_core::HistoryEntry;

use super::{UpdateAction, UpdateResult};
use crate::state::AppState;

/// Issue a new, numbered history refresh.
pub(crate) fn handle_refresh(state: &mut AppState) -> UpdateResult {
    let seq = state.history_view.next_request();
    debug!("Refreshing history (#{})", seq);
    UpdateResult::action(UpdateAction::FetchHistory { seq })
}

pub(crate) fn handle_history_loaded(
    state: &mut AppState,
    seq: u64,
    entries: Vec<HistoryEntry>,
) -> UpdateResult {
    if state.history_view.apply(seq, &entries) {
        debug!("History #{} rendered with {} entries", seq, entries.len());
    }
    UpdateResult::none()
}

/// Show a stored analysis. Goes straight to the result view and cache; no request.
pub(crate) fn handle_select(state: &mut AppState, index: usize) -> UpdateResult {
    match state.history_view.activate(index) {
        Some(analysis) => {
            state.result_view.render(&analysis);
            state.cache.save(&analysis);
            debug!("Activated history row {}", index);
        }
        None => debug!("History row {} is not selectable", index),
    }
    UpdateResult::none()
}
