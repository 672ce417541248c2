//! Main render/view function (View in TEA pattern)


use bugwise_app::state::{AppState, Focus};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::theme::palette;
use crate::{layout, widgets};

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `state`: drawing never changes the model.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(
        area,
        state.error_message.is_some(),
        state.settings.ui.show_status_bar,
    );

    frame.render_widget(widgets::MainHeader::new(&state.base_url), areas.header);
    frame.render_widget(widgets::BugForm::new(state), areas.form);

    if let Some(message) = &state.error_message {
        frame.render_widget(widgets::ErrorBanner::new(message), areas.error);
    }

    frame.render_widget(
        widgets::ResultPanel::new(&state.result_view).busy(state.submission.is_busy()),
        areas.result,
    );
    frame.render_widget(
        widgets::HistoryList::new(&state.history_view, state.focus == Focus::History),
        areas.history,
    );

    if state.settings.ui.show_status_bar {
        frame.render_widget(widgets::StatusBar::new(state), areas.status);
    }
}
