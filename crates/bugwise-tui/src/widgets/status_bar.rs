//! Status bar widget
//!
//! Shows service reachability and the outcome of the last submission.

use bugwise_app::state::{AppState, ServiceStatus, SubmissionOutcome};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::theme::styles;

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn service_span(&self) -> Span<'static> {
        let (icon, label, style) = styles::service_indicator(&self.state.service_status);
        let text = match &self.state.service_status {
            ServiceStatus::Online { message } if !message.is_empty() => {
                format!("{} {} ({})", icon, label, message)
            }
            _ => format!("{} {}", icon, label),
        };
        Span::styled(text, style)
    }

    fn outcome_span(&self) -> Option<Span<'static>> {
        match self.state.submission.last_outcome.as_ref()? {
            SubmissionOutcome::Succeeded => {
                Some(Span::styled("last: ok", styles::text_secondary()))
            }
            // The failure class stays in the log; the banner already told the user
            SubmissionOutcome::Failed { .. } => {
                Some(Span::styled("last: failed", styles::text_secondary()))
            }
        }
    }

    fn build_segments(&self) -> Vec<Span<'static>> {
        let separator = Span::styled(" │ ", styles::text_muted());

        let mut segments = vec![Span::raw(" "), self.service_span()];

        if let Some(outcome) = self.outcome_span() {
            segments.push(separator.clone());
            segments.push(outcome);
        }

        segments.push(separator);
        segments.push(Span::styled(
            format!("{} in history", self.state.history_view.selectable_count()),
            styles::text_muted(),
        ));

        segments
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Top border acts as separator
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(styles::border_inactive());

        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(Line::from(self.build_segments())).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_state, TestTerminal};
    use bugwise_app::handler::update;
    use bugwise_app::message::Message;
    use bugwise_client::SubmitError;
    use bugwise_core::ErrorKind;

    #[test]
    fn test_status_bar_unknown_service() {
        let state = create_test_state();
        let mut term = TestTerminal::with_size(80, 2);
        term.render_widget(StatusBar::new(&state), term.area());
        assert!(term.buffer_contains("Checking"));
        assert!(term.buffer_contains("0 in history"));
    }

    #[test]
    fn test_status_bar_online_with_failed_outcome() {
        let mut state = create_test_state();
        state.service_status = ServiceStatus::Online {
            message: "Bugwise backend is running".into(),
        };
        state.submission.last_outcome = Some(SubmissionOutcome::Failed {
            kind: ErrorKind::RequestFailed,
            detail: "HTTP 500".into(),
        });

        let mut term = TestTerminal::with_size(100, 2);
        term.render_widget(StatusBar::new(&state), term.area());

        assert!(term.buffer_contains("Online (Bugwise backend is running)"));
        assert!(term.buffer_contains("last: failed"));
        assert!(!term.buffer_contains("request_failed"));
    }

    #[test]
    fn test_status_bar_never_names_failure_class() {
        let mut state = create_test_state();
        state.bug_text = "segfault".into();
        update(&mut state, Message::Submit);
        update(
            &mut state,
            Message::SubmitCompleted {
                result: Err(SubmitError::malformed("eof")),
            },
        );

        let mut term = TestTerminal::with_size(100, 2);
        term.render_widget(StatusBar::new(&state), term.area());

        assert!(term.buffer_contains("last: failed"));
        assert!(!term.buffer_contains("malformed_response"));
        assert!(!term.buffer_contains("eof"));
    }
}
