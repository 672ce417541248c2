//! Submission form: bug text, language hint and the submit control

use bugwise_app::state::{AppState, Focus};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{palette, styles};

/// Busy indicator frames, advanced once per tick
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const CURSOR: &str = "▏";

/// The input form. Reads everything it needs from `AppState`.
pub struct BugForm<'a> {
    state: &'a AppState,
}

impl<'a> BugForm<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn render_input(
        &self,
        title: &str,
        value: &str,
        focused: bool,
        placeholder: &str,
        area: Rect,
        buf: &mut Buffer,
    ) {
        let block = styles::glass_block(focused).title(Span::styled(
            format!(" {} ", title),
            if focused {
                styles::accent_bold()
            } else {
                styles::text_secondary()
            },
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = if value.is_empty() && !focused {
            vec![Line::from(Span::styled(
                placeholder.to_string(),
                styles::text_muted(),
            ))]
        } else {
            // Keep the end of long input (where the cursor is) on screen
            let capacity = (inner.width as usize * inner.height as usize).saturating_sub(1);
            let count = value.chars().count();
            let visible: String = value.chars().skip(count.saturating_sub(capacity)).collect();
            input_lines(&visible, focused)
        };

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }

    fn render_button_row(&self, area: Rect, buf: &mut Buffer) {
        let submission = &self.state.submission;
        let label = format!(" {} ", submission.button_label());

        let mut spans = vec![Span::raw(" ")];
        if submission.control_enabled() {
            spans.push(Span::styled(label, styles::focused_selected()));
        } else {
            spans.push(Span::styled(
                label,
                Style::default()
                    .fg(palette::TEXT_MUTED)
                    .add_modifier(Modifier::DIM),
            ));
            let frame = SPINNER_FRAMES[submission.busy_frame % SPINNER_FRAMES.len()];
            spans.push(Span::styled(format!(" {}", frame), styles::accent_bold()));
        }

        let chars = self.state.bug_text.chars().count();
        spans.push(Span::styled(
            format!("   {} chars", chars),
            styles::text_muted(),
        ));

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

/// One line per pasted line, cursor after the last
fn input_lines(visible: &str, focused: bool) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = visible
        .split('\n')
        .map(|line| Line::from(Span::styled(line.to_string(), styles::text_primary())))
        .collect();
    if focused {
        if let Some(last) = lines.last_mut() {
            last.push_span(Span::styled(CURSOR, styles::accent_bold()));
        }
    }
    lines
}

impl Widget for BugForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::vertical([
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

        self.render_input(
            "Bug",
            &self.state.bug_text,
            self.state.focus == Focus::BugText,
            "Paste an error message or describe the bug",
            rows[0],
            buf,
        );
        self.render_input(
            "Language (optional)",
            &self.state.language,
            self.state.focus == Focus::Language,
            "e.g. python",
            rows[1],
            buf,
        );
        self.render_button_row(rows[2], buf);
    }
}
