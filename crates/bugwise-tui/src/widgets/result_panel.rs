//! Result panel: explanation, root cause, fix steps, example code

use bugwise_app::ResultView;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::styles;

/// Renders the result region. Draws only the frame while the region is hidden.
pub struct ResultPanel<'a> {
    view: &'a ResultView,
    busy: bool,
}

impl<'a> ResultPanel<'a> {
    pub fn new(view: &'a ResultView) -> Self {
        Self { view, busy: false }
    }

    /// Show an "analyzing" hint in place of the hidden region
    pub fn busy(mut self, busy: bool) -> Self {
        self.busy = busy;
        self
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        lines.push(Line::from(Span::styled("Explanation", styles::section_heading())));
        lines.push(Line::from(self.view.explanation().to_string()));
        lines.push(Line::default());

        lines.push(Line::from(Span::styled("Root cause", styles::section_heading())));
        lines.push(Line::from(self.view.root_cause().to_string()));
        lines.push(Line::default());

        lines.push(Line::from(Span::styled("Fix steps", styles::section_heading())));
        for (i, step) in self.view.fix_steps().iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!("{:>2}. ", i + 1), styles::accent_bold()),
                Span::raw(step.clone()),
            ]));
        }
        lines.push(Line::default());

        lines.push(Line::from(Span::styled("Example", styles::section_heading())));
        for code_line in self.view.example_code().lines() {
            lines.push(Line::from(Span::styled(code_line.to_string(), styles::code())));
        }

        lines
    }
}

impl Widget for ResultPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(" Analysis ");
        let inner = block.inner(area);
        block.render(area, buf);

        if !self.view.is_visible() {
            if self.busy {
                Paragraph::new(Span::styled("Analyzing…", styles::text_muted())).render(inner, buf);
            }
            return;
        }

        Paragraph::new(self.lines())
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
