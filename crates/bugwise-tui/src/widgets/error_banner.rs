//! Inline error banner

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// One-line banner shown above the results when the last action failed
pub struct ErrorBanner<'a> {
    message: &'a str,
}

impl<'a> ErrorBanner<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }
}

impl Widget for ErrorBanner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(" ✗ ", styles::error_banner()),
            Span::styled(self.message.to_string(), styles::error_banner()),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}
