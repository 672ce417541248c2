//! Header bar widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

/// Main header showing the app title, the service URL and keybindings
pub struct MainHeader<'a> {
    base_url: &'a str,
}

impl<'a> MainHeader<'a> {
    pub fn new(base_url: &'a str) -> Self {
        Self { base_url }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let line = Line::from(vec![
            Span::styled(" Bugwise", styles::accent_bold()),
            Span::styled(" │ ", styles::text_muted()),
            Span::styled(self.base_url.to_string(), styles::text_secondary()),
            Span::styled(
                "   [Tab] focus  [Enter] analyze  [^R] refresh  [^K] forget  [Esc] quit",
                styles::text_muted(),
            ),
        ]);
        Paragraph::new(line).render(inner, buf);
    }
}
