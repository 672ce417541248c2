//! History list widget

use bugwise_app::{HistoryRow, HistoryView};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use crate::theme::styles;

/// Past analyses, newest first. Highlights the selected row when focused.
pub struct HistoryList<'a> {
    view: &'a HistoryView,
    focused: bool,
}

impl<'a> HistoryList<'a> {
    pub fn new(view: &'a HistoryView, focused: bool) -> Self {
        Self { view, focused }
    }

    fn item(row: &HistoryRow) -> ListItem<'static> {
        match row {
            HistoryRow::Placeholder(text) => {
                ListItem::new(Line::from(Span::styled(text.clone(), styles::text_muted())))
            }
            HistoryRow::Entry {
                label, created_at, ..
            } => {
                let mut lines = vec![Line::from(Span::styled(label.clone(), styles::text_primary()))];
                if let Some(at) = created_at {
                    lines.push(Line::from(Span::styled(
                        format!("  {}", at),
                        styles::text_muted(),
                    )));
                }
                ListItem::new(lines)
            }
        }
    }
}

impl Widget for HistoryList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).title(" History ");
        let inner = block.inner(area);
        block.render(area, buf);

        if !self.view.is_loaded() {
            Paragraph::new(Span::styled("Loading…", styles::text_muted())).render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = self.view.rows().iter().map(Self::item).collect();
        let mut list = List::new(items);
        let mut list_state = ListState::default();

        if self.focused && self.view.selectable_count() > 0 {
            list = list.highlight_style(styles::focused_selected());
            list_state.select(Some(self.view.selected()));
        }

        StatefulWidget::render(list, inner, buf, &mut list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use bugwise_core::HistoryEntry;

    fn entry(bug_text: &str, language: Option<&str>, created_at: Option<&str>) -> HistoryEntry {
        HistoryEntry {
            bug_text: bug_text.into(),
            language: language.map(str::to_string),
            created_at: created_at.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_not_loaded_shows_loading() {
        let view = HistoryView::new();
        let mut term = TestTerminal::with_size(50, 8);
        term.render_widget(HistoryList::new(&view, false), term.area());
        assert!(term.buffer_contains("Loading…"));
    }

    #[test]
    fn test_empty_history_shows_placeholder() {
        let mut view = HistoryView::new();
        view.render(&[]);
        let mut term = TestTerminal::with_size(50, 8);
        term.render_widget(HistoryList::new(&view, true), term.area());
        assert!(term.buffer_contains("No bugs yet."));
    }

    #[test]
    fn test_rows_in_server_order_with_timestamps() {
        let mut view = HistoryView::new();
        view.render(&[
            entry("index out of range", Some("go"), Some("2024-03-01T12:30:00")),
            entry("segfault", None, None),
        ]);

        let mut term = TestTerminal::with_size(60, 10);
        term.render_widget(HistoryList::new(&view, false), term.area());

        let first = term.find_line("go – index out of range…").unwrap();
        let second = term.find_line("Unknown – segfault…").unwrap();
        assert!(first < second);
        assert!(term.buffer_contains("2024-03-01 12:30 UTC"));
    }
}
