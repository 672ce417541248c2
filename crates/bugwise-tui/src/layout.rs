//! Screen layout definitions for the TUI
//!
//! Stacks header, form, optional error banner and optional status bar
//! vertically; the remaining body is split between the result panel and
//! the history list.

use ratatui::layout::{Constraint, Layout, Rect};

/// Rows taken by the header (borders + title)
pub const HEADER_HEIGHT: u16 = 3;
/// Rows taken by the form (bug text box, language box, button row)
pub const FORM_HEIGHT: u16 = 9;
/// Rows taken by the error banner when shown
pub const ERROR_HEIGHT: u16 = 1;
/// Rows taken by the status bar when shown
pub const STATUS_HEIGHT: u16 = 2;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    pub form: Rect,
    /// Zero-height when the banner is hidden
    pub error: Rect,
    pub result: Rect,
    pub history: Rect,
    /// Zero-height when the status bar is disabled
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect, show_error: bool, show_status: bool) -> ScreenAreas {
    let constraints = [
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(FORM_HEIGHT),
        Constraint::Length(if show_error { ERROR_HEIGHT } else { 0 }),
        Constraint::Min(3),
        Constraint::Length(if show_status { STATUS_HEIGHT } else { 0 }),
    ];
    let chunks = Layout::vertical(constraints).split(area);

    let body = Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[3]);

    ScreenAreas {
        header: chunks[0],
        form: chunks[1],
        error: chunks[2],
        result: body[0],
        history: body[1],
        status: chunks[4],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_without_banner_or_status() {
        let area = Rect::new(0, 0, 80, 30);
        let layout = create(area, false, false);

        assert_eq!(layout.header.height, HEADER_HEIGHT);
        assert_eq!(layout.form.y, HEADER_HEIGHT);
        assert_eq!(layout.error.height, 0);
        assert_eq!(layout.status.height, 0);
        assert_eq!(layout.result.height, 30 - HEADER_HEIGHT - FORM_HEIGHT);
    }

    #[test]
    fn test_layout_with_banner_and_status() {
        let area = Rect::new(0, 0, 80, 30);
        let layout = create(area, true, true);

        assert_eq!(layout.error.height, ERROR_HEIGHT);
        assert_eq!(layout.status.height, STATUS_HEIGHT);
        assert_eq!(
            layout.header.height
                + layout.form.height
                + layout.error.height
                + layout.result.height
                + layout.status.height,
            area.height
        );
    }

    #[test]
    fn test_body_split_side_by_side() {
        let area = Rect::new(0, 0, 100, 30);
        let layout = create(area, false, true);

        assert_eq!(layout.result.y, layout.history.y);
        assert_eq!(layout.result.width + layout.history.width, 100);
        assert!(layout.result.width > layout.history.width);
    }
}
