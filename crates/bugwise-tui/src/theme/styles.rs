//! Semantic style builders.

use bugwise_app::state::ServiceStatus;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn section_heading() -> Style {
    Style::default()
        .fg(palette::SECTION_HEADING)
        .add_modifier(Modifier::BOLD)
}

pub fn code() -> Style {
    Style::default().fg(palette::CODE_FG)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn error_banner() -> Style {
    Style::default()
        .fg(palette::STATUS_RED)
        .add_modifier(Modifier::BOLD)
}

/// "Black on Cyan" - highlighted history row and enabled button
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

/// `(icon, label, Style)` for the service reachability indicator
pub fn service_indicator(status: &ServiceStatus) -> (&'static str, &'static str, Style) {
    match status {
        ServiceStatus::Online { .. } => (
            "●",
            "Online",
            Style::default()
                .fg(palette::STATUS_GREEN)
                .add_modifier(Modifier::BOLD),
        ),
        ServiceStatus::Offline => ("✗", "Offline", Style::default().fg(palette::STATUS_RED)),
        ServiceStatus::Unknown => (
            "○",
            "Checking",
            Style::default().fg(palette::STATUS_YELLOW),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_styles_have_correct_colors() {
        assert_eq!(text_primary().fg, Some(palette::TEXT_PRIMARY));
        assert_eq!(text_secondary().fg, Some(palette::TEXT_SECONDARY));
        assert_eq!(text_muted().fg, Some(palette::TEXT_MUTED));
    }

    #[test]
    fn test_border_styles_have_correct_colors() {
        assert_eq!(border_inactive().fg, Some(palette::BORDER_DIM));
        assert_eq!(border_active().fg, Some(palette::BORDER_ACTIVE));
    }

    #[test]
    fn test_service_indicator_labels() {
        let online = ServiceStatus::Online {
            message: "up".into(),
        };
        assert_eq!(service_indicator(&online).1, "Online");
        assert_eq!(service_indicator(&ServiceStatus::Offline).1, "Offline");
        let (_, label, style) = service_indicator(&ServiceStatus::Unknown);
        assert_eq!(label, "Checking");
        assert_eq!(style.fg, Some(palette::STATUS_YELLOW));
    }
}
