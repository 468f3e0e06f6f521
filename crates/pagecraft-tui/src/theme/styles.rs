//! Semantic style builders

use pagecraft_core::AppStatus;
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

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_green() -> Style {
    Style::default().fg(palette::STATUS_GREEN)
}

pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn busy() -> Style {
    Style::default()
        .fg(palette::STATUS_YELLOW)
        .add_modifier(Modifier::BOLD)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// "Black on Cyan" - used for the focused field and selected items
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn bordered_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_inactive())
        .style(Style::default().bg(palette::POPUP_BG))
}

/// Status indicator for the header.
///
/// Returns `(icon_char, label, Style)` for the given AppStatus.
pub fn status_indicator(status: AppStatus) -> (&'static str, &'static str, Style) {
    match status {
        AppStatus::Setup => ("○", "Setup", Style::default().fg(palette::TEXT_MUTED)),
        AppStatus::Editing => (
            "●",
            "Editing",
            Style::default()
                .fg(palette::STATUS_GREEN)
                .add_modifier(Modifier::BOLD),
        ),
        AppStatus::Preview => (
            "◉",
            "Preview",
            Style::default()
                .fg(palette::ACCENT)
                .add_modifier(Modifier::BOLD),
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
    fn test_accent_bold_has_modifier() {
        let style = accent_bold();
        assert_eq!(style.fg, Some(palette::ACCENT));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_focused_selected_uses_black_on_cyan() {
        let style = focused_selected();
        assert_eq!(style.fg, Some(palette::CONTRAST_FG));
        assert_eq!(style.bg, Some(palette::ACCENT));
    }

    #[test]
    fn test_status_indicator_setup() {
        let (icon, label, style) = status_indicator(AppStatus::Setup);
        assert_eq!(icon, "○");
        assert_eq!(label, "Setup");
        assert_eq!(style.fg, Some(palette::TEXT_MUTED));
    }

    #[test]
    fn test_status_indicator_editing() {
        let (icon, label, style) = status_indicator(AppStatus::Editing);
        assert_eq!(icon, "●");
        assert_eq!(label, "Editing");
        assert_eq!(style.fg, Some(palette::STATUS_GREEN));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_status_indicator_all_statuses_covered() {
        for status in [AppStatus::Setup, AppStatus::Editing, AppStatus::Preview] {
            let (icon, label, _style) = status_indicator(status);
            assert!(!icon.is_empty());
            assert!(!label.is_empty());
        }
    }
}
