//! Bottom status bar: key hints or the active notice

use pagecraft_app::{AppState, NoticeLevel};
use pagecraft_core::AppStatus;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::styles;

/// One-line bar at the bottom of every screen.
///
/// An unexpired notice takes priority over the key hints.
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn notice_line(&self) -> Option<Line<'static>> {
        let notice = self.state.notice.as_ref().filter(|n| !n.is_expired())?;
        let (prefix, style) = match notice.level {
            NoticeLevel::Info => ("✓", styles::status_green()),
            NoticeLevel::Error => ("✗", styles::status_red()),
        };
        Some(Line::from(Span::styled(
            format!(" {prefix} {}", notice.text),
            style,
        )))
    }

    fn hint_line(&self) -> Line<'static> {
        let hints: &[(&str, &str)] = match self.state.status {
            AppStatus::Setup => &[("Tab", "move"), ("Enter", "start"), ("Esc", "quit")],
            _ if self.state.selected_id.is_some() => &[
                ("Tab", "field"),
                ("Enter", "activate"),
                ("Del", "delete"),
                ("Esc", "close"),
            ],
            _ => &[
                ("1-6", "add section"),
                ("↑↓", "select"),
                ("e", "export"),
                ("s", "setup"),
                ("q", "quit"),
            ],
        };

        let mut spans = Vec::with_capacity(hints.len() * 2 + 1);
        spans.push(Span::raw(" "));
        for (key, action) in hints {
            spans.push(Span::styled(format!("{key} "), styles::keybinding()));
            spans.push(Span::styled(format!("{action}  "), styles::text_muted()));
        }
        Line::from(spans)
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = self.notice_line().unwrap_or_else(|| self.hint_line());
        Paragraph::new(line).render(area, buf);
    }
}
