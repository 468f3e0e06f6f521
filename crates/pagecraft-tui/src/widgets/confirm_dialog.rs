//! Modal confirmation dialog

use pagecraft_app::ConfirmDialogState;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph, Widget, Wrap};

use crate::layout::centered_rect;
use crate::theme::styles;

/// Centered modal rendered over the whole screen.
///
/// The first option confirms (y/Enter), the second cancels (n/Esc).
pub struct ConfirmDialog<'a> {
    dialog: &'a ConfirmDialogState,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(dialog: &'a ConfirmDialogState) -> Self {
        Self { dialog }
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = 48.min(area.width.saturating_sub(4)).max(20);
        let rect = centered_rect(width, 7, area);

        Clear.render(rect, buf);

        let mut buttons = Vec::new();
        for (index, (label, _)) in self.dialog.options.iter().enumerate() {
            let key = if index == 0 { "y" } else { "n" };
            buttons.push(Span::styled(format!("[{key}] "), styles::keybinding()));
            buttons.push(Span::styled(format!("{label}   "), styles::text_primary()));
        }

        let lines = vec![
            Line::raw(""),
            Line::from(Span::styled(
                self.dialog.message.clone(),
                styles::text_primary(),
            )),
            Line::raw(""),
            Line::from(buttons).centered(),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(styles::modal_block(&self.dialog.title))
            .render(rect, buf);
    }
}
