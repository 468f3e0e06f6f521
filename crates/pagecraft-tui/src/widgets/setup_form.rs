//! Setup screen form

use pagecraft_app::{SetupField, SetupFormState};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::styles;

/// Project setup form: two text fields, two preset pickers, a start button
pub struct SetupForm<'a> {
    form: &'a SetupFormState,
}

impl<'a> SetupForm<'a> {
    pub fn new(form: &'a SetupFormState) -> Self {
        Self { form }
    }

    fn text_line(&self, label: &str, value: &str, field: SetupField) -> Line<'static> {
        let focused = self.form.focus == field;
        let cursor = if focused { "█" } else { "" };
        Line::from(vec![
            marker(focused),
            Span::styled(format!("{label:<14}"), label_style(focused)),
            Span::styled(format!("{value}{cursor}"), styles::text_primary()),
        ])
    }

    fn picker_line(&self, label: &str, value: &str, field: SetupField) -> Line<'static> {
        let focused = self.form.focus == field;
        Line::from(vec![
            marker(focused),
            Span::styled(format!("{label:<14}"), label_style(focused)),
            Span::styled(format!("◂ {value} ▸"), picker_style(focused)),
        ])
    }
}

fn marker(focused: bool) -> Span<'static> {
    if focused {
        Span::styled("▸ ", styles::accent_bold())
    } else {
        Span::raw("  ")
    }
}

fn label_style(focused: bool) -> Style {
    if focused {
        styles::accent()
    } else {
        styles::text_secondary()
    }
}

fn picker_style(focused: bool) -> Style {
    if focused {
        styles::accent_bold()
    } else {
        styles::text_primary()
    }
}

impl Widget for SetupForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let start_focused = self.form.focus == SetupField::Start;
        let start_style = if start_focused {
            styles::focused_selected()
        } else if self.form.is_complete() {
            styles::accent()
        } else {
            styles::text_muted()
        };

        let lines = vec![
            Line::raw(""),
            self.text_line("Product name", &self.form.product_name, SetupField::Name),
            Line::raw(""),
            self.text_line("Description", &self.form.product_desc, SetupField::Description),
            Line::raw(""),
            self.picker_line("Audience", self.form.audience(), SetupField::Audience),
            Line::raw(""),
            self.picker_line("Tone", self.form.tone(), SetupField::Tone),
            Line::raw(""),
            Line::from(vec![
                marker(start_focused),
                Span::styled("[ Start editing ]", start_style),
            ]),
            Line::raw(""),
            Line::from(Span::styled(
                "Tab/↑↓ move · ←→ cycle presets · Enter start · Esc quit",
                styles::text_muted(),
            )),
        ];

        Paragraph::new(lines)
            .block(styles::bordered_block(true).title(" Project setup "))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_form_shows_all_fields() {
        let mut term = TestTerminal::new();
        let mut form = SetupFormState::new();
        form.product_name = "Aurora Lamp".to_string();
        term.render_widget(SetupForm::new(&form), term.area());

        assert!(term.buffer_contains("Project setup"));
        assert!(term.buffer_contains("Product name"));
        assert!(term.buffer_contains("Aurora Lamp"));
        assert!(term.buffer_contains("Description"));
        assert!(term.buffer_contains("Audience"));
        assert!(term.buffer_contains("Tone"));
        assert!(term.buffer_contains("Start editing"));
    }

    #[test]
    fn test_focused_field_carries_marker() {
        let mut term = TestTerminal::new();
        let form = SetupFormState::new();
        term.render_widget(SetupForm::new(&form), term.area());

        // Name starts focused; its line carries the marker and cursor
        assert!(term.line_contains(2, "▸"));
        assert!(term.line_contains(2, "█"));
    }

    #[test]
    fn test_picker_shows_current_preset() {
        let mut term = TestTerminal::new();
        let form = SetupFormState::new();
        term.render_widget(SetupForm::new(&form), term.area());

        assert!(term.buffer_contains(&format!("◂ {} ▸", form.audience())));
    }
}
