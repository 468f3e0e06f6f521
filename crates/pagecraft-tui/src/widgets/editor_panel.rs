//! Editing panel for the selected section

use pagecraft_app::{PanelField, PanelState};
use pagecraft_core::Section;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};

use crate::theme::styles;

/// Side panel bound to the selected section.
///
/// Shows the editable fields with a focus marker plus spinners for the
/// regenerate, attach, and composite operations while they are in flight.
pub struct EditorPanel<'a> {
    section: &'a Section,
    panel: &'a PanelState,
}

impl<'a> EditorPanel<'a> {
    pub fn new(section: &'a Section, panel: &'a PanelState) -> Self {
        Self { section, panel }
    }

    fn field_line(&self, label: &str, value: String, field: PanelField) -> Line<'static> {
        let focused = self.panel.focus == field;
        let cursor = if focused && field.is_text() { "█" } else { "" };
        Line::from(vec![
            marker(focused),
            Span::styled(format!("{label:<11}"), label_style(focused)),
            Span::styled(format!("{value}{cursor}"), styles::text_primary()),
        ])
    }

    fn action_line(&self, label: &str, field: PanelField, busy: bool) -> Line<'static> {
        let focused = self.panel.focus == field;
        let (text, style) = if busy {
            (format!("↻ {label}..."), styles::busy())
        } else {
            (format!("[ {label} ]"), action_style(focused))
        };
        Line::from(vec![marker(focused), Span::styled(text, style)])
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

fn action_style(focused: bool) -> Style {
    if focused {
        styles::focused_selected()
    } else {
        styles::text_primary()
    }
}

/// Shorten a value so the panel column never wraps mid-field
fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        value.to_string()
    } else {
        let cut: String = value.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}

impl Widget for EditorPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" Edit {} ", self.section.section_type.name());

        let mut lines = vec![
            Line::raw(""),
            self.field_line("Title", truncate(&self.section.title, 20), PanelField::Title),
            self.field_line(
                "Content",
                truncate(&self.section.content.replace('\n', "⏎"), 20),
                PanelField::Content,
            ),
            Line::raw(""),
            self.action_line("Regenerate copy", PanelField::Regenerate, self.panel.regenerating),
            Line::raw(""),
            self.field_line(
                "Image",
                truncate(&self.panel.image_path, 20),
                PanelField::ImagePath,
            ),
            self.action_line("Composite image", PanelField::Composite, self.panel.compositing),
            Line::raw(""),
            self.field_line(
                "Background",
                self.section.background_color.clone(),
                PanelField::BackgroundColor,
            ),
            self.field_line(
                "Text color",
                self.section.text_color.clone(),
                PanelField::TextColor,
            ),
            Line::raw(""),
            self.action_line("Delete section", PanelField::Delete, false),
            Line::raw(""),
            Line::from(Span::styled(
                "Tab fields · Enter activate · Esc close",
                styles::text_muted(),
            )),
        ];

        if self.panel.attaching {
            lines.push(Line::from(Span::styled("↻ Loading image...", styles::busy())));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(styles::bordered_block(true).title(title))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use pagecraft_core::{SectionCopy, SectionType};

    fn hero() -> Section {
        Section::from_copy(
            SectionType::Hero,
            SectionCopy {
                title: "Wake up bright".to_string(),
                content: "Sunrise in a lamp".to_string(),
            },
        )
    }

    #[test]
    fn test_panel_shows_fields_and_actions() {
        let mut term = TestTerminal::new();
        let section = hero();
        let panel = PanelState::new();
        term.render_widget(EditorPanel::new(&section, &panel), term.area());

        assert!(term.buffer_contains("Edit Hero"));
        assert!(term.buffer_contains("Wake up bright"));
        assert!(term.buffer_contains("Regenerate copy"));
        assert!(term.buffer_contains("Composite image"));
        assert!(term.buffer_contains("Delete section"));
        assert!(term.buffer_contains("#ffffff"));
    }

    #[test]
    fn test_busy_flag_swaps_action_for_spinner() {
        let mut term = TestTerminal::new();
        let section = hero();
        let panel = PanelState {
            regenerating: true,
            ..Default::default()
        };
        term.render_widget(EditorPanel::new(&section, &panel), term.area());

        assert!(term.buffer_contains("↻ Regenerate copy..."));
        assert!(!term.buffer_contains("[ Regenerate copy ]"));
    }

    #[test]
    fn test_long_title_is_truncated() {
        let mut term = TestTerminal::new();
        let mut section = hero();
        section.title = "An exceedingly long headline that cannot fit".to_string();
        let panel = PanelState::new();
        term.render_widget(EditorPanel::new(&section, &panel), term.area());

        assert!(term.buffer_contains("…"));
        assert!(!term.buffer_contains("cannot fit"));
    }
}
