//! Top header: product name, app status, section count

use pagecraft_core::AppStatus;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::styles;

/// Header bar shown on every screen
pub struct MainHeader<'a> {
    product_name: Option<&'a str>,
    status: AppStatus,
    section_count: usize,
}

impl<'a> MainHeader<'a> {
    pub fn new(product_name: Option<&'a str>, status: AppStatus, section_count: usize) -> Self {
        Self {
            product_name,
            status,
            section_count,
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (icon, label, status_style) = styles::status_indicator(self.status);

        let mut spans = vec![
            Span::styled(" Pagecraft ", styles::accent_bold()),
            Span::styled("│ ", styles::text_muted()),
        ];

        match self.product_name {
            Some(name) if !name.is_empty() => {
                spans.push(Span::styled(name.to_string(), styles::text_primary()));
            }
            _ => spans.push(Span::styled("(unnamed product)", styles::text_muted())),
        }

        spans.push(Span::styled(" │ ", styles::text_muted()));
        spans.push(Span::styled(format!("{icon} {label}"), status_style));

        if self.status != AppStatus::Setup {
            let count = self.section_count;
            let noun = if count == 1 { "section" } else { "sections" };
            spans.push(Span::styled(
                format!(" │ {count} {noun}"),
                styles::text_secondary(),
            ));
        }

        Paragraph::new(Line::from(spans))
            .block(styles::bordered_block(false))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_header_shows_product_name_and_status() {
        let mut term = TestTerminal::new();
        let header = MainHeader::new(Some("Aurora Lamp"), AppStatus::Editing, 3);
        term.render_widget(header, term.area());

        assert!(term.buffer_contains("Pagecraft"));
        assert!(term.buffer_contains("Aurora Lamp"));
        assert!(term.buffer_contains("Editing"));
        assert!(term.buffer_contains("3 sections"));
    }

    #[test]
    fn test_header_setup_hides_section_count() {
        let mut term = TestTerminal::new();
        let header = MainHeader::new(None, AppStatus::Setup, 0);
        term.render_widget(header, term.area());

        assert!(term.buffer_contains("(unnamed product)"));
        assert!(term.buffer_contains("Setup"));
        assert!(!term.buffer_contains("sections"));
    }

    #[test]
    fn test_header_singular_section_count() {
        let mut term = TestTerminal::new();
        let header = MainHeader::new(Some("Mug"), AppStatus::Editing, 1);
        term.render_widget(header, term.area());

        assert!(term.buffer_contains("1 section"));
        assert!(!term.buffer_contains("1 sections"));
    }
}
