//! Canvas rendering for a single section

use pagecraft_core::{Section, SectionType};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};

use crate::theme::{palette, styles};

/// One section block on the canvas.
///
/// Each type gets its own miniature of the exported layout: Hero is
/// two-column with an image slot, Features is a card row, Spec is
/// preformatted, everything else is centered copy.
pub struct SectionView<'a> {
    section: &'a Section,
    selected: bool,
}

impl<'a> SectionView<'a> {
    pub fn new(section: &'a Section, selected: bool) -> Self {
        Self { section, selected }
    }

    fn title_style(&self) -> Style {
        Style::default()
            .fg(palette::from_hex(&self.section.text_color))
            .add_modifier(ratatui::style::Modifier::BOLD)
    }

    fn body_style(&self) -> Style {
        Style::default().fg(palette::from_hex(&self.section.text_color))
    }

    fn image_label(&self) -> Line<'static> {
        let label = match &self.section.image {
            Some(image) if image.is_inline() => "🖼 uploaded image",
            Some(_) => "🖼 placeholder image",
            None => "no image",
        };
        Line::from(Span::styled(label.to_string(), styles::text_muted())).centered()
    }

    fn render_hero(&self, inner: Rect, buf: &mut Buffer) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(inner);

        Paragraph::new(vec![
            Line::from(Span::styled(self.section.title.clone(), self.title_style())),
            Line::from(Span::styled(self.section.content.clone(), self.body_style())),
        ])
        .wrap(Wrap { trim: true })
        .render(columns[0], buf);

        Paragraph::new(self.image_label())
            .block(styles::bordered_block(false))
            .render(columns[1], buf);
    }

    fn render_features(&self, inner: Rect, buf: &mut Buffer) {
        let lines: Vec<&str> = self.section.content_lines().take(3).collect();
        if lines.is_empty() {
            Paragraph::new(Span::styled("(no feature lines)", styles::text_muted()))
                .render(inner, buf);
            return;
        }

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(1)])
            .split(inner);

        Paragraph::new(Span::styled(self.section.title.clone(), self.title_style()))
            .alignment(Alignment::Center)
            .render(rows[0], buf);

        let share = 100 / lines.len() as u16;
        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Percentage(share); lines.len()])
            .split(rows[1]);
        for (card, line) in cards.iter().zip(&lines) {
            Paragraph::new(Span::styled((*line).to_string(), self.body_style()))
                .wrap(Wrap { trim: true })
                .block(styles::bordered_block(false))
                .render(*card, buf);
        }
    }

    fn render_spec(&self, inner: Rect, buf: &mut Buffer) {
        let mut lines = vec![Line::from(Span::styled(
            self.section.title.clone(),
            self.title_style(),
        ))];
        for line in self.section.content.lines() {
            lines.push(Line::from(Span::styled(line.to_string(), self.body_style())));
        }
        Paragraph::new(lines).render(inner, buf);
    }

    fn render_centered(&self, inner: Rect, buf: &mut Buffer) {
        Paragraph::new(vec![
            Line::from(Span::styled(self.section.title.clone(), self.title_style())).centered(),
            Line::from(Span::styled(self.section.content.clone(), self.body_style())).centered(),
        ])
        .wrap(Wrap { trim: true })
        .render(inner, buf);
    }
}

impl Widget for SectionView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(
            " {} · {} ",
            self.section.section_type.name(),
            self.section.section_type.label()
        );
        let block = styles::bordered_block(self.selected)
            .title(title)
            .style(Style::default().bg(palette::from_hex(&self.section.background_color)));
        let inner = block.inner(area);
        block.render(area, buf);

        match self.section.section_type {
            SectionType::Hero => self.render_hero(inner, buf),
            SectionType::Features => self.render_features(inner, buf),
            SectionType::Spec => self.render_spec(inner, buf),
            SectionType::Review | SectionType::Cta | SectionType::Event => {
                self.render_centered(inner, buf)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use pagecraft_core::SectionCopy;

    fn section(section_type: SectionType, title: &str, content: &str) -> Section {
        Section::from_copy(
            section_type,
            SectionCopy {
                title: title.to_string(),
                content: content.to_string(),
            },
        )
    }

    #[test]
    fn test_hero_shows_copy_and_image_slot() {
        let mut term = TestTerminal::new();
        let hero = section(SectionType::Hero, "Wake up bright", "Sunrise in a lamp");
        term.render_widget(SectionView::new(&hero, false), term.area());

        assert!(term.buffer_contains("Hero · Main intro"));
        assert!(term.buffer_contains("Wake up bright"));
        assert!(term.buffer_contains("placeholder image"));
    }

    #[test]
    fn test_features_renders_one_card_per_line() {
        let mut term = TestTerminal::new();
        let features = section(SectionType::Features, "Why it wins", "Fast\nLight\nQuiet");
        term.render_widget(SectionView::new(&features, false), term.area());

        assert!(term.buffer_contains("Fast"));
        assert!(term.buffer_contains("Light"));
        assert!(term.buffer_contains("Quiet"));
    }

    #[test]
    fn test_cta_renders_centered_copy() {
        let mut term = TestTerminal::new();
        let cta = section(SectionType::Cta, "Buy now", "Free shipping today");
        term.render_widget(SectionView::new(&cta, true), term.area());

        assert!(term.buffer_contains("CTA · Purchase push"));
        assert!(term.buffer_contains("Buy now"));
        assert!(term.buffer_contains("Free shipping today"));
    }

    #[test]
    fn test_spec_keeps_line_breaks() {
        let mut term = TestTerminal::new();
        let spec = section(SectionType::Spec, "Specs", "Weight: 300g\nHeight: 20cm");
        term.render_widget(SectionView::new(&spec, false), term.area());

        assert!(term.buffer_contains("Weight: 300g"));
        assert!(term.buffer_contains("Height: 20cm"));
    }
}
