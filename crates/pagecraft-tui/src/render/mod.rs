//! Frame rendering

use pagecraft_app::AppState;
use pagecraft_core::{AppStatus, SectionType};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::layout;
use crate::theme::styles;
use crate::widgets::{
    ConfirmDialog, EditorPanel, MainHeader, SectionView, SetupForm, StatusBar,
};

/// Rows each section block occupies on the canvas
const SECTION_HEIGHT: u16 = 6;

/// Render the entire frame from the current state
pub fn view(frame: &mut Frame, state: &AppState) {
    match state.status {
        AppStatus::Setup => draw_setup(frame, state),
        AppStatus::Editing | AppStatus::Preview => draw_editing(frame, state),
    }

    if let Some(dialog) = &state.confirm_dialog {
        frame.render_widget(ConfirmDialog::new(dialog), frame.area());
    }
}

fn draw_setup(frame: &mut Frame, state: &AppState) {
    let areas = layout::create(frame.area(), false);

    frame.render_widget(
        MainHeader::new(
            Some(state.setup_form.product_name.as_str()),
            state.status,
            state.store.len(),
        ),
        areas.header,
    );

    // Center the form in the body
    let form_area = layout::centered_rect(
        60.min(areas.canvas.width),
        15.min(areas.canvas.height),
        areas.canvas,
    );
    frame.render_widget(SetupForm::new(&state.setup_form), form_area);

    frame.render_widget(StatusBar::new(state), areas.status_bar);
}

fn draw_editing(frame: &mut Frame, state: &AppState) {
    let panel_visible = state.selected_section().is_some();
    let areas = layout::create(frame.area(), panel_visible);

    frame.render_widget(
        MainHeader::new(
            Some(state.project_info.product_name.as_str()),
            state.status,
            state.store.len(),
        ),
        areas.header,
    );

    draw_canvas(frame, state, areas.canvas);

    if let (Some(panel_area), Some(section)) = (areas.panel, state.selected_section()) {
        frame.render_widget(EditorPanel::new(section, &state.panel), panel_area);
    }

    frame.render_widget(StatusBar::new(state), areas.status_bar);
}

/// Draw the section sequence, keeping the selection visible
fn draw_canvas(frame: &mut Frame, state: &AppState, area: Rect) {
    if state.store.is_empty() {
        draw_empty_canvas(frame, state, area);
        return;
    }

    let capacity = (area.height / SECTION_HEIGHT).max(1) as usize;
    let selected_index = state
        .selected_id
        .and_then(|id| state.store.position(id))
        .unwrap_or(0);
    let start = selected_index.saturating_sub(capacity.saturating_sub(1));

    let visible: Vec<_> = state.store.iter().skip(start).take(capacity).collect();
    let mut constraints = vec![Constraint::Length(SECTION_HEIGHT); visible.len()];
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (row, section) in rows.iter().zip(&visible) {
        let selected = state.selected_id == Some(section.id);
        frame.render_widget(SectionView::new(section, selected), *row);
    }

    if state.adding_section {
        let footer = rows[visible.len()];
        if footer.height > 0 {
            frame.render_widget(
                Paragraph::new(Span::styled(" ↻ Generating section...", styles::busy())),
                footer,
            );
        }
    }
}

fn draw_empty_canvas(frame: &mut Frame, state: &AppState, area: Rect) {
    let mut lines = vec![
        Line::raw(""),
        Line::from(Span::styled(
            "No sections yet. Add one:",
            styles::text_secondary(),
        ))
        .centered(),
        Line::raw(""),
    ];
    for (index, section_type) in SectionType::ALL.iter().enumerate() {
        lines.push(
            Line::from(vec![
                Span::styled(format!("{} ", index + 1), styles::keybinding()),
                Span::styled(
                    format!("{:<10}", section_type.name()),
                    styles::text_primary(),
                ),
                Span::styled(section_type.label().to_string(), styles::text_muted()),
            ])
            .centered(),
        );
    }
    if state.adding_section {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled("↻ Generating section...", styles::busy())).centered());
    }

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(styles::bordered_block(false).title(" Page ")),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use pagecraft_app::{handler, Message};
    use pagecraft_core::SectionCopy;

    fn editing_state() -> AppState {
        let mut state = AppState::new();
        for c in "Aurora Lamp".chars() {
            handler::update(&mut state, Message::SetupInput(c));
        }
        handler::update(&mut state, Message::SetupFocusNext);
        for c in "A sunrise alarm lamp".chars() {
            handler::update(&mut state, Message::SetupInput(c));
        }
        handler::update(&mut state, Message::StartEditing);
        state
    }

    fn add_section(state: &mut AppState, section_type: SectionType, title: &str) {
        handler::update(state, Message::AddSection(section_type));
        handler::update(
            state,
            Message::SectionGenerated {
                section_type,
                copy: SectionCopy {
                    title: title.to_string(),
                    content: "body".to_string(),
                },
            },
        );
    }

    #[test]
    fn test_setup_screen_renders_form() {
        let mut term = TestTerminal::new();
        let state = AppState::new();
        term.draw_with(|frame| view(frame, &state));

        assert!(term.buffer_contains("Pagecraft"));
        assert!(term.buffer_contains("Project setup"));
        assert!(term.buffer_contains("Product name"));
    }

    #[test]
    fn test_empty_editing_screen_lists_section_menu() {
        let mut term = TestTerminal::new();
        let mut state = editing_state();
        state.select(None);
        term.draw_with(|frame| view(frame, &state));

        assert!(term.buffer_contains("No sections yet"));
        assert!(term.buffer_contains("Hero"));
        assert!(term.buffer_contains("Purchase push"));
    }

    #[test]
    fn test_selected_section_opens_panel() {
        let mut term = TestTerminal::new();
        let mut state = editing_state();
        add_section(&mut state, SectionType::Cta, "Buy now");

        term.draw_with(|frame| view(frame, &state));

        // New sections are auto-selected, so the panel is open
        assert!(term.buffer_contains("Buy now"));
        assert!(term.buffer_contains("Edit CTA"));
    }

    #[test]
    fn test_clearing_selection_closes_panel() {
        let mut term = TestTerminal::new();
        let mut state = editing_state();
        add_section(&mut state, SectionType::Cta, "Buy now");
        handler::update(&mut state, Message::ClearSelection);

        term.draw_with(|frame| view(frame, &state));

        assert!(term.buffer_contains("Buy now"));
        assert!(!term.buffer_contains("Edit CTA"));
    }

    #[test]
    fn test_busy_indicator_while_adding() {
        let mut term = TestTerminal::new();
        let mut state = editing_state();
        handler::update(&mut state, Message::AddSection(SectionType::Hero));

        term.draw_with(|frame| view(frame, &state));

        assert!(term.buffer_contains("Generating section"));
    }

    #[test]
    fn test_confirm_dialog_overlays_screen() {
        let mut term = TestTerminal::new();
        let mut state = editing_state();
        add_section(&mut state, SectionType::Cta, "Buy now");
        handler::update(&mut state, Message::RequestQuit);

        term.draw_with(|frame| view(frame, &state));

        assert!(term.buffer_contains("Quit Pagecraft?"));
    }
}
