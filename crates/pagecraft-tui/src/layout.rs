//! Screen layout calculation

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the editor panel when a section is selected
const PANEL_WIDTH: u16 = 38;

/// Computed screen areas for the editing view
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    pub canvas: Rect,
    pub panel: Option<Rect>,
    pub status_bar: Rect,
}

/// Split the terminal area into header, canvas, optional panel, and status bar.
///
/// The panel column only exists while a section is selected; without a
/// selection the canvas takes the full body width.
pub fn create(area: Rect, panel_visible: bool) -> ScreenAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Min(3),    // body
            Constraint::Length(1), // status bar
        ])
        .split(area);

    let (canvas, panel) = if panel_visible {
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(20), Constraint::Length(PANEL_WIDTH)])
            .split(rows[1]);
        (body[0], Some(body[1]))
    } else {
        (rows[1], None)
    };

    ScreenAreas {
        header: rows[0],
        canvas,
        panel,
        status_bar: rows[2],
    }
}

/// Centered rectangle for modal dialogs
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
