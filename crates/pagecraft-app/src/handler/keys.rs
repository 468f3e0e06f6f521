//! Key-to-message translation
//!
//! Pure functions from the current state plus a key to an optional
//! message; all mutation happens in the update handlers.

use pagecraft_core::{AppStatus, SectionType};

use crate::input_key::InputKey;
use crate::message::Message;
use crate::panel::PanelField;
use crate::setup_form::SetupField;
use crate::state::AppState;

/// Convert key events to messages based on the current screen
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Ctrl+C always force-quits, bypassing confirmation
    if key == InputKey::CharCtrl('c') {
        return Some(Message::ConfirmQuit);
    }

    if let Some(dialog) = &state.confirm_dialog {
        return handle_key_confirm_dialog(dialog, key);
    }

    match state.status {
        AppStatus::Setup => handle_key_setup(state, key),
        AppStatus::Editing | AppStatus::Preview => {
            if state.selected_id.is_some() {
                handle_key_panel(state, key)
            } else {
                handle_key_canvas(state, key)
            }
        }
    }
}

/// Handle key events while a confirmation dialog is open
fn handle_key_confirm_dialog(
    dialog: &crate::confirm_dialog::ConfirmDialogState,
    key: InputKey,
) -> Option<Message> {
    match key {
        InputKey::Char('y') | InputKey::Char('Y') | InputKey::Enter => dialog.confirm_message(),
        InputKey::Char('n') | InputKey::Char('N') | InputKey::Esc => Some(Message::CancelDialog),
        _ => None,
    }
}

/// Handle key events on the setup screen
fn handle_key_setup(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Tab | InputKey::Down => Some(Message::SetupFocusNext),
        InputKey::BackTab | InputKey::Up => Some(Message::SetupFocusPrev),

        // Preset pickers cycle with left/right
        InputKey::Right => Some(Message::SetupCycleForward),
        InputKey::Left => Some(Message::SetupCycleBackward),

        InputKey::Enter => {
            if state.setup_form.focus == SetupField::Start {
                Some(Message::StartEditing)
            } else {
                Some(Message::SetupFocusNext)
            }
        }

        InputKey::Backspace => Some(Message::SetupBackspace),
        InputKey::Char(c) if state.setup_form.focus.is_text() => Some(Message::SetupInput(c)),

        InputKey::Esc => Some(Message::RequestQuit),
        InputKey::Char(' ') => Some(Message::SetupCycleForward),

        _ => None,
    }
}

/// Handle key events on the editing screen with no selection
fn handle_key_canvas(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrev),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),

        InputKey::Char(c) if !state.adding_section => {
            if let Some(section_type) = section_type_for_digit(c) {
                return Some(Message::AddSection(section_type));
            }
            handle_canvas_shortcut(c)
        }
        InputKey::Char(c) => handle_canvas_shortcut(c),

        InputKey::Esc => Some(Message::RequestQuit),

        _ => None,
    }
}

fn handle_canvas_shortcut(c: char) -> Option<Message> {
    match c {
        'e' => Some(Message::ExportPage),
        's' => Some(Message::RequestBackToSetup),
        'q' => Some(Message::RequestQuit),
        _ => None,
    }
}

/// Handle key events while the editing panel is bound to a selection
fn handle_key_panel(state: &AppState, key: InputKey) -> Option<Message> {
    let id = state.selected_id?;

    match key {
        InputKey::Esc => Some(Message::ClearSelection),

        InputKey::Tab => Some(Message::PanelFocusNext),
        InputKey::BackTab => Some(Message::PanelFocusPrev),

        // Arrows move the selection through the sequence
        InputKey::Up => Some(Message::SelectPrev),
        InputKey::Down => Some(Message::SelectNext),

        // Enter inserts a newline in the content editor, activates
        // everything else
        InputKey::Enter => {
            if state.panel.focus == PanelField::Content {
                Some(Message::PanelInput('\n'))
            } else {
                Some(Message::PanelActivate)
            }
        }

        InputKey::Backspace => Some(Message::PanelBackspace),
        InputKey::Delete => Some(Message::RequestDeleteSection(id)),

        InputKey::Char(c) if state.panel.focus.is_text() => Some(Message::PanelInput(c)),

        // Shortcuts when a non-text control has focus
        InputKey::Char('r') => Some(Message::RegenerateCopy(id)),
        InputKey::Char('c') => Some(Message::CompositeImage(id)),
        InputKey::Char('b') => Some(Message::CycleBackgroundColor(id)),
        InputKey::Char('t') => Some(Message::CycleTextColor(id)),
        InputKey::Char('f') => Some(Message::UseFallbackCopy(id)),
        InputKey::Char('d') => Some(Message::RequestDeleteSection(id)),
        InputKey::Char('e') => Some(Message::ExportPage),
        InputKey::Char('q') => Some(Message::RequestQuit),
        InputKey::Char(c) if !state.adding_section => {
            section_type_for_digit(c).map(Message::AddSection)
        }

        _ => None,
    }
}

/// Quick-add shortcuts: 1-6 map to the section types in display order
fn section_type_for_digit(c: char) -> Option<SectionType> {
    let index = c.to_digit(10)? as usize;
    SectionType::ALL.get(index.checked_sub(1)?).copied()
}
