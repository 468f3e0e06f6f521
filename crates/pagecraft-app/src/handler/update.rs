//! Message dispatch

use crate::message::Message;
use crate::state::AppState;

use super::{keys, panel, sections, setup, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => {
            if let Some(msg) = keys::handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            if state.notice.as_ref().is_some_and(|n| n.is_expired()) {
                state.notice = None;
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Lifecycle
        // ─────────────────────────────────────────────────────────
        Message::RequestQuit => setup::handle_request_quit(state),

        Message::ConfirmQuit => {
            state.confirm_dialog = None;
            state.quitting = true;
            UpdateResult::none()
        }

        Message::CancelDialog => {
            state.confirm_dialog = None;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Setup screen
        // ─────────────────────────────────────────────────────────
        Message::SetupFocusNext => {
            state.setup_form.focus_next();
            UpdateResult::none()
        }

        Message::SetupFocusPrev => {
            state.setup_form.focus_prev();
            UpdateResult::none()
        }

        Message::SetupInput(c) => {
            state.setup_form.push_char(c);
            UpdateResult::none()
        }

        Message::SetupBackspace => {
            state.setup_form.pop_char();
            UpdateResult::none()
        }

        Message::SetupCycleForward => {
            state.setup_form.cycle_forward();
            UpdateResult::none()
        }

        Message::SetupCycleBackward => {
            state.setup_form.cycle_backward();
            UpdateResult::none()
        }

        Message::StartEditing => setup::handle_start_editing(state),
        Message::RequestBackToSetup => setup::handle_request_back_to_setup(state),
        Message::ConfirmBackToSetup => setup::handle_confirm_back_to_setup(state),

        // ─────────────────────────────────────────────────────────
        // Section sequence
        // ─────────────────────────────────────────────────────────
        Message::AddSection(section_type) => sections::handle_add_section(state, section_type),

        Message::SectionGenerated { section_type, copy } => {
            sections::handle_section_generated(state, section_type, copy)
        }

        Message::SectionGenerationFailed {
            section_type,
            reason,
        } => sections::handle_section_generation_failed(state, section_type, reason),

        Message::SelectNext => {
            let next = state.store.next_id(state.selected_id);
            state.select(next);
            UpdateResult::none()
        }

        Message::SelectPrev => {
            let prev = state.store.prev_id(state.selected_id);
            state.select(prev);
            UpdateResult::none()
        }

        Message::ClearSelection => {
            state.select(None);
            UpdateResult::none()
        }

        Message::RequestDeleteSection(id) => sections::handle_request_delete(state, id),
        Message::ConfirmDeleteSection(id) => sections::handle_confirm_delete(state, id),

        // ─────────────────────────────────────────────────────────
        // Editing panel
        // ─────────────────────────────────────────────────────────
        Message::PanelFocusNext => {
            if state.selected_id.is_some() {
                state.panel.focus_next();
            }
            UpdateResult::none()
        }

        Message::PanelFocusPrev => {
            if state.selected_id.is_some() {
                state.panel.focus_prev();
            }
            UpdateResult::none()
        }

        Message::PanelInput(c) => panel::handle_panel_input(state, c),
        Message::PanelBackspace => panel::handle_panel_backspace(state),
        Message::PanelActivate => panel::handle_panel_activate(state),

        Message::UseFallbackCopy(id) => panel::handle_use_fallback_copy(state, id),

        Message::RegenerateCopy(id) => panel::handle_regenerate_copy(state, id),
        Message::CopyRegenerated { id, copy } => panel::handle_copy_regenerated(state, id, copy),
        Message::CopyRegenerationFailed { id, reason } => {
            panel::handle_copy_regeneration_failed(state, id, reason)
        }

        Message::AttachImage { id, path } => panel::handle_attach_image(state, id, path),
        Message::ImageAttached { id, data_url } => {
            panel::handle_image_attached(state, id, data_url)
        }
        Message::ImageAttachFailed { id, reason } => {
            panel::handle_image_attach_failed(state, id, reason)
        }

        Message::CompositeImage(id) => panel::handle_composite_image(state, id),
        Message::ImageComposited { id, data_url } => {
            panel::handle_image_composited(state, id, data_url)
        }
        Message::ImageCompositeFailed { id, reason } => {
            panel::handle_image_composite_failed(state, id, reason)
        }

        Message::CycleBackgroundColor(id) => panel::handle_cycle_background_color(state, id),
        Message::CycleTextColor(id) => panel::handle_cycle_text_color(state, id),

        // ─────────────────────────────────────────────────────────
        // Export
        // ─────────────────────────────────────────────────────────
        Message::ExportPage => sections::handle_export_page(state),

        Message::ExportCompleted(path) => {
            state.show_info(format!("Exported to {}", path.display()));
            UpdateResult::none()
        }

        Message::ExportFailed(reason) => {
            state.show_error(format!("Export failed: {}", reason));
            UpdateResult::none()
        }
    }
}
