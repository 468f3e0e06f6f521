//! Setup screen and lifecycle handlers

use pagecraft_core::prelude::*;
use pagecraft_core::AppStatus;

use crate::confirm_dialog::ConfirmDialogState;
use crate::message::Message;
use crate::setup_form::SetupFormState;
use crate::state::AppState;

use super::UpdateResult;

/// Quit request; asks first when sections exist
pub fn handle_request_quit(state: &mut AppState) -> UpdateResult {
    if state.settings.behavior.confirm_quit && !state.store.is_empty() {
        state.confirm_dialog = Some(ConfirmDialogState::quit_confirmation(state.store.len()));
        UpdateResult::none()
    } else {
        UpdateResult::message(Message::ConfirmQuit)
    }
}

/// Setup -> Editing, refused while the form is incomplete
pub fn handle_start_editing(state: &mut AppState) -> UpdateResult {
    if !state.setup_form.is_complete() {
        state.show_error("Enter a product name and description first");
        return UpdateResult::none();
    }

    state.project_info = state.setup_form.to_info();
    state.status = AppStatus::Editing;
    info!(product = %state.project_info.product_name, "Entering editing mode");
    if state.store.is_empty() {
        state.show_info("Press 1-6 to add a section");
    }
    UpdateResult::none()
}

/// Editing -> Setup request; always permitted, confirmed when sections
/// exist so the user knows they are kept
pub fn handle_request_back_to_setup(state: &mut AppState) -> UpdateResult {
    if state.store.is_empty() {
        UpdateResult::message(Message::ConfirmBackToSetup)
    } else {
        state.confirm_dialog = Some(ConfirmDialogState::back_to_setup(state.store.len()));
        UpdateResult::none()
    }
}

/// Editing -> Setup; keeps the section sequence untouched
pub fn handle_confirm_back_to_setup(state: &mut AppState) -> UpdateResult {
    state.confirm_dialog = None;
    state.setup_form = SetupFormState::from_info(&state.project_info);
    state.status = AppStatus::Setup;
    state.select(None);
    UpdateResult::none()
}
