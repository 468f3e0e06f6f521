//! Section sequence handlers: append, delete, export

use pagecraft_core::prelude::*;
use pagecraft_core::{Section, SectionCopy, SectionId, SectionType};

use crate::confirm_dialog::ConfirmDialogState;
use crate::message::Message;
use crate::state::AppState;

use super::{Task, UpdateResult};

/// Kick off copy generation for a new section.
///
/// Guarded by `adding_section`: one new-section generation at a time, no
/// queueing. Regenerate and composite have their own flags and are not
/// affected.
pub fn handle_add_section(state: &mut AppState, section_type: SectionType) -> UpdateResult {
    if state.adding_section {
        debug!("Add section ignored: generation already in flight");
        return UpdateResult::none();
    }

    state.adding_section = true;
    state.show_info(format!("Generating {} copy...", section_type.label()));
    UpdateResult::task(Task::GenerateSection {
        section_type,
        info: state.project_info.clone(),
    })
}

/// New-section copy arrived: build the record, append, select it
pub fn handle_section_generated(
    state: &mut AppState,
    section_type: SectionType,
    copy: SectionCopy,
) -> UpdateResult {
    state.adding_section = false;
    let section = Section::from_copy(section_type, copy);
    let id = state.store.append(section);
    state.select(Some(id));
    state.show_info(format!("Added {} section", section_type.label()));
    UpdateResult::none()
}

/// Generation failed: the sequence is unchanged
pub fn handle_section_generation_failed(
    state: &mut AppState,
    section_type: SectionType,
    reason: String,
) -> UpdateResult {
    state.adding_section = false;
    warn!(kind = section_type.name(), %reason, "Section generation failed");
    state.show_error(format!(
        "Could not generate {}: {}",
        section_type.label(),
        reason
    ));
    UpdateResult::none()
}

/// Ask before deleting, unless configured not to
pub fn handle_request_delete(state: &mut AppState, id: SectionId) -> UpdateResult {
    let Some(section) = state.store.get(id) else {
        return UpdateResult::none();
    };

    if state.settings.behavior.confirm_delete {
        state.confirm_dialog = Some(ConfirmDialogState::delete_section(section));
        UpdateResult::none()
    } else {
        UpdateResult::message(Message::ConfirmDeleteSection(id))
    }
}

/// Delete confirmed: remove the record and clear a matching selection
pub fn handle_confirm_delete(state: &mut AppState, id: SectionId) -> UpdateResult {
    state.confirm_dialog = None;

    let Some(removed) = state.store.remove(id) else {
        return UpdateResult::none();
    };

    if state.selected_id == Some(id) {
        state.select(None);
    }
    state.show_info(format!("Deleted {} section", removed.section_type.label()));
    UpdateResult::none()
}

/// Export the page as a standalone HTML document
pub fn handle_export_page(state: &mut AppState) -> UpdateResult {
    if state.store.is_empty() {
        state.show_error("Nothing to export yet");
        return UpdateResult::none();
    }

    UpdateResult::task(Task::ExportPage {
        project_dir: state.project_dir.clone(),
        filename: state.settings.export.output_filename.clone(),
        info: state.project_info.clone(),
        sections: state.store.as_slice().to_vec(),
    })
}
