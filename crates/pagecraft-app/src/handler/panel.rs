//! Editing panel handlers: direct edits, regenerate, images, colors
//!
//! Direct edits apply immediately to the selected record. Task results
//! apply by id; the panel busy flags only matter for the record the
//! panel currently fronts (selection changes reset them).

use std::path::PathBuf;

use pagecraft_core::prelude::*;
use pagecraft_core::{SectionCopy, SectionId, SectionImage};

use crate::message::Message;
use crate::panel::{next_palette_color, PanelField, BACKGROUND_PALETTE, TEXT_PALETTE};
use crate::state::AppState;
use crate::store::SectionEdit;

use super::{Task, UpdateResult};

/// Typed character routed by panel focus: section title/content edits
/// apply immediately, the image path goes to the panel buffer
pub fn handle_panel_input(state: &mut AppState, c: char) -> UpdateResult {
    let Some(id) = state.selected_id else {
        return UpdateResult::none();
    };

    match state.panel.focus {
        PanelField::Title => {
            if let Some(section) = state.store.get_mut(id) {
                section.title.push(c);
            }
        }
        PanelField::Content => {
            if let Some(section) = state.store.get_mut(id) {
                section.content.push(c);
            }
        }
        PanelField::ImagePath => state.panel.image_path.push(c),
        _ => {}
    }
    UpdateResult::none()
}

pub fn handle_panel_backspace(state: &mut AppState) -> UpdateResult {
    let Some(id) = state.selected_id else {
        return UpdateResult::none();
    };

    match state.panel.focus {
        PanelField::Title => {
            if let Some(section) = state.store.get_mut(id) {
                section.title.pop();
            }
        }
        PanelField::Content => {
            if let Some(section) = state.store.get_mut(id) {
                section.content.pop();
            }
        }
        PanelField::ImagePath => {
            state.panel.image_path.pop();
        }
        _ => {}
    }
    UpdateResult::none()
}

/// Enter on the focused panel control
pub fn handle_panel_activate(state: &mut AppState) -> UpdateResult {
    let Some(id) = state.selected_id else {
        return UpdateResult::none();
    };

    match state.panel.focus {
        PanelField::Regenerate => UpdateResult::message(Message::RegenerateCopy(id)),
        PanelField::ImagePath => {
            let path = state.panel.image_path.trim().to_string();
            if path.is_empty() {
                state.show_error("Enter an image path first");
                UpdateResult::none()
            } else {
                UpdateResult::message(Message::AttachImage {
                    id,
                    path: PathBuf::from(path),
                })
            }
        }
        PanelField::Composite => UpdateResult::message(Message::CompositeImage(id)),
        PanelField::BackgroundColor => UpdateResult::message(Message::CycleBackgroundColor(id)),
        PanelField::TextColor => UpdateResult::message(Message::CycleTextColor(id)),
        PanelField::Delete => UpdateResult::message(Message::RequestDeleteSection(id)),
        PanelField::Title | PanelField::Content => UpdateResult::none(),
    }
}

/// Replace the copy with the fixed placeholder text, keeping id, type,
/// image, and colors. An explicit action, offered after a failed
/// generation, never applied automatically.
pub fn handle_use_fallback_copy(state: &mut AppState, id: SectionId) -> UpdateResult {
    if let Some(section) = state.store.get_mut(id) {
        section.apply_copy(SectionCopy::fallback());
        state.show_info("Placeholder copy applied");
    }
    UpdateResult::none()
}

pub fn handle_regenerate_copy(state: &mut AppState, id: SectionId) -> UpdateResult {
    if state.panel.regenerating {
        debug!("Regenerate ignored: already in flight");
        return UpdateResult::none();
    }
    let Some(section) = state.store.get(id) else {
        return UpdateResult::none();
    };
    let section_type = section.section_type;

    state.panel.regenerating = true;
    state.show_info("Regenerating copy...");
    UpdateResult::task(Task::RegenerateCopy {
        id,
        section_type,
        info: state.project_info.clone(),
    })
}

/// Regenerated copy replaces title+content atomically, preserving id,
/// type, image, and colors. Applies by id even if the selection moved.
pub fn handle_copy_regenerated(
    state: &mut AppState,
    id: SectionId,
    copy: SectionCopy,
) -> UpdateResult {
    state.panel.regenerating = false;
    if let Some(section) = state.store.get_mut(id) {
        section.apply_copy(copy);
        state.show_info("Copy regenerated");
    }
    UpdateResult::none()
}

/// The record is untouched on failure
pub fn handle_copy_regeneration_failed(
    state: &mut AppState,
    id: SectionId,
    reason: String,
) -> UpdateResult {
    state.panel.regenerating = false;
    warn!(%id, %reason, "Copy regeneration failed");
    state.show_error(format!("Regeneration failed: {} (f = placeholder)", reason));
    UpdateResult::none()
}

pub fn handle_attach_image(state: &mut AppState, id: SectionId, path: PathBuf) -> UpdateResult {
    if !state.store.contains(id) {
        return UpdateResult::none();
    }
    state.panel.attaching = true;
    UpdateResult::task(Task::LoadImage { id, path })
}

/// Attached image replaces any existing one
pub fn handle_image_attached(state: &mut AppState, id: SectionId, data_url: String) -> UpdateResult {
    state.panel.attaching = false;
    if state
        .store
        .update(id, SectionEdit::image(SectionImage::DataUrl(data_url)))
    {
        state.panel.image_path.clear();
        state.show_info("Image attached");
    }
    UpdateResult::none()
}

pub fn handle_image_attach_failed(
    state: &mut AppState,
    id: SectionId,
    reason: String,
) -> UpdateResult {
    state.panel.attaching = false;
    warn!(%id, %reason, "Image attach failed");
    state.show_error(format!("Could not read image: {}", reason));
    UpdateResult::none()
}

/// Compositing needs an inline image to send; remote URLs are refused
pub fn handle_composite_image(state: &mut AppState, id: SectionId) -> UpdateResult {
    if state.panel.compositing {
        debug!("Composite ignored: already in flight");
        return UpdateResult::none();
    }

    let product_png_b64 = state
        .store
        .get(id)
        .and_then(|s| s.image.as_ref())
        .and_then(|img| img.inline_base64())
        .map(str::to_string);

    let Some(product_png_b64) = product_png_b64 else {
        state.show_error("Attach an image before compositing");
        return UpdateResult::none();
    };

    state.panel.compositing = true;
    state.show_info("Removing background...");
    UpdateResult::task(Task::CompositeImage {
        id,
        product_png_b64,
    })
}

pub fn handle_image_composited(
    state: &mut AppState,
    id: SectionId,
    data_url: String,
) -> UpdateResult {
    state.panel.compositing = false;
    if state
        .store
        .update(id, SectionEdit::image(SectionImage::DataUrl(data_url)))
    {
        state.show_info("Image composited");
    }
    UpdateResult::none()
}

/// The image field is untouched on failure
pub fn handle_image_composite_failed(
    state: &mut AppState,
    id: SectionId,
    reason: String,
) -> UpdateResult {
    state.panel.compositing = false;
    warn!(%id, %reason, "Composite failed");
    state.show_error(format!("Compositing failed: {}", reason));
    UpdateResult::none()
}

pub fn handle_cycle_background_color(state: &mut AppState, id: SectionId) -> UpdateResult {
    if let Some(section) = state.store.get(id) {
        let next = next_palette_color(BACKGROUND_PALETTE, &section.background_color);
        state.store.update(id, SectionEdit::background_color(next));
    }
    UpdateResult::none()
}

pub fn handle_cycle_text_color(state: &mut AppState, id: SectionId) -> UpdateResult {
    if let Some(section) = state.store.get(id) {
        let next = next_palette_color(TEXT_PALETTE, &section.text_color);
        state.store.update(id, SectionEdit::text_color(next));
    }
    UpdateResult::none()
}
