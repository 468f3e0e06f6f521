//! Confirm dialog state.
//!
//! Data model for confirmation dialogs. The rendering widget
//! lives in pagecraft-tui's widgets/confirm_dialog.rs.

use crate::message::Message;
use pagecraft_core::Section;

#[derive(Debug, Clone)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
    pub options: Vec<(String, Message)>,
}

impl ConfirmDialogState {
    /// Create a generic confirmation dialog
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        options: Vec<(&str, Message)>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            options: options
                .into_iter()
                .map(|(label, msg)| (label.to_string(), msg))
                .collect(),
        }
    }

    /// Dialog asking whether to delete a section
    pub fn delete_section(section: &Section) -> Self {
        Self {
            title: "Delete section?".to_string(),
            message: format!(
                "Delete the {} section \"{}\"? This cannot be undone.",
                section.section_type.label(),
                section.title
            ),
            options: vec![
                (
                    "Delete".to_string(),
                    Message::ConfirmDeleteSection(section.id),
                ),
                ("Cancel".to_string(), Message::CancelDialog),
            ],
        }
    }

    /// Dialog asking whether to quit while the page has sections
    pub fn quit_confirmation(section_count: usize) -> Self {
        Self {
            title: "Quit Pagecraft?".to_string(),
            message: if section_count == 1 {
                "Your page has 1 section. Unexported work is lost.".to_string()
            } else {
                format!(
                    "Your page has {} sections. Unexported work is lost.",
                    section_count
                )
            },
            options: vec![
                ("Quit".to_string(), Message::ConfirmQuit),
                ("Cancel".to_string(), Message::CancelDialog),
            ],
        }
    }

    /// Dialog asking whether to go back to setup, which keeps sections but
    /// lets project details change out from under them
    pub fn back_to_setup(section_count: usize) -> Self {
        Self {
            title: "Edit project details?".to_string(),
            message: format!(
                "Returning to setup keeps your {} existing section(s); \
                 new copy will use the updated details.",
                section_count
            ),
            options: vec![
                ("Continue".to_string(), Message::ConfirmBackToSetup),
                ("Cancel".to_string(), Message::CancelDialog),
            ],
        }
    }

    /// The message attached to the confirming (first) option, if any
    pub fn confirm_message(&self) -> Option<Message> {
        self.options.first().map(|(_, msg)| msg.clone())
    }
}
