//! Application state (Model in TEA pattern)

use std::path::PathBuf;

use pagecraft_core::{AppStatus, ProjectInfo, SectionId};

use crate::config::Settings;
use crate::confirm_dialog::ConfirmDialogState;
use crate::notice::Notice;
use crate::panel::PanelState;
use crate::setup_form::SetupFormState;
use crate::store::SectionStore;

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Current screen
    pub status: AppStatus,

    /// Project details driving copy generation; snapshotted from the
    /// setup form when editing starts
    pub project_info: ProjectInfo,

    /// Setup screen form
    pub setup_form: SetupFormState,

    /// The ordered section sequence
    pub store: SectionStore,

    /// Selected section, if any
    pub selected_id: Option<SectionId>,

    /// Append guard: a new-section generation task is in flight
    pub adding_section: bool,

    /// Editing panel bound to the selection
    pub panel: PanelState,

    /// Modal confirmation dialog, when open
    pub confirm_dialog: Option<ConfirmDialogState>,

    /// Transient banner
    pub notice: Option<Notice>,

    /// Loaded settings
    pub settings: Settings,

    /// Project directory; exports land here
    pub project_dir: PathBuf,

    /// Set when the event loop should exit
    pub quitting: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            status: AppStatus::Setup,
            project_info: ProjectInfo::default(),
            setup_form: SetupFormState::new(),
            store: SectionStore::new(),
            selected_id: None,
            adding_section: false,
            panel: PanelState::new(),
            confirm_dialog: None,
            notice: None,
            settings,
            project_dir: PathBuf::from("."),
            quitting: false,
        }
    }

    /// Select a section (or clear the selection) and reset the panel
    pub fn select(&mut self, id: Option<SectionId>) {
        if self.selected_id != id {
            self.selected_id = id;
            self.panel.reset();
        }
    }

    /// The selected section, dropping a selection that no longer resolves
    pub fn selected_section(&self) -> Option<&pagecraft_core::Section> {
        self.selected_id.and_then(|id| self.store.get(id))
    }

    pub fn show_info(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice::info(text));
    }

    pub fn show_error(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice::error(text));
    }

    /// Check if the app should quit
    pub fn should_quit(&self) -> bool {
        self.quitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SectionEdit;
    use pagecraft_core::{SectionCopy, SectionType};

    #[test]
    fn test_new_state_starts_in_setup() {
        let state = AppState::new();
        assert_eq!(state.status, AppStatus::Setup);
        assert!(state.store.is_empty());
        assert!(state.selected_id.is_none());
        assert!(!state.adding_section);
        assert!(!state.should_quit());
    }

    #[test]
    fn test_select_change_resets_panel() {
        let mut state = AppState::new();
        let id = state.store.append(pagecraft_core::Section::from_copy(
            SectionType::Hero,
            SectionCopy {
                title: "t".to_string(),
                content: "c".to_string(),
            },
        ));
        state.panel.regenerating = true;

        state.select(Some(id));
        assert!(!state.panel.regenerating);

        // Re-selecting the same id keeps the panel alone
        state.panel.image_path = "a.png".to_string();
        state.select(Some(id));
        assert_eq!(state.panel.image_path, "a.png");
    }

    #[test]
    fn test_selected_section_resolves_by_id() {
        let mut state = AppState::new();
        let id = state.store.append(pagecraft_core::Section::from_copy(
            SectionType::Cta,
            SectionCopy {
                title: "Buy".to_string(),
                content: "now".to_string(),
            },
        ));
        state.select(Some(id));
        state.store.update(id, SectionEdit::title("Order"));
        assert_eq!(state.selected_section().map(|s| s.title.as_str()), Some("Order"));

        state.store.remove(id);
        assert!(state.selected_section().is_none());
    }
}
