//! UI widgets

pub mod confirm_dialog;
pub mod editor_panel;
pub mod header;
pub mod section_view;
pub mod setup_form;
pub mod status_bar;

pub use confirm_dialog::ConfirmDialog;
pub use editor_panel::EditorPanel;
pub use header::MainHeader;
pub use section_view::SectionView;
pub use setup_form::SetupForm;
pub use status_bar::StatusBar;
