//! pagecraft-app - Application state and orchestration for Pagecraft
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: a single [`AppState`], a [`Message`] enum, a pure-ish
//! [`handler::update`] function, and [`UpdateAction`]s that the runner
//! executes as background tasks.

pub mod actions;
pub mod config;
pub mod confirm_dialog;
pub mod export;
pub mod handler;
pub mod image;
pub mod input_key;
pub mod message;
pub mod notice;
pub mod panel;
pub mod setup_form;
pub mod state;
pub mod store;

// Re-export primary types
pub use confirm_dialog::ConfirmDialogState;
pub use handler::{update, Task, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use notice::{Notice, NoticeLevel};
pub use panel::{PanelField, PanelState};
pub use setup_form::{SetupField, SetupFormState};
pub use state::AppState;
pub use store::{SectionEdit, SectionStore};
