//! Update function - handles state transitions (TEA pattern)
//!
//! `update` is synchronous and never touches the network or the
//! filesystem; anything slow becomes a [`Task`] for the runner to spawn.
//! Task results come back as messages carrying the id they were spawned
//! for, so they apply correctly even after the selection moved.

mod keys;
mod panel;
mod sections;
mod setup;
mod update;


use std::path::PathBuf;

use pagecraft_core::{ProjectInfo, Section, SectionId, SectionType};

use crate::message::Message;

pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Spawn a background task
    SpawnTask(Task),
}

/// Background tasks to spawn
#[derive(Debug, Clone)]
pub enum Task {
    /// Generate copy for a brand-new section
    GenerateSection {
        section_type: SectionType,
        info: ProjectInfo,
    },
    /// Regenerate copy for an existing section
    RegenerateCopy {
        id: SectionId,
        section_type: SectionType,
        info: ProjectInfo,
    },
    /// Read a local PNG into an inline data URL
    LoadImage { id: SectionId, path: PathBuf },
    /// Send an inline image for AI background removal
    CompositeImage {
        id: SectionId,
        product_png_b64: String,
    },
    /// Render and write the HTML page
    ExportPage {
        project_dir: PathBuf,
        filename: String,
        info: ProjectInfo,
        sections: Vec<Section>,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    pub fn task(task: Task) -> Self {
        Self::action(UpdateAction::SpawnTask(task))
    }
}
