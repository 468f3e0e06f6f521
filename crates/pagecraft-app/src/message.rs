//! Messages (TEA pattern)
//!
//! Every state change flows through one of these. Input keys are turned
//! into semantic messages by the key handlers; background tasks report
//! back with the `*Generated` / `*Failed` variants, always carrying the
//! id they were spawned for.

use std::path::PathBuf;

use pagecraft_core::{SectionCopy, SectionId, SectionType};

use crate::input_key::InputKey;

/// All application messages
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // === Input & timing ===
    /// Raw key event from the terminal
    Key(InputKey),
    /// Periodic tick (notice expiry, spinner animation)
    Tick,

    // === Lifecycle ===
    /// Quit requested; may open a confirmation dialog
    RequestQuit,
    /// Quit confirmed (or no confirmation needed)
    ConfirmQuit,
    /// Close the open dialog without acting
    CancelDialog,

    // === Setup screen ===
    SetupFocusNext,
    SetupFocusPrev,
    SetupInput(char),
    SetupBackspace,
    /// Cycle the focused preset picker (audience/tone)
    SetupCycleForward,
    SetupCycleBackward,
    /// Leave setup for the editing screen; refused while incomplete
    StartEditing,
    /// Return to setup from editing; confirmed when sections exist
    RequestBackToSetup,
    ConfirmBackToSetup,

    // === Section sequence ===
    /// Generate copy for a new section of the given type
    AddSection(SectionType),
    /// New-section copy arrived
    SectionGenerated {
        section_type: SectionType,
        copy: SectionCopy,
    },
    /// New-section generation failed; the sequence is unchanged
    SectionGenerationFailed {
        section_type: SectionType,
        reason: String,
    },
    SelectNext,
    SelectPrev,
    ClearSelection,
    /// Ask before deleting
    RequestDeleteSection(SectionId),
    /// Delete confirmed
    ConfirmDeleteSection(SectionId),

    // === Editing panel ===
    PanelFocusNext,
    PanelFocusPrev,
    /// Typed character routed to the focused panel text field
    PanelInput(char),
    PanelBackspace,
    /// Enter on the focused panel control
    PanelActivate,
    /// Replace the section's copy with the fixed fallback text
    UseFallbackCopy(SectionId),
    RegenerateCopy(SectionId),
    CopyRegenerated {
        id: SectionId,
        copy: SectionCopy,
    },
    CopyRegenerationFailed {
        id: SectionId,
        reason: String,
    },
    /// Load a local PNG into the section as an inline data URL
    AttachImage {
        id: SectionId,
        path: PathBuf,
    },
    ImageAttached {
        id: SectionId,
        data_url: String,
    },
    ImageAttachFailed {
        id: SectionId,
        reason: String,
    },
    /// Send the section's inline image for AI background removal
    CompositeImage(SectionId),
    ImageComposited {
        id: SectionId,
        data_url: String,
    },
    ImageCompositeFailed {
        id: SectionId,
        reason: String,
    },
    CycleBackgroundColor(SectionId),
    CycleTextColor(SectionId),

    // === Export ===
    ExportPage,
    ExportCompleted(PathBuf),
    ExportFailed(String),
}
