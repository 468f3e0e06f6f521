//! Editing panel state for the selected section.
//!
//! Busy flags here are local to the panel: they gate regenerate and
//! composite independently of the global append guard. The panel is only
//! meaningful while a section is selected; the handlers reset it whenever
//! the selection changes.

/// Preset background palette cycled by the panel
pub const BACKGROUND_PALETTE: &[&str] = &[
    "#ffffff", "#f8fafc", "#fef3c7", "#dcfce7", "#dbeafe", "#fce7f3", "#111827",
];

/// Preset text palette cycled by the panel
pub const TEXT_PALETTE: &[&str] = &["#111827", "#374151", "#7c2d12", "#14532d", "#1e3a8a", "#ffffff"];

/// Which panel control has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelField {
    #[default]
    Title,
    Content,
    Regenerate,
    ImagePath,
    Composite,
    BackgroundColor,
    TextColor,
    Delete,
}

impl PanelField {
    pub fn next(self) -> Self {
        match self {
            PanelField::Title => PanelField::Content,
            PanelField::Content => PanelField::Regenerate,
            PanelField::Regenerate => PanelField::ImagePath,
            PanelField::ImagePath => PanelField::Composite,
            PanelField::Composite => PanelField::BackgroundColor,
            PanelField::BackgroundColor => PanelField::TextColor,
            PanelField::TextColor => PanelField::Delete,
            PanelField::Delete => PanelField::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            PanelField::Title => PanelField::Delete,
            PanelField::Content => PanelField::Title,
            PanelField::Regenerate => PanelField::Content,
            PanelField::ImagePath => PanelField::Regenerate,
            PanelField::Composite => PanelField::ImagePath,
            PanelField::BackgroundColor => PanelField::Composite,
            PanelField::TextColor => PanelField::BackgroundColor,
            PanelField::Delete => PanelField::TextColor,
        }
    }

    /// Fields edited by typing into a buffer
    pub fn is_text(self) -> bool {
        matches!(
            self,
            PanelField::Title | PanelField::Content | PanelField::ImagePath
        )
    }
}

/// State backing the editing panel for the selected section.
#[derive(Debug, Clone, Default)]
pub struct PanelState {
    pub focus: PanelField,
    /// Copy regeneration in flight for the bound section
    pub regenerating: bool,
    /// Image composite in flight for the bound section
    pub compositing: bool,
    /// Image file load in flight for the bound section
    pub attaching: bool,
    /// Path buffer for the attach-image control
    pub image_path: String,
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to defaults; called when the selection changes.
    ///
    /// Busy flags are NOT carried over: in-flight results still land by
    /// id, the panel just stops showing a spinner for a record it no
    /// longer fronts.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Whether any background work bound to this panel is in flight
    pub fn is_busy(&self) -> bool {
        self.regenerating || self.compositing || self.attaching
    }
}

/// Next color in a palette, starting over when the current value is not a
/// palette member.
pub fn next_palette_color(palette: &[&str], current: &str) -> String {
    let index = palette
        .iter()
        .position(|c| c.eq_ignore_ascii_case(current))
        .map(|i| (i + 1) % palette.len())
        .unwrap_or(0);
    palette[index].to_string()
}
