//! Setup form state: project details entered before editing begins.

use pagecraft_core::{ProjectInfo, AUDIENCE_PRESETS, TONE_PRESETS};

/// Which field of the setup form has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SetupField {
    #[default]
    Name,
    Description,
    Audience,
    Tone,
    Start,
}

impl SetupField {
    pub fn next(self) -> Self {
        match self {
            SetupField::Name => SetupField::Description,
            SetupField::Description => SetupField::Audience,
            SetupField::Audience => SetupField::Tone,
            SetupField::Tone => SetupField::Start,
            SetupField::Start => SetupField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            SetupField::Name => SetupField::Start,
            SetupField::Description => SetupField::Name,
            SetupField::Audience => SetupField::Description,
            SetupField::Tone => SetupField::Audience,
            SetupField::Start => SetupField::Tone,
        }
    }

    /// Fields edited by typing (as opposed to cycling presets)
    pub fn is_text(self) -> bool {
        matches!(self, SetupField::Name | SetupField::Description)
    }
}

/// Editable state backing the setup screen.
///
/// Audience and tone are preset pickers; name and description are free text.
#[derive(Debug, Clone)]
pub struct SetupFormState {
    pub focus: SetupField,
    pub product_name: String,
    pub product_desc: String,
    pub audience_index: usize,
    pub tone_index: usize,
}

impl Default for SetupFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl SetupFormState {
    pub fn new() -> Self {
        Self {
            focus: SetupField::Name,
            product_name: String::new(),
            product_desc: String::new(),
            audience_index: 0,
            tone_index: 0,
        }
    }

    /// Re-populate the form from existing project details (back-to-setup)
    pub fn from_info(info: &ProjectInfo) -> Self {
        let audience_index = AUDIENCE_PRESETS
            .iter()
            .position(|p| *p == info.target_audience)
            .unwrap_or(0);
        let tone_index = TONE_PRESETS
            .iter()
            .position(|p| *p == info.tone)
            .unwrap_or(0);
        Self {
            focus: SetupField::Name,
            product_name: info.product_name.clone(),
            product_desc: info.product_desc.clone(),
            audience_index,
            tone_index,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Append a character to the focused text field. No-op on picker fields.
    pub fn push_char(&mut self, c: char) {
        match self.focus {
            SetupField::Name => self.product_name.push(c),
            SetupField::Description => self.product_desc.push(c),
            _ => {}
        }
    }

    /// Delete the last character of the focused text field.
    pub fn pop_char(&mut self) {
        match self.focus {
            SetupField::Name => {
                self.product_name.pop();
            }
            SetupField::Description => {
                self.product_desc.pop();
            }
            _ => {}
        }
    }

    /// Cycle the focused preset picker forward. No-op on text fields.
    pub fn cycle_forward(&mut self) {
        match self.focus {
            SetupField::Audience => {
                self.audience_index = (self.audience_index + 1) % AUDIENCE_PRESETS.len();
            }
            SetupField::Tone => {
                self.tone_index = (self.tone_index + 1) % TONE_PRESETS.len();
            }
            _ => {}
        }
    }

    /// Cycle the focused preset picker backward.
    pub fn cycle_backward(&mut self) {
        match self.focus {
            SetupField::Audience => {
                self.audience_index =
                    (self.audience_index + AUDIENCE_PRESETS.len() - 1) % AUDIENCE_PRESETS.len();
            }
            SetupField::Tone => {
                self.tone_index = (self.tone_index + TONE_PRESETS.len() - 1) % TONE_PRESETS.len();
            }
            _ => {}
        }
    }

    pub fn audience(&self) -> &'static str {
        AUDIENCE_PRESETS[self.audience_index % AUDIENCE_PRESETS.len()]
    }

    pub fn tone(&self) -> &'static str {
        TONE_PRESETS[self.tone_index % TONE_PRESETS.len()]
    }

    /// Snapshot the form into the project details used for generation.
    pub fn to_info(&self) -> ProjectInfo {
        ProjectInfo {
            product_name: self.product_name.trim().to_string(),
            product_desc: self.product_desc.trim().to_string(),
            target_audience: self.audience().to_string(),
            tone: self.tone().to_string(),
        }
    }

    /// Whether the form is complete enough to enter editing.
    pub fn is_complete(&self) -> bool {
        self.to_info().is_ready_for_editing()
    }
}
