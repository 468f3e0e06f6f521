//! Product metadata collected in setup mode

use serde::{Deserialize, Serialize};

/// Preset target-audience labels offered in the setup form
pub const AUDIENCE_PRESETS: &[&str] = &[
    "General customers",
    "Young professionals",
    "Homemakers 40-50",
    "Single households",
    "Fitness enthusiasts",
    "Pet owners",
];

/// Preset tone-of-voice labels offered in the setup form
pub const TONE_PRESETS: &[&str] = &[
    "Professional and trustworthy",
    "Friendly and warm",
    "Emotional",
    "Bold and emphatic",
    "Witty and humorous",
];

/// Product metadata that seeds every generation prompt.
///
/// Immutable once editing starts, except through the explicit
/// change-settings action that returns to setup mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub product_name: String,
    pub product_desc: String,
    pub target_audience: String,
    pub tone: String,
}

impl Default for ProjectInfo {
    fn default() -> Self {
        Self {
            product_name: String::new(),
            product_desc: String::new(),
            target_audience: AUDIENCE_PRESETS[0].to_string(),
            tone: TONE_PRESETS[0].to_string(),
        }
    }
}

impl ProjectInfo {
    /// Whether setup can transition to editing.
    ///
    /// Name and description must be non-empty after trimming; audience and
    /// tone always carry preset defaults.
    pub fn is_ready_for_editing(&self) -> bool {
        !self.product_name.trim().is_empty() && !self.product_desc.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_carries_presets() {
        let info = ProjectInfo::default();
        assert_eq!(info.target_audience, "General customers");
        assert_eq!(info.tone, "Professional and trustworthy");
        assert!(!info.is_ready_for_editing());
    }

    #[test]
    fn test_ready_requires_name_and_description() {
        let mut info = ProjectInfo::default();
        info.product_name = "Desk Lamp".to_string();
        assert!(!info.is_ready_for_editing());

        info.product_desc = "LED, dimmable".to_string();
        assert!(info.is_ready_for_editing());
    }

    #[test]
    fn test_whitespace_only_fields_are_not_ready() {
        let info = ProjectInfo {
            product_name: "   ".to_string(),
            product_desc: "\n\t".to_string(),
            ..Default::default()
        };
        assert!(!info.is_ready_for_editing());
    }
}
