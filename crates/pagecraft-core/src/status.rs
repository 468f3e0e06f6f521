//! Top-level application phase

use serde::{Deserialize, Serialize};

/// Which screen of the application is active.
///
/// Setup -> Editing requires a ready [`crate::ProjectInfo`]; Editing ->
/// Setup is always permitted and leaves the section sequence intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AppStatus {
    /// Collecting product metadata; no sections visible
    #[default]
    Setup,

    /// Sections visible and editable
    Editing,

    /// Reserved for a dedicated preview screen; currently unused
    Preview,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_setup() {
        assert_eq!(AppStatus::default(), AppStatus::Setup);
    }
}
