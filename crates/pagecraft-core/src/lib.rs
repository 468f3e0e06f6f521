//! # pagecraft-core - Core Domain Types
//!
//! Foundation crate for Pagecraft. Provides the page/section data model,
//! error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, uuid, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`section`, `project`, `status`)
//! - [`Section`] - One editable block of the output page
//! - [`SectionType`] - The closed set of block kinds (Hero, Features, ...)
//! - [`SectionId`] - Collision-resistant section identity (UUID v4)
//! - [`SectionImage`] - Remote URL or inline base64 data URL
//! - [`ProjectInfo`] - Product name, description, audience, tone
//! - [`AppStatus`] - Top-level application phase (Setup / Editing)
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use pagecraft_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod project;
pub mod section;
pub mod status;

/// Prelude for common imports used throughout all Pagecraft crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use project::{ProjectInfo, AUDIENCE_PRESETS, TONE_PRESETS};
pub use section::{
    Section, SectionCopy, SectionId, SectionImage, SectionType, DEFAULT_BACKGROUND_COLOR,
    DEFAULT_TEXT_COLOR, HERO_PLACEHOLDER_URL,
};
pub use status::AppStatus;
