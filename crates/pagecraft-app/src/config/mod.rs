//! Configuration file parsing for Pagecraft
//!
//! Supports:
//! - `.pagecraft/config.toml` in the project directory
//! - a global `config.toml` under the user config dir
//!
//! The project file wins over the global one; the `GEMINI_API_KEY`
//! environment variable wins over both for the credential.

pub mod settings;
pub mod types;

pub use settings::{client_config, init_config_dir, load_settings};
pub use types::*;
