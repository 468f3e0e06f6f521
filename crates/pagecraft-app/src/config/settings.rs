//! Settings loader for .pagecraft/config.toml

use std::path::{Path, PathBuf};

use pagecraft_core::prelude::*;
use pagecraft_genai::ClientConfig;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const PAGECRAFT_DIR: &str = ".pagecraft";
const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Load settings for a project directory.
///
/// The project file (`.pagecraft/config.toml`) wins over the global file
/// (`<config dir>/pagecraft/config.toml`); defaults apply when neither
/// exists or a file fails to parse.
pub fn load_settings(project_path: &Path) -> Settings {
    let project_file = project_path.join(PAGECRAFT_DIR).join(CONFIG_FILENAME);
    if let Some(settings) = read_settings_file(&project_file) {
        return settings;
    }

    if let Some(global_file) = global_config_path() {
        if let Some(settings) = read_settings_file(&global_file) {
            return settings;
        }
    }

    debug!("No config file found, using defaults");
    Settings::default()
}

fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pagecraft").join(CONFIG_FILENAME))
}

fn read_settings_file(path: &Path) -> Option<Settings> {
    if !path.exists() {
        return None;
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", path);
                Some(settings)
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                None
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            None
        }
    }
}

/// Build the Gemini client config from settings.
///
/// `GEMINI_API_KEY` in the environment overrides the config-file key.
pub fn client_config(settings: &Settings) -> ClientConfig {
    let api_key = std::env::var(API_KEY_ENV)
        .ok()
        .filter(|key| !key.trim().is_empty())
        .or_else(|| settings.api.api_key.clone());

    ClientConfig {
        api_key,
        base_url: settings.api.base_url.clone(),
        text_model: settings.api.text_model.clone(),
        image_model: settings.api.image_model.clone(),
    }
}

/// Create a default config file in the .pagecraft/ directory
pub fn init_config_dir(project_path: &Path) -> Result<()> {
    let pagecraft_dir = project_path.join(PAGECRAFT_DIR);

    if !pagecraft_dir.exists() {
        std::fs::create_dir_all(&pagecraft_dir)
            .map_err(|e| Error::config(format!("Failed to create .pagecraft dir: {}", e)))?;
    }

    let config_path = pagecraft_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# Pagecraft Configuration

[api]
# api_key = ""                # Prefer the GEMINI_API_KEY env var
base_url = "https://generativelanguage.googleapis.com/v1beta"
text_model = "gemini-3-pro-preview"
image_model = "gemini-2.5-flash-image"

[behavior]
confirm_quit = true           # Ask before quitting with sections present
confirm_delete = true         # Ask before deleting a section

[export]
output_filename = "page.html"
"#;
        std::fs::write(&config_path, default_content)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
    }

    Ok(())
}
