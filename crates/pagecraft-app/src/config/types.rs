//! Configuration types for Pagecraft

use serde::{Deserialize, Serialize};

/// Application settings (.pagecraft/config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub export: ExportSettings,
}

/// Gemini API settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSettings {
    /// API key; the GEMINI_API_KEY environment variable overrides this
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base URL of the generative-language endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model used for copy generation
    #[serde(default = "default_text_model")]
    pub text_model: String,

    /// Model used for image compositing
    #[serde(default = "default_image_model")]
    pub image_model: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            text_model: default_text_model(),
            image_model: default_image_model(),
        }
    }
}

fn default_base_url() -> String {
    pagecraft_genai::client::DEFAULT_BASE_URL.to_string()
}

fn default_text_model() -> String {
    pagecraft_genai::client::DEFAULT_TEXT_MODEL.to_string()
}

fn default_image_model() -> String {
    pagecraft_genai::client::DEFAULT_IMAGE_MODEL.to_string()
}

/// Behavior settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Ask before quitting while the page has sections
    #[serde(default = "default_true")]
    pub confirm_quit: bool,

    /// Ask before deleting a section
    #[serde(default = "default_true")]
    pub confirm_delete: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            confirm_quit: true,
            confirm_delete: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Export settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportSettings {
    /// Filename of the exported HTML page, written into the project dir
    #[serde(default = "default_output_filename")]
    pub output_filename: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            output_filename: default_output_filename(),
        }
    }
}

fn default_output_filename() -> String {
    "page.html".to_string()
}
