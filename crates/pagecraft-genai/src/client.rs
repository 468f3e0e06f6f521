//! HTTP client for the Gemini `generateContent` endpoints
//!
//! One client instance is shared for the whole application lifetime.
//! Both operations are single request/response calls with no retry; the
//! caller decides how a failure is surfaced.

use std::time::Duration;

use pagecraft_core::prelude::*;
use pagecraft_core::{ProjectInfo, SectionCopy, SectionType};

use crate::error::{GenAiError, GenAiResult};
use crate::prompt;
use crate::protocol::{
    parse_section_copy, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    Part,
};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TEXT_MODEL: &str = "gemini-3-pro-preview";
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for [`GeminiClient`].
///
/// The credential is optional here: absence is not an error until the
/// first call actually needs it.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub text_model: String,
    pub image_model: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
        }
    }
}

/// HTTP client for a single Gemini API endpoint.
pub struct GeminiClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl GeminiClient {
    /// Create a new client with its own connection pool.
    pub fn new(config: ClientConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self { client, config }
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling in tests).
    pub fn with_client(client: reqwest::Client, config: ClientConfig) -> Self {
        Self { client, config }
    }

    /// Generate one section's title and content.
    ///
    /// The request carries a response schema constraining the reply to a
    /// JSON object with exactly the two string fields; the reply text is
    /// still validated against that shape before it is trusted.
    pub async fn generate_copy(
        &self,
        info: &ProjectInfo,
        section_type: SectionType,
    ) -> GenAiResult<SectionCopy> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part::text(prompt::copy_prompt(info, section_type))],
            }],
            generation_config: Some(GenerationConfig::section_copy_schema()),
        };

        debug!("Requesting {} copy from Gemini", section_type.name());
        let response = self.generate(&self.config.text_model, &request).await?;

        let text = response
            .first_text()
            .ok_or_else(|| GenAiError::malformed("response carried no text part"))?;
        parse_section_copy(&text)
    }

    /// Composite or background-strip a product image.
    ///
    /// One inline PNG means background removal; a second one means
    /// composite-onto-background. Returns the first inline image of the
    /// reply as a `data:image/png;base64,...` URL. Unlike copy generation
    /// there is no safe placeholder for an image, so every failure
    /// propagates.
    pub async fn composite_image(
        &self,
        product_png_b64: &str,
        background_png_b64: Option<&str>,
    ) -> GenAiResult<String> {
        let mut parts = vec![Part::inline_png(product_png_b64)];
        if let Some(background) = background_png_b64 {
            parts.push(Part::inline_png(background));
        }
        parts.push(Part::text(prompt::composite_prompt(
            background_png_b64.is_some(),
        )));

        let request = GenerateContentRequest {
            contents: vec![Content { parts }],
            generation_config: None,
        };

        debug!(
            "Requesting image composite from Gemini (background: {})",
            background_png_b64.is_some()
        );
        let response = self.generate(&self.config.image_model, &request).await?;

        response
            .first_inline_image()
            .map(|data| format!("data:image/png;base64,{data}"))
            .ok_or(GenAiError::NoImageData)
    }

    /// Issue one `generateContent` call against the given model.
    async fn generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> GenAiResult<GenerateContentResponse> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(GenAiError::MissingCredential)?;

        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url, model
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Gemini call failed with status {}", status);
            return Err(GenAiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert!(config.api_key.is_none());
        assert!(config.base_url.starts_with("https://"));
        assert_eq!(config.text_model, DEFAULT_TEXT_MODEL);
        assert_eq!(config.image_model, DEFAULT_IMAGE_MODEL);
    }

    #[tokio::test]
    async fn test_missing_credential_fails_before_network() {
        let client = GeminiClient::new(ClientConfig::default());
        let err = client
            .generate_copy(&ProjectInfo::default(), SectionType::Hero)
            .await
            .unwrap_err();
        assert!(matches!(err, GenAiError::MissingCredential));
    }

    #[tokio::test]
    async fn test_missing_credential_fails_composite_too() {
        let client = GeminiClient::new(ClientConfig::default());
        let err = client.composite_image("QUJD", None).await.unwrap_err();
        assert!(matches!(err, GenAiError::MissingCredential));
    }
}
