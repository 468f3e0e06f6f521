//! Generation service trait
//!
//! Abstracts the Gemini client so the application layer's handlers and
//! background tasks can be driven by a scripted stub in tests.

use pagecraft_core::{ProjectInfo, SectionCopy, SectionType};

use crate::client::GeminiClient;
use crate::error::GenAiResult;

/// Copy-generation and image-compositing operations.
///
/// The `Generator` variant (with `Send` futures) is the bound used by
/// spawned tasks; `LocalGenerator` exists for single-threaded callers.
#[trait_variant::make(Generator: Send)]
pub trait LocalGenerator {
    /// Generate title + content for one section of the page.
    async fn generate_copy(
        &self,
        info: &ProjectInfo,
        section_type: SectionType,
    ) -> GenAiResult<SectionCopy>;

    /// Composite a product image (optionally onto a background image);
    /// returns the result as a data URL.
    async fn composite_image(
        &self,
        product_png_b64: &str,
        background_png_b64: Option<&str>,
    ) -> GenAiResult<String>;
}

impl Generator for GeminiClient {
    async fn generate_copy(
        &self,
        info: &ProjectInfo,
        section_type: SectionType,
    ) -> GenAiResult<SectionCopy> {
        GeminiClient::generate_copy(self, info, section_type).await
    }

    async fn composite_image(
        &self,
        product_png_b64: &str,
        background_png_b64: Option<&str>,
    ) -> GenAiResult<String> {
        GeminiClient::composite_image(self, product_png_b64, background_png_b64).await
    }
}
