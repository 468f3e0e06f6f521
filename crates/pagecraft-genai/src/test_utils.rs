//! Test utilities for the generation service
//!
//! Provides a scripted [`StubGenerator`] so handler and task tests can
//! run without the network. Responses are consumed in FIFO order; when
//! the script runs dry the stub answers with deterministic defaults.

use std::collections::VecDeque;
use std::sync::Mutex;

use pagecraft_core::{ProjectInfo, SectionCopy, SectionType};

use crate::error::{GenAiError, GenAiResult};
use crate::service::Generator;

/// Scripted stand-in for [`crate::GeminiClient`].
#[derive(Default)]
pub struct StubGenerator {
    copies: Mutex<VecDeque<GenAiResult<SectionCopy>>>,
    images: Mutex<VecDeque<GenAiResult<String>>>,
}

impl StubGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next copy-generation result.
    pub fn push_copy(&self, result: GenAiResult<SectionCopy>) {
        self.copies.lock().unwrap().push_back(result);
    }

    /// Queue a successful copy with the given fields.
    pub fn push_copy_ok(&self, title: &str, content: &str) {
        self.push_copy(Ok(SectionCopy {
            title: title.to_string(),
            content: content.to_string(),
        }));
    }

    /// Queue a failed copy generation.
    pub fn push_copy_err(&self, message: &str) {
        self.push_copy(Err(GenAiError::malformed(message)));
    }

    /// Queue the next compositing result.
    pub fn push_image(&self, result: GenAiResult<String>) {
        self.images.lock().unwrap().push_back(result);
    }
}

impl Generator for StubGenerator {
    async fn generate_copy(
        &self,
        _info: &ProjectInfo,
        section_type: SectionType,
    ) -> GenAiResult<SectionCopy> {
        self.copies.lock().unwrap().pop_front().unwrap_or_else(|| {
            Ok(SectionCopy {
                title: format!("{} title", section_type.name()),
                content: format!("{} content", section_type.name()),
            })
        })
    }

    async fn composite_image(
        &self,
        _product_png_b64: &str,
        _background_png_b64: Option<&str>,
    ) -> GenAiResult<String> {
        self.images
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok("data:image/png;base64,c3R1Yg==".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_stub_replays_scripted_copy() {
        let stub = StubGenerator::new();
        stub.push_copy_ok("Scripted", "body");

        let copy = stub
            .generate_copy(&ProjectInfo::default(), SectionType::Hero)
            .await
            .unwrap();
        assert_eq!(copy.title, "Scripted");

        // Script exhausted: falls back to deterministic defaults
        let copy = stub
            .generate_copy(&ProjectInfo::default(), SectionType::Cta)
            .await
            .unwrap();
        assert_eq!(copy.title, "CTA title");
    }

    #[tokio::test]
    async fn test_stub_replays_scripted_failure() {
        let stub = StubGenerator::new();
        stub.push_copy_err("model declined");
        let err = stub
            .generate_copy(&ProjectInfo::default(), SectionType::Hero)
            .await
            .unwrap_err();
        assert!(matches!(err, GenAiError::MalformedResponse { .. }));
    }

    #[tokio::test]
    async fn test_stub_image_defaults_to_data_url() {
        let stub = StubGenerator::new();
        let url = stub.composite_image("QUJD", None).await.unwrap();
        assert!(url.starts_with("data:image/png;base64,"));
    }
}
