//! Wire types for the Gemini `generateContent` endpoint
//!
//! Only the subset of the request/response shapes Pagecraft actually uses.

use pagecraft_core::SectionCopy;
use serde::{Deserialize, Serialize};

use crate::error::{GenAiError, GenAiResult};

// ─────────────────────────────────────────────────────────
// Request
// ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    pub parts: Vec<Part>,
}

/// One part of a content turn: text or an inline image, never both.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn inline_png(base64_data: impl Into<String>) -> Self {
        Self {
            inline_data: Some(InlineData {
                mime_type: "image/png".to_string(),
                data: base64_data.into(),
            }),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: Schema,
}

impl GenerationConfig {
    /// The JSON constraint for copy generation: an object with exactly the
    /// two required string fields `title` and `content`.
    pub fn section_copy_schema() -> Self {
        Self {
            response_mime_type: "application/json".to_string(),
            response_schema: Schema {
                schema_type: "OBJECT".to_string(),
                properties: Some(
                    [
                        ("title".to_string(), Schema::string()),
                        ("content".to_string(), Schema::string()),
                    ]
                    .into_iter()
                    .collect(),
                ),
                required: Some(vec!["title".to_string(), "content".to_string()]),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(rename = "type")]
    pub schema_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<std::collections::BTreeMap<String, Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

impl Schema {
    fn string() -> Self {
        Self {
            schema_type: "STRING".to_string(),
            properties: None,
            required: None,
        }
    }
}

// ─────────────────────────────────────────────────────────
// Response
// ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate's parts.
    pub fn first_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Base64 payload of the first inline image part of the first candidate.
    pub fn first_inline_image(&self) -> Option<&str> {
        let content = self.candidates.first()?.content.as_ref()?;
        content
            .parts
            .iter()
            .find_map(|part| part.inline_data.as_ref())
            .map(|inline| inline.data.as_str())
    }
}

/// Strict deserialization target for constrained copy responses.
///
/// `deny_unknown_fields` enforces the "no other fields permitted" contract
/// instead of letting malformed model output flow into the record.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SectionCopyWire {
    title: String,
    content: String,
}

/// Validate the model's JSON text against the two-field copy schema.
pub fn parse_section_copy(text: &str) -> GenAiResult<SectionCopy> {
    let wire: SectionCopyWire =
        serde_json::from_str(text).map_err(|e| GenAiError::malformed(e.to_string()))?;
    Ok(SectionCopy {
        title: wire.title,
        content: wire.content,
    })
}
