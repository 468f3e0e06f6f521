//! Section data model
//!
//! A page is an insertion-ordered sequence of typed [`Section`] records.
//! Sections are only ever created from a successful copy-generation result
//! and are mutated by id-addressed field edits or regeneration.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default background color applied to every new section
pub const DEFAULT_BACKGROUND_COLOR: &str = "#ffffff";

/// Default text color applied to every new section
pub const DEFAULT_TEXT_COLOR: &str = "#111827";

/// Placeholder image attached to new Hero sections until the user uploads one
pub const HERO_PLACEHOLDER_URL: &str = "https://picsum.photos/800/600";

/// The closed set of block kinds a page is assembled from.
///
/// A section's type is fixed at creation; no operation changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionType {
    /// Main intro: headline plus short sub-copy, two-column with image
    Hero,
    /// Key selling points, one card per content line
    Features,
    /// A single vivid customer review
    Review,
    /// Technical details rendered as preformatted text
    Spec,
    /// Purchase call-to-action
    Cta,
    /// Discounts, bundles, review events
    Event,
}

impl SectionType {
    /// All section types in the order they appear in the add-section menu
    pub const ALL: [SectionType; 6] = [
        SectionType::Hero,
        SectionType::Features,
        SectionType::Review,
        SectionType::Spec,
        SectionType::Cta,
        SectionType::Event,
    ];

    /// Menu label shown next to the section-type shortcut
    pub fn label(&self) -> &'static str {
        match self {
            SectionType::Hero => "Main intro",
            SectionType::Features => "Key features",
            SectionType::Review => "Best review",
            SectionType::Spec => "Detailed specs",
            SectionType::Cta => "Purchase push",
            SectionType::Event => "Event / perks",
        }
    }

    /// Short name used in prompts and logs
    pub fn name(&self) -> &'static str {
        match self {
            SectionType::Hero => "Hero",
            SectionType::Features => "Features",
            SectionType::Review => "Review",
            SectionType::Spec => "Spec",
            SectionType::Cta => "CTA",
            SectionType::Event => "Event",
        }
    }

    /// Per-type guidance line embedded in the copy-generation prompt
    pub fn guideline(&self) -> &'static str {
        match self {
            SectionType::Hero => {
                "Hero (main intro): a strong headline that grabs attention plus a short sub-line."
            }
            SectionType::Features => {
                "Features (selling points): the product's three core advantages, \
                 one per line, each with a clear name and explanation."
            }
            SectionType::Review => {
                "Review: one vivid customer review that reads like real first-hand use."
            }
            SectionType::Spec => {
                "Spec (details): technical specifications or product facts as a clean list."
            }
            SectionType::Cta => {
                "CTA (purchase push): a compelling reason to buy right now and a strong closing line."
            }
            SectionType::Event => {
                "Event: copy that highlights discounts, bundles, or review-event perks."
            }
        }
    }
}

/// Collision-resistant section identity.
///
/// UUID v4 rather than an informal random token; unique within the page
/// and never reassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SectionId(Uuid);

impl SectionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Image attached to a section: a remote URL or an inline encoded PNG.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionImage {
    /// Remote image URL (e.g. the Hero placeholder)
    Url(String),
    /// Inline `data:image/png;base64,...` URL from upload or compositing
    DataUrl(String),
}

impl SectionImage {
    /// The src value to embed in the exported HTML
    pub fn as_src(&self) -> &str {
        match self {
            SectionImage::Url(url) => url,
            SectionImage::DataUrl(data) => data,
        }
    }

    /// True for inline uploaded/composited images (the only kind the
    /// compositing operation accepts as input)
    pub fn is_inline(&self) -> bool {
        matches!(self, SectionImage::DataUrl(_))
    }

    /// Extract the raw base64 payload of an inline image, if any
    pub fn inline_base64(&self) -> Option<&str> {
        match self {
            SectionImage::DataUrl(data) => data.split_once(',').map(|(_, b64)| b64),
            SectionImage::Url(_) => None,
        }
    }
}

/// Title + content pair produced by copy generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionCopy {
    pub title: String,
    pub content: String,
}

impl SectionCopy {
    /// Fixed placeholder copy offered when generation fails.
    ///
    /// Kept editable like any other copy so a failed generation never
    /// blocks page assembly.
    pub fn fallback() -> Self {
        Self {
            title: "Copy generation failed".to_string(),
            content: "Something went wrong while writing this section. \
                      Edit this text directly or try regenerating."
                .to_string(),
        }
    }
}

/// One editable block of the output page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    pub section_type: SectionType,
    pub title: String,
    pub content: String,
    pub image: Option<SectionImage>,
    pub background_color: String,
    pub text_color: String,
}

impl Section {
    /// Build a new section from a generation result.
    ///
    /// Colors take their defaults; only Hero sections start with a
    /// (placeholder) image.
    pub fn from_copy(section_type: SectionType, copy: SectionCopy) -> Self {
        Self {
            id: SectionId::new(),
            section_type,
            title: copy.title,
            content: copy.content,
            image: match section_type {
                SectionType::Hero => Some(SectionImage::Url(HERO_PLACEHOLDER_URL.to_string())),
                _ => None,
            },
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            text_color: DEFAULT_TEXT_COLOR.to_string(),
        }
    }

    /// Replace title and content atomically (regeneration).
    ///
    /// Id, type, image, and colors are untouched.
    pub fn apply_copy(&mut self, copy: SectionCopy) {
        self.title = copy.title;
        self.content = copy.content;
    }

    /// Content lines for Features rendering: split on newlines, blanks dropped
    pub fn content_lines(&self) -> impl Iterator<Item = &str> {
        self.content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn copy(title: &str, content: &str) -> SectionCopy {
        SectionCopy {
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_hero_gets_placeholder_image() {
        let section = Section::from_copy(SectionType::Hero, copy("Headline", "Sub"));
        assert_eq!(
            section.image,
            Some(SectionImage::Url(HERO_PLACEHOLDER_URL.to_string()))
        );
        assert_eq!(section.background_color, DEFAULT_BACKGROUND_COLOR);
        assert_eq!(section.text_color, DEFAULT_TEXT_COLOR);
    }

    #[test]
    fn test_non_hero_has_no_image() {
        for section_type in SectionType::ALL {
            if section_type == SectionType::Hero {
                continue;
            }
            let section = Section::from_copy(section_type, copy("T", "C"));
            assert_eq!(section.image, None, "{:?}", section_type);
        }
    }

    #[test]
    fn test_ids_are_distinct() {
        let a = Section::from_copy(SectionType::Cta, copy("A", "a"));
        let b = Section::from_copy(SectionType::Cta, copy("B", "b"));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_apply_copy_preserves_identity_and_style() {
        let mut section = Section::from_copy(SectionType::Hero, copy("Old", "old body"));
        let id = section.id;
        section.background_color = "#000000".to_string();

        section.apply_copy(copy("New", "new body"));

        assert_eq!(section.id, id);
        assert_eq!(section.section_type, SectionType::Hero);
        assert_eq!(section.title, "New");
        assert_eq!(section.content, "new body");
        assert_eq!(section.background_color, "#000000");
        assert!(section.image.is_some());
    }

    #[test]
    fn test_content_lines_drops_blanks() {
        let mut section = Section::from_copy(SectionType::Features, copy("T", ""));
        section.content = "First point\n\n  Second point  \n\nThird point\n".to_string();
        let lines: Vec<&str> = section.content_lines().collect();
        assert_eq!(lines, vec!["First point", "Second point", "Third point"]);
    }

    #[test]
    fn test_inline_base64_extraction() {
        let image = SectionImage::DataUrl("data:image/png;base64,AAAA".to_string());
        assert_eq!(image.inline_base64(), Some("AAAA"));
        assert!(image.is_inline());

        let remote = SectionImage::Url("https://example.com/x.png".to_string());
        assert_eq!(remote.inline_base64(), None);
        assert!(!remote.is_inline());
    }

    #[test]
    fn test_fallback_copy_is_editable_text() {
        let fallback = SectionCopy::fallback();
        assert!(!fallback.title.is_empty());
        assert!(fallback.content.contains("regenerating"));
    }

    #[test]
    fn test_section_type_labels() {
        assert_eq!(SectionType::Hero.label(), "Main intro");
        assert_eq!(SectionType::Cta.name(), "CTA");
        assert!(SectionType::Features.guideline().contains("three core advantages"));
    }
}
