//! Section store: the insertion-ordered section sequence
//!
//! Append always adds at the end; there is no reordering operation.
//! All mutations are id-addressed so in-flight generation results land on
//! the right record even if the selection moved meanwhile.

use pagecraft_core::{Section, SectionId, SectionImage};

/// Optional-field patch merged into a section by [`SectionStore::update`].
///
/// `image` is doubly optional: `Some(None)` clears the image,
/// `Some(Some(..))` replaces it, `None` leaves it alone.
#[derive(Debug, Clone, Default)]
pub struct SectionEdit {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image: Option<Option<SectionImage>>,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
}

impl SectionEdit {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    pub fn image(image: SectionImage) -> Self {
        Self {
            image: Some(Some(image)),
            ..Default::default()
        }
    }

    pub fn background_color(color: impl Into<String>) -> Self {
        Self {
            background_color: Some(color.into()),
            ..Default::default()
        }
    }

    pub fn text_color(color: impl Into<String>) -> Self {
        Self {
            text_color: Some(color.into()),
            ..Default::default()
        }
    }
}

/// The ordered section sequence.
#[derive(Debug, Clone, Default)]
pub struct SectionStore {
    sections: Vec<Section>,
}

impl SectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a section at the end of the sequence.
    pub fn append(&mut self, section: Section) -> SectionId {
        let id = section.id;
        self.sections.push(section);
        id
    }

    /// Merge an optional-field patch into the matching record.
    ///
    /// Returns `false` (and changes nothing) when the id is absent.
    pub fn update(&mut self, id: SectionId, edit: SectionEdit) -> bool {
        let Some(section) = self.get_mut(id) else {
            return false;
        };
        if let Some(title) = edit.title {
            section.title = title;
        }
        if let Some(content) = edit.content {
            section.content = content;
        }
        if let Some(image) = edit.image {
            section.image = image;
        }
        if let Some(color) = edit.background_color {
            section.background_color = color;
        }
        if let Some(color) = edit.text_color {
            section.text_color = color;
        }
        true
    }

    /// Remove the matching record, returning it. No-op for unknown ids.
    pub fn remove(&mut self, id: SectionId) -> Option<Section> {
        let index = self.position(id)?;
        Some(self.sections.remove(index))
    }

    pub fn get(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn get_mut(&mut self, id: SectionId) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.id == id)
    }

    pub fn contains(&self, id: SectionId) -> bool {
        self.position(id).is_some()
    }

    /// Index of the record in sequence order.
    pub fn position(&self, id: SectionId) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn as_slice(&self) -> &[Section] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Id of the record after `id` in sequence order (or the first record
    /// when `id` is `None`).
    pub fn next_id(&self, id: Option<SectionId>) -> Option<SectionId> {
        match id.and_then(|id| self.position(id)) {
            Some(index) => self
                .sections
                .get(index + 1)
                .or_else(|| self.sections.get(index))
                .map(|s| s.id),
            None => self.sections.first().map(|s| s.id),
        }
    }

    /// Id of the record before `id` in sequence order (or the last record
    /// when `id` is `None`).
    pub fn prev_id(&self, id: Option<SectionId>) -> Option<SectionId> {
        match id.and_then(|id| self.position(id)) {
            Some(0) => self.sections.first().map(|s| s.id),
            Some(index) => self.sections.get(index - 1).map(|s| s.id),
            None => self.sections.last().map(|s| s.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_core::{SectionCopy, SectionType};

    fn section(section_type: SectionType, title: &str) -> Section {
        Section::from_copy(
            section_type,
            SectionCopy {
                title: title.to_string(),
                content: "body".to_string(),
            },
        )
    }

    #[test]
    fn test_append_grows_by_one_and_preserves_order() {
        let mut store = SectionStore::new();
        let a = store.append(section(SectionType::Hero, "A"));
        let b = store.append(section(SectionType::Cta, "B"));

        assert_eq!(store.len(), 2);
        assert_ne!(a, b);
        let titles: Vec<&str> = store.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn test_update_changes_only_named_fields() {
        let mut store = SectionStore::new();
        let id = store.append(section(SectionType::Hero, "Old"));
        let other = store.append(section(SectionType::Cta, "Other"));

        assert!(store.update(id, SectionEdit::title("X")));

        let updated = store.get(id).unwrap();
        assert_eq!(updated.title, "X");
        assert_eq!(updated.content, "body");
        assert_eq!(updated.section_type, SectionType::Hero);
        assert!(updated.image.is_some());
        assert_eq!(store.get(other).unwrap().title, "Other");
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut store = SectionStore::new();
        store.append(section(SectionType::Hero, "A"));
        let stray = section(SectionType::Cta, "stray").id;

        assert!(!store.update(stray, SectionEdit::title("X")));
        assert_eq!(store.iter().next().unwrap().title, "A");
    }

    #[test]
    fn test_remove_exact_record() {
        let mut store = SectionStore::new();
        let a = store.append(section(SectionType::Hero, "A"));
        let b = store.append(section(SectionType::Cta, "B"));

        let removed = store.remove(a).unwrap();
        assert_eq!(removed.title, "A");
        assert_eq!(store.len(), 1);
        assert!(store.contains(b));

        // Removing again is a no-op
        assert!(store.remove(a).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_image_edit_replaces_and_clears() {
        let mut store = SectionStore::new();
        let id = store.append(section(SectionType::Hero, "A"));

        let inline = SectionImage::DataUrl("data:image/png;base64,QUJD".to_string());
        store.update(id, SectionEdit::image(inline.clone()));
        assert_eq!(store.get(id).unwrap().image, Some(inline));

        store.update(
            id,
            SectionEdit {
                image: Some(None),
                ..Default::default()
            },
        );
        assert_eq!(store.get(id).unwrap().image, None);
    }

    #[test]
    fn test_next_prev_navigation() {
        let mut store = SectionStore::new();
        let a = store.append(section(SectionType::Hero, "A"));
        let b = store.append(section(SectionType::Cta, "B"));

        assert_eq!(store.next_id(None), Some(a));
        assert_eq!(store.next_id(Some(a)), Some(b));
        assert_eq!(store.next_id(Some(b)), Some(b)); // clamps at end
        assert_eq!(store.prev_id(Some(b)), Some(a));
        assert_eq!(store.prev_id(Some(a)), Some(a)); // clamps at start
        assert_eq!(store.prev_id(None), Some(b));
    }

    #[test]
    fn test_navigation_on_empty_store() {
        let store = SectionStore::new();
        assert_eq!(store.next_id(None), None);
        assert_eq!(store.prev_id(None), None);
    }
}
