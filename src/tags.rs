/// Tag-chip input used by the photo upload and edit forms: the user types a
/// free-text tag and submits it with Enter, building up an ad-hoc list.
#[derive(Debug, Clone, Default)]
pub struct TagChips {
    tags: Vec<String>,
    draft: String,
}

impl TagChips {
    pub fn new(tags: Vec<String>) -> Self {
        TagChips {
            tags,
            draft: String::new(),
        }
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    /// Commits the draft as a chip. Surrounding whitespace is trimmed but no
    /// other normalization applies; an empty draft is a no-op and an exact
    /// (case-sensitive) duplicate is rejected silently. The draft is cleared
    /// whenever a value was submitted.
    pub fn submit(&mut self) {
        let tag = self.draft.trim();
        if tag.is_empty() {
            return;
        }
        if !self.tags.iter().any(|t| t == tag) {
            self.tags.push(tag.to_string());
        }
        self.draft.clear();
    }

    /// Removes exactly the given chip, if present.
    pub fn remove(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    pub fn into_tags(self) -> Vec<String> {
        self.tags
    }
}

/// Applies the chip rules (trim, drop empties, drop exact duplicates) to a
/// tag list arriving in one request, preserving first-seen order.
pub fn normalize_tags(raw: Vec<String>) -> Vec<String> {
    let mut chips = TagChips::default();
    for tag in raw {
        chips.set_draft(tag);
        chips.submit();
    }
    chips.into_tags()
}
