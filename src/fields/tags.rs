//! Tag-list field values.
//!
//! An ordered set of short strings with a draft input. Committing the draft
//! trims it, ignores empties and silently deduplicates; removing an absent
//! tag is a no-op. The minimum-count rule lives in the schema, not here.

/// Headless state of one tag-list form control.
#[derive(Debug, Clone, Default)]
pub struct TagListField {
    values: Vec<String>,
    draft: String,
}

impl TagListField {
    pub fn new(values: Vec<String>) -> Self {
        Self {
            values,
            draft: String::new(),
        }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    /// Commit the draft as a tag (explicit action or Enter key).
    pub fn commit_draft(&mut self) {
        let trimmed = self.draft.trim().to_string();
        if trimmed.is_empty() {
            return;
        }
        self.add(trimmed);
        self.draft.clear();
    }

    /// Append a tag, keeping set semantics: duplicates are dropped silently.
    pub fn add(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.values.iter().any(|existing| *existing == tag) {
            self.values.push(tag);
        }
    }

    /// Remove a tag by value; removing a non-existent tag is a no-op.
    pub fn remove(&mut self, tag: &str) {
        self.values.retain(|existing| existing != tag);
    }

    pub fn into_values(self) -> Vec<String> {
        self.values
    }
}
