//! Field kinds and their value engines.
//!
//! Each field kind is a closed variant with its own value-handling contract:
//! plain text, rich text (serialized HTML), tag lists, date-time strings and
//! uploaded image URLs. Widget painting is the embedding UI's concern; these
//! types own parsing, serialization and inline-error state only.

mod datetime;
mod editor;
mod image;
mod tags;

pub use datetime::*;
pub use editor::*;
pub use image::*;
pub use tags::*;

/// The closed set of field kinds an entity form can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Single-line string input.
    Text,
    /// Rich text editor storing serialized HTML.
    Editor,
    /// Ordered set of short strings.
    Tags,
    /// Calendar date plus free-text time, canonical string serialization.
    DateTime,
    /// Image upload storing the resulting public URL.
    Image,
}

/// Declarative configuration of one form field.
#[derive(Debug, Clone)]
pub struct FieldConfig {
    pub name: String,
    pub label: String,
    pub field_type: FieldType,
    pub placeholder: Option<String>,
    pub helper: Option<String>,
}

impl FieldConfig {
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        field_type: FieldType,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            field_type,
            placeholder: None,
            helper: None,
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn helper(mut self, helper: impl Into<String>) -> Self {
        self.helper = Some(helper.into());
        self
    }
}
