//! FAQ entry model.

use serde::{Deserialize, Serialize};

use super::{label_or_id, CollectionKey, ContentCollections, ContentRecord};

/// A question/answer pair shown on the landing page FAQ section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqEntry {
    pub id: String,
    pub question: String,
    /// Rich text, stored as serialized HTML.
    pub answer: String,
}

impl ContentRecord for FaqEntry {
    const COLLECTION: CollectionKey = CollectionKey::Faqs;

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        label_or_id(&self.question, &self.id)
    }

    fn slot(collections: &ContentCollections) -> &Vec<Self> {
        &collections.faqs
    }

    fn slot_mut(collections: &mut ContentCollections) -> &mut Vec<Self> {
        &mut collections.faqs
    }
}
