//! Society highlight model.

use serde::{Deserialize, Serialize};

use super::{label_or_id, CollectionKey, ContentCollections, ContentRecord};

/// A recurring community program highlighted on the landing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocietyHighlight {
    pub id: String,
    pub title: String,
    /// Rich text, stored as serialized HTML.
    pub description: String,
}

impl ContentRecord for SocietyHighlight {
    const COLLECTION: CollectionKey = CollectionKey::SocietyHighlights;

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        label_or_id(&self.title, &self.id)
    }

    fn slot(collections: &ContentCollections) -> &Vec<Self> {
        &collections.society_highlights
    }

    fn slot_mut(collections: &mut ContentCollections) -> &mut Vec<Self> {
        &mut collections.society_highlights
    }
}
