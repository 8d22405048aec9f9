//! Value card model.

use serde::{Deserialize, Serialize};

use super::{label_or_id, CollectionKey, ContentCollections, ContentRecord};

/// One of the core-principle flip cards. The card set is fixed: records can
/// be updated but never created or deleted through the admin surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueCard {
    pub id: String,
    pub title: String,
    /// Rich text, stored as serialized HTML.
    pub description: String,
    pub wrapper_classes: String,
    pub accent_classes: String,
    pub description_classes: String,
}

impl ContentRecord for ValueCard {
    const COLLECTION: CollectionKey = CollectionKey::ValueCards;

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        label_or_id(&self.title, &self.id)
    }

    fn slot(collections: &ContentCollections) -> &Vec<Self> {
        &collections.value_cards
    }

    fn slot_mut(collections: &mut ContentCollections) -> &mut Vec<Self> {
        &mut collections.value_cards
    }
}
