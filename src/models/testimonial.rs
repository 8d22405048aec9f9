//! Testimonial model.

use serde::{Deserialize, Serialize};

use super::{label_or_id, CollectionKey, ContentCollections, ContentRecord};

/// Social-proof quote attributed to a community member or guest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: String,
    pub author: String,
    /// Rich text, stored as serialized HTML.
    pub quote: String,
}

impl ContentRecord for Testimonial {
    const COLLECTION: CollectionKey = CollectionKey::Testimonials;

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        label_or_id(&self.author, &self.id)
    }

    fn slot(collections: &ContentCollections) -> &Vec<Self> {
        &collections.testimonials
    }

    fn slot_mut(collections: &mut ContentCollections) -> &mut Vec<Self> {
        &mut collections.testimonials
    }
}
