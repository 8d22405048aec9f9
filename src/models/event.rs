//! Upcoming event model.

use serde::{Deserialize, Serialize};

use super::{label_or_id, CollectionKey, ContentCollections, ContentRecord};

/// An upcoming event listed on the events page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventItem {
    pub id: String,
    pub title: String,
    /// Canonical date-time string, e.g. "15 March 2025 19:00".
    pub date: String,
    pub location: String,
    /// Rich text, stored as serialized HTML.
    pub description: String,
    /// Ordered highlight chips. The schema requires at least one.
    pub highlights: Vec<String>,
}

impl ContentRecord for EventItem {
    const COLLECTION: CollectionKey = CollectionKey::Events;

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        label_or_id(&self.title, &self.id)
    }

    fn slot(collections: &ContentCollections) -> &Vec<Self> {
        &collections.events
    }

    fn slot_mut(collections: &mut ContentCollections) -> &mut Vec<Self> {
        &mut collections.events
    }
}
