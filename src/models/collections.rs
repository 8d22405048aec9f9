//! Collection keys, the aggregate of all content collections, and the
//! record trait tying each record type to its collection.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::{EtiquetteSlide, EventItem, FaqEntry, SocietyHighlight, Testimonial, ValueCard};

/// Identifier of one named record collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CollectionKey {
    Faqs,
    EtiquetteSlides,
    Testimonials,
    ValueCards,
    SocietyHighlights,
    Events,
}

impl CollectionKey {
    /// All collection keys, in display order.
    pub const ALL: [CollectionKey; 6] = [
        CollectionKey::Faqs,
        CollectionKey::EtiquetteSlides,
        CollectionKey::Testimonials,
        CollectionKey::ValueCards,
        CollectionKey::SocietyHighlights,
        CollectionKey::Events,
    ];

    /// The wire name used in API paths and payload keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionKey::Faqs => "faqs",
            CollectionKey::EtiquetteSlides => "etiquetteSlides",
            CollectionKey::Testimonials => "testimonials",
            CollectionKey::ValueCards => "valueCards",
            CollectionKey::SocietyHighlights => "societyHighlights",
            CollectionKey::Events => "events",
        }
    }
}

impl std::fmt::Display for CollectionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All six content collections. Keys missing from the wire payload
/// deserialize as empty sequences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentCollections {
    pub faqs: Vec<FaqEntry>,
    pub etiquette_slides: Vec<EtiquetteSlide>,
    pub testimonials: Vec<Testimonial>,
    pub value_cards: Vec<ValueCard>,
    pub society_highlights: Vec<SocietyHighlight>,
    pub events: Vec<EventItem>,
}

impl ContentCollections {
    /// Records of one collection, typed.
    pub fn records<R: ContentRecord>(&self) -> &Vec<R> {
        R::slot(self)
    }

    /// Number of records in a collection identified by key.
    pub fn len_of(&self, key: CollectionKey) -> usize {
        match key {
            CollectionKey::Faqs => self.faqs.len(),
            CollectionKey::EtiquetteSlides => self.etiquette_slides.len(),
            CollectionKey::Testimonials => self.testimonials.len(),
            CollectionKey::ValueCards => self.value_cards.len(),
            CollectionKey::SocietyHighlights => self.society_highlights.len(),
            CollectionKey::Events => self.events.len(),
        }
    }
}

/// Envelope returned by `GET /api/admin/content`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentEnvelope {
    #[serde(default)]
    pub collections: Option<ContentCollections>,
}

/// One entity instance within a collection.
///
/// Ties a record type to its collection key, its slot inside
/// [`ContentCollections`], its immutable id and its display label.
pub trait ContentRecord:
    Clone + std::fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Collection this record type belongs to.
    const COLLECTION: CollectionKey;

    /// Opaque unique identifier, never part of the editable payload.
    fn id(&self) -> &str;

    /// Display label used in notifications and audit entries.
    /// Falls back to the id when the labeling field is empty.
    fn label(&self) -> &str;

    fn slot(collections: &ContentCollections) -> &Vec<Self>;

    fn slot_mut(collections: &mut ContentCollections) -> &mut Vec<Self>;
}

/// Label helper: the designated field, or the id when it is empty.
pub(crate) fn label_or_id<'a>(field: &'a str, id: &'a str) -> &'a str {
    if field.is_empty() {
        id
    } else {
        field
    }
}
