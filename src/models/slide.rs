//! Etiquette carousel slide model.

use serde::{Deserialize, Serialize};

use super::{label_or_id, CollectionKey, ContentCollections, ContentRecord};

/// One slide of the etiquette education carousel. The image is sourced
/// through the upload flow and stored as its public URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EtiquetteSlide {
    pub id: String,
    pub title: String,
    /// Rich text, stored as serialized HTML.
    pub description: String,
    pub image_url: String,
}

impl ContentRecord for EtiquetteSlide {
    const COLLECTION: CollectionKey = CollectionKey::EtiquetteSlides;

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        label_or_id(&self.title, &self.id)
    }

    fn slot(collections: &ContentCollections) -> &Vec<Self> {
        &collections.etiquette_slides
    }

    fn slot_mut(collections: &mut ContentCollections) -> &mut Vec<Self> {
        &mut collections.etiquette_slides
    }
}
