//! Admin section catalog.
//!
//! One configured entity manager per collection: schemas, default values,
//! field lists, list rendering and permission flags, plus the section
//! metadata used for navigation.

use serde_json::{json, Map, Value};

use crate::fields::{plain_text_preview, FieldConfig, FieldType, PREVIEW_LEN};
use crate::manager::{EntityManager, ListConfig, ManagerConfig};
use crate::models::{
    CollectionKey, EtiquetteSlide, EventItem, FaqEntry, SocietyHighlight, Testimonial, ValueCard,
};
use crate::schema::{Rule, Schema};

fn defaults(pairs: &[(&str, Value)]) -> Map<String, Value> {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect()
}

/// Frequently asked questions.
pub fn faq_manager() -> EntityManager<FaqEntry> {
    let schema = Schema::new()
        .field("question", [Rule::required("Question is required")])
        .field("answer", [Rule::required("Answer is required")]);

    EntityManager::new(
        ManagerConfig::new(
            "Frequently Asked Questions",
            "Question and answer pairs guiding new members before they RSVP.",
            schema,
            defaults(&[("question", json!("")), ("answer", json!(""))]),
            ListConfig::new(|record: &FaqEntry| record.question.clone())
                .secondary(|record| plain_text_preview(&record.answer, PREVIEW_LEN)),
        )
        .fields(vec![
            FieldConfig::new("question", "Question", FieldType::Text)
                .placeholder("What do members keep asking?"),
            FieldConfig::new("answer", "Answer", FieldType::Editor),
        ]),
    )
}

/// Etiquette carousel slides.
pub fn etiquette_manager() -> EntityManager<EtiquetteSlide> {
    let schema = Schema::new()
        .field("title", [Rule::required("Title is required")])
        .field("description", [Rule::required("Description is required")])
        .field("imageUrl", [Rule::required("Image URL is required")]);

    EntityManager::new(
        ManagerConfig::new(
            "Basic Etiquette",
            "Slides for the etiquette education carousel on the landing page.",
            schema,
            defaults(&[
                ("title", json!("")),
                ("description", json!("")),
                ("imageUrl", json!("")),
            ]),
            ListConfig::new(|record: &EtiquetteSlide| record.title.clone())
                .secondary(|record| plain_text_preview(&record.description, PREVIEW_LEN)),
        )
        .fields(vec![
            FieldConfig::new("title", "Title", FieldType::Text)
                .placeholder("Dress Code Mandatory"),
            FieldConfig::new("description", "Description", FieldType::Editor),
            FieldConfig::new("imageUrl", "Banner", FieldType::Image)
                .helper("Upload a 4:3 image (min 1600px). The URL is stored after upload."),
        ]),
    )
}

/// Testimonials.
pub fn testimonial_manager() -> EntityManager<Testimonial> {
    let schema = Schema::new()
        .field("author", [Rule::required("Name is required")])
        .field("quote", [Rule::required("Quote is required")]);

    EntityManager::new(
        ManagerConfig::new(
            "Testimonials",
            "Curated social proof from members and guests.",
            schema,
            defaults(&[("author", json!("")), ("quote", json!(""))]),
            ListConfig::new(|record: &Testimonial| record.author.clone())
                .secondary(|record| plain_text_preview(&record.quote, PREVIEW_LEN)),
        )
        .fields(vec![
            FieldConfig::new("author", "Name/Role", FieldType::Text)
                .placeholder("Community Member"),
            FieldConfig::new("quote", "Quote", FieldType::Editor),
        ]),
    )
}

/// Value cards. The card set is fixed: update-only.
pub fn value_card_manager() -> EntityManager<ValueCard> {
    let schema = Schema::new()
        .field("title", [Rule::required("Title is required")])
        .field("description", [Rule::required("Description is required")])
        .field("wrapperClasses", [Rule::required("Wrapper classes are required")])
        .field("accentClasses", [Rule::required("Accent classes are required")])
        .field(
            "descriptionClasses",
            [Rule::required("Description classes are required")],
        );

    EntityManager::new(
        ManagerConfig::new(
            "Value Cards",
            "Core principles shown as flip cards.",
            schema,
            defaults(&[
                ("title", json!("")),
                ("description", json!("")),
                ("wrapperClasses", json!("")),
                ("accentClasses", json!("")),
                ("descriptionClasses", json!("")),
            ]),
            ListConfig::new(|record: &ValueCard| record.title.clone())
                .secondary(|record| plain_text_preview(&record.description, PREVIEW_LEN)),
        )
        .fields(vec![
            FieldConfig::new("title", "Title", FieldType::Text),
            FieldConfig::new("description", "Description", FieldType::Editor),
        ])
        .allow_create(false)
        .allow_delete(false),
    )
}

/// Society highlights.
pub fn society_manager() -> EntityManager<SocietyHighlight> {
    let schema = Schema::new()
        .field("title", [Rule::required("Title is required")])
        .field("description", [Rule::required("Description is required")]);

    EntityManager::new(
        ManagerConfig::new(
            "Society Highlights",
            "Recurring community programs worth highlighting.",
            schema,
            defaults(&[("title", json!("")), ("description", json!(""))]),
            ListConfig::new(|record: &SocietyHighlight| record.title.clone())
                .secondary(|record| plain_text_preview(&record.description, PREVIEW_LEN)),
        )
        .fields(vec![
            FieldConfig::new("title", "Title", FieldType::Text),
            FieldConfig::new("description", "Description", FieldType::Editor),
        ]),
    )
}

/// Upcoming events.
pub fn event_manager() -> EntityManager<EventItem> {
    let schema = Schema::new()
        .field("title", [Rule::required("Title is required")])
        .field("date", [Rule::required("Date is required")])
        .field("location", [Rule::required("Location is required")])
        .field("description", [Rule::required("Description is required")])
        .field(
            "highlights",
            [Rule::min_items(
                1,
                "Add at least one highlight",
                "Highlight must not be empty",
            )],
        );

    EntityManager::new(
        ManagerConfig::new(
            "Upcoming Events",
            "Events for the Upcoming Events page and the Who Section call to action.",
            schema,
            defaults(&[
                ("title", json!("")),
                ("date", json!("")),
                ("location", json!("")),
                ("description", json!("")),
                ("highlights", json!([])),
            ]),
            ListConfig::new(|record: &EventItem| record.title.clone())
                .secondary(|record| format!("{} · {}", record.date, record.location))
                .tags(|record| record.highlights.clone()),
        )
        .fields(vec![
            FieldConfig::new("title", "Title", FieldType::Text),
            FieldConfig::new("date", "Date & Time", FieldType::DateTime)
                .placeholder("Pick a date")
                .helper("Formatted automatically, e.g. 15 March 2025 19:00"),
            FieldConfig::new("location", "Location", FieldType::Text),
            FieldConfig::new("description", "Description", FieldType::Editor),
            FieldConfig::new("highlights", "Highlights", FieldType::Tags)
                .helper("Add a highlight, select an existing one to remove it"),
        ])
        .empty_state("No events yet. Add your first one."),
    )
}

/// Navigation metadata for one admin section.
#[derive(Debug, Clone, Copy)]
pub struct SectionInfo {
    pub id: CollectionKey,
    pub title: &'static str,
    pub description: &'static str,
}

/// All admin sections, in sidebar order.
pub const ADMIN_SECTIONS: [SectionInfo; 6] = [
    SectionInfo {
        id: CollectionKey::Faqs,
        title: "FAQs",
        description: "Questions prospective members keep asking.",
    },
    SectionInfo {
        id: CollectionKey::EtiquetteSlides,
        title: "Basic Etiquette",
        description: "Ground rules shown during events.",
    },
    SectionInfo {
        id: CollectionKey::Testimonials,
        title: "Testimonials",
        description: "Voices from the community and invited guests.",
    },
    SectionInfo {
        id: CollectionKey::ValueCards,
        title: "Value Cards",
        description: "The society's core values.",
    },
    SectionInfo {
        id: CollectionKey::SocietyHighlights,
        title: "Society Highlights",
        description: "Weekly programs that keep the community close.",
    },
    SectionInfo {
        id: CollectionKey::Events,
        title: "Upcoming Events",
        description: "Major events on the calendar.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_cards_are_update_only() {
        let manager = value_card_manager();
        assert!(!manager.can_submit());
        assert!(!manager.allow_delete());
    }

    #[test]
    fn test_sections_cover_all_collections() {
        let ids: Vec<CollectionKey> = ADMIN_SECTIONS.iter().map(|s| s.id).collect();
        for key in CollectionKey::ALL {
            assert!(ids.contains(&key), "missing section for {}", key);
        }
    }

    #[test]
    fn test_event_manager_field_kinds() {
        let manager = event_manager();
        let kinds: Vec<FieldType> = manager.fields().iter().map(|f| f.field_type).collect();
        assert_eq!(
            kinds,
            vec![
                FieldType::Text,
                FieldType::DateTime,
                FieldType::Text,
                FieldType::Editor,
                FieldType::Tags,
            ]
        );
    }
}
