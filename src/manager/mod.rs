//! Generic entity manager.
//!
//! One manager instance drives the admin list + form workflow for a single
//! collection: a list of existing records with edit/delete actions, and a
//! form that is either creating a new record or editing a selected one.
//! The manager is headless; it owns selection, form values, validation
//! gating and the deletion confirmation state, and delegates persistence to
//! the content store.

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::errors::AdminError;
use crate::fields::FieldConfig;
use crate::models::ContentRecord;
use crate::schema::{Issue, Schema, Validation};
use crate::store::ContentStore;

/// List rendering configuration for one record type.
pub struct ListConfig<R> {
    primary: Box<dyn Fn(&R) -> String + Send + Sync>,
    secondary: Option<Box<dyn Fn(&R) -> String + Send + Sync>>,
    tags: Option<Box<dyn Fn(&R) -> Vec<String> + Send + Sync>>,
}

impl<R> ListConfig<R> {
    pub fn new(primary: impl Fn(&R) -> String + Send + Sync + 'static) -> Self {
        Self {
            primary: Box::new(primary),
            secondary: None,
            tags: None,
        }
    }

    pub fn secondary(mut self, secondary: impl Fn(&R) -> String + Send + Sync + 'static) -> Self {
        self.secondary = Some(Box::new(secondary));
        self
    }

    pub fn tags(mut self, tags: impl Fn(&R) -> Vec<String> + Send + Sync + 'static) -> Self {
        self.tags = Some(Box::new(tags));
        self
    }

    /// Primary text of one list row.
    pub fn primary_text(&self, record: &R) -> String {
        (self.primary)(record)
    }
}

/// Everything needed to instantiate a manager for one collection.
pub struct ManagerConfig<R> {
    pub title: String,
    pub description: String,
    pub schema: Schema,
    pub default_values: Map<String, Value>,
    pub fields: Vec<FieldConfig>,
    pub list: ListConfig<R>,
    pub empty_state: Option<String>,
    pub allow_create: bool,
    pub allow_delete: bool,
}

impl<R> ManagerConfig<R> {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        schema: Schema,
        default_values: Map<String, Value>,
        list: ListConfig<R>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            schema,
            default_values,
            fields: Vec::new(),
            list,
            empty_state: None,
            allow_create: true,
            allow_delete: true,
        }
    }

    pub fn fields(mut self, fields: Vec<FieldConfig>) -> Self {
        self.fields = fields;
        self
    }

    pub fn empty_state(mut self, empty_state: impl Into<String>) -> Self {
        self.empty_state = Some(empty_state.into());
        self
    }

    pub fn allow_create(mut self, allow: bool) -> Self {
        self.allow_create = allow;
        self
    }

    pub fn allow_delete(mut self, allow: bool) -> Self {
        self.allow_delete = allow;
        self
    }
}

/// One rendered list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub id: String,
    /// Last six characters of the id, shown as a short reference.
    pub short_id: String,
    pub primary: String,
    pub secondary: Option<String>,
    pub tags: Vec<String>,
    pub is_editing: bool,
}

/// Transient success notification naming the affected record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The record was persisted; form reset to create mode.
    Saved(Notice),
    /// Schema validation rejected the payload; issues are inline, no call
    /// was made.
    Invalid,
    /// Creation is not permitted and nothing is being edited; no call was
    /// made.
    Disabled,
}

/// The list + form state machine for one collection.
pub struct EntityManager<R: ContentRecord> {
    config: ManagerConfig<R>,
    values: Map<String, Value>,
    editing_id: Option<String>,
    pending_delete: Option<R>,
    delete_dialog_open: bool,
    touched: HashSet<String>,
    submitted: bool,
    issues: Vec<Issue>,
    is_submitting: bool,
}

impl<R: ContentRecord> EntityManager<R> {
    pub fn new(config: ManagerConfig<R>) -> Self {
        let values = config.default_values.clone();
        Self {
            config,
            values,
            editing_id: None,
            pending_delete: None,
            delete_dialog_open: false,
            touched: HashSet::new(),
            submitted: false,
            issues: Vec::new(),
            is_submitting: false,
        }
    }

    pub fn title(&self) -> &str {
        &self.config.title
    }

    pub fn description(&self) -> &str {
        &self.config.description
    }

    pub fn fields(&self) -> &[FieldConfig] {
        &self.config.fields
    }

    pub fn editing_id(&self) -> Option<&str> {
        self.editing_id.as_deref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Submit is available in edit mode, or in create mode when the
    /// collection permits creation.
    pub fn can_submit(&self) -> bool {
        self.config.allow_create || self.is_editing()
    }

    pub fn allow_delete(&self) -> bool {
        self.config.allow_delete
    }

    /// Text shown when the collection has no records.
    pub fn empty_state(&self) -> &str {
        self.config
            .empty_state
            .as_deref()
            .unwrap_or("No content yet. Add a new item.")
    }

    // ==================== FORM VALUES ====================

    pub fn values(&self) -> &Map<String, Value> {
        &self.values
    }

    pub fn field_value(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Change a field value; re-validates as-you-type.
    pub fn set_field(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
        self.issues = self.config.schema.validate(&self.values).issues().to_vec();
    }

    /// Mark a field as blurred, unlocking its inline error.
    pub fn blur_field(&mut self, name: &str) {
        self.touched.insert(name.to_string());
    }

    /// Inline error for a field, suppressed until the field has been
    /// blurred or the form submitted at least once.
    pub fn field_error(&self, name: &str) -> Option<&str> {
        if !self.touched.contains(name) && !self.submitted {
            return None;
        }
        let prefix = format!("{}.", name);
        self.issues
            .iter()
            .find(|issue| issue.path == name || issue.path.starts_with(&prefix))
            .map(|issue| issue.message.as_str())
    }

    // ==================== LIST ====================

    /// Rows for the current snapshot of the collection.
    pub fn list_rows(&self, store: &ContentStore) -> Vec<ListRow> {
        store
            .records::<R>()
            .iter()
            .map(|record| ListRow {
                id: record.id().to_string(),
                short_id: short_id(record.id()),
                primary: (self.config.list.primary)(record),
                secondary: self.config.list.secondary.as_ref().map(|f| f(record)),
                tags: self
                    .config
                    .list
                    .tags
                    .as_ref()
                    .map(|f| f(record))
                    .unwrap_or_default(),
                is_editing: self.editing_id.as_deref() == Some(record.id()),
            })
            .collect()
    }

    // ==================== EDIT MODE ====================

    /// Switch to edit mode, resetting form values from the record.
    pub fn start_edit(&mut self, id: &str, store: &ContentStore) -> Result<(), AdminError> {
        let record: R = store.find_record(id).ok_or_else(|| {
            AdminError::NotFound(format!("Record {} not found in {}", id, R::COLLECTION))
        })?;

        let mut values = match serde_json::to_value(&record)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        values.remove("id");

        self.editing_id = Some(id.to_string());
        self.values = values;
        self.touched.clear();
        self.submitted = false;
        self.issues.clear();
        Ok(())
    }

    /// Back to create mode with default values.
    pub fn cancel_edit(&mut self) {
        self.editing_id = None;
        self.reset_form();
    }

    fn reset_form(&mut self) {
        self.values = self.config.default_values.clone();
        self.touched.clear();
        self.submitted = false;
        self.issues.clear();
    }

    // ==================== SUBMIT ====================

    /// Validate and persist the form.
    ///
    /// In create mode with creation disallowed, nothing happens. Validation
    /// failures are recorded inline and issue no network call. API errors
    /// propagate to the caller with form state untouched.
    pub async fn submit(&mut self, store: &ContentStore) -> Result<SubmitOutcome, AdminError> {
        if !self.can_submit() {
            return Ok(SubmitOutcome::Disabled);
        }

        self.submitted = true;
        let payload = match self.config.schema.validate(&self.values) {
            Validation::Valid(payload) => payload,
            Validation::Invalid(issues) => {
                self.issues = issues;
                return Ok(SubmitOutcome::Invalid);
            }
        };
        self.issues.clear();

        self.is_submitting = true;
        let result = match self.editing_id.clone() {
            Some(id) => {
                let record = store.update_record::<R>(&id, &payload).await;
                record.map(|record| (record, "updated"))
            }
            None => {
                let record = store.create_record::<R>(&payload).await;
                record.map(|record| (record, "added"))
            }
        };
        self.is_submitting = false;

        let (record, verb) = result?;

        self.editing_id = None;
        self.reset_form();
        Ok(SubmitOutcome::Saved(Notice {
            message: format!("{} {}", record.label(), verb),
        }))
    }

    // ==================== DELETE CONFIRMATION ====================

    pub fn pending_delete(&self) -> Option<&R> {
        self.pending_delete.as_ref()
    }

    pub fn is_delete_dialog_open(&self) -> bool {
        self.delete_dialog_open
    }

    /// Open the confirmation dialog for a record. Silently ignored when the
    /// collection forbids deletion.
    pub fn request_delete(&mut self, id: &str, store: &ContentStore) -> Result<(), AdminError> {
        if !self.config.allow_delete {
            return Ok(());
        }
        let record: R = store.find_record(id).ok_or_else(|| {
            AdminError::NotFound(format!("Record {} not found in {}", id, R::COLLECTION))
        })?;
        self.pending_delete = Some(record);
        self.delete_dialog_open = true;
        Ok(())
    }

    /// Dismiss the dialog without mutating anything.
    pub fn dismiss_delete(&mut self) {
        self.delete_dialog_open = false;
        self.pending_delete = None;
    }

    /// Execute the pending delete.
    ///
    /// The dialog closes whether the call succeeds or fails. If the deleted
    /// record was being edited, the form falls back to create mode.
    pub async fn confirm_delete(
        &mut self,
        store: &ContentStore,
    ) -> Result<Option<Notice>, AdminError> {
        let Some(pending) = self.pending_delete.clone() else {
            return Ok(None);
        };

        let result = store.delete_record::<R>(pending.id()).await;
        self.dismiss_delete();

        result?;

        if self.editing_id.as_deref() == Some(pending.id()) {
            self.cancel_edit();
        }
        Ok(Some(Notice {
            message: format!("{} deleted", pending.label()),
        }))
    }
}

fn short_id(id: &str) -> String {
    let chars: Vec<char> = id.chars().collect();
    let start = chars.len().saturating_sub(6);
    chars[start..].iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Rule;
    use serde_json::json;

    use crate::models::FaqEntry;

    fn manager() -> EntityManager<FaqEntry> {
        let schema = Schema::new()
            .field("question", [Rule::required("Question is required")])
            .field("answer", [Rule::required("Answer is required")]);
        let mut defaults = Map::new();
        defaults.insert("question".to_string(), json!(""));
        defaults.insert("answer".to_string(), json!(""));

        EntityManager::new(ManagerConfig::new(
            "Frequently Asked Questions",
            "Question and answer pairs for prospective members.",
            schema,
            defaults,
            ListConfig::new(|record: &FaqEntry| record.question.clone()),
        ))
    }

    #[test]
    fn test_errors_suppressed_until_blur_or_submit() {
        let mut manager = manager();
        manager.set_field("question", json!(""));

        // Not blurred, not submitted: no wall of red on first render.
        assert!(manager.field_error("question").is_none());

        manager.blur_field("question");
        assert_eq!(manager.field_error("question"), Some("Question is required"));
        // Sibling field untouched, still silent.
        assert!(manager.field_error("answer").is_none());
    }

    #[test]
    fn test_item_path_issues_surface_on_parent_field() {
        let schema = Schema::new().field(
            "highlights",
            [Rule::min_items(1, "Add at least one highlight", "Highlight must not be empty")],
        );
        let mut defaults = Map::new();
        defaults.insert("highlights".to_string(), json!([]));

        let mut manager: EntityManager<crate::models::EventItem> =
            EntityManager::new(ManagerConfig::new(
                "Upcoming Events",
                "",
                schema,
                defaults,
                ListConfig::new(|record: &crate::models::EventItem| record.title.clone()),
            ));

        manager.set_field("highlights", json!(["ok", ""]));
        manager.blur_field("highlights");
        assert_eq!(
            manager.field_error("highlights"),
            Some("Highlight must not be empty")
        );
    }

    #[test]
    fn test_can_submit_respects_allow_create() {
        let mut manager = manager();
        assert!(manager.can_submit());

        manager.config.allow_create = false;
        assert!(!manager.can_submit());

        manager.editing_id = Some("x".to_string());
        assert!(manager.can_submit());
    }

    #[test]
    fn test_dismiss_delete_clears_pending_only() {
        let mut manager = manager();
        manager.editing_id = Some("f1".to_string());
        manager.pending_delete = Some(FaqEntry {
            id: "f2".to_string(),
            question: "Q".to_string(),
            answer: "A".to_string(),
        });
        manager.delete_dialog_open = true;

        manager.dismiss_delete();

        assert!(manager.pending_delete().is_none());
        assert!(!manager.is_delete_dialog_open());
        // Edit selection survives a dismissed dialog.
        assert_eq!(manager.editing_id(), Some("f1"));
    }

    #[test]
    fn test_short_id() {
        assert_eq!(short_id("faq-abcdef"), "abcdef");
        assert_eq!(short_id("ab"), "ab");
    }
}
