//! Remote content store.
//!
//! Process-wide cache of the six content collections. Every mutating
//! operation is write-then-reconcile: local state is updated from the
//! mutation response immediately, then a background full re-fetch converges
//! any server-side computed fields into view within one extra round trip.
//!
//! Known accepted race: a slow reconciliation fetch issued before a faster
//! later mutation can overwrite newer local state. With a single admin and
//! read-mostly data this is tolerated rather than mitigated.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::api::ApiClient;
use crate::errors::AdminError;
use crate::models::{CollectionKey, ContentCollections, ContentRecord};

/// Kind of the most recent successful mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationAction {
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for MutationAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            MutationAction::Create => "create",
            MutationAction::Update => "update",
            MutationAction::Delete => "delete",
        })
    }
}

/// Audit entry describing the last successful mutation.
#[derive(Debug, Clone)]
pub struct LastMutation {
    pub collection: CollectionKey,
    pub action: MutationAction,
    pub timestamp: DateTime<Utc>,
    pub label: Option<String>,
}

#[derive(Debug, Default)]
struct StoreState {
    collections: ContentCollections,
    is_bootstrapped: bool,
    is_loading: bool,
    error: Option<String>,
    last_mutation: Option<LastMutation>,
}

/// Shared content cache. Cloning shares the same underlying state; only
/// store methods mutate it, readers get cloned snapshots.
#[derive(Debug, Clone)]
pub struct ContentStore {
    api: ApiClient,
    state: Arc<RwLock<StoreState>>,
}

impl ContentStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: Arc::new(RwLock::new(StoreState::default())),
        }
    }

    /// The API client backing this store.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    // ==================== SNAPSHOT READS ====================

    /// Snapshot of all collections.
    pub fn collections(&self) -> ContentCollections {
        self.read().collections.clone()
    }

    /// Snapshot of one collection, typed.
    pub fn records<R: ContentRecord>(&self) -> Vec<R> {
        self.read().collections.records::<R>().clone()
    }

    /// One record by id, if present.
    pub fn find_record<R: ContentRecord>(&self, id: &str) -> Option<R> {
        self.read()
            .collections
            .records::<R>()
            .iter()
            .find(|record| record.id() == id)
            .cloned()
    }

    /// True while the bootstrap/reconciliation fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.read().is_loading
    }

    /// True once the initial fetch has completed successfully.
    pub fn is_bootstrapped(&self) -> bool {
        self.read().is_bootstrapped
    }

    /// Last fetch error, if the most recent fetch failed.
    pub fn error(&self) -> Option<String> {
        self.read().error.clone()
    }

    /// Audit entry of the most recent successful mutation.
    pub fn last_mutation(&self) -> Option<LastMutation> {
        self.read().last_mutation.clone()
    }

    // ==================== OPERATIONS ====================

    /// Load all six collections in one round trip, replacing local state
    /// wholesale. On failure the error is recorded and prior state is kept
    /// (stale but available); no caller awaits the bootstrap at top level,
    /// so this is the one path where the store records its own error.
    pub async fn fetch_collections(&self) -> Result<(), AdminError> {
        {
            let mut state = self.write();
            state.is_loading = true;
            state.error = None;
        }

        match self.api.fetch_content().await {
            Ok(envelope) => {
                let collections = envelope.collections.unwrap_or_default();
                let mut state = self.write();
                state.collections = collections;
                state.is_bootstrapped = true;
                state.is_loading = false;
                Ok(())
            }
            Err(err) => {
                tracing::error!("Failed to fetch collections: {}", err);
                let mut state = self.write();
                state.error = Some(err.message());
                state.is_loading = false;
                Err(err)
            }
        }
    }

    /// Create a record from a validated payload (no `id`).
    ///
    /// Appends the authoritative record to the collection, records the audit
    /// entry and triggers a reconciliation fetch in the background.
    pub async fn create_record<R: ContentRecord>(
        &self,
        payload: &Map<String, Value>,
    ) -> Result<R, AdminError> {
        self.write().error = None;

        let response = self.api.create_record(R::COLLECTION, payload).await?;
        let record: R = build_record(response, payload.clone())?;

        {
            let mut state = self.write();
            R::slot_mut(&mut state.collections).push(record.clone());
            state.last_mutation = Some(LastMutation {
                collection: R::COLLECTION,
                action: MutationAction::Create,
                timestamp: Utc::now(),
                label: Some(record.label().to_string()),
            });
        }
        tracing::debug!("Created {} record {}", R::COLLECTION, record.id());

        self.spawn_reconcile();
        Ok(record)
    }

    /// Merge a partial payload onto an existing record and persist it.
    ///
    /// Fails with a NotFound precondition before any network call when the
    /// id is absent locally. The updated record keeps its list position.
    pub async fn update_record<R: ContentRecord>(
        &self,
        id: &str,
        partial: &Map<String, Value>,
    ) -> Result<R, AdminError> {
        self.write().error = None;

        let existing: R = self.find_record(id).ok_or_else(|| {
            AdminError::NotFound(format!("Record {} not found in {}", id, R::COLLECTION))
        })?;

        let response = self.api.update_record(R::COLLECTION, id, partial).await?;

        let mut fallback = match serde_json::to_value(&existing)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        for (key, value) in partial {
            fallback.insert(key.clone(), value.clone());
        }
        fallback.insert("id".to_string(), Value::String(id.to_string()));

        let record: R = build_record(response, fallback)?;

        {
            let mut state = self.write();
            let slot = R::slot_mut(&mut state.collections);
            if let Some(item) = slot.iter_mut().find(|item| item.id() == id) {
                *item = record.clone();
            }
            state.last_mutation = Some(LastMutation {
                collection: R::COLLECTION,
                action: MutationAction::Update,
                timestamp: Utc::now(),
                label: Some(record.label().to_string()),
            });
        }
        tracing::debug!("Updated {} record {}", R::COLLECTION, id);

        self.spawn_reconcile();
        Ok(record)
    }

    /// Delete a record after the caller's confirmation gate.
    ///
    /// Fails with a NotFound precondition before any network call when the
    /// id is absent locally.
    pub async fn delete_record<R: ContentRecord>(&self, id: &str) -> Result<(), AdminError> {
        self.write().error = None;

        let existing: R = self.find_record(id).ok_or_else(|| {
            AdminError::NotFound(format!("Record {} not found in {}", id, R::COLLECTION))
        })?;

        self.api.delete_record(R::COLLECTION, id).await?;

        {
            let mut state = self.write();
            R::slot_mut(&mut state.collections).retain(|item| item.id() != id);
            state.last_mutation = Some(LastMutation {
                collection: R::COLLECTION,
                action: MutationAction::Delete,
                timestamp: Utc::now(),
                label: Some(existing.label().to_string()),
            });
        }
        tracing::debug!("Deleted {} record {}", R::COLLECTION, id);

        self.spawn_reconcile();
        Ok(())
    }

    /// Fire the background reconciliation fetch after a mutation.
    fn spawn_reconcile(&self) {
        let store = self.clone();
        tokio::spawn(async move {
            if let Err(err) = store.fetch_collections().await {
                tracing::debug!("Reconciliation fetch failed: {}", err);
            }
        });
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Build the authoritative record from a mutation response.
///
/// The response record may live under `record`, under `data`, or be the body
/// itself; its fields win over the local fallback. A missing id is
/// synthesized client-side and may be replaced by a server id on the next
/// reconciliation fetch.
fn build_record<R: ContentRecord>(
    response: Value,
    mut fallback: Map<String, Value>,
) -> Result<R, AdminError> {
    let from_response = response
        .get("record")
        .cloned()
        .or_else(|| response.get("data").cloned())
        .unwrap_or(response);

    if let Value::Object(fields) = from_response {
        for (key, value) in fields {
            fallback.insert(key, value);
        }
    }

    let has_id = fallback
        .get("id")
        .and_then(Value::as_str)
        .map(|id| !id.is_empty())
        .unwrap_or(false);
    if !has_id {
        fallback.insert("id".to_string(), Value::String(Uuid::new_v4().to_string()));
    }

    Ok(serde_json::from_value(Value::Object(fallback))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FaqEntry;
    use serde_json::json;

    fn map(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_build_record_prefers_record_envelope() {
        let response = json!({ "record": { "id": "srv-1", "question": "Q", "answer": "A" } });
        let record: FaqEntry = build_record(response, map(json!({ "question": "old" }))).unwrap();
        assert_eq!(record.id, "srv-1");
        assert_eq!(record.question, "Q");
    }

    #[test]
    fn test_build_record_accepts_bare_body() {
        let response = json!({ "id": "srv-2", "question": "Q", "answer": "A" });
        let record: FaqEntry = build_record(response, Map::new()).unwrap();
        assert_eq!(record.id, "srv-2");
    }

    #[test]
    fn test_build_record_synthesizes_missing_id() {
        let response = Value::Null;
        let record: FaqEntry =
            build_record(response, map(json!({ "question": "Q", "answer": "A" }))).unwrap();
        assert!(!record.id.is_empty());
        assert_eq!(record.question, "Q");
    }

    #[test]
    fn test_build_record_response_fields_win() {
        let response = json!({ "data": { "answer": "<p>authoritative</p>" } });
        let record: FaqEntry = build_record(
            response,
            map(json!({ "id": "f1", "question": "Q", "answer": "<p>local</p>" })),
        )
        .unwrap();
        assert_eq!(record.answer, "<p>authoritative</p>");
        assert_eq!(record.id, "f1");
    }
}
