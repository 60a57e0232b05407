use std::collections::HashMap;

use agrimarket_types::RecordId;
use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::query::{Document, FieldEquals, Order, Query};
use crate::traits::RecordStore;

/// In-process record store.
///
/// Collections are created on first insert. Documents keep insertion order;
/// `Order::CreatedAtDesc` sorts newest first and breaks `createdAt` ties by
/// most recent insertion. Documents whose `createdAt` is missing or
/// unreadable sort last.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a document under a caller-chosen id, replacing any document
    /// with the same id. Used to load fixtures.
    pub async fn insert_with_id(&self, collection: &str, document: Document) {
        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection.to_string()).or_default();
        docs.retain(|d| d.id != document.id);
        docs.push(document);
    }
}

fn merge(target: &mut Map<String, Value>, patch: Map<String, Value>) {
    for (key, value) in patch {
        target.insert(key, value);
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn insert(&self, collection: &str, fields: Map<String, Value>) -> StoreResult<RecordId> {
        let id = RecordId::generate();
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(Document::new(id.clone(), fields));
        debug!("Inserted {}/{}", collection, id);
        Ok(id)
    }

    async fn query(&self, collection: &str, query: &Query) -> StoreResult<Vec<Document>> {
        let collections = self.collections.read().await;
        let Some(docs) = collections.get(collection) else {
            return Ok(Vec::new());
        };

        let mut matched: Vec<Document> = match query.order {
            // Reverse first so the stable sort leaves later inserts ahead on ties.
            Some(Order::CreatedAtDesc) => docs
                .iter()
                .rev()
                .filter(|d| query.matches(&d.fields))
                .cloned()
                .collect(),
            None => docs
                .iter()
                .filter(|d| query.matches(&d.fields))
                .cloned()
                .collect(),
        };

        if let Some(Order::CreatedAtDesc) = query.order {
            matched.sort_by(|a, b| {
                let a = a.created_at_millis().unwrap_or(i64::MIN);
                let b = b.created_at_millis().unwrap_or(i64::MIN);
                b.cmp(&a)
            });
        }
        Ok(matched)
    }

    async fn get(&self, collection: &str, id: &RecordId) -> StoreResult<Option<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| &d.id == id))
            .cloned())
    }

    async fn update(
        &self,
        collection: &str,
        id: &RecordId,
        patch: Map<String, Value>,
    ) -> StoreResult<()> {
        let mut collections = self.collections.write().await;
        let doc = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|d| &d.id == id))
            .ok_or_else(|| StoreError::not_found(collection, id))?;
        merge(&mut doc.fields, patch);
        Ok(())
    }

    async fn update_if(
        &self,
        collection: &str,
        id: &RecordId,
        precondition: &FieldEquals,
        patch: Map<String, Value>,
    ) -> StoreResult<()> {
        // Check and write under one lock so concurrent callers serialize here.
        let mut collections = self.collections.write().await;
        let doc = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|d| &d.id == id))
            .ok_or_else(|| StoreError::not_found(collection, id))?;

        if !precondition.matches(&doc.fields) {
            let actual = doc
                .fields
                .get(&precondition.field)
                .map(Value::to_string)
                .unwrap_or_else(|| "<missing>".to_string());
            return Err(StoreError::PreconditionFailed {
                collection: collection.to_string(),
                id: id.to_string(),
                field: precondition.field.clone(),
                expected: precondition.value.to_string(),
                actual,
            });
        }
        merge(&mut doc.fields, patch);
        Ok(())
    }

    async fn count(&self, collection: &str) -> StoreResult<usize> {
        let collections = self.collections.read().await;
        Ok(collections.get(collection).map_or(0, Vec::len))
    }
}
