use agrimarket_types::RecordId;
use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::StoreResult;
use crate::query::{Document, FieldEquals, Query};

/// The document database the services talk to.
///
/// This is the whole capability set the services rely on: insert one
/// document, query a collection by equality predicates with optional
/// creation-time ordering, read one document, and merge fields into a
/// document by id. No transactions, joins or server-side aggregation.
///
/// ## Conditional updates
///
/// `update_if` applies the patch only when the stored document's field
/// equals the expected value, and does so atomically with respect to other
/// writes to the same document. A mismatch returns
/// `StoreError::PreconditionFailed`. This is what lets a transition
/// succeed for exactly one of several concurrent callers.
///
/// ## Thread Safety
///
/// Implementations must be `Send + Sync` so a single store can back every
/// request handler.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Short name used in logs.
    fn backend_name(&self) -> &'static str;

    /// Inserts a new document and returns its generated id.
    async fn insert(&self, collection: &str, fields: Map<String, Value>) -> StoreResult<RecordId>;

    /// Lists documents matching `query`.
    async fn query(&self, collection: &str, query: &Query) -> StoreResult<Vec<Document>>;

    /// Reads one document. `Ok(None)` when the id is unknown.
    async fn get(&self, collection: &str, id: &RecordId) -> StoreResult<Option<Document>>;

    /// Merges `patch` into the document's top-level fields.
    ///
    /// Returns `Err(StoreError::NotFound)` if the document does not exist.
    async fn update(
        &self,
        collection: &str,
        id: &RecordId,
        patch: Map<String, Value>,
    ) -> StoreResult<()>;

    /// Merges `patch` only if `precondition` holds on the stored document.
    ///
    /// Returns `Err(StoreError::NotFound)` if the document does not exist and
    /// `Err(StoreError::PreconditionFailed)` if the predicate does not hold.
    async fn update_if(
        &self,
        collection: &str,
        id: &RecordId,
        precondition: &FieldEquals,
        patch: Map<String, Value>,
    ) -> StoreResult<()>;

    /// Number of documents in the collection.
    async fn count(&self, collection: &str) -> StoreResult<usize> {
        Ok(self.query(collection, &Query::all()).await?.len())
    }
}
