//! Error types for the record store.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No document with this id in the collection.
    #[error("document not found: {collection}/{id}")]
    NotFound { collection: String, id: String },

    /// A conditional update found the field holding a different value.
    #[error("precondition failed on {collection}/{id}: expected {field} = {expected}, found {actual}")]
    PreconditionFailed {
        collection: String,
        id: String,
        field: String,
        expected: String,
        actual: String,
    },

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Connection, permission or other backend fault.
    #[error("store backend error: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn not_found(collection: &str, id: impl ToString) -> Self {
        StoreError::NotFound {
            collection: collection.to_string(),
            id: id.to_string(),
        }
    }
}
