//! Error types for the entity services.

use agrimarket_model::ListingKind;
use agrimarket_store::StoreError;
use thiserror::Error;

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failures surfaced by `create`, `transition` and `try_list`.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Create input was not a JSON object, or an id was blank.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No record with this id.
    #[error("{kind} not found: {id}")]
    NotFound { kind: ListingKind, id: String },

    /// The record left `available` before this transition reached the store.
    #[error("{kind} {id} is no longer available")]
    AlreadyTaken { kind: ListingKind, id: String },

    /// The record store failed or could not be reached.
    #[error("store error: {0}")]
    Store(#[source] StoreError),

    /// A record could not be converted to store fields.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ServiceError {
    /// Maps a store error into the service taxonomy for one listing kind.
    pub fn from_store(kind: ListingKind, err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id, .. } => ServiceError::NotFound { kind, id },
            StoreError::PreconditionFailed { id, .. } => ServiceError::AlreadyTaken { kind, id },
            other => ServiceError::Store(other),
        }
    }

    /// Stable machine-readable tag for the failure.
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::InvalidInput(_) => "invalid_input",
            ServiceError::NotFound { .. } => "not_found",
            ServiceError::AlreadyTaken { .. } => "already_taken",
            ServiceError::Store(_) => "store",
            ServiceError::Serialization(_) => "serialization",
        }
    }
}
