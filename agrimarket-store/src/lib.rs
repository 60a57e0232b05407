//! Record store layer for AgriMarket.
//!
//! The services never talk to a database directly; they go through the
//! [`RecordStore`] trait, which captures the small capability set of a
//! remote document database (insert, equality query with creation-time
//! ordering, read by id, partial update, conditional partial update).
//!
//! # Backends
//!
//! - [`MemoryStore`]: in-process, used by tests and local runs
//! - A hosted document database plugs in by implementing [`RecordStore`]
//!
//! Documents are flat JSON objects keyed by a store-assigned [`RecordId`].
//!
//! [`RecordId`]: agrimarket_types::RecordId

mod error;
mod memory_store;
mod query;
mod traits;

pub use error::{StoreError, StoreResult};
pub use memory_store::MemoryStore;
pub use query::{CREATED_AT_FIELD, Document, FieldEquals, Order, Query};
pub use traits::RecordStore;
