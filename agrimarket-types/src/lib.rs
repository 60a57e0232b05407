//! Core type definitions for AgriMarket.
//!
//! This crate defines the small, domain-agnostic types shared by the
//! model, store and service crates:
//! - Store-assigned record identifiers
//! - Millisecond timestamps used for `createdAt` ordering
//!
//! Listing types (labour, machines, produce) live in `agrimarket-model`.

mod ids;
mod timestamp;

pub use ids::RecordId;
pub use timestamp::Timestamp;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid record id: {0:?}")]
    InvalidId(String),
}
