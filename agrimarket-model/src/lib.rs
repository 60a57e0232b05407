//! Listing model for AgriMarket.
//!
//! Defines the structured record types that the services read and write:
//! - [`Labour`], [`Machine`], [`Produce`]: one struct per listing kind
//! - [`Status`] and [`ListingKind`]: lifecycle state and per-kind metadata
//! - [`Listing`]: the normalization contract shared by all three kinds
//!
//! Input from forms is loosely typed (numbers arrive as strings, fields go
//! missing). The [`coerce`] helpers turn that into the canonical shapes and
//! are applied both when a record is created and when a stored document is
//! read back.

pub mod coerce;
mod labour;
mod listing;
mod machine;
mod produce;
mod schema;

pub use labour::{DEFAULT_LANGUAGE, ExperienceEntry, Gender, Labour};
pub use listing::Listing;
pub use machine::Machine;
pub use produce::{Produce, ProduceType};
pub use schema::{ListingKind, Status};
