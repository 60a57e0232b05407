//! Entity services for AgriMarket.
//!
//! The layer between the presentation pages and the record store:
//! - [`EntityService`]: create / list / transition for one listing kind,
//!   with [`LabourService`], [`MachineService`] and [`ProduceService`]
//!   aliases and the named `hire_labour` / `rent_machine` / `buy_produce`
//!   transitions
//! - [`LabourFilter`]: client-side filtering of listed labour
//! - [`seed`] and [`diagnostics`]: sample data and collection counts
//!
//! # Failure model
//!
//! Writes return [`ServiceResult`]. `list` never fails: store errors are
//! logged and produce an empty list. `try_list` returns the error instead.
//! Nothing is retried.

pub mod diagnostics;
mod error;
mod filter;
pub mod seed;
mod service;

pub use error::{ServiceError, ServiceResult};
pub use filter::LabourFilter;
pub use service::{EntityService, LabourService, MachineService, Marketplace, ProduceService};
