//! HTTP API for the AgriMarket listings.
//!
//! Endpoints:
//! - GET  /api/v1/health
//! - GET  /api/v1/labours?skill=&cropExperience=&minExperience=&maxWage=
//! - POST /api/v1/labours
//! - GET  /api/v1/labours/{id}
//! - POST /api/v1/labours/{id}/hire
//! - GET, POST /api/v1/machines, GET /api/v1/machines/{id}, POST /api/v1/machines/{id}/rent
//! - GET, POST /api/v1/produce, GET /api/v1/produce/{id}, POST /api/v1/produce/{id}/buy
//! - POST /api/v1/admin/seed[?quick=true]
//! - GET  /api/v1/admin/collections
//!
//! Writes answer with an [`Outcome`]. Failures carry the error text and a
//! machine-readable `kind`, with 400 / 404 / 409 / 500 as the status.

mod config;
mod handlers;

use agrimarket_services::{Marketplace, ServiceError};
use agrimarket_types::RecordId;
use axum::Router;
use axum::routing::{get, post};
use serde::{Deserialize, Serialize};

pub use config::{ApiConfig, DEFAULT_PORT, SeedMode};
pub use handlers::{ApiError, Health, SeedResponse};

use handlers::*;

/// Envelope for writes: `{success, id}` on create, `{success}` on a
/// transition, `{success: false, error, kind}` on failure.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Outcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Outcome {
    pub fn ok() -> Self {
        Self {
            success: true,
            id: None,
            error: None,
            kind: None,
        }
    }

    pub fn created(id: RecordId) -> Self {
        Self {
            id: Some(id),
            ..Self::ok()
        }
    }

    pub fn failure(err: &ServiceError) -> Self {
        Self {
            success: false,
            id: None,
            error: Some(err.to_string()),
            kind: Some(err.code().to_string()),
        }
    }
}

/// Build the HTTP API router over the given marketplace.
pub fn build_router(market: Marketplace) -> Router {
    Router::new()
        .route("/api/v1/health", get(handle_health))
        .route(
            "/api/v1/labours",
            get(handle_list_labours).post(handle_create_labour),
        )
        .route("/api/v1/labours/{id}", get(handle_get_labour))
        .route("/api/v1/labours/{id}/hire", post(handle_hire_labour))
        .route(
            "/api/v1/machines",
            get(handle_list_machines).post(handle_create_machine),
        )
        .route("/api/v1/machines/{id}", get(handle_get_machine))
        .route("/api/v1/machines/{id}/rent", post(handle_rent_machine))
        .route(
            "/api/v1/produce",
            get(handle_list_produce).post(handle_create_produce),
        )
        .route("/api/v1/produce/{id}", get(handle_get_produce))
        .route("/api/v1/produce/{id}/buy", post(handle_buy_produce))
        .route("/api/v1/admin/seed", post(handle_seed))
        .route("/api/v1/admin/collections", get(handle_collections))
        .fallback(handle_not_found)
        .with_state(market)
}
