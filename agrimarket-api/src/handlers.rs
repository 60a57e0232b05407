//! Request handlers. Each one delegates to a [`Marketplace`] service and
//! maps the result onto the JSON envelopes in the crate root.

use agrimarket_model::{Labour, Listing, Machine, Produce};
use agrimarket_services::diagnostics::{CollectionCount, collection_counts};
use agrimarket_services::seed::{SeedReport, seed_quick_samples, seed_sample_labours};
use agrimarket_services::{EntityService, LabourFilter, Marketplace, ServiceError};
use agrimarket_types::RecordId;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Outcome;

/// A service failure on its way out as an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            ServiceError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
            ServiceError::AlreadyTaken { .. } => StatusCode::CONFLICT,
            ServiceError::Store(_) | ServiceError::Serialization(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(Outcome::failure(&self.0))).into_response()
    }
}

type ApiResult<T> = Result<Json<T>, ApiError>;

fn parse_id(raw: &str) -> Result<RecordId, ApiError> {
    RecordId::parse(raw).map_err(|e| ApiError(ServiceError::InvalidInput(e.to_string())))
}

// ── generic listing operations ───────────────────────────────────

async fn create_listing<L: Listing>(
    service: &EntityService<L>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Outcome> {
    let Json(input) = body.map_err(|r| ApiError(ServiceError::InvalidInput(r.body_text())))?;
    let id = service.create(&input).await?;
    Ok(Json(Outcome::created(id)))
}

async fn get_listing<L: Listing>(service: &EntityService<L>, raw_id: &str) -> ApiResult<L> {
    let id = parse_id(raw_id)?;
    Ok(Json(service.get(&id).await?))
}

// ── health / fallback ────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
}

pub(crate) async fn handle_health() -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
    })
}

pub(crate) async fn handle_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(Outcome {
            success: false,
            id: None,
            error: Some("no such route".to_string()),
            kind: Some("not_found".to_string()),
        }),
    )
}

// ── labours ──────────────────────────────────────────────────────

/// Query-string form of [`LabourFilter`]; values arrive as raw text.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LabourParams {
    skill: Option<String>,
    crop_experience: Option<String>,
    min_experience: Option<String>,
    max_wage: Option<String>,
}

impl LabourParams {
    fn filter(&self) -> LabourFilter {
        LabourFilter::from_params(
            self.skill.as_deref(),
            self.crop_experience.as_deref(),
            self.min_experience.as_deref(),
            self.max_wage.as_deref(),
        )
    }
}

pub(crate) async fn handle_list_labours(
    State(market): State<Marketplace>,
    Query(params): Query<LabourParams>,
) -> ApiResult<Vec<Labour>> {
    let filter = params.filter();
    Ok(Json(market.labour.try_list_filtered(&filter).await?))
}

pub(crate) async fn handle_create_labour(
    State(market): State<Marketplace>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Outcome> {
    create_listing(&market.labour, body).await
}

pub(crate) async fn handle_get_labour(
    State(market): State<Marketplace>,
    Path(id): Path<String>,
) -> ApiResult<Labour> {
    get_listing(&market.labour, &id).await
}

pub(crate) async fn handle_hire_labour(
    State(market): State<Marketplace>,
    Path(id): Path<String>,
) -> ApiResult<Outcome> {
    market.labour.hire_labour(&parse_id(&id)?).await?;
    Ok(Json(Outcome::ok()))
}

// ── machines ─────────────────────────────────────────────────────

pub(crate) async fn handle_list_machines(
    State(market): State<Marketplace>,
) -> ApiResult<Vec<Machine>> {
    Ok(Json(market.machines.try_list().await?))
}

pub(crate) async fn handle_create_machine(
    State(market): State<Marketplace>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Outcome> {
    create_listing(&market.machines, body).await
}

pub(crate) async fn handle_get_machine(
    State(market): State<Marketplace>,
    Path(id): Path<String>,
) -> ApiResult<Machine> {
    get_listing(&market.machines, &id).await
}

pub(crate) async fn handle_rent_machine(
    State(market): State<Marketplace>,
    Path(id): Path<String>,
) -> ApiResult<Outcome> {
    market.machines.rent_machine(&parse_id(&id)?).await?;
    Ok(Json(Outcome::ok()))
}

// ── produce ──────────────────────────────────────────────────────

pub(crate) async fn handle_list_produce(
    State(market): State<Marketplace>,
) -> ApiResult<Vec<Produce>> {
    Ok(Json(market.produce.try_list().await?))
}

pub(crate) async fn handle_create_produce(
    State(market): State<Marketplace>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Outcome> {
    create_listing(&market.produce, body).await
}

pub(crate) async fn handle_get_produce(
    State(market): State<Marketplace>,
    Path(id): Path<String>,
) -> ApiResult<Produce> {
    get_listing(&market.produce, &id).await
}

pub(crate) async fn handle_buy_produce(
    State(market): State<Marketplace>,
    Path(id): Path<String>,
) -> ApiResult<Outcome> {
    market.produce.buy_produce(&parse_id(&id)?).await?;
    Ok(Json(Outcome::ok()))
}

// ── admin ────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SeedParams {
    #[serde(default)]
    quick: bool,
}

#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub success: bool,
    pub message: String,
    #[serde(flatten)]
    pub report: SeedReport,
}

pub(crate) async fn handle_seed(
    State(market): State<Marketplace>,
    Query(params): Query<SeedParams>,
) -> Json<SeedResponse> {
    let store = market.store().as_ref();
    let report = if params.quick {
        seed_quick_samples(store).await
    } else {
        seed_sample_labours(store).await
    };
    Json(SeedResponse {
        success: true,
        message: report.message(),
        report,
    })
}

pub(crate) async fn handle_collections(
    State(market): State<Marketplace>,
) -> Json<Vec<CollectionCount>> {
    Json(collection_counts(market.store().as_ref()).await)
}
