use crate::errors::AppError;
use crate::models::{
    CreateLead, FilterOptions, Lead, LeadListResponse, LeadMutationResponse, LeadQueryParams,
};
use crate::scoring::calculate_priority_score;
use crate::store::LeadStore;
use crate::{enrichment, SERVICE_NAME, VERSION};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::json;
use std::sync::Arc;

/// Shared application state injected into handlers.
///
/// Owned by the server root and passed to every handler; nothing in the
/// request path reaches into global state.
pub struct AppState {
    /// The in-memory lead store.
    pub store: LeadStore,
}

/// GET /
///
/// Service banner with name and API version.
pub async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "message": SERVICE_NAME,
        "version": VERSION,
    }))
}

/// Health check endpoint.
///
/// Returns the service status, version, and health information.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "lead-registry-api",
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
}

/// GET /leads
///
/// Lists leads, optionally narrowed by `industry` (case-insensitive) and
/// `headcount` (case-sensitive) equality filters.
pub async fn list_leads(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LeadQueryParams>,
) -> Json<LeadListResponse> {
    tracing::info!("GET /leads - params: {:?}", params);

    let leads = state.store.list(&params);
    let total = leads.len();

    Json(LeadListResponse { leads, total })
}

/// GET /leads/:id
///
/// Retrieves a single lead by its identifier.
pub async fn get_lead(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Lead>, AppError> {
    tracing::info!("GET /leads/{}", id);

    let lead = state
        .store
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("Lead with id {} not found", id)))?;

    Ok(Json(lead))
}

/// POST /leads
///
/// Creates a lead from the seven required string fields. The new record
/// starts un-enriched with a freshly generated identifier.
pub async fn create_lead(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateLead>,
) -> (StatusCode, Json<LeadMutationResponse>) {
    tracing::info!("POST /leads - company: {}", req.company);

    let lead = state.store.insert(req);
    tracing::debug!("Created lead {}", lead.id);

    (
        StatusCode::CREATED,
        Json(LeadMutationResponse {
            message: "Lead created".to_string(),
            lead,
        }),
    )
}

/// POST /leads/:id/enrich
///
/// Attaches the synthetic enrichment payload derived from the lead's name
/// and recomputes the priority score. Repeating the call recomputes the
/// same payload, so the observable state does not change.
pub async fn enrich_lead(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<LeadMutationResponse>, AppError> {
    tracing::info!("POST /leads/{}/enrich", id);

    let lead = state
        .store
        .update(&id, |lead| {
            lead.enriched = true;
            lead.enrichment_data = Some(enrichment::build_enrichment(&lead.name));
            lead.priority_score = calculate_priority_score(lead);
        })
        .ok_or_else(|| AppError::NotFound(format!("Lead with id {} not found", id)))?;

    Ok(Json(LeadMutationResponse {
        message: "Lead enriched".to_string(),
        lead,
    }))
}

/// POST /leads/:id/score
///
/// Recalculates and stores the priority score for a lead.
pub async fn score_lead(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<LeadMutationResponse>, AppError> {
    tracing::info!("POST /leads/{}/score", id);

    let lead = state
        .store
        .update(&id, |lead| {
            lead.priority_score = calculate_priority_score(lead);
        })
        .ok_or_else(|| AppError::NotFound(format!("Lead with id {} not found", id)))?;

    Ok(Json(LeadMutationResponse {
        message: "Score updated".to_string(),
        lead,
    }))
}

/// GET /filters/options
///
/// Static catalog of recognized industries and headcount bands for
/// client-side form population.
pub async fn filter_options() -> Json<FilterOptions> {
    Json(FilterOptions {
        industries: [
            "Technology",
            "Construction",
            "Logistics",
            "Healthcare",
            "Finance",
            "Manufacturing",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        headcounts: ["1-10", "11-50", "51-200", "201-500", "500+"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    })
}
