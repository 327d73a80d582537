use axum::{extract::State, response::Json};
use axum_valid::Valid;
use common::converters::parse_currency;
use model::flat::{FlatScenarioInput, FlatScenarioResult};
use model::participant::Participant;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace};
use utoipa::ToSchema;
use validator::Validate;

use crate::schemas::{ApiResponse, AppState, CachedData};

/// Request body for the flat-fee calculator
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CalculateFlatRequest {
    /// Scenarios to price (at most 10)
    #[validate(length(min = 1, max = 10))]
    pub scenarios: Vec<FlatScenarioInput>,
    /// Participants sharing the contract
    #[serde(default)]
    pub participants: Vec<Participant>,
    /// Default project value applied to scenarios whose own field is blank
    #[serde(default)]
    pub global_total: Option<String>,
}

/// Calculate flat-fee scenarios
///
/// Prices every scenario independently; a scenario that cannot be priced
/// comes back zero-valued with an error marker instead of failing the batch.
#[utoipa::path(
    post,
    path = "/api/v1/calculators/flat",
    request_body = CalculateFlatRequest,
    responses(
        (status = 200, description = "Scenarios calculated successfully", body = ApiResponse<Vec<FlatScenarioResult>>),
        (status = 400, description = "Invalid request", body = crate::schemas::ErrorResponse)
    ),
    tag = "calculators"
)]
#[instrument(skip(state, request))]
pub async fn calculate_flat(
    State(state): State<AppState>,
    Valid(Json(request)): Valid<Json<CalculateFlatRequest>>,
) -> Json<ApiResponse<Vec<FlatScenarioResult>>> {
    trace!("Entering calculate_flat function");
    debug!("Calculating {} flat scenarios", request.scenarios.len());

    // Check cache first
    let cache_key = format!("flat_{:?}", request);
    if let Some(CachedData::Flat(results)) = state.cache.get(&cache_key).await {
        return Json(ApiResponse {
            data: results,
            message: "Flat scenarios retrieved from cache".to_string(),
            success: true,
        });
    }

    let global_total = request
        .global_total
        .as_deref()
        .map(parse_currency)
        .filter(|total| *total > Decimal::ZERO);

    let results: Vec<FlatScenarioResult> = request
        .scenarios
        .iter()
        .map(|scenario| compute::flat::calculate(scenario, &request.participants, global_total))
        .collect();

    // Cache the result
    state
        .cache
        .insert(cache_key, CachedData::Flat(results.clone()))
        .await;

    info!("Calculated {} flat scenarios", results.len());
    Json(ApiResponse {
        data: results,
        message: "Flat scenarios calculated successfully".to_string(),
        success: true,
    })
}
