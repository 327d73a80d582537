use axum::{extract::State, response::Json};
use axum_valid::Valid;
use model::hourly::{HourlyScenarioInput, HourlyScenarioResult};
use model::participant::Participant;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace};
use utoipa::ToSchema;
use validator::Validate;

use crate::schemas::{ApiResponse, AppState, CachedData};

/// Request body for the hourly-rate calculator
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CalculateHourlyRequest {
    /// Scenarios to price (at most 10)
    #[validate(length(min = 1, max = 10))]
    pub scenarios: Vec<HourlyScenarioInput>,
    /// Participants sharing the contract
    #[serde(default)]
    pub participants: Vec<Participant>,
}

/// Calculate hourly-rate scenarios
///
/// Prices every scenario independently. A scenario missing one of its
/// drivers (rate, hours/day, days/week) comes back all-zero rather than
/// failing the batch.
#[utoipa::path(
    post,
    path = "/api/v1/calculators/hourly",
    request_body = CalculateHourlyRequest,
    responses(
        (status = 200, description = "Scenarios calculated successfully", body = ApiResponse<Vec<HourlyScenarioResult>>),
        (status = 400, description = "Invalid request", body = crate::schemas::ErrorResponse)
    ),
    tag = "calculators"
)]
#[instrument(skip(state, request))]
pub async fn calculate_hourly(
    State(state): State<AppState>,
    Valid(Json(request)): Valid<Json<CalculateHourlyRequest>>,
) -> Json<ApiResponse<Vec<HourlyScenarioResult>>> {
    trace!("Entering calculate_hourly function");
    debug!("Calculating {} hourly scenarios", request.scenarios.len());

    // Check cache first
    let cache_key = format!("hourly_{:?}", request);
    if let Some(CachedData::Hourly(results)) = state.cache.get(&cache_key).await {
        return Json(ApiResponse {
            data: results,
            message: "Hourly scenarios retrieved from cache".to_string(),
            success: true,
        });
    }

    let results: Vec<HourlyScenarioResult> = request
        .scenarios
        .iter()
        .map(|scenario| compute::hourly::calculate(scenario, &request.participants))
        .collect();

    // Cache the result
    state
        .cache
        .insert(cache_key, CachedData::Hourly(results.clone()))
        .await;

    info!("Calculated {} hourly scenarios", results.len());
    Json(ApiResponse {
        data: results,
        message: "Hourly scenarios calculated successfully".to_string(),
        success: true,
    })
}
