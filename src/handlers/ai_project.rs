use axum::{extract::State, response::Json};
use axum_valid::Valid;
use model::ai::{AiProjectInput, AiProjectResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace};
use utoipa::ToSchema;
use validator::Validate;

use crate::schemas::{ApiResponse, AppState, CachedData};

/// Request body for the token estimator
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct TokenEstimateRequest {
    /// Conversations handled per day
    #[validate(range(max = 1_000_000))]
    pub conversations_per_day: u32,
    /// Message exchanges per conversation
    #[validate(range(max = 10_000))]
    pub messages_per_conversation: u32,
}

/// Token estimator response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenEstimateResponse {
    /// Estimated tokens consumed per month
    pub estimated_monthly_tokens: u64,
    /// Tokens assumed per question/answer exchange
    pub tokens_per_exchange: u64,
}

/// Calculate an AI-project quote
///
/// Pure function of the submitted parameters: setup investment with its full
/// markup breakdown, recurring monthly value and the ROI projection.
#[utoipa::path(
    post,
    path = "/api/v1/calculators/ai-project",
    request_body = AiProjectInput,
    responses(
        (status = 200, description = "Quote calculated successfully", body = ApiResponse<AiProjectResult>),
        (status = 400, description = "Invalid request", body = crate::schemas::ErrorResponse)
    ),
    tag = "calculators"
)]
#[instrument(skip(state, input))]
pub async fn calculate_ai_project(
    State(state): State<AppState>,
    Json(input): Json<AiProjectInput>,
) -> Json<ApiResponse<AiProjectResult>> {
    trace!("Entering calculate_ai_project function");
    debug!(
        workflows = input.workflow_count,
        complexity = input.complexity.as_str(),
        "Calculating AI project quote"
    );

    // Check cache first
    let cache_key = format!("ai_{:?}", input);
    if let Some(CachedData::AiProject(result)) = state.cache.get(&cache_key).await {
        return Json(ApiResponse {
            data: result,
            message: "AI project quote retrieved from cache".to_string(),
            success: true,
        });
    }

    let result = compute::ai_project::calculate(&input);

    // Cache the result
    state
        .cache
        .insert(cache_key, CachedData::AiProject(result.clone()))
        .await;

    info!("AI project quote calculated");
    Json(ApiResponse {
        data: result,
        message: "AI project quote calculated successfully".to_string(),
        success: true,
    })
}

/// Estimate monthly token consumption
///
/// Turns conversations/day and exchanges/conversation into the token budget
/// the AI-project calculator consumes.
#[utoipa::path(
    post,
    path = "/api/v1/calculators/ai-project/tokens",
    request_body = TokenEstimateRequest,
    responses(
        (status = 200, description = "Estimate calculated successfully", body = ApiResponse<TokenEstimateResponse>),
        (status = 400, description = "Invalid request", body = crate::schemas::ErrorResponse)
    ),
    tag = "calculators"
)]
#[instrument]
pub async fn estimate_tokens(
    Valid(Json(request)): Valid<Json<TokenEstimateRequest>>,
) -> Json<ApiResponse<TokenEstimateResponse>> {
    trace!("Entering estimate_tokens function");

    let estimated = compute::tokens::estimate_monthly_tokens(
        request.conversations_per_day,
        request.messages_per_conversation,
    );

    debug!(estimated, "Token estimate calculated");
    Json(ApiResponse {
        data: TokenEstimateResponse {
            estimated_monthly_tokens: estimated,
            tokens_per_exchange: compute::tokens::TOKENS_PER_EXCHANGE,
        },
        message: "Token estimate calculated successfully".to_string(),
        success: true,
    })
}
