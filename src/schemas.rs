use crate::handlers::ai_project::{TokenEstimateRequest, TokenEstimateResponse};
use crate::handlers::flat::CalculateFlatRequest;
use crate::handlers::hourly::CalculateHourlyRequest;
use crate::handlers::reports::{FlatReportRequest, HourlyReportRequest};
use model::ai::{
    AiProjectInput, AiProjectResult, ComplexityLevel, HostingTier, LlmModel, SetupBreakdown,
};
use model::flat::{FlatScenarioInput, FlatScenarioResult};
use model::hourly::{HourlyScenarioInput, HourlyScenarioResult};
use model::participant::{Participant, ParticipantShare};
use moka::future::Cache;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Cache memoizing calculator responses for identical requests
    pub cache: Cache<String, CachedData>,
}

/// Cached calculator outputs
#[derive(Clone, Debug)]
pub enum CachedData {
    Flat(Vec<FlatScenarioResult>),
    Hourly(Vec<HourlyScenarioResult>),
    AiProject(AiProjectResult),
}

/// API response wrapper
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success status
    pub success: bool,
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::flat::calculate_flat,
        crate::handlers::hourly::calculate_hourly,
        crate::handlers::ai_project::calculate_ai_project,
        crate::handlers::ai_project::estimate_tokens,
        crate::handlers::reports::flat_text_report,
        crate::handlers::reports::flat_scenario_summary,
        crate::handlers::reports::hourly_text_report,
        crate::handlers::reports::ai_proposal_pdf,
        crate::handlers::reports::ai_proposal_summary,
    ),
    components(
        schemas(
            ApiResponse<Vec<FlatScenarioResult>>,
            ApiResponse<Vec<HourlyScenarioResult>>,
            ApiResponse<AiProjectResult>,
            ApiResponse<TokenEstimateResponse>,
            ApiResponse<String>,
            ErrorResponse,
            HealthResponse,
            CalculateFlatRequest,
            CalculateHourlyRequest,
            TokenEstimateRequest,
            TokenEstimateResponse,
            FlatReportRequest,
            HourlyReportRequest,
            FlatScenarioInput,
            FlatScenarioResult,
            HourlyScenarioInput,
            HourlyScenarioResult,
            AiProjectInput,
            AiProjectResult,
            SetupBreakdown,
            Participant,
            ParticipantShare,
            ComplexityLevel,
            LlmModel,
            HostingTier,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "calculators", description = "Pricing calculator endpoints"),
        (name = "reports", description = "Report and proposal export endpoints"),
    ),
    info(
        title = "PriceRust API",
        description = "Pricing calculators for automation/AI consulting projects: flat-fee, hourly-rate and AI-project quotes with exportable reports",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
