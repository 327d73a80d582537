use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Json};
use model::ai::AiProjectInput;
use model::flat::FlatScenarioInput;
use model::hourly::HourlyScenarioInput;
use model::participant::Participant;
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, trace};
use utoipa::ToSchema;

use crate::schemas::{ApiResponse, ErrorResponse};

/// Request body for a flat-fee scenario report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FlatReportRequest {
    pub scenario: FlatScenarioInput,
    #[serde(default)]
    pub participants: Vec<Participant>,
}

/// Request body for an hourly-rate scenario report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HourlyReportRequest {
    pub scenario: HourlyScenarioInput,
    #[serde(default)]
    pub participants: Vec<Participant>,
}

/// Export a flat-fee scenario report
///
/// Recomputes the scenario server-side and returns the fixed-format text
/// document as a download.
#[utoipa::path(
    post,
    path = "/api/v1/reports/flat/text",
    request_body = FlatReportRequest,
    responses(
        (status = 200, description = "Report rendered successfully", content_type = "text/plain", body = String)
    ),
    tag = "reports"
)]
#[instrument(skip(request))]
pub async fn flat_text_report(Json(request): Json<FlatReportRequest>) -> impl IntoResponse {
    trace!("Entering flat_text_report function");

    let result = compute::flat::calculate(&request.scenario, &request.participants, None);
    let body = report::text::flat_scenario_report(&result);

    info!(scenario = request.scenario.id, "Flat report rendered");
    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"relatorio_projeto.txt\"",
            ),
        ],
        body,
    )
}

/// Export an hourly-rate scenario report
#[utoipa::path(
    post,
    path = "/api/v1/reports/hourly/text",
    request_body = HourlyReportRequest,
    responses(
        (status = 200, description = "Report rendered successfully", content_type = "text/plain", body = String)
    ),
    tag = "reports"
)]
#[instrument(skip(request))]
pub async fn hourly_text_report(Json(request): Json<HourlyReportRequest>) -> impl IntoResponse {
    trace!("Entering hourly_text_report function");

    let result = compute::hourly::calculate(&request.scenario, &request.participants);
    let body = report::text::hourly_scenario_report(&result);

    info!(scenario = request.scenario.id, "Hourly report rendered");
    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"relatorio_hora.txt\"",
            ),
        ],
        body,
    )
}

/// Export an AI-project proposal PDF
///
/// Recomputes the quote and returns the rendered multi-section proposal as a
/// PDF download.
#[utoipa::path(
    post,
    path = "/api/v1/reports/ai-project/pdf",
    request_body = AiProjectInput,
    responses(
        (status = 200, description = "Proposal rendered successfully", content_type = "application/pdf", body = Vec<u8>),
        (status = 500, description = "Rendering failed", body = ErrorResponse)
    ),
    tag = "reports"
)]
#[instrument(skip(input))]
pub async fn ai_proposal_pdf(
    Json(input): Json<AiProjectInput>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering ai_proposal_pdf function");

    let result = compute::ai_project::calculate(&input);
    let bytes = report::pdf::ai_proposal_pdf(&input, &result, chrono::Local::now().naive_local())
        .map_err(|e| {
            error!("Failed to render proposal PDF: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to render proposal PDF: {}", e),
                    code: "REPORT_ERROR".to_string(),
                    success: false,
                }),
            )
        })?;

    info!(size = bytes.len(), "Proposal PDF rendered");
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"proposta_ia.pdf\"",
            ),
        ],
        bytes,
    ))
}

/// Export a flat-fee scenario clipboard summary
///
/// Returns the short formatted summary string a client copies to the system
/// clipboard.
#[utoipa::path(
    post,
    path = "/api/v1/reports/flat/summary",
    request_body = FlatReportRequest,
    responses(
        (status = 200, description = "Summary rendered successfully", body = ApiResponse<String>)
    ),
    tag = "reports"
)]
#[instrument(skip(request))]
pub async fn flat_scenario_summary(
    Json(request): Json<FlatReportRequest>,
) -> Json<ApiResponse<String>> {
    trace!("Entering flat_scenario_summary function");

    let result = compute::flat::calculate(&request.scenario, &request.participants, None);
    let summary = report::summary::flat_scenario_summary(&result);

    Json(ApiResponse {
        data: summary,
        message: "Summary rendered successfully".to_string(),
        success: true,
    })
}

/// Export an AI-project clipboard summary
///
/// Returns the short formatted summary string a client copies to the system
/// clipboard.
#[utoipa::path(
    post,
    path = "/api/v1/reports/ai-project/summary",
    request_body = AiProjectInput,
    responses(
        (status = 200, description = "Summary rendered successfully", body = ApiResponse<String>)
    ),
    tag = "reports"
)]
#[instrument(skip(input))]
pub async fn ai_proposal_summary(Json(input): Json<AiProjectInput>) -> Json<ApiResponse<String>> {
    trace!("Entering ai_proposal_summary function");

    let result = compute::ai_project::calculate(&input);
    let summary = report::summary::ai_proposal_summary(&result);

    Json(ApiResponse {
        data: summary,
        message: "Summary rendered successfully".to_string(),
        success: true,
    })
}
