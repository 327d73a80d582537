use crate::handlers::{
    ai_project::{calculate_ai_project, estimate_tokens},
    flat::calculate_flat,
    health::health_check,
    hourly::calculate_hourly,
    reports::{
        ai_proposal_pdf, ai_proposal_summary, flat_scenario_summary, flat_text_report,
        hourly_text_report,
    },
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    Router,
    routing::{get, post},
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Calculator routes
        .route("/api/v1/calculators/flat", post(calculate_flat))
        .route("/api/v1/calculators/hourly", post(calculate_hourly))
        .route("/api/v1/calculators/ai-project", post(calculate_ai_project))
        .route(
            "/api/v1/calculators/ai-project/tokens",
            post(estimate_tokens),
        )
        // Report export routes
        .route("/api/v1/reports/flat/text", post(flat_text_report))
        .route("/api/v1/reports/flat/summary", post(flat_scenario_summary))
        .route("/api/v1/reports/hourly/text", post(hourly_text_report))
        .route("/api/v1/reports/ai-project/pdf", post(ai_proposal_pdf))
        .route(
            "/api/v1/reports/ai-project/summary",
            post(ai_proposal_summary),
        )
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
