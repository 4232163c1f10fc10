use crate::infra::AppState;
use crate::payload::{
    ProjectRiskRequest, ProjectRiskResponse, SalesConversionRequest, SalesConversionResponse,
    TeamLeaderboardRequest, TeamLeaderboardResponse, TeamPerformanceRequest,
};
use agency_scoring::scoring::ScoreResult;
use axum::extract::DefaultBodyLimit;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::Utc;
use serde_json::json;

pub(crate) fn scoring_routes(max_body_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route(
            "/api/v1/scoring/project-risk",
            post(project_risk_endpoint),
        )
        .route(
            "/api/v1/scoring/team-performance",
            post(team_performance_endpoint),
        )
        .route(
            "/api/v1/scoring/sales-conversion",
            post(sales_conversion_endpoint),
        )
        .route(
            "/api/v1/scoring/team-leaderboard",
            post(team_leaderboard_endpoint),
        )
        .layer(DefaultBodyLimit::max(max_body_bytes))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let (status, label) = if ready {
        (StatusCode::OK, "ready")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "initializing")
    };

    (status, Json(json!({ "status": label })))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn project_risk_endpoint(
    Json(payload): Json<ProjectRiskRequest>,
) -> Json<ProjectRiskResponse> {
    Json(payload.evaluate(Utc::now()))
}

pub(crate) async fn team_performance_endpoint(
    Json(payload): Json<TeamPerformanceRequest>,
) -> Json<ScoreResult> {
    Json(payload.evaluate())
}

pub(crate) async fn sales_conversion_endpoint(
    Json(payload): Json<SalesConversionRequest>,
) -> Json<SalesConversionResponse> {
    Json(payload.evaluate())
}

pub(crate) async fn team_leaderboard_endpoint(
    Json(payload): Json<TeamLeaderboardRequest>,
) -> Json<TeamLeaderboardResponse> {
    Json(payload.evaluate())
}
