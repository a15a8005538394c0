//! REST endpoints for the dashboard pages.

use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use super::provider::DataProvider;

/// Shared state for dashboard routes.
#[derive(Clone)]
pub struct DashboardRouteState {
    pub provider: Arc<dyn DataProvider>,
}

/// Build the router for the dashboard read endpoints.
pub fn dashboard_routes(state: DashboardRouteState) -> Router {
    Router::new()
        .route("/api/intermediary", get(get_intermediary))
        .route("/api/credits", get(get_credits))
        .route("/api/metrics", get(get_metrics))
        .with_state(state)
}

/// GET /api/intermediary
async fn get_intermediary(State(state): State<DashboardRouteState>) -> impl IntoResponse {
    Json(state.provider.intermediary_profile().await)
}

/// GET /api/credits
async fn get_credits(State(state): State<DashboardRouteState>) -> impl IntoResponse {
    Json(state.provider.credit_history().await)
}

/// GET /api/metrics
async fn get_metrics(State(state): State<DashboardRouteState>) -> impl IntoResponse {
    Json(state.provider.performance_metrics().await)
}
