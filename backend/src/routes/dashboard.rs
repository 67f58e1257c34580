//! Dashboard API route

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::DashboardService;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use vitalog_shared::types::DashboardResponse;

/// Create dashboard routes
pub fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/", get(get_dashboard))
}

/// GET /api/v1/dashboard - The full dashboard payload
///
/// Derived metrics are computed fresh on every request; the clock is
/// read here so the service and the metrics engine stay clock-free.
async fn get_dashboard(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<DashboardResponse>> {
    let today = Utc::now().date_naive();
    let dashboard = DashboardService::get(state.db(), auth.user_id, today).await?;
    Ok(Json(dashboard))
}
