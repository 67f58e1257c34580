//! Water tracking API routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::WaterService;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use vitalog_shared::types::{AddWaterRequest, DateQuery, WaterDayResponse};

/// Create water routes
pub fn water_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_day).post(add_water))
        .route("/history", get(get_history))
}

/// GET /api/v1/water?date=YYYY-MM-DD - Day summary
///
/// Creates the day row lazily with a goal personalized from the profile
/// (default 2500 ml without one).
async fn get_day(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<DateQuery>,
) -> ApiResult<Json<WaterDayResponse>> {
    let day = WaterService::day_summary(state.db(), auth.user_id, query.date).await?;
    Ok(Json(day))
}

/// POST /api/v1/water - Add a pour and return the updated day
async fn add_water(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<AddWaterRequest>,
) -> ApiResult<Json<WaterDayResponse>> {
    let day = WaterService::add_water(state.db(), auth.user_id, req.date, req.amount_ml).await?;
    Ok(Json(day))
}

/// GET /api/v1/water/history - All logged days, newest first
async fn get_history(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<WaterDayResponse>>> {
    let days = WaterService::history(state.db(), auth.user_id).await?;
    Ok(Json(days))
}
