//! Weight log API routes

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::services::weight::WeightEntry;
use crate::services::WeightService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use uuid::Uuid;
use vitalog_shared::types::{LogWeightRequest, WeightEntryResponse};

/// Create weight routes
pub fn weight_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_history).post(log_weight))
        .route("/:id", delete(delete_entry))
}

fn to_response(entry: WeightEntry) -> WeightEntryResponse {
    WeightEntryResponse {
        id: entry.id.to_string(),
        date: entry.date,
        weight_kg: entry.weight_kg,
        created_at: entry.created_at,
    }
}

/// POST /api/v1/weight - Log a weight entry
///
/// One entry per calendar day; returns 409 when the day already has one.
async fn log_weight(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<LogWeightRequest>,
) -> ApiResult<(StatusCode, Json<WeightEntryResponse>)> {
    let entry =
        WeightService::log_weight(state.db(), auth.user_id, req.date, req.weight_kg).await?;
    Ok((StatusCode::CREATED, Json(to_response(entry))))
}

/// GET /api/v1/weight - Full weight history, oldest first
async fn get_history(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<WeightEntryResponse>>> {
    let entries = WeightService::history(state.db(), auth.user_id).await?;
    Ok(Json(entries.into_iter().map(to_response).collect()))
}

/// DELETE /api/v1/weight/:id - Remove a weight entry
async fn delete_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = Uuid::parse_str(&id)
        .map_err(|_| ApiError::BadRequest("Invalid entry id".to_string()))?;
    WeightService::delete(state.db(), auth.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
