//! Workout API routes

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::services::WorkoutService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use uuid::Uuid;
use vitalog_shared::types::{CreateWorkoutRequest, OptionalDateQuery, WorkoutResponse};

/// Create workout routes
pub fn workout_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_workouts).post(create_workout))
        .route("/:id", delete(delete_workout))
}

/// POST /api/v1/workout - Log a workout
///
/// Omitted calories are filled from the exertion estimate.
async fn create_workout(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateWorkoutRequest>,
) -> ApiResult<(StatusCode, Json<WorkoutResponse>)> {
    let workout = WorkoutService::create(state.db(), auth.user_id, req).await?;
    Ok((StatusCode::CREATED, Json(workout)))
}

/// GET /api/v1/workout?date=YYYY-MM-DD - History, optionally for one day
async fn get_workouts(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<OptionalDateQuery>,
) -> ApiResult<Json<Vec<WorkoutResponse>>> {
    let workouts = WorkoutService::history(state.db(), auth.user_id, query.date).await?;
    Ok(Json(workouts))
}

/// DELETE /api/v1/workout/:id - Remove a workout
async fn delete_workout(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id =
        Uuid::parse_str(&id).map_err(|_| ApiError::BadRequest("Invalid workout id".to_string()))?;
    WorkoutService::delete(state.db(), auth.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
