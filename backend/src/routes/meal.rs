//! Food catalog and meal logging API routes

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::services::MealService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use uuid::Uuid;
use vitalog_shared::types::{
    CreateMealRequest, DateQuery, DayMealsResponse, FoodResponse, FoodSearchQuery, MealResponse,
};

/// Create food catalog routes
pub fn food_routes() -> Router<AppState> {
    Router::new().route("/", get(search_foods))
}

/// Create meal routes
pub fn meal_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_meals).post(create_meal))
        .route("/by-day", get(get_history_by_day))
        .route("/:id", delete(delete_meal))
}

/// GET /api/v1/food?q=... - Search the food catalog
async fn search_foods(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<FoodSearchQuery>,
) -> ApiResult<Json<Vec<FoodResponse>>> {
    let foods = MealService::search_foods(state.db(), query.q.as_deref(), query.limit).await?;
    Ok(Json(foods))
}

/// POST /api/v1/meal - Log a meal
///
/// Item and total calories are computed server-side from the catalog.
async fn create_meal(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateMealRequest>,
) -> ApiResult<(StatusCode, Json<MealResponse>)> {
    let meal = MealService::create_meal(state.db(), auth.user_id, req).await?;
    Ok((StatusCode::CREATED, Json(meal)))
}

/// GET /api/v1/meal?date=YYYY-MM-DD - A day's meals
async fn get_meals(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<DateQuery>,
) -> ApiResult<Json<Vec<MealResponse>>> {
    let meals = MealService::list_by_date(state.db(), auth.user_id, query.date).await?;
    Ok(Json(meals))
}

/// GET /api/v1/meal/by-day - History grouped by day with totals
async fn get_history_by_day(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<DayMealsResponse>>> {
    let days = MealService::history_by_day(state.db(), auth.user_id).await?;
    Ok(Json(days))
}

/// DELETE /api/v1/meal/:id - Remove a meal and its items
async fn delete_meal(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id =
        Uuid::parse_str(&id).map_err(|_| ApiError::BadRequest("Invalid meal id".to_string()))?;
    MealService::delete(state.db(), auth.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
