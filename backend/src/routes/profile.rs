//! User profile and onboarding API routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::ProfileService;
use crate::state::AppState;
use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use vitalog_shared::types::{OnboardingStatus, ProfileResponse, UpdateProfileRequest};

/// Create profile routes
pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_profile).put(update_profile))
        .route(
            "/onboarding",
            get(onboarding_status).post(complete_onboarding),
        )
}

/// GET /api/v1/profile - Get the user's profile
///
/// Health fields are empty until the profile has been saved once.
async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ProfileResponse>> {
    let profile = ProfileService::get(state.db(), auth.user_id).await?;
    Ok(Json(profile))
}

/// PUT /api/v1/profile - Partially update the profile
///
/// Creates the profile row on first write.
async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateProfileRequest>,
) -> ApiResult<Json<ProfileResponse>> {
    let profile = ProfileService::update(state.db(), auth.user_id, req).await?;
    Ok(Json(profile))
}

/// GET /api/v1/profile/onboarding - Read the onboarding flag
async fn onboarding_status(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<OnboardingStatus>> {
    let status = ProfileService::onboarding_status(state.db(), auth.user_id).await?;
    Ok(Json(status))
}

/// POST /api/v1/profile/onboarding - Mark onboarding as completed
async fn complete_onboarding(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<OnboardingStatus>> {
    let status = ProfileService::complete_onboarding(state.db(), auth.user_id).await?;
    Ok(Json(status))
}
