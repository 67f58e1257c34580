//! Authentication routes
//!
//! Registration, login, token refresh and the current-account endpoint.
//! Password hashing runs on the blocking thread pool; JWT keys are
//! pre-computed in `AppState`.

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::services::UserService;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;
use validator::Validate;
use vitalog_shared::types::{AccountResponse, AuthTokens, LoginRequest, RegisterRequest};

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/refresh", post(refresh_token))
        .route("/me", axum::routing::get(me))
}

/// Register a new user
///
/// POST /api/v1/auth/register
async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<Json<AuthTokens>> {
    req.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let tokens = UserService::register(
        &state.db,
        state.jwt(),
        &req.email,
        &req.password,
        req.display_name.as_deref(),
    )
    .await?;
    Ok(Json(tokens))
}

/// Login with email and password
///
/// POST /api/v1/auth/login
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<AuthTokens>> {
    let tokens = UserService::login(&state.db, state.jwt(), &req.email, &req.password).await?;
    Ok(Json(tokens))
}

/// Refresh token request
#[derive(Debug, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Refresh access token
///
/// POST /api/v1/auth/refresh
async fn refresh_token(
    State(state): State<AppState>,
    Json(req): Json<RefreshTokenRequest>,
) -> ApiResult<Json<AuthTokens>> {
    let tokens = UserService::refresh_token(&state.db, state.jwt(), &req.refresh_token).await?;
    Ok(Json(tokens))
}

/// Get the current account (requires authentication)
///
/// GET /api/v1/auth/me
async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<AccountResponse>> {
    let account = UserService::get_account(&state.db, auth.user_id).await?;
    Ok(Json(account))
}

#[cfg(test)]
mod tests {
    // Route tests live in backend/tests as integration tests
}
