//! Route definitions for the Vitalog API
//!
//! This module organizes all API routes and applies middleware.

use crate::state::AppState;
use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod auth;
mod dashboard;
mod export;
mod health;
mod meal;
mod profile;
mod water;
mod weight;
mod workout;

pub use auth::auth_routes;
pub use dashboard::dashboard_routes;
pub use export::export_routes;
pub use meal::{food_routes, meal_routes};
pub use profile::profile_routes;
pub use water::water_routes;
pub use weight::weight_routes;
pub use workout::workout_routes;

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .nest("/api/v1", api_routes())
        // Apply middleware layers
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API v1 routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { "Vitalog API v1" }))
        .nest("/auth", auth::auth_routes())
        .nest("/profile", profile::profile_routes())
        .nest("/weight", weight::weight_routes())
        .nest("/water", water::water_routes())
        .nest("/food", meal::food_routes())
        .nest("/meal", meal::meal_routes())
        .nest("/workout", workout::workout_routes())
        .nest("/dashboard", dashboard::dashboard_routes())
        .nest("/export", export::export_routes())
}
