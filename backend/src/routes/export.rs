//! Data export API route

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::services::ExportService;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use vitalog_shared::types::ExportQuery;

/// Create export routes
pub fn export_routes() -> Router<AppState> {
    Router::new().route("/", get(export_data))
}

/// GET /api/v1/export?format=json|csv - Export the user's history
async fn export_data(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ExportQuery>,
) -> ApiResult<Response> {
    match query.format.as_deref().unwrap_or("json") {
        "json" => {
            let export = ExportService::export_json(state.db(), auth.user_id).await?;
            Ok(Json(export).into_response())
        }
        "csv" => {
            let csv = ExportService::export_csv(state.db(), auth.user_id).await?;
            Ok((
                [
                    (header::CONTENT_TYPE, "text/csv"),
                    (
                        header::CONTENT_DISPOSITION,
                        "attachment; filename=\"vitalog-export.csv\"",
                    ),
                ],
                csv,
            )
                .into_response())
        }
        other => Err(ApiError::BadRequest(format!(
            "Unsupported export format: {}",
            other
        ))),
    }
}
