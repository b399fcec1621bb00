//! Health check handler

use crate::{models::request::ApiResponse, AppState};
use axum::{extract::State, http::StatusCode, response::{IntoResponse, Response}, Json};
use tracing::{info, warn};

pub async fn handle_health(State(state): State<AppState>) -> Response {
    info!("GET /health");

    match state.store.count() {
        Ok(count) => (
            StatusCode::OK,
            Json(ApiResponse::success(serde_json::json!({
                "status": "healthy",
                "timestamp": chrono::Utc::now().timestamp(),
                "version": state.version,
                "providers": count,
            }))),
        )
            .into_response(),
        Err(e) => {
            warn!("Provider store unavailable: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({
                    "error": "Provider store unavailable",
                    "status": StatusCode::SERVICE_UNAVAILABLE.as_u16(),
                })),
            )
                .into_response()
        }
    }
}
