//! HTTP route handlers for the provider directory

use crate::{
    error::{AppError, Result},
    handlers::health::handle_health,
    models::request::{ApiResponse, ProviderListParams},
    search::SearchQuery,
    AppState,
};
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tracing::info;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handle_root))
        .route("/health", get(handle_health))
        .route("/api/stats", get(handle_stats))
        .route("/api/providers", get(handle_get_providers))
        .route("/api/providers/:id", get(handle_get_provider))
        .route("/api/specializations", get(handle_get_specializations))
        .fallback(handle_not_found)
}

async fn handle_root(State(state): State<AppState>) -> impl IntoResponse {
    Json(ApiResponse::success(serde_json::json!({
        "app": state.app_name,
        "version": state.version,
        "message": "Find the right learning support",
        "endpoints": {
            "health": "/health",
            "stats": "/api/stats",
            "providers": "/api/providers?q={query}&specialization={category}&sort={rating|name|location}",
            "provider": "/api/providers/{id}",
            "specializations": "/api/specializations"
        }
    })))
}

async fn handle_stats(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let stats = state.store.stats()?;
    Ok(Json(ApiResponse::success(stats)))
}

async fn handle_get_providers(
    State(state): State<AppState>,
    Query(params): Query<ProviderListParams>,
) -> Result<impl IntoResponse> {
    info!(
        "GET /api/providers - q: {:?}, specialization: {:?}, sort: {:?}",
        params.q, params.specialization, params.sort
    );

    let query = SearchQuery::from(params);
    let providers = state.search_engine.search(&query)?;
    let count = providers.len();

    Ok(Json(
        ApiResponse::success(serde_json::json!({
            "providers": providers,
            "count": count,
            "query": query,
        }))
        .with_message(format!("{} providers found", count)),
    ))
}

async fn handle_get_provider(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse> {
    info!("GET /api/providers/{}", raw_id);

    let id: i64 = raw_id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid provider ID".to_string()))?;

    let provider = state
        .store
        .get_by_id(id)?
        .ok_or_else(|| AppError::NotFound("Provider not found".to_string()))?;

    Ok(Json(ApiResponse::success(provider)))
}

async fn handle_get_specializations(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let specializations = state.store.specializations()?;
    Ok(Json(ApiResponse::success(specializations)))
}

async fn handle_not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}
