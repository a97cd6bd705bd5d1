use axum::{extract::State, http::Uri, middleware, routing::get, Json, Router};
use serde_json::json;

use crate::{
    app_state::AppState,
    error::AppError,
    middleware::tracing::observability_middleware,
    modules::{reference::reference_routes, reports::report_routes},
};

pub fn create_router(state: AppState) -> Router {
    let static_dir = state.env.app.static_dir.to_string();

    Router::new()
        .merge(report_routes())
        .merge(reference_routes())
        .route("/health", get(health_check))
        .nest_service(
            "/static",
            tower_http::services::ServeDir::new(static_dir),
        )
        .fallback(not_found)
        .layer(middleware::from_fn(observability_middleware))
        .with_state(state)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    let store_status = if state.reports.store_healthy().await {
        "healthy"
    } else {
        "unhealthy"
    };

    let telemetry_health = crate::telemetry::telemetry_health_check();

    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "services": {
            "store": store_status,
            "telemetry": telemetry_health
        }
    }))
}
