use axum::{extract::State, routing::get, Router};
use serde_json::json;

use crate::app_state::AppState;
use crate::db::store::StoreCounts;
use crate::utils::api_response::ApiResponse;

/// Defines health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health/live", get(liveness_check))  // ✅ Liveness check
        .route("/health/ready", get(readiness_check)) // ✅ Readiness check
}

/// **Liveness Check (Basic Check)**
/// - ✅ Verifies that the API is running
/// - ❌ Does NOT look at the store
async fn liveness_check(State(state): State<AppState>) -> ApiResponse<serde_json::Value> {
    ApiResponse::ok(
        "API is live",
        json!({ "status": "live", "playground": state.config.playground_enabled }),
    )
}

/// **Readiness Check**
/// - ✅ Takes a read lock on the store and reports record counts
async fn readiness_check(State(state): State<AppState>) -> ApiResponse<StoreCounts> {
    let counts = state.store.counts().await;
    ApiResponse::ok("API is ready", counts)
}
