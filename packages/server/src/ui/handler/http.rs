//! Service-level HTTP endpoints.

use axum::Json;
use roomfinder_shared::time::get_jst_timestamp;

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "timestamp": get_jst_timestamp(),
    }))
}
