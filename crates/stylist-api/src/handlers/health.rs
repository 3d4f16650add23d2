//! Liveness probe.

use axum::Json;
use serde_json::{json, Value};

/// Report that the process is up. Upstream services are not contacted.
#[utoipa::path(get, path = "/health", tag = "System",
    responses((status = 200, description = "Service is running")))]
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
