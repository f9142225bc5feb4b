use axum::Json;
use serde_json::{json, Value};

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": env!("CARGO_PKG_NAME")
    }))
}

/// GET /
pub async fn banner_handler() -> Json<Value> {
    Json(json!({
        "message": format!("ATS resume analysis service v{} is running", env!("CARGO_PKG_VERSION"))
    }))
}
