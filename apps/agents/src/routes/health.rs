use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /api/health
/// Reports liveness and whether a completion key is configured.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "api_key_configured": state.config.api_key_configured(),
        "version": env!("CARGO_PKG_VERSION"),
        "service": "career-agents-api"
    }))
}
