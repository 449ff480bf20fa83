use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::AppState;

#[axum::debug_handler]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let loaded = state
        .session_service
        .with_session(|s| s.questions().len())
        .ok();
    let body = json!({
        "status": if loaded.is_some() { "ok" } else { "degraded" },
        "questions_loaded": loaded,
    });
    (StatusCode::OK, Json(body))
}
