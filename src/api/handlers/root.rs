/*
 * Responsibility
 * - GET / (疎通用)
 */
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub const RUNNING_MESSAGE: &str = "Dreadmarch Campaign Manager API is running";

pub async fn root() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"message": RUNNING_MESSAGE})))
}
