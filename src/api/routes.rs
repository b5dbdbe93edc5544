/*
 * Responsibility
 * - URL 構造を定義 (/ と /api/characters)
 * - 未定義の path は fallback で JSON 404
 */
use axum::{Router, routing::get};

use crate::api::handlers::{characters::list_characters, root::root};
use crate::error::route_not_found;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/api/characters", get(list_characters))
        .fallback(route_not_found)
}
