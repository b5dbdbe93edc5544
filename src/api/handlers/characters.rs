/*
 * Responsibility
 * - GET /api/characters
 * - repo から roster を取得し DTO に詰め替える (filter / pagination なし)
 */
use axum::{Json, extract::State};

use crate::{
    api::dto::characters::{CharacterListResponse, CharacterResponse},
    error::AppError,
    state::AppState,
};

pub async fn list_characters(
    State(state): State<AppState>,
) -> Result<Json<CharacterListResponse>, AppError> {
    let rows = state.characters.list().await?;
    let characters = rows.into_iter().map(CharacterResponse::from).collect();

    Ok(Json(CharacterListResponse { characters }))
}
