/*
 * Responsibility
 * - Characters の response DTO
 * - JSON のフィールド順は id, name, faction, owner
 */
use serde::Serialize;

use crate::repos::CharacterRow;

#[derive(Debug, Serialize)]
pub struct CharacterResponse {
    pub id: i64,
    pub name: String,
    pub faction: String,
    pub owner: String,
}

impl From<CharacterRow> for CharacterResponse {
    fn from(row: CharacterRow) -> Self {
        Self {
            id: row.id,
            name: row.name.to_string(),
            faction: row.faction.to_string(),
            owner: row.owner.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CharacterListResponse {
    pub characters: Vec<CharacterResponse>,
}
