/*
 * Responsibility
 * - データ取得層の公開インターフェース
 */
pub mod character_repo;
pub mod error;

pub use character_repo::{CharacterRepo, CharacterRow, StaticCharacterRepo};
