/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - ex: characters: Arc<dyn CharacterRepo>
 * - Clone 前提で持つ (内部は Arc で cheap、起動後は immutable)
 */
use std::{fmt, sync::Arc};

use crate::repos::{CharacterRepo, StaticCharacterRepo};

#[derive(Clone)]
pub struct AppState {
    pub characters: Arc<dyn CharacterRepo>,
}

impl AppState {
    pub fn new(characters: Arc<dyn CharacterRepo>) -> Self {
        Self { characters }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(StaticCharacterRepo))
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("characters", &self.characters.backend_name())
            .finish()
    }
}
