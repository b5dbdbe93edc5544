/**
 * Responsibility
 * - repo が上位に伝える意味の定義
 */
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepoError {
    // StaticCharacterRepo never fails; kept for store-backed repos.
    #[allow(dead_code)]
    #[error("character store unavailable: {0}")]
    Unavailable(String),
}
