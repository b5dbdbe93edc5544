//! Character roster access.
//!
//! The campaign has no backing store yet: `StaticCharacterRepo` serves a fixed
//! roster that lives for the whole process. Handlers only see `CharacterRepo`,
//! so a database-backed roster can be dropped in later.
use async_trait::async_trait;

use crate::repos::error::RepoError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRow {
    pub id: i64,
    pub name: &'static str,
    pub faction: &'static str,
    pub owner: &'static str,
}

const ROSTER: [CharacterRow; 2] = [
    CharacterRow {
        id: 1,
        name: "Darth Imperius",
        faction: "Sith Inquisition",
        owner: "player1",
    },
    CharacterRow {
        id: 2,
        name: "Agent Cipher Nine",
        faction: "Sith Intelligence",
        owner: "player2",
    },
];

/// Read-only view of the campaign's characters.
///
/// Implementations must be safe to share across requests (`Arc<dyn CharacterRepo>`).
#[async_trait]
pub trait CharacterRepo: Send + Sync + 'static {
    // Returns the backend name (for logging).
    fn backend_name(&self) -> &'static str;

    // All characters, in roster order.
    async fn list(&self) -> Result<Vec<CharacterRow>, RepoError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCharacterRepo;

#[async_trait]
impl CharacterRepo for StaticCharacterRepo {
    fn backend_name(&self) -> &'static str {
        "static"
    }

    async fn list(&self) -> Result<Vec<CharacterRow>, RepoError> {
        Ok(ROSTER.to_vec())
    }
}
