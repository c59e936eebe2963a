//! Dialogue errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DialogueError {
    /// An NPC was given no lines to say.
    #[error("{npc} has no texts to speak")]
    EmptyTexts { npc: String },

    /// A quest giver was given no lines for after its quest.
    #[error("{npc} has no post-quest texts to speak")]
    EmptyPostQuestTexts { npc: String },
}

pub type Result<T> = std::result::Result<T, DialogueError>;
