//! # Narrative Core
//!
//! NPC dialogue for TextBlade. An [`Npc`] cycles through its lines, fires a
//! one-shot action the first time it is spoken to, and (for quest givers)
//! switches to a different set of lines once a world-state switch says the
//! quest is complete.
//!
//! The switch registry lives in `game_rules`; it is passed into every
//! [`Npc::speak`] call rather than held globally.

pub mod dialogue;
pub mod error;

pub use dialogue::*;
pub use error::*;
