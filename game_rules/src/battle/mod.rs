//! Battle resolution: basic attacks and skill application over a roster of combatants.
//!
//! Resolvers address combatants by their index in the roster slice. All indices
//! and kinds are validated before anything is mutated, so a failed resolution
//! leaves the roster untouched and writes no narrative.

mod attack;
mod skills;

pub use attack::*;
pub use skills::*;

use crate::entities::{Allegiance, Combatant};
use crate::error::{Result, RulesError};

/// How a skill affects one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionMode {
    /// Damage scaled from the user's strength against the target's toughness.
    DamageTarget,
    /// Healing scaled from the user's special.
    HealTarget,
}

impl InteractionMode {
    /// Skills aimed across sides damage; skills aimed within a side heal.
    pub fn for_allegiances(user: Allegiance, target: Allegiance) -> Self {
        if user == target {
            InteractionMode::HealTarget
        } else {
            InteractionMode::DamageTarget
        }
    }
}

fn ensure_in_roster(roster: &[Combatant], index: usize, role: &str) -> Result<()> {
    if index < roster.len() {
        Ok(())
    } else {
        Err(RulesError::invalid(format!(
            "{role} index {index} is outside a roster of {}",
            roster.len()
        )))
    }
}
