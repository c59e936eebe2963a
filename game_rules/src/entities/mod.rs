//! Entity definitions for the battle roster.

mod character;
mod components;
mod monster;

pub use character::*;
pub use components::*;
pub use monster::*;

use serde::{Deserialize, Serialize};
use tracing::trace;
use uuid::Uuid;

use crate::mechanics::DamageType;
use crate::narrative::NarrativeSink;

/// Unique identifier for all entities in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    /// Create a new random entity ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which side of a battle an entity fights on.
///
/// Skills aimed across sides deal damage; skills aimed within a side heal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Allegiance {
    Party,
    Hostile,
}

/// The record shared by every combatant: identity, stats and status effects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub name: String,
    pub allegiance: Allegiance,
    pub stats: StatsComponent,
    pub status_effects: StatusEffectComponent,
}

impl Entity {
    pub fn new(name: impl Into<String>, allegiance: Allegiance, stats: StatsComponent) -> Self {
        Self {
            id: EntityId::new(),
            name: name.into(),
            allegiance,
            stats,
            status_effects: StatusEffectComponent::default(),
        }
    }

    /// Check if the entity is alive.
    pub fn is_alive(&self) -> bool {
        self.stats.current_health > 0
    }

    /// Subtract `amount` from health. Negative amounts heal.
    ///
    /// Health stays within `[0, total_health]`.
    pub fn damage(&mut self, amount: i32) {
        let stats = &mut self.stats;
        stats.current_health = stats
            .current_health
            .saturating_sub(amount)
            .min(stats.total_health)
            .max(0);
        trace!(entity = %self.name, amount, health = stats.current_health, "health changed");
    }

    /// Deduct skill points, never dropping below zero.
    pub fn spend_skill_points(&mut self, cost: i32) {
        let stats = &mut self.stats;
        stats.current_skill_points = stats
            .current_skill_points
            .saturating_sub(cost)
            .min(stats.total_skill_points)
            .max(0);
    }

    pub fn inflict_status(&mut self, status: &str, stacks: u32) {
        self.status_effects.inflict(status, stacks);
    }

    /// Check if the entity has a specific status effect.
    pub fn has_status(&self, status: &str) -> bool {
        self.status_effects.stacks(status) > 0
    }

    /// End-of-round upkeep: every status loses a stack.
    pub fn on_round_complete(&mut self, out: &mut dyn NarrativeSink) {
        for status in self.status_effects.tick() {
            out.write_line(&format!("{} is no longer {}.", self.name, status));
        }
    }
}

/// A battle participant: one of a closed set of entity kinds.
#[derive(Debug, Clone)]
pub enum Combatant {
    Character(Character),
    Monster(Monster),
}

impl Combatant {
    pub fn entity(&self) -> &Entity {
        match self {
            Combatant::Character(c) => &c.entity,
            Combatant::Monster(m) => &m.entity,
        }
    }

    pub fn entity_mut(&mut self) -> &mut Entity {
        match self {
            Combatant::Character(c) => &mut c.entity,
            Combatant::Monster(m) => &mut m.entity,
        }
    }

    pub fn name(&self) -> &str {
        &self.entity().name
    }

    /// Strength used for damage: equipment-inclusive for characters, base otherwise.
    pub fn effective_strength(&self) -> i32 {
        match self {
            Combatant::Character(c) => c.total_strength(),
            Combatant::Monster(m) => m.entity.stats.strength,
        }
    }

    /// Toughness used for damage: equipment-inclusive for characters, base otherwise.
    pub fn effective_toughness(&self) -> i32 {
        match self {
            Combatant::Character(c) => c.total_toughness(),
            Combatant::Monster(m) => m.entity.stats.toughness,
        }
    }

    pub fn weakness(&self) -> Option<DamageType> {
        self.as_monster().and_then(|m| m.weakness)
    }

    pub fn as_character(&self) -> Option<&Character> {
        match self {
            Combatant::Character(c) => Some(c),
            Combatant::Monster(_) => None,
        }
    }

    pub fn as_character_mut(&mut self) -> Option<&mut Character> {
        match self {
            Combatant::Character(c) => Some(c),
            Combatant::Monster(_) => None,
        }
    }

    pub fn as_monster(&self) -> Option<&Monster> {
        match self {
            Combatant::Monster(m) => Some(m),
            Combatant::Character(_) => None,
        }
    }
}

impl From<Character> for Combatant {
    fn from(character: Character) -> Self {
        Combatant::Character(character)
    }
}

impl From<Monster> for Combatant {
    fn from(monster: Monster) -> Self {
        Combatant::Monster(monster)
    }
}
