//! Monster definitions.

use serde::{Deserialize, Serialize};

use super::{Allegiance, Entity, StatsComponent};
use crate::mechanics::DamageType;

/// A hostile combatant with an optional elemental weakness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Monster {
    pub entity: Entity,
    /// Attacks of this damage type are super effective.
    pub weakness: Option<DamageType>,
    /// Experience granted to the party when this monster is defeated.
    #[serde(default)]
    pub experience_points: u32,
}

impl Monster {
    pub fn new(name: impl Into<String>, stats: StatsComponent, weakness: Option<DamageType>) -> Self {
        Self {
            entity: Entity::new(name, Allegiance::Hostile, stats),
            weakness,
            experience_points: 0,
        }
    }

    pub fn with_experience_points(mut self, experience_points: u32) -> Self {
        self.experience_points = experience_points;
        self
    }
}
