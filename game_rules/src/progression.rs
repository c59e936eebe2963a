//! Character progression: deciding and applying level-ups.

use tracing::debug;

use crate::config::LevelingConfig;
use crate::entities::Character;
use crate::narrative::{coloured, colours, NarrativeSink};

/// Decides when a character has earned a level and what a level grants.
pub trait LevelManager {
    fn can_level_up(&self, character: &Character) -> bool;

    fn level_up(&self, character: &mut Character, out: &mut dyn NarrativeSink);
}

/// Quadratic experience curve with flat stat growth per level.
#[derive(Debug, Clone, Default)]
pub struct ExperienceCurve {
    config: LevelingConfig,
}

impl ExperienceCurve {
    pub fn new(config: LevelingConfig) -> Self {
        Self { config }
    }

    /// Total experience needed to reach `level`, or `None` when it doesn't fit in a `u32`.
    ///
    /// Going from level `n` to `n + 1` costs `base_experience * n * n`.
    pub fn experience_for_level(&self, level: u32) -> Option<u32> {
        (1..level).try_fold(0u32, |total, n| {
            self.config
                .base_experience
                .checked_mul(n)?
                .checked_mul(n)
                .and_then(|step| total.checked_add(step))
        })
    }
}

impl LevelManager for ExperienceCurve {
    fn can_level_up(&self, character: &Character) -> bool {
        character
            .level
            .checked_add(1)
            .and_then(|next| self.experience_for_level(next))
            .is_some_and(|needed| character.experience_points >= needed)
    }

    fn level_up(&self, character: &mut Character, out: &mut dyn NarrativeSink) {
        let growth = &self.config;
        character.level += 1;

        let stats = &mut character.entity.stats;
        stats.total_health += growth.health_per_level;
        stats.total_skill_points += growth.skill_points_per_level;
        stats.strength += growth.stat_per_level;
        stats.toughness += growth.stat_per_level;
        stats.special += growth.stat_per_level;
        stats.special_defense += growth.stat_per_level;
        character.full_heal();

        debug!(character = %character.entity.name, level = character.level, "level up");
        out.write_line(&format!(
            "{} reached level {}!",
            character.entity.name,
            coloured(colours::HIGHLIGHT, character.level)
        ));
    }
}
