//! Tunable rules parameters, loadable from TOML.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Balance parameters used by the battle resolvers and the level curve.
///
/// Missing keys in a TOML document fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Damage multiplier when an attack's damage type matches the target's weakness.
    pub super_effective_multiplier: f32,
    /// Healing skills restore `special * multiplier * healing_multiplier`.
    pub healing_multiplier: f32,
    pub leveling: LevelingConfig,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            super_effective_multiplier: 2.0,
            healing_multiplier: 2.0,
            leveling: LevelingConfig::default(),
        }
    }
}

impl RulesConfig {
    /// Parse a config from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }
}

/// Experience curve and per-level stat growth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelingConfig {
    /// Experience to go from level `n` to `n + 1` is `base_experience * n * n`, cumulative.
    pub base_experience: u32,
    pub health_per_level: i32,
    pub skill_points_per_level: i32,
    /// Added to strength, toughness, special and special defense.
    pub stat_per_level: i32,
}

impl Default for LevelingConfig {
    fn default() -> Self {
        Self {
            base_experience: 50,
            health_per_level: 10,
            skill_points_per_level: 5,
            stat_per_level: 1,
        }
    }
}
