//! Component definitions for entities.

use serde::{Deserialize, Serialize};

/// Base stats and resource pools shared by characters and monsters.
///
/// Current pools are kept within `[0, total]` by the [`Entity`](super::Entity)
/// mutators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsComponent {
    pub strength: i32,
    pub toughness: i32,
    pub special: i32,
    pub special_defense: i32,
    pub current_health: i32,
    pub total_health: i32,
    pub current_skill_points: i32,
    pub total_skill_points: i32,
}

impl Default for StatsComponent {
    fn default() -> Self {
        Self::new(10, 1, 1, 1, 1, 0)
    }
}

impl StatsComponent {
    /// Full pools with the given totals.
    pub fn new(
        health: i32,
        strength: i32,
        toughness: i32,
        special: i32,
        special_defense: i32,
        skill_points: i32,
    ) -> Self {
        Self {
            strength,
            toughness,
            special,
            special_defense,
            current_health: health,
            total_health: health,
            current_skill_points: skill_points,
            total_skill_points: skill_points,
        }
    }

    /// Base (unmodified) value of a stat.
    pub fn base(&self, stat: StatType) -> i32 {
        match stat {
            StatType::Strength => self.strength,
            StatType::Toughness => self.toughness,
            StatType::Special => self.special,
            StatType::SpecialDefense => self.special_defense,
        }
    }
}

/// Stat kinds that equipment can modify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatType {
    Strength,
    Toughness,
    Special,
    SpecialDefense,
}

/// Status effects currently active on an entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEffectComponent {
    pub active_effects: Vec<ActiveStatusEffect>,
}

/// A named status effect and how many stacks of it remain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveStatusEffect {
    pub name: String,
    pub stacks: u32,
}

impl StatusEffectComponent {
    /// Add stacks of a status, stacking onto an existing entry of the same name.
    pub fn inflict(&mut self, name: &str, stacks: u32) {
        match self.active_effects.iter_mut().find(|e| e.name == name) {
            Some(existing) => existing.stacks = existing.stacks.saturating_add(stacks),
            None => self.active_effects.push(ActiveStatusEffect {
                name: name.to_owned(),
                stacks,
            }),
        }
    }

    /// Stacks of `name` currently active; zero when absent.
    pub fn stacks(&self, name: &str) -> u32 {
        self.active_effects
            .iter()
            .find(|e| e.name == name)
            .map_or(0, |e| e.stacks)
    }

    /// Remove one stack from every effect and return the names of effects that ran out.
    pub fn tick(&mut self) -> Vec<String> {
        for effect in &mut self.active_effects {
            effect.stacks = effect.stacks.saturating_sub(1);
        }

        let mut expired = Vec::new();
        self.active_effects.retain(|e| {
            if e.stacks == 0 {
                expired.push(e.name.clone());
                false
            } else {
                true
            }
        });
        expired
    }
}
