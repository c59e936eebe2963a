//! Character definitions.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use super::{Allegiance, Entity, StatType, StatsComponent};
use crate::error::Result;
use crate::mechanics::{Equipment, EquipmentSlot, Skill, SkillBook};
use crate::narrative::{coloured, colours, NarrativeSink};
use crate::progression::LevelManager;

/// Equipment strength counts double towards total strength.
pub const EQUIPMENT_STRENGTH_MULTIPLIER: i32 = 2;

/// A party member: an entity with equipment, experience and learned skills.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub entity: Entity,
    pub equipment: HashMap<EquipmentSlot, Equipment>,
    pub experience_points: u32,
    pub level: u32,
    pub skills: Vec<Skill>,
    /// (skill name, level at which it is learned).
    pub skills_learned_at_level: Vec<(String, u32)>,

    #[serde(skip)]
    is_defending: bool,
}

impl Character {
    /// Create a level 1 party member.
    pub fn new(name: impl Into<String>, stats: StatsComponent) -> Self {
        Self {
            entity: Entity::new(name, Allegiance::Party, stats),
            equipment: HashMap::new(),
            experience_points: 0,
            level: 1,
            skills: Vec::new(),
            skills_learned_at_level: Vec::new(),
            is_defending: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.entity.name
    }

    /// Base strength plus all equipment strength, doubled.
    pub fn total_strength(&self) -> i32 {
        self.entity.stats.strength
            + EQUIPMENT_STRENGTH_MULTIPLIER * self.equipment_modifier(StatType::Strength)
    }

    /// Base toughness plus all equipment toughness (weapon included).
    pub fn total_toughness(&self) -> i32 {
        self.entity.stats.toughness + self.equipment_modifier(StatType::Toughness)
    }

    fn equipment_modifier(&self, stat: StatType) -> i32 {
        self.equipment
            .values()
            .map(|item| item.get_stats_modifier(stat))
            .sum()
    }

    /// Equip an item in its slot, returning whatever was there before.
    pub fn equip(&mut self, item: Equipment) -> Option<Equipment> {
        self.equipment.insert(item.slot, item)
    }

    pub fn equipped_on(&self, slot: EquipmentSlot) -> Option<&Equipment> {
        self.equipment.get(&slot)
    }

    /// Case-insensitive check against known skills.
    pub fn knows_skill(&self, name: &str) -> bool {
        self.skills
            .iter()
            .any(|s| s.name.to_uppercase() == name.to_uppercase())
    }

    /// Award experience, level up if possible, and learn any newly unlocked skills.
    ///
    /// Dead characters gain nothing.
    pub fn gain_experience_points(
        &mut self,
        out: &mut dyn NarrativeSink,
        amount: u32,
        levels: &dyn LevelManager,
        skill_data: &SkillBook,
    ) -> Result<()> {
        if !self.entity.is_alive() {
            return Ok(());
        }

        self.experience_points = self.experience_points.saturating_add(amount);
        debug!(character = %self.entity.name, amount, total = self.experience_points, "experience gained");

        if levels.can_level_up(self) {
            levels.level_up(self, out);
        }

        let unlocked: Vec<String> = self
            .skills_learned_at_level
            .iter()
            .filter(|(_, learned_at)| *learned_at <= self.level)
            .map(|(name, _)| name.clone())
            .collect();

        for skill_name in unlocked {
            if self.knows_skill(&skill_name) {
                continue;
            }

            let skill = skill_data.get_skill(&skill_name)?.clone();
            self.skills.push(skill);
            out.write_line(&format!(
                "{} learned the skill {}!",
                self.entity.name,
                coloured(colours::HIGHLIGHT, &skill_name)
            ));
        }

        Ok(())
    }

    /// Restore health and skill points to their totals.
    pub fn full_heal(&mut self) {
        let stats = &mut self.entity.stats;
        stats.current_health = stats.total_health;
        stats.current_skill_points = stats.total_skill_points;
    }

    /// Bring a fallen character back with 1 health.
    pub fn revive(&mut self) {
        if self.entity.stats.current_health <= 0 {
            self.entity.stats.current_health = 1;
        }
    }

    pub fn defend(&mut self, out: &mut dyn NarrativeSink) {
        self.is_defending = true;
        out.write_line(&format!("{} defends!", self.entity.name));
    }

    pub fn is_defending(&self) -> bool {
        self.is_defending
    }

    pub fn on_round_complete(&mut self, out: &mut dyn NarrativeSink) {
        self.is_defending = false;
        self.entity.on_round_complete(out);
    }

    pub fn stats_summary(&self) -> String {
        let stats = &self.entity.stats;
        format!(
            "{} strength, {} toughness, {} special, {} special defense",
            stats.strength, stats.toughness, stats.special, stats.special_defense
        )
    }
}

impl std::fmt::Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stats = &self.entity.stats;
        write!(
            f,
            "{}: {}/{} health, {}/{} skill points",
            self.entity.name,
            stats.current_health,
            stats.total_health,
            stats.current_skill_points,
            stats.total_skill_points
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LevelingConfig;
    use crate::progression::ExperienceCurve;

    fn hero() -> Character {
        Character::new("Test Hero", StatsComponent::new(50, 10, 4, 6, 3, 20))
    }

    fn skill_data() -> SkillBook {
        [Skill::new("Heal", 3, -1.0), Skill::new("Fireball", 5, 1.5)]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_new_character() {
        let character = hero();
        assert_eq!(character.name(), "Test Hero");
        assert_eq!(character.level, 1);
        assert_eq!(character.entity.allegiance, Allegiance::Party);
        assert!(character.entity.is_alive());
    }

    #[test]
    fn test_totals_include_equipment() {
        let mut character = hero();
        character.equip(
            Equipment::new("Iron Sword", EquipmentSlot::Weapon)
                .with_modifier(StatType::Strength, 3)
                .with_modifier(StatType::Toughness, 1),
        );
        character.equip(Equipment::new("Leather", EquipmentSlot::Armour).with_modifier(StatType::Toughness, 2));

        assert_eq!(character.total_strength(), 10 + 2 * 3);
        assert_eq!(character.total_toughness(), 4 + 1 + 2);
    }

    #[test]
    fn test_equip_replaces_slot() {
        let mut character = hero();
        character.equip(Equipment::new("Stick", EquipmentSlot::Weapon).with_modifier(StatType::Strength, 1));
        let old = character.equip(Equipment::new("Axe", EquipmentSlot::Weapon).with_modifier(StatType::Strength, 4));

        assert_eq!(old.map(|e| e.name), Some("Stick".to_string()));
        assert_eq!(character.equipment.len(), 1);
        assert_eq!(character.total_strength(), 18);
    }

    #[test]
    fn test_knows_skill_ignores_case() {
        let mut character = hero();
        character.skills.push(Skill::new("Fireball", 5, 1.5));
        assert!(character.knows_skill("FIREBALL"));
        assert!(!character.knows_skill("Heal"));
    }

    #[test]
    fn test_dead_characters_gain_no_experience() {
        let mut character = hero();
        character.entity.stats.current_health = 0;
        let mut out: Vec<String> = Vec::new();
        let curve = ExperienceCurve::new(LevelingConfig::default());

        character
            .gain_experience_points(&mut out, 100, &curve, &skill_data())
            .unwrap();

        assert_eq!(character.experience_points, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_level_up_teaches_unlocked_skills_once() {
        let mut character = hero();
        character.skills_learned_at_level = vec![("Heal".to_string(), 1), ("Fireball".to_string(), 2)];
        let mut out: Vec<String> = Vec::new();
        let curve = ExperienceCurve::new(LevelingConfig::default());
        let data = skill_data();

        character.gain_experience_points(&mut out, 10, &curve, &data).unwrap();
        assert_eq!(character.level, 1);
        assert!(character.knows_skill("Heal"));
        assert!(!character.knows_skill("Fireball"));

        character.gain_experience_points(&mut out, 40, &curve, &data).unwrap();
        assert_eq!(character.level, 2);
        assert!(character.knows_skill("Fireball"));

        character.gain_experience_points(&mut out, 1, &curve, &data).unwrap();
        assert_eq!(character.skills.len(), 2);

        let learned: Vec<_> = out.iter().filter(|l| l.contains("learned the skill")).collect();
        assert_eq!(learned.len(), 2);
    }

    #[test]
    fn test_experience_saturates_instead_of_overflowing() {
        let mut character = hero();
        let mut out: Vec<String> = Vec::new();
        let curve = ExperienceCurve::new(LevelingConfig::default());
        let data = skill_data();

        character.gain_experience_points(&mut out, 10, &curve, &data).unwrap();
        character.gain_experience_points(&mut out, u32::MAX, &curve, &data).unwrap();
        assert_eq!(character.experience_points, u32::MAX);
        assert_eq!(character.level, 2);

        character.level = 700;
        character.gain_experience_points(&mut out, 1, &curve, &data).unwrap();
        assert_eq!(character.level, 700);
    }

    #[test]
    fn test_unknown_unlock_skill_is_an_error() {
        let mut character = hero();
        character.skills_learned_at_level = vec![("Meteor".to_string(), 1)];
        let mut out: Vec<String> = Vec::new();
        let curve = ExperienceCurve::new(LevelingConfig::default());

        let err = character
            .gain_experience_points(&mut out, 1, &curve, &skill_data())
            .unwrap_err();
        assert!(matches!(err, crate::RulesError::SkillNotFound(_)));
    }

    #[test]
    fn test_revive_and_full_heal() {
        let mut character = hero();
        character.entity.damage(100);
        character.revive();
        assert_eq!(character.entity.stats.current_health, 1);

        character.entity.spend_skill_points(5);
        character.full_heal();
        assert_eq!(character.entity.stats.current_health, 50);
        assert_eq!(character.entity.stats.current_skill_points, 20);
    }

    #[test]
    fn test_defend_lasts_one_round() {
        let mut character = hero();
        let mut out: Vec<String> = Vec::new();

        character.defend(&mut out);
        assert!(character.is_defending());
        character.on_round_complete(&mut out);
        assert!(!character.is_defending());
        assert_eq!(out, vec!["Test Hero defends!"]);
    }

    #[test]
    fn test_display_and_summary() {
        let character = hero();
        assert_eq!(character.to_string(), "Test Hero: 50/50 health, 20/20 skill points");
        assert_eq!(
            character.stats_summary(),
            "10 strength, 4 toughness, 6 special, 3 special defense"
        );
    }
}
