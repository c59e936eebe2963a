//! Basic melee attacks.

use tracing::{debug, warn};

use super::ensure_in_roster;
use crate::config::RulesConfig;
use crate::entities::{Combatant, Monster};
use crate::error::{Result, RulesError};
use crate::mechanics::{DamageType, EquipmentSlot};
use crate::narrative::{coloured, colours, NarrativeSink};

/// Damage multiplier for a super effective hit under the default rules.
pub const SUPER_EFFECTIVE_MULTIPLIER: f32 = 2.0;

/// Damage the attacker inflicts on the defender before any type bonus.
///
/// Characters use equipment-inclusive totals; never negative.
pub fn calculate_base_damage(attacker: &Combatant, defender: &Combatant) -> i32 {
    (attacker.effective_strength() - defender.effective_toughness()).max(0)
}

/// True when the attack's damage type is the monster's weakness.
/// Untyped attacks are never super effective.
pub fn is_super_effective(damage_type: Option<DamageType>, target: &Monster) -> bool {
    match (damage_type, target.weakness) {
        (Some(attack), Some(weakness)) => attack == weakness,
        _ => false,
    }
}

/// Double `damage` when the damage type matches the monster's weakness.
pub fn boost_damage_if_damage_types_match(
    damage: f32,
    damage_type: Option<DamageType>,
    target: &Monster,
) -> f32 {
    boost_damage(damage, damage_type, target, SUPER_EFFECTIVE_MULTIPLIER)
}

pub(crate) fn boost_damage(
    damage: f32,
    damage_type: Option<DamageType>,
    target: &Monster,
    multiplier: f32,
) -> f32 {
    if is_super_effective(damage_type, target) {
        damage * multiplier
    } else {
        damage
    }
}

pub(crate) fn super_effective_marker() -> String {
    coloured(colours::SUPER_EFFECTIVE, "Super effective!")
}

/// Result of a resolved attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackOutcome {
    pub damage: i32,
    pub super_effective: bool,
    pub target_defeated: bool,
    /// The monster's experience points when this attack defeated it; zero otherwise.
    pub experience_reward: u32,
}

/// Resolves basic attacks from characters against monsters.
#[derive(Debug, Clone, Default)]
pub struct AttackExecutor {
    config: RulesConfig,
}

impl AttackExecutor {
    pub fn new(config: RulesConfig) -> Self {
        Self { config }
    }

    /// A character at `attacker` attacks the monster at `target`.
    ///
    /// Accounts for equipment and the weapon's damage type against the
    /// monster's weakness. Only the target is mutated.
    pub fn attack(
        &self,
        roster: &mut [Combatant],
        attacker: usize,
        target: usize,
        out: &mut dyn NarrativeSink,
    ) -> Result<AttackOutcome> {
        ensure_in_roster(roster, attacker, "attacker")?;
        ensure_in_roster(roster, target, "target")?;

        let Some(character) = roster[attacker].as_character() else {
            warn!(attacker, "attack rejected: attacker is not a character");
            return Err(RulesError::invalid(format!(
                "{} cannot make a basic attack",
                roster[attacker].name()
            )));
        };
        let Some(monster) = roster[target].as_monster() else {
            warn!(target, "attack rejected: target is not a monster");
            return Err(RulesError::invalid(format!(
                "{} is not a monster",
                roster[target].name()
            )));
        };

        let weapon_type = character
            .equipped_on(EquipmentSlot::Weapon)
            .and_then(|weapon| weapon.damage_type);
        let base = calculate_base_damage(&roster[attacker], &roster[target]);
        let damage = boost_damage(
            base as f32,
            weapon_type,
            monster,
            self.config.super_effective_multiplier,
        );
        let super_effective = is_super_effective(weapon_type, monster);
        let reward = monster.experience_points;

        let mut message = format!("{} attacks {}! ", character.name(), monster.entity.name);
        let dealt = damage as i32;

        let defender = roster[target].entity_mut();
        defender.damage(dealt);

        let amount = if dealt <= 0 {
            "NO".to_string()
        } else {
            dealt.to_string()
        };
        message.push_str(&format!("{} damage!", coloured(colours::HIGHLIGHT, amount)));
        if super_effective {
            message.push(' ');
            message.push_str(&super_effective_marker());
        }

        let target_defeated = defender.stats.current_health <= 0;
        if target_defeated {
            message.push_str(&format!(" {} DIES!", defender.name));
        }

        debug!(attacker, target, base, dealt, super_effective, "attack resolved");
        out.write_line(&message);

        Ok(AttackOutcome {
            damage: dealt,
            super_effective,
            target_defeated,
            experience_reward: if target_defeated { reward } else { 0 },
        })
    }
}
