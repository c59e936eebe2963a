//! Skill application across one or more targets.

use tracing::debug;

use super::attack::{boost_damage, is_super_effective, super_effective_marker};
use super::{calculate_base_damage, ensure_in_roster, InteractionMode};
use crate::config::RulesConfig;
use crate::entities::Combatant;
use crate::error::Result;
use crate::mechanics::{Skill, StatusCategory};
use crate::narrative::{coloured, colours, NarrativeSink};

/// What a skill did to one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillOutcome {
    pub target: usize,
    pub mode: InteractionMode,
    /// Health removed from the target; negative when healed.
    pub amount: i32,
    pub super_effective: bool,
    pub target_defeated: bool,
    /// Experience for defeating a monster target; zero otherwise.
    pub experience_reward: u32,
}

/// Applies skills from a user to a list of targets.
#[derive(Debug, Clone, Default)]
pub struct SkillApplier {
    config: RulesConfig,
}

impl SkillApplier {
    pub fn new(config: RulesConfig) -> Self {
        Self { config }
    }

    /// Apply `skill` from `user` to each of `targets`, in order, then charge its cost once.
    ///
    /// Each target is damaged or healed depending on whether it shares the
    /// user's allegiance.
    pub fn apply(
        &self,
        roster: &mut [Combatant],
        user: usize,
        skill: &Skill,
        targets: &[usize],
        out: &mut dyn NarrativeSink,
    ) -> Result<Vec<SkillOutcome>> {
        self.resolve(roster, user, skill, targets, None, out)
    }

    /// Like [`apply`](Self::apply), with the interaction mode chosen by the caller.
    pub fn apply_with_mode(
        &self,
        roster: &mut [Combatant],
        user: usize,
        skill: &Skill,
        targets: &[usize],
        mode: InteractionMode,
        out: &mut dyn NarrativeSink,
    ) -> Result<Vec<SkillOutcome>> {
        self.resolve(roster, user, skill, targets, Some(mode), out)
    }

    fn resolve(
        &self,
        roster: &mut [Combatant],
        user: usize,
        skill: &Skill,
        targets: &[usize],
        mode: Option<InteractionMode>,
        out: &mut dyn NarrativeSink,
    ) -> Result<Vec<SkillOutcome>> {
        ensure_in_roster(roster, user, "skill user")?;
        for &target in targets {
            ensure_in_roster(roster, target, "skill target")?;
        }

        let mut outcomes = Vec::with_capacity(targets.len());
        for &target in targets {
            let mode = mode.unwrap_or_else(|| {
                InteractionMode::for_allegiances(
                    roster[user].entity().allegiance,
                    roster[target].entity().allegiance,
                )
            });
            outcomes.push(self.apply_damage(roster, user, skill, target, mode, out));
            self.inflict_status(roster, user, skill, target, out);
        }

        roster[user].entity_mut().spend_skill_points(skill.cost);
        debug!(
            user = %roster[user].name(),
            skill = %skill.name,
            targets = targets.len(),
            "skill applied"
        );

        Ok(outcomes)
    }

    fn apply_damage(
        &self,
        roster: &mut [Combatant],
        user: usize,
        skill: &Skill,
        target: usize,
        mode: InteractionMode,
        out: &mut dyn NarrativeSink,
    ) -> SkillOutcome {
        let damage = match mode {
            InteractionMode::DamageTarget => {
                let base = calculate_base_damage(&roster[user], &roster[target]) as f32
                    * skill.damage_multiplier;
                match roster[target].as_monster() {
                    Some(monster) => boost_damage(
                        base,
                        skill.damage_type,
                        monster,
                        self.config.super_effective_multiplier,
                    ),
                    None => base,
                }
            }
            InteractionMode::HealTarget => {
                // Healing skills carry a negative multiplier.
                let power = roster[user].entity().stats.special as f32;
                let healing =
                    (power * -skill.damage_multiplier * self.config.healing_multiplier).ceil();
                -healing
            }
        };
        let super_effective = roster[target]
            .as_monster()
            .is_some_and(|monster| is_super_effective(skill.damage_type, monster));
        let reward = roster[target].as_monster().map_or(0, |m| m.experience_points);

        let amount = damage as i32;
        let user_name = roster[user].name().to_owned();
        let defender = roster[target].entity_mut();
        defender.damage(amount);

        let mut message = format!(
            "{user_name} uses {}!",
            coloured(colours::SKILL, format!("{} on {}", skill.name, defender.name))
        );
        if amount != 0 {
            if super_effective {
                message.push(' ');
                message.push_str(&super_effective_marker());
            }
            if amount > 0 {
                message.push_str(&format!(" {amount} damage!"));
            } else {
                message.push_str(&format!(" healed for {}!", coloured(colours::HEAL, -amount)));
            }
        }

        let target_defeated = defender.stats.current_health <= 0;
        if target_defeated {
            message.push_str(&format!(" {} DIES!", defender.name));
        }
        out.write_line(&message);

        SkillOutcome {
            target,
            mode,
            amount,
            super_effective,
            target_defeated,
            experience_reward: if target_defeated { reward } else { 0 },
        }
    }

    fn inflict_status(
        &self,
        roster: &mut [Combatant],
        user: usize,
        skill: &Skill,
        target: usize,
        out: &mut dyn NarrativeSink,
    ) {
        let Some(status) = skill.inflicted_status() else {
            return;
        };

        let user_name = roster[user].name().to_owned();
        let defender = roster[target].entity_mut();
        defender.inflict_status(status, skill.status_stacks);

        let colour = StatusCategory::for_status(status).colour();
        out.write_line(&format!(
            "{user_name} inflicts {} on {}!",
            coloured(colour, format!("{status} x{}", skill.status_stacks)),
            defender.name
        ));
    }
}
