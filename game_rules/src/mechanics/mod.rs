//! Game mechanics: damage types, equipment slots, status categories, skills and equipment.

mod equipment;
mod skill;

pub use equipment::*;
pub use skill::*;

use serde::{Deserialize, Serialize};

use crate::narrative::colours;

/// Elemental and physical damage types.
///
/// Weapons and skills may carry one; monsters may be weak to one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageType {
    // Physical
    Slashing,
    Piercing,
    Bludgeoning,

    // Elemental
    Fire,
    Ice,
    Lightning,
    Earth,
    Water,

    // Magical
    Holy,
    Dark,
    Poison,
}

/// Equipment slots for characters. A character holds at most one item per slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentSlot {
    Weapon,
    Helmet,
    Armour,
}

/// Colour category for status effect announcements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    Fire,
    Poison,
    Paralyze,
    Other,
}

impl StatusCategory {
    /// Map a status name to its category. Names are matched exactly.
    pub fn for_status(status: &str) -> Self {
        match status {
            "Burn" => StatusCategory::Fire,
            "Poison" => StatusCategory::Poison,
            "Paralyze" => StatusCategory::Paralyze,
            _ => StatusCategory::Other,
        }
    }

    pub fn colour(&self) -> &'static str {
        match self {
            StatusCategory::Fire => colours::FIRE,
            StatusCategory::Poison => colours::POISON,
            StatusCategory::Paralyze => colours::PARALYZE,
            StatusCategory::Other => colours::HIGHLIGHT,
        }
    }
}
