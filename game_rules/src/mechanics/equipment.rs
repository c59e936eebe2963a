//! Equippable items.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{DamageType, EquipmentSlot};
use crate::entities::StatType;

/// An item that occupies one equipment slot and modifies its wearer's stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub name: String,
    pub slot: EquipmentSlot,
    /// Weapons may deal a typed damage; other slots normally leave this empty.
    #[serde(default)]
    pub damage_type: Option<DamageType>,
    #[serde(default)]
    pub stats_modifiers: HashMap<StatType, i32>,
}

impl Equipment {
    pub fn new(name: impl Into<String>, slot: EquipmentSlot) -> Self {
        Self {
            name: name.into(),
            slot,
            damage_type: None,
            stats_modifiers: HashMap::new(),
        }
    }

    pub fn with_damage_type(mut self, damage_type: DamageType) -> Self {
        self.damage_type = Some(damage_type);
        self
    }

    pub fn with_modifier(mut self, stat: StatType, amount: i32) -> Self {
        self.stats_modifiers.insert(stat, amount);
        self
    }

    /// Modifier this item applies to `stat`; zero when it doesn't touch it.
    pub fn get_stats_modifier(&self, stat: StatType) -> i32 {
        self.stats_modifiers.get(&stat).copied().unwrap_or(0)
    }
}
