//! World state: the switch registry that gates quests and dialogue, and the
//! actions that write to it.

mod actions;

pub use actions::*;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use crate::error::{Result, RulesError};

/// Named boolean flags describing the state of the world.
///
/// A switch that was never set is distinct from a switch set to `false`:
/// [`has`](Self::has) tells them apart and [`get`](Self::get) fails for the former.
/// One registry is owned per game session and passed by reference to whatever
/// reads or writes it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSwitches {
    switches: HashMap<String, bool>,
}

impl GameSwitches {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has(&self, name: &str) -> bool {
        self.switches.contains_key(name)
    }

    /// Read a switch. Fails with `SwitchNotFound` if it was never set.
    pub fn get(&self, name: &str) -> Result<bool> {
        self.switches
            .get(name)
            .copied()
            .ok_or_else(|| RulesError::SwitchNotFound(name.to_owned()))
    }

    pub fn set(&mut self, name: impl Into<String>, value: bool) {
        let name = name.into();
        debug!(switch = %name, value, "switch set");
        self.switches.insert(name, value);
    }

    /// True only when the switch exists and is set to `true`.
    pub fn is_on(&self, name: &str) -> bool {
        self.has(name) && matches!(self.get(name), Ok(true))
    }

    /// Forget every switch.
    pub fn reset(&mut self) {
        self.switches.clear();
    }

    pub fn len(&self) -> usize {
        self.switches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.switches.is_empty()
    }
}

/// Switch recording that the player has talked to a quest giver.
pub fn talked_to_switch_for(npc_name: &str) -> String {
    format!("TalkedTo_{npc_name}")
}
