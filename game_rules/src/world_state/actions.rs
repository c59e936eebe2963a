//! Actions run in response to game events, such as talking to an NPC.

use super::GameSwitches;

/// An executable effect on the world state.
pub trait Action: std::fmt::Debug {
    fn execute(&self, switches: &mut GameSwitches);
}

/// Sets a switch to a fixed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetSwitchAction {
    pub switch_name: String,
    pub value: bool,
}

impl SetSwitchAction {
    pub fn new(switch_name: impl Into<String>, value: bool) -> Self {
        Self {
            switch_name: switch_name.into(),
            value,
        }
    }
}

impl Action for SetSwitchAction {
    fn execute(&self, switches: &mut GameSwitches) {
        switches.set(self.switch_name.clone(), self.value);
    }
}
