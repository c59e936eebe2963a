//! NPC dialogue state machines.

use game_rules::{talked_to_switch_for, Action, GameSwitches, SetSwitchAction};
use tracing::{debug, trace};

use crate::error::{DialogueError, Result};

/// Whether an NPC has been spoken to yet. Moves one way only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TalkState {
    NotYetSpoken,
    Spoken,
}

/// Where an NPC's next line comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogueSource {
    /// Always the NPC's own texts.
    Plain,
    /// Pre-quest texts until `quest_complete_switch` is on, then `post_quest_texts`.
    Quest {
        post_quest_texts: Vec<String>,
        quest_complete_switch: String,
    },
}

/// A non-player character that can be talked to.
#[derive(Debug)]
pub struct Npc {
    name: String,
    texts: Vec<String>,
    cursor: usize,
    on_talk: Option<Box<dyn Action>>,
    talk_state: TalkState,
    source: DialogueSource,
}

impl Npc {
    /// An NPC that cycles through `texts`.
    pub fn new(name: impl Into<String>, texts: Vec<String>) -> Result<Self> {
        let name = name.into();
        if texts.is_empty() {
            return Err(DialogueError::EmptyTexts { npc: name });
        }

        Ok(Self {
            name,
            texts,
            cursor: 0,
            on_talk: None,
            talk_state: TalkState::NotYetSpoken,
            source: DialogueSource::Plain,
        })
    }

    /// An NPC that speaks `texts` until the switch named `quest_complete_switch`
    /// is on, and `post_quest_texts` after.
    ///
    /// Talking to a quest giver for the first time sets its "talked to" switch
    /// (see [`talked_to_switch_for`]) unless another action is bound with
    /// [`with_on_talk`](Self::with_on_talk).
    pub fn quest_giver(
        name: impl Into<String>,
        texts: Vec<String>,
        post_quest_texts: Vec<String>,
        quest_complete_switch: impl Into<String>,
    ) -> Result<Self> {
        let mut npc = Self::new(name, texts)?;
        if post_quest_texts.is_empty() {
            return Err(DialogueError::EmptyPostQuestTexts { npc: npc.name });
        }

        npc.on_talk = Some(Box::new(SetSwitchAction::new(
            talked_to_switch_for(&npc.name),
            true,
        )));
        npc.source = DialogueSource::Quest {
            post_quest_texts,
            quest_complete_switch: quest_complete_switch.into(),
        };
        Ok(npc)
    }

    /// Bind the action executed the first time this NPC speaks.
    pub fn with_on_talk(mut self, action: impl Action + 'static) -> Self {
        self.on_talk = Some(Box::new(action));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    pub fn talk_state(&self) -> TalkState {
        self.talk_state
    }

    pub fn source(&self) -> &DialogueSource {
        &self.source
    }

    /// Replace the NPC's texts and start again from the first one.
    pub fn set_texts(&mut self, texts: Vec<String>) -> Result<()> {
        if texts.is_empty() {
            return Err(DialogueError::EmptyTexts {
                npc: self.name.clone(),
            });
        }
        self.texts = texts;
        self.cursor = 0;
        Ok(())
    }

    /// Return the next line.
    ///
    /// Lines wrap around. A quest giver whose quest is complete reads from its
    /// post-quest texts and skips the one-shot action.
    pub fn speak(&mut self, switches: &mut GameSwitches) -> String {
        if let DialogueSource::Quest {
            post_quest_texts,
            quest_complete_switch,
        } = &self.source
        {
            if switches.is_on(quest_complete_switch) {
                trace!(npc = %self.name, "speaking post-quest text");
                return next_line(post_quest_texts, &mut self.cursor);
            }
        }

        if self.talk_state == TalkState::NotYetSpoken {
            self.talk_state = TalkState::Spoken;
            if let Some(action) = &self.on_talk {
                debug!(npc = %self.name, ?action, "running on-talk action");
                action.execute(switches);
            }
        }

        next_line(&self.texts, &mut self.cursor)
    }
}

fn next_line(texts: &[String], cursor: &mut usize) -> String {
    let index = *cursor % texts.len();
    *cursor = (index + 1) % texts.len();
    texts[index].clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Debug)]
    struct CountingAction {
        count: Rc<Cell<u32>>,
    }

    impl Action for CountingAction {
        fn execute(&self, _switches: &mut GameSwitches) {
            self.count.set(self.count.get() + 1);
        }
    }

    fn lines(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_speak_returns_the_only_message() {
        let mut switches = GameSwitches::new();
        let mut npc = Npc::new("Overlord 1", lines(&["Spawn more overlords!"])).unwrap();

        for _ in 0..10 {
            assert_eq!(npc.speak(&mut switches), "Spawn more overlords!");
        }
    }

    #[test]
    fn test_speak_cycles_through_messages() {
        let mut switches = GameSwitches::new();
        let expected = lines(&["Message 1", "Message 2", "Message 3"]);
        let mut npc = Npc::new("Speaker for the Speakers", expected.clone()).unwrap();

        let spoken: Vec<String> = (0..6).map(|_| npc.speak(&mut switches)).collect();

        assert_eq!(spoken[..3], expected[..]);
        assert_eq!(spoken[3..], expected[..]);
    }

    #[test]
    fn test_empty_texts_rejected() {
        assert_eq!(
            Npc::new("Mute", Vec::new()).unwrap_err(),
            DialogueError::EmptyTexts { npc: "Mute".to_string() }
        );

        let mut npc = Npc::new("Talker", lines(&["Hi"])).unwrap();
        assert!(npc.set_texts(Vec::new()).is_err());
        assert_eq!(npc.texts(), ["Hi".to_string()]);
    }

    #[test]
    fn test_set_texts_restarts_cursor() {
        let mut switches = GameSwitches::new();
        let mut npc = Npc::new("Talker", lines(&["A", "B", "C"])).unwrap();
        npc.speak(&mut switches);
        npc.speak(&mut switches);

        npc.set_texts(lines(&["X", "Y"])).unwrap();

        assert_eq!(npc.speak(&mut switches), "X");
        assert_eq!(npc.speak(&mut switches), "Y");
    }

    #[test]
    fn test_speak_executes_on_talk_action_on_first_call() {
        let mut switches = GameSwitches::new();
        let mut npc = Npc::new("Test NPC", lines(&["Hello"]))
            .unwrap()
            .with_on_talk(SetSwitchAction::new("TestSwitch", true));
        assert_eq!(npc.talk_state(), TalkState::NotYetSpoken);

        npc.speak(&mut switches);

        assert_eq!(npc.talk_state(), TalkState::Spoken);
        assert!(switches.has("TestSwitch"));
        assert!(switches.get("TestSwitch").unwrap());
    }

    #[test]
    fn test_speak_executes_on_talk_action_only_once() {
        let mut switches = GameSwitches::new();
        let count = Rc::new(Cell::new(0));
        let mut npc = Npc::new("Test NPC", lines(&["Hello", "Hi"]))
            .unwrap()
            .with_on_talk(CountingAction { count: Rc::clone(&count) });

        npc.speak(&mut switches);
        for _ in 0..10 {
            npc.speak(&mut switches);
            switches.reset();
        }

        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_quest_giver_auto_binds_talked_to_switch() {
        let mut switches = GameSwitches::new();
        let mut giver = Npc::quest_giver(
            "Elder",
            lines(&["Slay the wolf."]),
            lines(&["Thank you!"]),
            "WolfSlain",
        )
        .unwrap();

        assert!(!switches.has("TalkedTo_Elder"));
        giver.speak(&mut switches);
        assert!(switches.is_on("TalkedTo_Elder"));
    }

    #[test]
    fn test_quest_giver_explicit_on_talk_replaces_default() {
        let mut switches = GameSwitches::new();
        let mut giver = Npc::quest_giver("Elder", lines(&["Go."]), lines(&["Done."]), "WolfSlain")
            .unwrap()
            .with_on_talk(SetSwitchAction::new("MetElder", true));

        giver.speak(&mut switches);

        assert!(switches.is_on("MetElder"));
        assert!(!switches.has("TalkedTo_Elder"));
    }

    #[test]
    fn test_quest_giver_switches_texts_when_quest_completes() {
        let mut switches = GameSwitches::new();
        let count = Rc::new(Cell::new(0));
        let mut giver = Npc::quest_giver(
            "Elder",
            lines(&["Slay the wolf.", "Hurry!"]),
            lines(&["Thank you!", "The village is safe."]),
            "WolfSlain",
        )
        .unwrap()
        .with_on_talk(CountingAction { count: Rc::clone(&count) });

        assert_eq!(giver.speak(&mut switches), "Slay the wolf.");

        switches.set("WolfSlain", false);
        assert_eq!(giver.speak(&mut switches), "Hurry!");

        switches.set("WolfSlain", true);
        assert_eq!(giver.speak(&mut switches), "Thank you!");
        assert_eq!(giver.speak(&mut switches), "The village is safe.");
        assert_eq!(giver.speak(&mut switches), "Thank you!");

        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_post_quest_branch_never_runs_on_talk() {
        let mut switches = GameSwitches::new();
        switches.set("WolfSlain", true);
        let count = Rc::new(Cell::new(0));
        let mut giver = Npc::quest_giver("Elder", lines(&["Go."]), lines(&["Done."]), "WolfSlain")
            .unwrap()
            .with_on_talk(CountingAction { count: Rc::clone(&count) });

        for _ in 0..5 {
            assert_eq!(giver.speak(&mut switches), "Done.");
        }

        assert_eq!(count.get(), 0);
        assert_eq!(giver.talk_state(), TalkState::NotYetSpoken);
    }

    #[test]
    fn test_cursor_stays_in_range_of_shorter_post_quest_texts() {
        let mut switches = GameSwitches::new();
        let mut giver = Npc::quest_giver(
            "Elder",
            lines(&["One", "Two", "Three"]),
            lines(&["Done."]),
            "WolfSlain",
        )
        .unwrap();
        giver.speak(&mut switches);
        giver.speak(&mut switches);

        switches.set("WolfSlain", true);

        assert_eq!(giver.speak(&mut switches), "Done.");
        assert_eq!(giver.speak(&mut switches), "Done.");
    }

    #[test]
    fn test_quest_giver_requires_post_quest_texts() {
        let err = Npc::quest_giver("Elder", lines(&["Go."]), Vec::new(), "WolfSlain").unwrap_err();
        assert_eq!(err, DialogueError::EmptyPostQuestTexts { npc: "Elder".to_string() });
    }
}
