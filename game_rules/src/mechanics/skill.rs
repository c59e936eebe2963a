//! Skill definitions and the skill data lookup.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::DamageType;
use crate::error::{Result, RulesError};

/// An immutable skill definition.
///
/// A negative `damage_multiplier` marks a healing skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub cost: i32,
    pub damage_multiplier: f32,
    #[serde(default)]
    pub damage_type: Option<DamageType>,
    #[serde(default)]
    pub status_inflicted: Option<String>,
    #[serde(default)]
    pub status_stacks: u32,
}

impl Skill {
    pub fn new(name: impl Into<String>, cost: i32, damage_multiplier: f32) -> Self {
        Self {
            name: name.into(),
            cost,
            damage_multiplier,
            damage_type: None,
            status_inflicted: None,
            status_stacks: 0,
        }
    }

    pub fn with_damage_type(mut self, damage_type: DamageType) -> Self {
        self.damage_type = Some(damage_type);
        self
    }

    pub fn with_status(mut self, status: impl Into<String>, stacks: u32) -> Self {
        self.status_inflicted = Some(status.into());
        self.status_stacks = stacks;
        self
    }

    /// The status this skill inflicts, if it names a non-blank one.
    pub fn inflicted_status(&self) -> Option<&str> {
        self.status_inflicted
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

#[derive(Deserialize)]
struct SkillFile {
    #[serde(default)]
    skills: Vec<Skill>,
}

/// Lookup of skill definitions by name.
#[derive(Debug, Clone, Default)]
pub struct SkillBook {
    skills: HashMap<String, Skill>,
}

impl SkillBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load skills from a TOML document of `[[skills]]` tables.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let file: SkillFile = toml::from_str(source)?;
        Ok(file.skills.into_iter().collect())
    }

    /// Load skills from a JSON array of skill objects.
    pub fn from_json_str(source: &str) -> Result<Self> {
        let skills: Vec<Skill> = serde_json::from_str(source)?;
        Ok(skills.into_iter().collect())
    }

    /// Add a skill, replacing any existing skill with the same name.
    pub fn insert(&mut self, skill: Skill) -> Option<Skill> {
        self.skills.insert(skill.name.clone(), skill)
    }

    /// Get a skill by exact name.
    pub fn get_skill(&self, name: &str) -> Result<&Skill> {
        self.skills
            .get(name)
            .ok_or_else(|| RulesError::SkillNotFound(name.to_owned()))
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

impl FromIterator<Skill> for SkillBook {
    fn from_iter<I: IntoIterator<Item = Skill>>(iter: I) -> Self {
        let mut book = SkillBook::new();
        for skill in iter {
            book.insert(skill);
        }
        book
    }
}
