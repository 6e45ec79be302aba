pub mod fit;
pub mod role;
pub mod skill;
mod random;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{error::RosterError, logic::types::{Age, SkillValue}};
use self::skill::SkillId;

#[derive(Debug)]
#[derive(Clone, PartialEq)]
#[derive(Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub age: Age,

    // Skills missing from the map count as 0.
    #[serde(default)]
    pub skills: BTreeMap<SkillId, SkillValue>,
}

impl Player {
    pub const MIN_AGE: Age = 16;
    pub const MAX_AGE: Age = 35;

    // Skill value for a freshly created player.
    pub const DEFAULT_SKILL: SkillValue = 50;

    // Create a player with every skill at the default value.
    pub fn build(name: &str, age: Age) -> Self {
        Self {
            name: name.trim().to_string(),
            age,
            skills: SkillId::ALL.into_iter().map(|skill| (skill, Self::DEFAULT_SKILL)).collect(),
        }
    }

    pub fn with_skill(mut self, skill: SkillId, value: SkillValue) -> Self {
        self.set_skill(skill, value);
        return self;
    }

    pub fn set_skill(&mut self, skill: SkillId, value: SkillValue) {
        self.skills.insert(skill, value);
    }

    pub fn skill(&self, skill: SkillId) -> SkillValue {
        self.skills.get(&skill).copied().unwrap_or(0)
    }

    // Make sure the player does not contain illegal values.
    // Name uniqueness is the roster's business.
    pub fn validate(&self) -> Result<(), RosterError> {
        if self.name.trim().is_empty() {
            return Err(RosterError::EmptyName);
        }

        if !(Self::MIN_AGE..=Self::MAX_AGE).contains(&self.age) {
            return Err(RosterError::AgeOutOfRange {
                age: self.age,
                min: Self::MIN_AGE,
                max: Self::MAX_AGE,
            });
        }

        for (skill, value) in self.skills.iter() {
            if *value > SkillId::MAX_VALUE {
                return Err(RosterError::SkillOutOfRange {
                    skill: *skill,
                    value: *value,
                    max: SkillId::MAX_VALUE,
                });
            }
        }

        Ok(())
    }
}
