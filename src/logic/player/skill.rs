use std::{fmt, str::FromStr};

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::{error::RosterError, logic::types::{SkillValue, SKILL_COUNT}};

// Skill data.
#[derive(Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(Debug)]
#[derive(Clone, Copy)]
#[derive(Serialize)]
pub enum SkillId {
    Accuracy,
    Bravery,
    Composure,
    Decision,
    Determination,
    Leadership,
    Stamina,
    Vision,
    Anticipation,
    Communication,
    Concentration,
    Dexterity,
    Flair,
    Memory,
    Quickness,
    Teamwork,
}

impl SkillId {
    pub const ALL: [Self; SKILL_COUNT] = [
        Self::Accuracy,
        Self::Bravery,
        Self::Composure,
        Self::Decision,
        Self::Determination,
        Self::Leadership,
        Self::Stamina,
        Self::Vision,
        Self::Anticipation,
        Self::Communication,
        Self::Concentration,
        Self::Dexterity,
        Self::Flair,
        Self::Memory,
        Self::Quickness,
        Self::Teamwork,
    ];

    pub const MAX_VALUE: SkillValue = 100;

    pub fn name(self) -> &'static str {
        match self {
            Self::Accuracy => "Accuracy",
            Self::Bravery => "Bravery",
            Self::Composure => "Composure",
            Self::Decision => "Decision",
            Self::Determination => "Determination",
            Self::Leadership => "Leadership",
            Self::Stamina => "Stamina",
            Self::Vision => "Vision",
            Self::Anticipation => "Anticipation",
            Self::Communication => "Communication",
            Self::Concentration => "Concentration",
            Self::Dexterity => "Dexterity",
            Self::Flair => "Flair",
            Self::Memory => "Memory",
            Self::Quickness => "Quickness",
            Self::Teamwork => "Teamwork",
        }
    }
}

impl fmt::Display for SkillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for SkillId {
    type Err = RosterError;

    // Skill names are matched case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|skill| skill.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| RosterError::UnknownSkill(wanted.to_string()))
    }
}

// Roster files may spell skill names in any case, like the command line.
impl<'de> Deserialize<'de> for SkillId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(de::Error::custom)
    }
}

// Flatten high skill values so that stacking one skill pays off less.
pub fn diminishing_returns(value: SkillValue) -> f64 {
    let value = f64::from(value);
    if value <= 70.0 {
        return value;
    }
    else if value <= 85.0 {
        return 70.0 + (value - 70.0) * 0.8;
    }
    return 82.0 + (value - 85.0) * 0.6;
}

// Rough quality band of a single skill value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillGrade {
    Strong,
    Average,
    Weak,
}

impl SkillGrade {
    pub fn from_value(value: SkillValue) -> Self {
        match value {
            80.. => Self::Strong,
            60..=79 => Self::Average,
            _ => Self::Weak,
        }
    }
}

impl fmt::Display for SkillGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Strong => "strong",
            Self::Average => "average",
            Self::Weak => "weak",
        };
        f.pad(text)
    }
}

// Parse a `Skill=Value` pair.
pub fn parse_assignment(text: &str) -> Result<(SkillId, SkillValue), String> {
    let Some((name, value)) = text.split_once('=') else {
        return Err(format!("expected SKILL=VALUE, got '{text}'"));
    };

    let skill = SkillId::from_str(name).map_err(|e| e.to_string())?;
    let value: SkillValue = value.trim().parse().map_err(|e| format!("invalid value for {skill}: {e}"))?;
    if value > SkillId::MAX_VALUE {
        return Err(RosterError::SkillOutOfRange { skill, value, max: SkillId::MAX_VALUE }.to_string());
    }

    Ok((skill, value))
}
