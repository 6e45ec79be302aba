// Error types for roster handling, file I/O and configuration.
use std::path::PathBuf;

use thiserror::Error;

use crate::logic::{player::skill::SkillId, types::{Age, SkillValue}};

// Errors from editing or evaluating a roster.
#[derive(Error, Debug)]
#[derive(PartialEq)]
pub enum RosterError {
    #[error("player name is required")]
    EmptyName,

    #[error("player age must be between {min} and {max}, got {age}")]
    AgeOutOfRange { age: Age, min: Age, max: Age },

    #[error("{skill} must be between 0 and {max}, got {value}")]
    SkillOutOfRange { skill: SkillId, value: SkillValue, max: SkillValue },

    #[error("unknown skill: {0}")]
    UnknownSkill(String),

    #[error("player name already exists: {0}")]
    DuplicateName(String),

    #[error("no player named {0}")]
    UnknownPlayer(String),

    #[error("could not find a free name for a random player")]
    NamesExhausted,

    #[error("the roster has no players")]
    EmptyRoster,

    #[error("exhaustive search supports at most {limit} players, the roster has {count}")]
    TooManyForExhaustive { count: usize, limit: usize },
}

// Errors from reading or writing roster files.
#[derive(Error, Debug)]
pub enum IoError {
    #[error("roster file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: std::io::Error },

    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: std::io::Error },

    #[error("invalid roster JSON in {}: {source}", path.display())]
    Parse { path: PathBuf, source: serde_json::Error },

    #[error("invalid roster in {}: {source}", path.display())]
    Invalid { path: PathBuf, source: RosterError },

    #[error("failed to serialize roster: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("no players to save")]
    EmptyRoster,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read { path: PathBuf, source: std::io::Error },

    #[error("invalid config {}: {source}", path.display())]
    Parse { path: PathBuf, source: toml::de::Error },

    #[error("invalid config {}: recommendation_limit must be at least 1", path.display())]
    ZeroLimit { path: PathBuf },
}

// Top-level error for the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
