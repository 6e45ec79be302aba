// Configuration and the working state of a session.
use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::debug;

use crate::{
    error::{ConfigError, IoError},
    logic::{
        io,
        team::{ai, lineup::Strategy, Roster},
    },
};

pub const DEFAULT_CONFIG_FILE: &str = "moba-team-manager.toml";
pub const DEFAULT_ROSTER_FILE: &str = "team.json";

#[derive(Debug, Clone, PartialEq)]
#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    // Where the working roster lives.
    pub roster_path: PathBuf,

    // Default lineup strategy for evaluations.
    pub strategy: Strategy,

    pub recommendation_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roster_path: PathBuf::from(DEFAULT_ROSTER_FILE),
            strategy: Strategy::default(),
            recommendation_limit: ai::DEFAULT_LIMIT,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        let mut config: Self =
            toml::from_str(&text).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;

        if config.recommendation_limit == 0 {
            return Err(ConfigError::ZeroLimit { path: path.to_path_buf() });
        }

        // Relative roster paths are relative to the config file.
        if let Some(folder) = path.parent() {
            config.roster_path = folder.join(&config.roster_path);
        }

        debug!("loaded config from {}", path.display());
        return Ok(config);
    }

    // An explicit path must exist. Otherwise the default file is used if present.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let default_path = Path::new(DEFAULT_CONFIG_FILE);
        match default_path.is_file() {
            true => Self::load(default_path),
            false => Ok(Self::default()),
        }
    }
}

// For keeping track of stuff.
pub struct AppData {
    pub config: Config,
    pub roster_path: PathBuf,
    pub roster: Roster,
}

impl AppData {
    // Open the working roster. A path given on the command line beats the config.
    pub fn build(config: Config, roster_path: Option<PathBuf>) -> Result<Self, IoError> {
        let roster_path = roster_path.unwrap_or_else(|| config.roster_path.clone());
        let roster = io::load_or_default(&roster_path)?;

        Ok(Self { config, roster_path, roster })
    }

    pub fn save(&self) -> Result<(), IoError> {
        io::save(&self.roster_path, &self.roster)
    }
}
