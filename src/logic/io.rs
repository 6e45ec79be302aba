// Input/output logic for roster files.
use std::{fs, io::ErrorKind, path::Path};

use serde::Serialize;
use tracing::{debug, info};

use crate::{
    error::IoError,
    logic::{player::Player, team::Roster},
};

// Read a roster file. Every player is validated like a manual addition.
pub fn load(path: &Path) -> Result<Roster, IoError> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == ErrorKind::NotFound => return Err(IoError::NotFound(path.to_path_buf())),
        Err(e) => return Err(IoError::Read { path: path.to_path_buf(), source: e }),
    };

    let players: Vec<Player> = serde_json::from_str(&json)
        .map_err(|source| IoError::Parse { path: path.to_path_buf(), source })?;

    let roster = Roster::from_players(players)
        .map_err(|source| IoError::Invalid { path: path.to_path_buf(), source })?;

    info!("loaded {} players from {}", roster.len(), path.display());
    return Ok(roster);
}

// Like `load`, but a missing file is an empty roster.
pub fn load_or_default(path: &Path) -> Result<Roster, IoError> {
    match load(path) {
        Err(IoError::NotFound(_)) => {
            debug!("no roster at {}, starting empty", path.display());
            Ok(Roster::new())
        }
        result => result,
    }
}

// Write the roster, creating parent folders when needed.
pub fn save(path: &Path, roster: &Roster) -> Result<(), IoError> {
    let json = to_pretty_json(roster)?;

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| IoError::Write { path: parent.to_path_buf(), source })?;
    }

    fs::write(path, json).map_err(|source| IoError::Write { path: path.to_path_buf(), source })?;
    info!("saved {} players to {}", roster.len(), path.display());
    Ok(())
}

// Save a copy of the roster elsewhere. There must be something to save.
pub fn export(path: &Path, roster: &Roster) -> Result<(), IoError> {
    if roster.is_empty() {
        return Err(IoError::EmptyRoster);
    }

    save(path, roster)
}

// JSON with four-space indentation.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, IoError> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;

    return Ok(buffer);
}
