// Roster editing and viewing commands.
use std::path::Path;

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::info;

use crate::{
    commands::emit,
    error::{Result, RosterError},
    logic::{
        app_data::AppData,
        io,
        player::{skill::SkillId, Player},
        team::Roster,
        types::{Age, SkillValue},
    },
    packages::{
        player_screen::PlayerScreen, roles_screen::RolesScreen, roster_screen::RosterScreen, StatusMessage,
    },
};

// Add new player to roster.
pub fn add(data: &mut AppData, name: &str, age: Age, skills: &[(SkillId, SkillValue)], json: bool) -> Result<()> {
    let mut player = Player::build(name, age);
    for (skill, value) in skills.iter() {
        player.set_skill(*skill, *value);
    }

    let name = player.name.clone();
    data.roster.add(player)?;
    data.save()?;

    info!("added {name}");
    emit(&StatusMessage::build("added", format!("Player '{name}' added successfully!")), json)
}

// Update existing player info. Anything not given stays as it was.
pub fn update(
    data: &mut AppData,
    current: &str,
    name: Option<&str>,
    age: Option<Age>,
    skills: &[(SkillId, SkillValue)],
    json: bool,
) -> Result<()> {
    let mut player = data
        .roster
        .get(current)
        .cloned()
        .ok_or_else(|| RosterError::UnknownPlayer(current.to_string()))?;

    if let Some(name) = name {
        player.name = name.trim().to_string();
    }
    if let Some(age) = age {
        player.age = age;
    }
    for (skill, value) in skills.iter() {
        player.set_skill(*skill, *value);
    }

    let name = player.name.clone();
    data.roster.update(current, player)?;
    data.save()?;

    info!("updated {current}");
    emit(&StatusMessage::build("updated", format!("Player '{name}' updated successfully!")), json)
}

// Remove a player from the roster.
pub fn delete(data: &mut AppData, name: &str, json: bool) -> Result<()> {
    let player = data.roster.remove(name)?;
    data.save()?;

    info!("deleted {}", player.name);
    emit(&StatusMessage::build("deleted", format!("Player '{}' deleted.", player.name)), json)
}

pub fn list(data: &AppData, search: Option<&str>, json: bool) -> Result<()> {
    emit(&RosterScreen::build(&data.roster, search), json)
}

pub fn show(data: &AppData, name: &str, json: bool) -> Result<()> {
    let player = data.roster.get(name).ok_or_else(|| RosterError::UnknownPlayer(name.to_string()))?;
    emit(&PlayerScreen::build(player), json)
}

// Generate random players. A seed makes the result repeatable.
pub fn random(data: &mut AppData, count: usize, seed: Option<u64>, json: bool) -> Result<()> {
    let names = match seed {
        Some(seed) => add_random_players(&mut data.roster, count, &mut StdRng::seed_from_u64(seed))?,
        None => add_random_players(&mut data.roster, count, &mut rand::rng())?,
    };
    data.save()?;

    let message = format!("Generated {} random players.", names.len());
    emit(&StatusMessage::build("generated", message).with_players(names), json)
}

fn add_random_players<R: Rng + ?Sized>(roster: &mut Roster, count: usize, rng: &mut R) -> Result<Vec<String>> {
    let mut names = Vec::with_capacity(count);
    for _ in 0..count {
        let player = roster.add_random(rng)?;
        names.push(player.name.clone());
    }

    Ok(names)
}

pub fn roles(json: bool) -> Result<()> {
    emit(&RolesScreen::build(), json)
}

// Save the team to another file.
pub fn export(data: &AppData, path: &Path, json: bool) -> Result<()> {
    io::export(path, &data.roster)?;
    emit(
        &StatusMessage::build("exported", format!("Team saved successfully to {}", path.display())),
        json,
    )
}

// Load a team from another file, replacing the working roster.
pub fn import(data: &mut AppData, path: &Path, json: bool) -> Result<()> {
    data.roster = io::load(path)?;
    data.save()?;

    emit(
        &StatusMessage::build(
            "imported",
            format!("Team loaded successfully from {} ({} players)", path.display(), data.roster.len()),
        ),
        json,
    )
}
