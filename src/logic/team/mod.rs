pub mod ai;
pub mod lineup;
pub mod rating;

use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::{error::RosterError, logic::player::Player};

// Give up on random names after this many collisions.
const RANDOM_NAME_ATTEMPTS: usize = 10_000;

// The team's players, in the order they were added.
#[derive(Debug)]
#[derive(Default, Clone, PartialEq)]
#[derive(Serialize)]
#[serde(transparent)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    // Build a roster, checking every player the same way `add` does.
    pub fn from_players(players: Vec<Player>) -> Result<Self, RosterError> {
        let mut roster = Self::new();
        for player in players {
            roster.add(player)?;
        }

        return Ok(roster);
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.players.iter().position(|player| player.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|player| player.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    // Check that no other player has the name. `editing` is the index of the player being edited.
    fn check_name(&self, name: &str, editing: Option<usize>) -> Result<(), RosterError> {
        match self.position(name) {
            Some(index) if Some(index) != editing => Err(RosterError::DuplicateName(name.to_string())),
            _ => Ok(()),
        }
    }

    // Add a new player to the roster.
    pub fn add(&mut self, mut player: Player) -> Result<(), RosterError> {
        player.name = player.name.trim().to_string();
        player.validate()?;
        self.check_name(&player.name, None)?;

        debug!("adding player {}", player.name);
        self.players.push(player);
        Ok(())
    }

    // Replace the player called `name` with `player`, keeping the roster order.
    pub fn update(&mut self, name: &str, mut player: Player) -> Result<(), RosterError> {
        let index = self.position(name).ok_or_else(|| RosterError::UnknownPlayer(name.to_string()))?;

        player.name = player.name.trim().to_string();
        player.validate()?;
        self.check_name(&player.name, Some(index))?;

        debug!("updating player {name}");
        self.players[index] = player;
        Ok(())
    }

    // Remove a player from the roster and hand it back.
    pub fn remove(&mut self, name: &str) -> Result<Player, RosterError> {
        let index = self.position(name).ok_or_else(|| RosterError::UnknownPlayer(name.to_string()))?;

        debug!("removing player {name}");
        Ok(self.players.remove(index))
    }

    // Players whose name contains the term, ignoring case. An empty term matches everyone.
    pub fn search(&self, term: &str) -> Vec<&Player> {
        let term = term.trim().to_lowercase();
        self.players
            .iter()
            .filter(|player| term.is_empty() || player.name.to_lowercase().contains(&term))
            .collect()
    }

    // Generate a random player with a name not yet in the roster and add it.
    pub fn add_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&Player, RosterError> {
        for _ in 0..RANDOM_NAME_ATTEMPTS {
            let player = Player::build_random(rng);
            if self.contains(&player.name) {
                continue;
            }

            info!("generated random player {}", player.name);
            self.add(player)?;
            return Ok(&self.players[self.players.len() - 1]);
        }

        Err(RosterError::NamesExhausted)
    }
}
