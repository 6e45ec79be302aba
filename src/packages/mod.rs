// Data packages for presenting the roster, as JSON or as text.
pub mod evaluation_screen;
pub mod player_screen;
pub mod roles_screen;
pub mod roster_screen;

use std::fmt;

use serde::Serialize;

// Outcome of a command that changed the roster.
#[derive(Debug, Clone, PartialEq)]
#[derive(Serialize)]
pub struct StatusMessage {
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub players: Vec<String>,
}

impl StatusMessage {
    pub fn build(status: &'static str, message: String) -> Self {
        Self {
            status,
            message,
            players: Vec::new(),
        }
    }

    pub fn with_players(mut self, players: Vec<String>) -> Self {
        self.players = players;
        return self;
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        for player in self.players.iter() {
            write!(f, "\n  {player}")?;
        }
        Ok(())
    }
}
