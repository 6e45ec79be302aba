use std::fmt;

use serde::Serialize;

use crate::logic::{
    player::{role::RoleId, Player},
    team::Roster,
    types::{Age, Fit},
};

#[derive(Debug, Clone, PartialEq)]
#[derive(Serialize)]
pub struct RosterRow {
    pub name: String,
    pub age: Age,
    pub best_role: RoleId,
    pub best_fit: Fit,
}

impl RosterRow {
    pub fn build(player: &Player) -> Self {
        let (best_role, best_fit) = player.best_role();
        Self {
            name: player.name.clone(),
            age: player.age,
            best_role,
            best_fit,
        }
    }
}

// The player list, optionally filtered by name.
#[derive(Debug, Clone, PartialEq)]
#[derive(Serialize)]
pub struct RosterScreen {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    pub players: Vec<RosterRow>,
}

impl RosterScreen {
    pub fn build(roster: &Roster, search: Option<&str>) -> Self {
        Self {
            search: search.map(str::to_string),
            players: roster.search(search.unwrap_or_default()).into_iter().map(RosterRow::build).collect(),
        }
    }
}

impl fmt::Display for RosterScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.players.is_empty() {
            return match self.search.as_deref() {
                Some(term) => write!(f, "No players matching '{term}'."),
                None => write!(f, "No players in the roster."),
            };
        }

        write!(f, "{:<20} {:>3}  {:<10} {:>7}", "Name", "Age", "Best Role", "Fit")?;
        for row in self.players.iter() {
            write!(f, "\n{:<20} {:>3}  {:<10} {:>6.1}%", row.name, row.age, row.best_role.name(), row.best_fit)?;
        }
        Ok(())
    }
}
