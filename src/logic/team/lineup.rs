// Assigning roster players to roles.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::RosterError,
    logic::{
        player::role::RoleId,
        team::Roster,
        types::{Fit, MAX_FIT, ROLE_COUNT},
    },
};

// Fits of one player for every role, indexed by RoleId.
pub type FitRow = [Fit; ROLE_COUNT];

// How the lineup is searched for.
#[derive(Debug)]
#[derive(Default, Clone, Copy, PartialEq, Eq)]
#[derive(Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    // Best total fit for any roster size.
    #[default]
    Optimal,

    // Try every lineup. Small rosters only.
    Exhaustive,

    // Fill the hardest roles first with the best remaining player.
    Greedy,
}

impl Strategy {
    pub fn name(self) -> &'static str {
        match self {
            Self::Optimal => "optimal",
            Self::Exhaustive => "exhaustive",
            Self::Greedy => "greedy",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

// A player picked for a role.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pick {
    // Index of the player in the roster.
    pub index: usize,
    pub fit: Fit,
}

// A starting lineup: each role has at most one player, and no player has two roles.
#[derive(Debug)]
#[derive(Default, Clone, PartialEq)]
pub struct LineUp {
    picks: [Option<Pick>; ROLE_COUNT],
}

impl LineUp {
    // Largest roster the exhaustive search accepts.
    pub const EXHAUSTIVE_LIMIT: usize = 8;

    // Players at or above this fit count as viable for a role in the greedy ordering.
    const VIABLE_FIT: Fit = 60.0;

    // Build a lineup for the roster.
    pub fn build(roster: &Roster, strategy: Strategy) -> Result<Self, RosterError> {
        let fits: Vec<FitRow> = roster.players().iter().map(|player| player.role_fits()).collect();
        Self::from_fits(&fits, strategy)
    }

    // Build a lineup from precalculated fits, one row per player.
    pub fn from_fits(fits: &[FitRow], strategy: Strategy) -> Result<Self, RosterError> {
        if fits.is_empty() {
            return Err(RosterError::EmptyRoster);
        }

        let lineup = match strategy {
            Strategy::Optimal => Self::optimal(fits),
            Strategy::Exhaustive => {
                if fits.len() > Self::EXHAUSTIVE_LIMIT {
                    return Err(RosterError::TooManyForExhaustive {
                        count: fits.len(),
                        limit: Self::EXHAUSTIVE_LIMIT,
                    });
                }
                Self::exhaustive(fits)
            }
            Strategy::Greedy => Self::greedy(fits),
        };

        debug!(
            "{strategy} lineup for {} players: {} roles filled, total fit {:.2}",
            fits.len(),
            lineup.assigned(),
            lineup.total_fit()
        );
        return Ok(lineup);
    }

    pub fn get(&self, role: RoleId) -> Option<Pick> {
        self.picks[role.index()]
    }

    // Roles in order with their picks.
    pub fn iter(&self) -> impl Iterator<Item = (RoleId, Option<Pick>)> + '_ {
        RoleId::ALL.into_iter().map(move |role| (role, self.picks[role.index()]))
    }

    // The role of a roster player, if they are starting.
    pub fn role_of(&self, index: usize) -> Option<RoleId> {
        self.iter().find_map(|(role, pick)| match pick {
            Some(pick) if pick.index == index => Some(role),
            _ => None,
        })
    }

    pub fn assigned(&self) -> usize {
        self.picks.iter().flatten().count()
    }

    pub fn is_full(&self) -> bool {
        self.assigned() == ROLE_COUNT
    }

    pub fn vacancies(&self) -> Vec<RoleId> {
        self.iter().filter(|(_, pick)| pick.is_none()).map(|(role, _)| role).collect()
    }

    pub fn total_fit(&self) -> Fit {
        self.picks.iter().flatten().map(|pick| pick.fit).sum()
    }

    // Average fit of the filled roles. None if nobody is starting.
    pub fn average_fit(&self) -> Option<Fit> {
        match self.assigned() {
            0 => None,
            n => Some(self.total_fit() / n as f64),
        }
    }

    // Roster indexes of the players left out of the lineup.
    pub fn bench(&self, roster_size: usize) -> Vec<usize> {
        (0..roster_size).filter(|index| self.role_of(*index).is_none()).collect()
    }

    // Hungarian algorithm over a square matrix.
    // Missing players become vacancies and surplus players go to the bench, both at zero fit.
    fn optimal(fits: &[FitRow]) -> Self {
        let size = fits.len().max(ROLE_COUNT);
        let cost: Vec<Vec<f64>> = (0..size)
            .map(|row| {
                (0..size)
                    .map(|column| match (fits.get(row), column < ROLE_COUNT) {
                        (Some(player_fits), true) => MAX_FIT - player_fits[column],
                        _ => MAX_FIT,
                    })
                    .collect()
            })
            .collect();

        let mut lineup = Self::default();
        for (index, column) in hungarian(&cost).into_iter().enumerate() {
            if index < fits.len() && column < ROLE_COUNT {
                lineup.picks[column] = Some(Pick { index, fit: fits[index][column] });
            }
        }

        return lineup;
    }

    // Try every lineup that starts as many players as possible. The first strictly better total wins.
    fn exhaustive(fits: &[FitRow]) -> Self {
        let mut search = ExhaustiveSearch {
            fits,
            used: vec![false; fits.len()],
            current: [None; ROLE_COUNT],
            best: None,
        };
        search.visit(0, 0.0);

        let mut lineup = Self::default();
        if let Some((picks, _)) = search.best {
            for (role, pick) in picks.into_iter().enumerate() {
                lineup.picks[role] = pick.map(|index| Pick { index, fit: fits[index][role] });
            }
        }

        return lineup;
    }

    // Roles with the fewest viable players pick first, each taking the best player left.
    fn greedy(fits: &[FitRow]) -> Self {
        let mut order: Vec<(RoleId, usize)> = RoleId::ALL
            .into_iter()
            .map(|role| {
                let viable = fits.iter().filter(|row| row[role.index()] >= Self::VIABLE_FIT).count();
                (role, viable)
            })
            .collect();
        order.sort_by_key(|(_, viable)| *viable);

        let mut used = vec![false; fits.len()];
        let mut lineup = Self::default();
        for (role, _) in order {
            let mut best: Option<Pick> = None;
            for (index, row) in fits.iter().enumerate() {
                if used[index] {
                    continue;
                }

                let fit = row[role.index()];
                if best.map_or(true, |pick| fit > pick.fit) {
                    best = Some(Pick { index, fit });
                }
            }

            if let Some(pick) = best {
                used[pick.index] = true;
                lineup.picks[role.index()] = Some(pick);
            }
        }

        return lineup;
    }
}

struct ExhaustiveSearch<'a> {
    fits: &'a [FitRow],
    used: Vec<bool>,
    current: [Option<usize>; ROLE_COUNT],
    best: Option<([Option<usize>; ROLE_COUNT], Fit)>,
}

impl ExhaustiveSearch<'_> {
    fn visit(&mut self, role: usize, total: Fit) {
        if role == ROLE_COUNT {
            if self.best.map_or(true, |(_, best_total)| total > best_total) {
                self.best = Some((self.current, total));
            }
            return;
        }

        for index in 0..self.fits.len() {
            if self.used[index] {
                continue;
            }

            self.used[index] = true;
            self.current[role] = Some(index);
            self.visit(role + 1, total + self.fits[index][role]);
            self.used[index] = false;
            self.current[role] = None;
        }

        // A role may stay vacant only when there are not enough players left for the remaining roles.
        let free = self.used.iter().filter(|used| !**used).count();
        if free < ROLE_COUNT - role {
            self.visit(role + 1, total);
        }
    }
}

// Minimum cost assignment on a square matrix (Kuhn-Munkres with potentials).
// Returns the column assigned to each row.
fn hungarian(cost: &[Vec<f64>]) -> Vec<usize> {
    let n = cost.len();

    // Potentials and matching use 1-based indexes; 0 is the virtual start column.
    let mut u = vec![0.0; n + 1];
    let mut v = vec![0.0; n + 1];
    let mut row_of_column = vec![0usize; n + 1];
    let mut way = vec![0usize; n + 1];

    for row in 1..=n {
        row_of_column[0] = row;
        let mut column = 0;
        let mut min_slack = vec![f64::INFINITY; n + 1];
        let mut used = vec![false; n + 1];

        loop {
            used[column] = true;
            let current_row = row_of_column[column];
            let mut delta = f64::INFINITY;
            let mut next_column = 0;

            for j in 1..=n {
                if used[j] {
                    continue;
                }

                let slack = cost[current_row - 1][j - 1] - u[current_row] - v[j];
                if slack < min_slack[j] {
                    min_slack[j] = slack;
                    way[j] = column;
                }
                if min_slack[j] < delta {
                    delta = min_slack[j];
                    next_column = j;
                }
            }

            for j in 0..=n {
                if used[j] {
                    u[row_of_column[j]] += delta;
                    v[j] -= delta;
                }
                else {
                    min_slack[j] -= delta;
                }
            }

            column = next_column;
            if row_of_column[column] == 0 {
                break;
            }
        }

        // Flip the augmenting path.
        loop {
            let previous = way[column];
            row_of_column[column] = row_of_column[previous];
            column = previous;
            if column == 0 {
                break;
            }
        }
    }

    let mut assignment = vec![0; n];
    for column in 1..=n {
        let row = row_of_column[column];
        if row != 0 {
            assignment[row - 1] = column - 1;
        }
    }

    return assignment;
}
