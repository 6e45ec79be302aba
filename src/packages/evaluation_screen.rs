use std::fmt;

use serde::Serialize;

use crate::logic::{
    player::role::RoleId,
    team::{
        ai,
        lineup::{LineUp, Strategy},
        rating::{FitLabel, TeamTier},
        Roster,
    },
    types::{Age, Fit},
};

#[derive(Debug, Clone, PartialEq)]
#[derive(Serialize)]
pub struct Starter {
    pub name: String,
    pub age: Age,
    pub fit: Fit,
    pub label: FitLabel,
}

#[derive(Debug, Clone, PartialEq)]
#[derive(Serialize)]
pub struct LineupRow {
    pub role: RoleId,

    // None when the position is vacant.
    pub player: Option<Starter>,
}

#[derive(Debug, Clone, PartialEq)]
#[derive(Serialize)]
pub struct TeamStats {
    pub total_fit: Fit,
    pub average_fit: Fit,
    pub tier: TeamTier,
}

#[derive(Debug, Clone, PartialEq)]
#[derive(Serialize)]
pub struct BenchRow {
    pub name: String,
    pub age: Age,
    pub best_role: RoleId,
    pub best_fit: Fit,
}

// Result of a team evaluation: lineup, statistics, advice and the bench.
#[derive(Debug, Clone, PartialEq)]
#[derive(Serialize)]
pub struct EvaluationScreen {
    pub strategy: Strategy,
    pub lineup: Vec<LineupRow>,
    pub statistics: Option<TeamStats>,
    pub recommendations: Vec<String>,
    pub bench: Vec<BenchRow>,
}

impl EvaluationScreen {
    pub fn build(roster: &Roster, lineup: &LineUp, strategy: Strategy, limit: usize) -> Self {
        let rows = lineup
            .iter()
            .map(|(role, pick)| LineupRow {
                role,
                player: pick.and_then(|pick| {
                    roster.players().get(pick.index).map(|player| Starter {
                        name: player.name.clone(),
                        age: player.age,
                        fit: pick.fit,
                        label: FitLabel::from_fit(pick.fit),
                    })
                }),
            })
            .collect();

        let statistics = lineup.average_fit().map(|average_fit| TeamStats {
            total_fit: lineup.total_fit(),
            average_fit,
            tier: TeamTier::from_average(average_fit),
        });

        let bench = lineup
            .bench(roster.len())
            .into_iter()
            .filter_map(|index| roster.players().get(index))
            .map(|player| {
                let (best_role, best_fit) = player.best_role();
                BenchRow {
                    name: player.name.clone(),
                    age: player.age,
                    best_role,
                    best_fit,
                }
            })
            .collect();

        Self {
            strategy,
            lineup: rows,
            statistics,
            recommendations: ai::recommendations(roster, lineup, limit),
            bench,
        }
    }
}

impl fmt::Display for EvaluationScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Team Composition ({} lineup)", self.strategy)?;

        writeln!(f, "\nStarting Lineup")?;
        for row in self.lineup.iter() {
            match row.player.as_ref() {
                Some(starter) => writeln!(
                    f,
                    "  {:<10} {} (Age: {}) - {:.1}% fit  {}",
                    row.role, starter.name, starter.age, starter.fit, starter.label
                )?,
                None => writeln!(f, "  {:<10} Position Vacant", row.role)?,
            }
        }

        if let Some(stats) = self.statistics.as_ref() {
            writeln!(f, "\nTeam Statistics")?;
            writeln!(f, "  Overall Team Synergy: {:.1}%", stats.average_fit)?;
            writeln!(f, "  Team Rating: {}", stats.tier)?;
        }

        writeln!(f, "\nRecommendations")?;
        for recommendation in self.recommendations.iter() {
            writeln!(f, "  • {recommendation}")?;
        }

        if !self.bench.is_empty() {
            writeln!(f, "\nBench Players")?;
            for row in self.bench.iter() {
                writeln!(
                    f,
                    "  • {} (Age: {}) - best as {}: {:.1}%",
                    row.name, row.age, row.best_role, row.best_fit
                )?;
            }
        }

        Ok(())
    }
}
