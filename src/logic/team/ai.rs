// Advice on how to improve the team.

use crate::logic::{
    player::{role::RoleId, Player},
    team::{lineup::LineUp, Roster},
    types::{Age, Fit, SkillValue},
};

pub const DEFAULT_LIMIT: usize = 8;
pub const SOLID_TEAM: &str = "Team has solid primary skill coverage. Focus on refining secondary skills and team synergy.";

// Primary skills below this need work.
const WEAK_SKILL: SkillValue = 65;

// Starters below this fit should be replaced.
const LOW_FIT: Fit = 70.0;

// Suggest a role change when another role's primary score beats the current fit by more than this.
const SWAP_MARGIN: Fit = 20.0;

const VETERAN_AGE: Age = 28;
const YOUTH_AGE: Age = 18;

// Recommendations for the lineup, most pressing first, at most `limit` of them.
pub fn recommendations(roster: &Roster, lineup: &LineUp, limit: usize) -> Vec<String> {
    let starters: Vec<(RoleId, &Player, Fit)> = lineup
        .iter()
        .filter_map(|(role, pick)| {
            let pick = pick?;
            roster.players().get(pick.index).map(|player| (role, player, pick.fit))
        })
        .collect();

    let mut advice = Vec::new();

    for (role, pick) in lineup.iter() {
        let Some(pick) = pick else {
            advice.push(format!("{role} position is vacant and needs immediate attention."));
            continue;
        };
        let Some(player) = roster.players().get(pick.index) else { continue };

        let weak_primary: Vec<String> = role
            .role()
            .primary
            .iter()
            .filter(|skill| player.skill(**skill) < WEAK_SKILL)
            .map(|skill| format!("{skill} ({})", player.skill(*skill)))
            .collect();
        if !weak_primary.is_empty() {
            advice.push(format!(
                "{} ({role}) needs improvement in primary skills: {}",
                player.name,
                weak_primary.join(", ")
            ));
        }

        if pick.fit < LOW_FIT {
            advice.push(format!(
                "Consider finding a more suitable {role} player. {} has {:.1}% fit.",
                player.name, pick.fit
            ));
        }
    }

    for (role, player, fit) in starters.iter() {
        for alternative in RoleId::ALL {
            if alternative == *role {
                continue;
            }

            let primary = player.primary_fit(alternative);
            if primary > fit + SWAP_MARGIN {
                advice.push(format!(
                    "{} has much stronger primary skills for {alternative} ({primary:.1}% vs {fit:.1}% for {role})",
                    player.name
                ));
            }
        }
    }

    for (role, player, _) in starters.iter() {
        if player.age > VETERAN_AGE {
            advice.push(format!(
                "Plan succession for {} ({role}, age {}). Focus on developing backup players.",
                player.name, player.age
            ));
        }
        else if player.age < YOUTH_AGE {
            advice.push(format!(
                "{} ({role}, age {}) shows promise but needs focused training in primary skills.",
                player.name, player.age
            ));
        }
    }

    if advice.is_empty() {
        return vec![SOLID_TEAM.to_string()];
    }

    advice.truncate(limit);
    return advice;
}
