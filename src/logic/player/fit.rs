// Role fit calculation.

use crate::logic::{
    player::{
        role::RoleId,
        skill::{diminishing_returns, SkillId},
        Player,
    },
    types::{Age, Fit, MAX_FIT, ROLE_COUNT},
};

// Secondary skills can add at most this much on top of the primary score.
const MAX_SECONDARY_BONUS: Fit = 15.0;

// Age effect on performance.
pub fn age_multiplier(age: Age) -> f64 {
    match age {
        18..=22 => 1.0,
        23..=25 => 0.98,
        26..=28 => 0.95,
        0..=17 => 0.90,
        _ => 0.88,
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl Player {
    // Percentage of the best possible score over the given skills.
    fn skill_percentage(&self, skills: &[SkillId]) -> Fit {
        if skills.is_empty() {
            return 0.0;
        }

        let score: f64 = skills.iter().map(|skill| diminishing_returns(self.skill(*skill))).sum();
        let max_score = skills.len() as f64 * 100.0;
        return score / max_score * 100.0;
    }

    // How good the player's primary skills are for the role, without age or bonuses.
    pub fn primary_fit(&self, role: RoleId) -> Fit {
        self.skill_percentage(&role.role().primary)
    }

    // Percentage fit of the player for the role:
    // primary skills scaled by age, plus the role bonus and up to 15 from secondary skills.
    pub fn role_fit(&self, role: RoleId) -> Fit {
        let criteria = role.role();

        let base = self.skill_percentage(&criteria.primary) * age_multiplier(self.age);
        let role_bonus = criteria.bonus(self);
        let secondary_bonus = match criteria.secondary.is_empty() {
            true => 0.0,
            false => (self.skill_percentage(&criteria.secondary) / 100.0 * MAX_SECONDARY_BONUS).min(MAX_SECONDARY_BONUS),
        };

        let fit = base + role_bonus + secondary_bonus;
        round_to_hundredths(fit.clamp(0.0, MAX_FIT))
    }

    // Fits for all roles, indexed by RoleId.
    pub fn role_fits(&self) -> [Fit; ROLE_COUNT] {
        RoleId::ALL.map(|role| self.role_fit(role))
    }

    // The role the player suits best. Ties go to the earlier role.
    pub fn best_role(&self) -> (RoleId, Fit) {
        let fits = self.role_fits();
        let mut best = (RoleId::ALL[0], fits[0]);
        for role in RoleId::ALL.into_iter().skip(1) {
            if fits[role.index()] > best.1 {
                best = (role, fits[role.index()]);
            }
        }

        return best;
    }
}
