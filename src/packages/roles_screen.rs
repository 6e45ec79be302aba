use std::fmt;

use serde::Serialize;

use crate::logic::{
    player::role::{Role, RoleId},
    team::ai,
};

// Role requirements, for reference.
#[derive(Debug, Clone, PartialEq)]
#[derive(Serialize)]
pub struct RolesScreen {
    pub roles: Vec<Role>,
    pub max_bonus: f64,
}

impl RolesScreen {
    pub fn build() -> Self {
        Self {
            roles: RoleId::ALL.into_iter().map(|role| role.role().clone()).collect(),
            max_bonus: Role::MAX_BONUS,
        }
    }
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items.iter().map(|item| item.to_string()).collect::<Vec<_>>().join(", ")
}

impl fmt::Display for RolesScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, role) in self.roles.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }

            writeln!(f, "{}", role.id)?;
            writeln!(f, "  Primary:   {}", join(&role.primary))?;
            writeln!(f, "  Secondary: {}", join(&role.secondary))?;

            let tiers: Vec<String> = role
                .core
                .tiers
                .iter()
                .map(|tier| format!("+{} at {}", tier.bonus, tier.threshold))
                .collect();
            writeln!(f, "  Core bonus: {} ({})", join(&role.core.skills), tiers.join(", "))?;

            for combo in role.combos.iter() {
                let requirements: Vec<String> = combo
                    .requirements
                    .iter()
                    .map(|(skill, minimum)| format!("{skill} >= {minimum}"))
                    .collect();
                writeln!(f, "  Combo bonus: +{} for {}", combo.bonus, requirements.join(" and "))?;
            }
        }

        write!(
            f,
            "\nRole bonuses are capped at {}. Evaluations show up to {} recommendations by default.",
            self.max_bonus,
            ai::DEFAULT_LIMIT
        )
    }
}
