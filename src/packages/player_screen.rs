use std::fmt;

use serde::Serialize;

use crate::logic::{
    player::{
        role::RoleId,
        skill::{SkillGrade, SkillId},
        Player,
    },
    team::rating::FitLabel,
    types::{Age, Fit, SkillValue},
};

#[derive(Debug, Clone, PartialEq)]
#[derive(Serialize)]
pub struct SkillRow {
    pub skill: SkillId,
    pub value: SkillValue,
    pub grade: SkillGrade,
}

#[derive(Debug, Clone, PartialEq)]
#[derive(Serialize)]
pub struct RoleFitRow {
    pub role: RoleId,
    pub fit: Fit,
    pub label: FitLabel,
}

// Everything about a single player.
#[derive(Debug, Clone, PartialEq)]
#[derive(Serialize)]
pub struct PlayerScreen {
    pub name: String,
    pub age: Age,
    pub skills: Vec<SkillRow>,
    pub role_fits: Vec<RoleFitRow>,
    pub best_role: RoleId,
    pub best_fit: Fit,
}

impl PlayerScreen {
    pub fn build(player: &Player) -> Self {
        let skills = SkillId::ALL
            .into_iter()
            .map(|skill| {
                let value = player.skill(skill);
                SkillRow { skill, value, grade: SkillGrade::from_value(value) }
            })
            .collect();

        let role_fits = RoleId::ALL
            .into_iter()
            .zip(player.role_fits())
            .map(|(role, fit)| RoleFitRow { role, fit, label: FitLabel::from_fit(fit) })
            .collect();

        let (best_role, best_fit) = player.best_role();

        Self {
            name: player.name.clone(),
            age: player.age,
            skills,
            role_fits,
            best_role,
            best_fit,
        }
    }
}

impl fmt::Display for PlayerScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} (Age: {})", self.name, self.age)?;

        writeln!(f, "\nSkills")?;
        // Two skills per line.
        for pair in self.skills.chunks(2) {
            let line: Vec<String> = pair
                .iter()
                .map(|row| format!("{:<14} {:>3} {:<8}", row.skill.name(), row.value, row.grade))
                .collect();
            writeln!(f, "  {}", line.join("  ").trim_end())?;
        }

        writeln!(f, "\nRole fit")?;
        for row in self.role_fits.iter() {
            writeln!(f, "  {:<10} {:>6.1}%  {}", row.role.name(), row.fit, row.label)?;
        }

        write!(f, "\nBest role: {} ({:.1}%)", self.best_role, self.best_fit)
    }
}
