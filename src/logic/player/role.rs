use std::fmt;

use serde::{Deserialize, Serialize};

use crate::logic::{
    database::ROLES,
    player::{skill::SkillId, Player},
    types::{Fit, SkillValue, ROLE_COUNT},
};

#[derive(Eq, Hash, PartialEq, PartialOrd, Ord)]
#[derive(Debug, Clone, Copy)]
#[derive(Serialize, Deserialize)]
#[repr(u8)]
pub enum RoleId {
    #[serde(rename = "Top Laner")]
    TopLaner = 0,
    #[serde(rename = "Jungler")]
    Jungler = 1,
    #[serde(rename = "Mid Laner")]
    MidLaner = 2,
    #[serde(rename = "Bot Laner")]
    BotLaner = 3,
    #[serde(rename = "Support")]
    Support = 4,
}

impl RoleId {
    pub const ALL: [Self; ROLE_COUNT] = [
        Self::TopLaner,
        Self::Jungler,
        Self::MidLaner,
        Self::BotLaner,
        Self::Support,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::TopLaner => "Top Laner",
            Self::Jungler => "Jungler",
            Self::MidLaner => "Mid Laner",
            Self::BotLaner => "Bot Laner",
            Self::Support => "Support",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    // Get the role requirements.
    pub fn role(self) -> &'static Role {
        &ROLES[self.index()]
    }
}

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

// Bonus for having every core skill of a role above a threshold.
// Tiers go from the highest threshold to the lowest and only the first reached tier counts.
#[derive(Debug, Clone, PartialEq)]
#[derive(Serialize)]
pub struct CoreBonus {
    pub skills: Vec<SkillId>,
    pub tiers: Vec<BonusTier>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[derive(Serialize)]
pub struct BonusTier {
    pub threshold: SkillValue,
    pub bonus: Fit,
}

impl CoreBonus {
    pub fn build(skills: &[SkillId], tiers: &[(SkillValue, Fit)]) -> Self {
        Self {
            skills: skills.to_vec(),
            tiers: tiers.iter().map(|&(threshold, bonus)| BonusTier { threshold, bonus }).collect(),
        }
    }

    fn get(&self, player: &Player) -> Fit {
        self.tiers
            .iter()
            .find(|tier| self.skills.iter().all(|skill| player.skill(*skill) >= tier.threshold))
            .map_or(0.0, |tier| tier.bonus)
    }
}

// Extra bonus for a specific skill combination.
#[derive(Debug, Clone, PartialEq)]
#[derive(Serialize)]
pub struct ComboBonus {
    pub requirements: Vec<(SkillId, SkillValue)>,
    pub bonus: Fit,
}

impl ComboBonus {
    pub fn build(requirements: &[(SkillId, SkillValue)], bonus: Fit) -> Self {
        Self {
            requirements: requirements.to_vec(),
            bonus,
        }
    }

    fn applies(&self, player: &Player) -> bool {
        self.requirements.iter().all(|(skill, minimum)| player.skill(*skill) >= *minimum)
    }
}

// What a role asks of a player.
#[derive(Debug, Clone, PartialEq)]
#[derive(Serialize)]
pub struct Role {
    pub id: RoleId,
    pub primary: Vec<SkillId>,
    pub secondary: Vec<SkillId>,
    pub core: CoreBonus,
    pub combos: Vec<ComboBonus>,
}

impl Role {
    pub const MAX_BONUS: Fit = 25.0;

    pub fn build(id: RoleId, primary: &[SkillId], secondary: &[SkillId], core: CoreBonus, combos: Vec<ComboBonus>) -> Self {
        Self {
            id,
            primary: primary.to_vec(),
            secondary: secondary.to_vec(),
            core,
            combos,
        }
    }

    // Meta bonus for the player in this role, capped at MAX_BONUS.
    pub fn bonus(&self, player: &Player) -> Fit {
        let mut bonus = self.core.get(player);
        for combo in self.combos.iter() {
            if combo.applies(player) {
                bonus += combo.bonus;
            }
        }

        bonus.min(Self::MAX_BONUS)
    }
}
