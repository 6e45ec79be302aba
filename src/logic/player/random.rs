// Random player generation.

use rand::{seq::IndexedRandom, Rng};

use crate::logic::{player::{skill::SkillId, Player}, types::Age};

const NAMES: [&str; 16] = [
    "Phoenix", "Shadow", "Lightning", "Storm", "Blaze", "Frost", "Nova", "Titan",
    "Viper", "Falcon", "Dragon", "Wolf", "Raven", "Eagle", "Tiger", "Shark",
];

const MIN_AGE: Age = 17;
const MAX_AGE: Age = 28;

impl Player {
    // Make a random player with a handle like "Nova42".
    pub fn build_random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let handle = NAMES.choose(rng).copied().unwrap_or(NAMES[0]);
        let name = format!("{handle}{}", rng.random_range(1..=99));
        let age = rng.random_range(MIN_AGE..=MAX_AGE);

        let mut player = Self::build(&name, age);
        for skill in SkillId::ALL {
            player.set_skill(skill, rng.random_range(0..=SkillId::MAX_VALUE));
        }

        return player;
    }
}
