// Custom types that are widely used are defined here.

// Skill values run from 0 to 100.
pub type SkillValue = u8;
pub type Age = u8;

// How well a player suits a role, as a percentage.
pub type Fit = f64;

pub const MAX_FIT: Fit = 100.0;
pub const ROLE_COUNT: usize = 5;
pub const SKILL_COUNT: usize = 16;
