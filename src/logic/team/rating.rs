// Labels for fits and team strength.
use std::fmt;

use serde::Serialize;

use crate::logic::types::Fit;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(Serialize)]
pub enum FitLabel {
    Excellent,
    Good,
    Average,
    Poor,
}

impl FitLabel {
    pub fn from_fit(fit: Fit) -> Self {
        if fit >= 85.0 {
            Self::Excellent
        }
        else if fit >= 75.0 {
            Self::Good
        }
        else if fit >= 60.0 {
            Self::Average
        }
        else {
            Self::Poor
        }
    }
}

impl fmt::Display for FitLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::Poor => "Poor",
        };
        f.pad(text)
    }
}

// Team tier based on the average fit of the starters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(Serialize)]
pub enum TeamTier {
    S,
    A,
    B,
    C,
    D,
}

impl TeamTier {
    pub fn from_average(average: Fit) -> Self {
        if average >= 85.0 {
            Self::S
        }
        else if average >= 75.0 {
            Self::A
        }
        else if average >= 65.0 {
            Self::B
        }
        else if average >= 55.0 {
            Self::C
        }
        else {
            Self::D
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::S => "Championship Level",
            Self::A => "Playoff Contender",
            Self::B => "Competitive",
            Self::C => "Developing",
            Self::D => "Needs Development",
        }
    }
}

impl fmt::Display for TeamTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}-Tier ({})", self, self.description())
    }
}
