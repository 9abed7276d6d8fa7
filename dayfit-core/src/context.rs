//! Per-invocation user state: goal, energy, hunger and mood.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

pub(crate) fn key(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Lose,
    Gain,
    #[default]
    Maintain,
}

impl Goal {
    /// Catalog goal filter; maintaining weight accepts every entry.
    pub fn filter(self) -> Option<Goal> {
        match self {
            Goal::Maintain => None,
            g => Some(g),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Goal::Lose => "lose",
            Goal::Gain => "gain",
            Goal::Maintain => "maintain",
        })
    }
}

impl FromStr for Goal {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match key(s).as_str() {
            "lose" | "loss" | "weightloss" | "loseweight" => Ok(Goal::Lose),
            "gain" | "weightgain" | "gainweight" | "musclegain" => Ok(Goal::Gain),
            "maintain" | "maintenance" | "maintainweight" => Ok(Goal::Maintain),
            _ => Err(ParseError::Goal(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum EnergyLevel {
    VeryLow,
    Low,
    #[default]
    Moderate,
    High,
}

impl EnergyLevel {
    pub fn is_low(self) -> bool {
        self <= EnergyLevel::Low
    }
}

impl fmt::Display for EnergyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EnergyLevel::VeryLow => "Very Low",
            EnergyLevel::Low => "Low",
            EnergyLevel::Moderate => "Moderate",
            EnergyLevel::High => "High",
        })
    }
}

impl FromStr for EnergyLevel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match key(s).as_str() {
            "verylow" => Ok(EnergyLevel::VeryLow),
            "low" => Ok(EnergyLevel::Low),
            "moderate" | "medium" => Ok(EnergyLevel::Moderate),
            "high" => Ok(EnergyLevel::High),
            _ => Err(ParseError::Energy(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum HungerLevel {
    NotHungry,
    #[default]
    SlightlyHungry,
    Hungry,
    VeryHungry,
}

impl fmt::Display for HungerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HungerLevel::NotHungry => "Not Hungry",
            HungerLevel::SlightlyHungry => "Slightly Hungry",
            HungerLevel::Hungry => "Hungry",
            HungerLevel::VeryHungry => "Very Hungry",
        })
    }
}

impl FromStr for HungerLevel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match key(s).as_str() {
            "nothungry" | "none" => Ok(HungerLevel::NotHungry),
            "slightlyhungry" | "slightly" => Ok(HungerLevel::SlightlyHungry),
            "hungry" => Ok(HungerLevel::Hungry),
            "veryhungry" => Ok(HungerLevel::VeryHungry),
            _ => Err(ParseError::Hunger(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mood {
    Tired,
    Motivated,
    #[default]
    Relaxed,
    Stressed,
}

impl Mood {
    /// Tired or stressed: the user should be winding down, not pushing.
    pub fn wants_rest(self) -> bool {
        matches!(self, Mood::Tired | Mood::Stressed)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mood::Tired => "Tired",
            Mood::Motivated => "Motivated",
            Mood::Relaxed => "Relaxed",
            Mood::Stressed => "Stressed",
        })
    }
}

impl FromStr for Mood {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match key(s).as_str() {
            "tired" => Ok(Mood::Tired),
            "motivated" => Ok(Mood::Motivated),
            "relaxed" | "calm" => Ok(Mood::Relaxed),
            "stressed" => Ok(Mood::Stressed),
            _ => Err(ParseError::Mood(s.to_string())),
        }
    }
}

/// Read-only input for one schedule generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserContext {
    pub goal: Goal,
    pub energy: EnergyLevel,
    pub hunger: HungerLevel,
    pub mood: Mood,
    /// Serve meals even when the user reports not being hungry.
    #[serde(default)]
    pub meal_override: bool,
}

impl UserContext {
    pub fn new(goal: Goal, energy: EnergyLevel, hunger: HungerLevel, mood: Mood) -> Self {
        Self {
            goal,
            energy,
            hunger,
            mood,
            meal_override: false,
        }
    }

    pub fn with_meal_override(mut self, insist: bool) -> Self {
        self.meal_override = insist;
        self
    }

    /// Tired/stressed mood or low energy.
    pub fn needs_rest(&self) -> bool {
        self.mood.wants_rest() || self.energy.is_low()
    }
}
