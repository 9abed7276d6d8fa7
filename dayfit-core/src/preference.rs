//! Preference labels, merged preference groups and the compatibility relation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// A user-declared desire for a category of activity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PreferenceLabel {
    Relaxation,
    Sleep,
    PhysicalActivity,
    Meal,
    /// Never scheduled on its own; decorates other blocks.
    Hydration,
    SocialOutdoor,
    FocusedWork,
    /// Free-text preference outside the fixed set.
    Custom(String),
}

impl PreferenceLabel {
    /// The fixed label set, in UI order.
    pub const ALL: [PreferenceLabel; 7] = [
        PreferenceLabel::Relaxation,
        PreferenceLabel::Sleep,
        PreferenceLabel::PhysicalActivity,
        PreferenceLabel::Meal,
        PreferenceLabel::Hydration,
        PreferenceLabel::SocialOutdoor,
        PreferenceLabel::FocusedWork,
    ];

    pub fn is_hydration(&self) -> bool {
        matches!(self, PreferenceLabel::Hydration)
    }

    /// Blocks resolved from these labels get the hydration reminder.
    pub fn takes_hydration_note(&self) -> bool {
        !matches!(self, PreferenceLabel::Hydration | PreferenceLabel::Custom(_))
    }
}

impl fmt::Display for PreferenceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreferenceLabel::Relaxation => f.write_str("Mindfulness/Relaxation"),
            PreferenceLabel::Sleep => f.write_str("Nap/Sleep"),
            PreferenceLabel::PhysicalActivity => f.write_str("Exercise"),
            PreferenceLabel::Meal => f.write_str("Meal/Snack"),
            PreferenceLabel::Hydration => f.write_str("Hydration"),
            PreferenceLabel::SocialOutdoor => f.write_str("Outdoor/Social"),
            PreferenceLabel::FocusedWork => f.write_str("College/Office Work"),
            PreferenceLabel::Custom(s) => f.write_str(s),
        }
    }
}

impl FromStr for PreferenceLabel {
    type Err = ParseError;

    /// Parses the fixed set only; use `PreferenceLabel::Custom` for free text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let k: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect();
        match k.as_str() {
            "relaxation" | "mindfulness" | "mindfulnessrelaxation" | "meditation" => {
                Ok(PreferenceLabel::Relaxation)
            }
            "sleep" | "nap" | "napsleep" | "rest" => Ok(PreferenceLabel::Sleep),
            "exercise" | "physicalactivity" | "workout" | "physical" => {
                Ok(PreferenceLabel::PhysicalActivity)
            }
            "meal" | "snack" | "mealsnack" | "food" => Ok(PreferenceLabel::Meal),
            "hydration" | "water" => Ok(PreferenceLabel::Hydration),
            "outdoor" | "social" | "outdoorsocial" | "socialoutdoor" => {
                Ok(PreferenceLabel::SocialOutdoor)
            }
            "work" | "focusedwork" | "focus" | "college" | "office" | "collegeofficework" => {
                Ok(PreferenceLabel::FocusedWork)
            }
            _ => Err(ParseError::Preference(s.to_string())),
        }
    }
}

/// One or more preferences compressed into a single slot, in original order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MergedPreference(Vec<PreferenceLabel>);

impl MergedPreference {
    pub fn single(label: PreferenceLabel) -> Self {
        Self(vec![label])
    }

    /// Append `other`'s labels after ours.
    pub fn join(mut self, other: MergedPreference) -> Self {
        self.0.extend(other.0);
        self
    }

    pub fn labels(&self) -> &[PreferenceLabel] {
        &self.0
    }

    pub fn first(&self) -> &PreferenceLabel {
        &self.0[0]
    }

    pub fn contains(&self, label: &PreferenceLabel) -> bool {
        self.0.contains(label)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for MergedPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, l) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("+")?;
            }
            write!(f, "{l}")?;
        }
        Ok(())
    }
}

/// Which labels may share a slot when free hours are scarce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatibilityRelation {
    map: HashMap<PreferenceLabel, Vec<PreferenceLabel>>,
}

impl CompatibilityRelation {
    pub fn empty() -> Self {
        Self { map: HashMap::new() }
    }

    /// Declare `b` mergeable into `a` (one direction).
    pub fn with_pair(mut self, a: PreferenceLabel, b: PreferenceLabel) -> Self {
        let list = self.map.entry(a).or_default();
        if !list.contains(&b) {
            list.push(b);
        }
        self
    }

    pub fn partners(&self, label: &PreferenceLabel) -> &[PreferenceLabel] {
        self.map.get(label).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Labels are compatible if either lists the other.
    pub fn compatible(&self, a: &PreferenceLabel, b: &PreferenceLabel) -> bool {
        self.partners(a).contains(b) || self.partners(b).contains(a)
    }

    /// Groups are compatible if any pair of their constituents is.
    pub fn groups_compatible(&self, a: &MergedPreference, b: &MergedPreference) -> bool {
        a.labels()
            .iter()
            .any(|x| b.labels().iter().any(|y| self.compatible(x, y)))
    }
}

impl Default for CompatibilityRelation {
    fn default() -> Self {
        use PreferenceLabel::*;
        Self::empty()
            .with_pair(Sleep, Relaxation)
            .with_pair(Relaxation, Sleep)
            .with_pair(Relaxation, Hydration)
            .with_pair(PhysicalActivity, Hydration)
            .with_pair(PhysicalActivity, Relaxation)
            .with_pair(Meal, Hydration)
            .with_pair(Meal, Relaxation)
            .with_pair(SocialOutdoor, Hydration)
            .with_pair(FocusedWork, Hydration)
            .with_pair(FocusedWork, Relaxation)
    }
}
