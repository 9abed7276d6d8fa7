//! Scheduled activity blocks and their coarse main type.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::preference::MergedPreference;

/// Coarse classification used to stop heavy activities repeating in a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MainType {
    Sleep,
    Meal,
    Exercise,
    Mindfulness,
    Work,
    Outdoor,
    Other,
}

impl MainType {
    /// Mindfulness and other blocks may appear any number of times.
    pub fn is_repeatable(self) -> bool {
        matches!(self, MainType::Mindfulness | MainType::Other)
    }

    /// Lower wins when several constituents share one block.
    fn priority(self) -> u8 {
        match self {
            MainType::Sleep => 0,
            MainType::Meal => 1,
            MainType::Exercise => 2,
            MainType::Mindfulness => 3,
            MainType::Work => 4,
            MainType::Outdoor => 5,
            MainType::Other => 6,
        }
    }

    /// Main type of a composite block.
    pub fn dominant(types: impl IntoIterator<Item = MainType>) -> MainType {
        types
            .into_iter()
            .min_by_key(|t| t.priority())
            .unwrap_or(MainType::Other)
    }
}

impl fmt::Display for MainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MainType::Sleep => "sleep",
            MainType::Meal => "meal",
            MainType::Exercise => "exercise",
            MainType::Mindfulness => "mindfulness",
            MainType::Work => "work",
            MainType::Outdoor => "outdoor",
            MainType::Other => "other",
        })
    }
}

/// The atomic scheduled unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityBlock {
    /// `None` for reserved and auto-filled blocks.
    pub source: Option<MergedPreference>,
    pub activity: String,
    pub duration: String,
    pub rationale: String,
    pub main_type: MainType,
}

impl ActivityBlock {
    pub fn new(
        activity: impl Into<String>,
        duration: impl Into<String>,
        rationale: impl Into<String>,
        main_type: MainType,
    ) -> Self {
        Self {
            source: None,
            activity: activity.into(),
            duration: duration.into(),
            rationale: rationale.into(),
            main_type,
        }
    }

    pub fn with_source(mut self, source: MergedPreference) -> Self {
        self.source = Some(source);
        self
    }

    /// Fold several constituent blocks into one.
    ///
    /// Activities join with `" + "`, durations with `", "`, rationales with a space.
    pub fn compose(parts: Vec<ActivityBlock>) -> Option<ActivityBlock> {
        if parts.len() <= 1 {
            return parts.into_iter().next();
        }
        let main_type = MainType::dominant(parts.iter().map(|p| p.main_type));
        let activity = parts.iter().map(|p| p.activity.as_str()).collect::<Vec<_>>().join(" + ");
        let duration = parts.iter().map(|p| p.duration.as_str()).collect::<Vec<_>>().join(", ");
        let rationale = parts.iter().map(|p| p.rationale.as_str()).collect::<Vec<_>>().join(" ");
        Some(ActivityBlock::new(activity, duration, rationale, main_type))
    }

    /// Replace the visible text in place, keeping the source.
    pub fn downgrade(
        &mut self,
        activity: &str,
        duration: &str,
        rationale: &str,
        main_type: MainType,
    ) {
        self.activity = activity.to_string();
        self.duration = duration.to_string();
        self.rationale = rationale.to_string();
        self.main_type = main_type;
    }

    pub fn append_rationale(&mut self, note: &str) {
        if self.rationale.is_empty() {
            self.rationale = note.to_string();
        } else {
            self.rationale.push(' ');
            self.rationale.push_str(note);
        }
    }
}
