//! Natural time windows: where each preference type conventionally belongs.

use crate::preference::PreferenceLabel;
use crate::time::Hour;

/// Inclusive hour range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourRange {
    pub start: u8,
    pub end: u8,
}

impl HourRange {
    pub const fn new(start: u8, end: u8) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, h: Hour) -> bool {
        (self.start..=self.end).contains(&h.value())
    }
}

pub const NIGHT: HourRange = HourRange::new(0, 5);
pub const BREAKFAST: HourRange = HourRange::new(8, 10);
pub const LUNCH: HourRange = HourRange::new(13, 15);
pub const SNACK: HourRange = HourRange::new(16, 18);
pub const DINNER: HourRange = HourRange::new(19, 21);
const EXERCISE_PEAK: HourRange = HourRange::new(16, 19);
const EXERCISE_DAY: HourRange = HourRange::new(7, 21);
const MORNING: HourRange = HourRange::new(6, 12);
const AFTERNOON_NAP: HourRange = HourRange::new(13, 17);
const SOCIAL_DAY: HourRange = HourRange::new(11, 22);

/// Preferred and fallback ranges for one label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NaturalWindow {
    pub preferred: &'static [HourRange],
    pub fallback: &'static [HourRange],
    /// Fallback ranges only apply when night placement is forced.
    pub fallback_needs_night: bool,
}

const NONE: NaturalWindow = NaturalWindow {
    preferred: &[],
    fallback: &[],
    fallback_needs_night: false,
};

impl NaturalWindow {
    pub fn for_label(label: &PreferenceLabel) -> NaturalWindow {
        match label {
            PreferenceLabel::Meal => NaturalWindow {
                preferred: &[BREAKFAST, LUNCH, DINNER, SNACK],
                fallback: &[],
                fallback_needs_night: false,
            },
            PreferenceLabel::PhysicalActivity => NaturalWindow {
                preferred: &[EXERCISE_PEAK],
                fallback: &[EXERCISE_DAY],
                fallback_needs_night: false,
            },
            PreferenceLabel::Relaxation => NaturalWindow {
                preferred: &[MORNING],
                fallback: &[NIGHT],
                fallback_needs_night: false,
            },
            PreferenceLabel::Sleep => NaturalWindow {
                preferred: &[AFTERNOON_NAP],
                fallback: &[NIGHT],
                fallback_needs_night: true,
            },
            PreferenceLabel::SocialOutdoor | PreferenceLabel::FocusedWork => NaturalWindow {
                preferred: &[SOCIAL_DAY],
                fallback: &[],
                fallback_needs_night: false,
            },
            PreferenceLabel::Hydration | PreferenceLabel::Custom(_) => NONE,
        }
    }

    pub fn prefers(&self, h: Hour) -> bool {
        self.preferred.iter().any(|r| r.contains(h))
    }

    pub fn falls_back_to(&self, h: Hour, force_night: bool) -> bool {
        if self.fallback_needs_night && !force_night {
            return false;
        }
        self.fallback.iter().any(|r| r.contains(h))
    }
}

/// Meal kind implied by the hour; anything outside a main meal window is a snack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub fn for_hour(h: Hour) -> MealType {
        if BREAKFAST.contains(h) {
            MealType::Breakfast
        } else if LUNCH.contains(h) {
            MealType::Lunch
        } else if DINNER.contains(h) {
            MealType::Dinner
        } else {
            MealType::Snack
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
        }
    }
}
