//! Activity resolver: turns a placed preference group into a concrete block.
//!
//! Catalog picks go through the sampling ladder; every pick has a text
//! fallback so an empty catalog still yields a full day.

use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::BTreeSet;
use tracing::debug;

use crate::block::{ActivityBlock, MainType};
use crate::catalog::{CatalogQuery, Catalogs, Exclusions, Intensity};
use crate::context::{EnergyLevel, Goal, HungerLevel, Mood, UserContext};
use crate::preference::{MergedPreference, PreferenceLabel};
use crate::time::{FreeHours, Hour};
use crate::window::MealType;

pub const HYDRATION_NOTE: &str = "And remember to stay hydrated: sip water regularly!";

/// Hours between consecutive free hours that leave room for a proper nap.
const NAP_GAP: u8 = 5;

const MINDFULNESS_FALLBACK: [&str; 3] = [
    "3-minute breathing exercise",
    "Child's Pose - 5 min",
    "Guided body-scan - 10 min",
];
const OUTDOOR_OPTIONS: [&str; 4] = [
    "Go for a walk with a friend",
    "Play a short game (e.g. badminton)",
    "Meet a friend for coffee",
    "Outdoor walk/jog",
];
const GENERIC_EXERCISE: [&str; 2] = ["Brisk Walk - 20 min", "Bodyweight circuit - 20 min"];

/// Non-food alternatives offered when the user is not hungry.
const NOT_HUNGRY_OPTIONS: [(&str, MainType); 5] = [
    ("Read a book or an article", MainType::Other),
    ("Write a short journal entry", MainType::Other),
    ("Plan your next day or set tomorrow's goals", MainType::Other),
    ("Do a 5-minute breathing exercise", MainType::Mindfulness),
    ("Light stretching or posture correction", MainType::Other),
];

/// The sleep block every night hour carries.
pub fn night_sleep() -> ActivityBlock {
    ActivityBlock::new(
        "Sleep",
        "Full night (when possible)",
        "Night hours are best used for sleep.",
        MainType::Sleep,
    )
}

struct Part {
    block: ActivityBlock,
    hydrate: bool,
}

impl Part {
    fn hydrating(block: ActivityBlock) -> Self {
        Self { block, hydrate: true }
    }

    fn plain(block: ActivityBlock) -> Self {
        Self { block, hydrate: false }
    }
}

/// Per-call resolver state: the catalog snapshot, names already used today
/// and the hours that already carry a hydration note.
pub struct ActivityResolver<'a, R: Rng + ?Sized> {
    ctx: &'a UserContext,
    catalogs: &'a Catalogs,
    free: &'a FreeHours,
    want_hydration: bool,
    used: Exclusions,
    hydrated: BTreeSet<Hour>,
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> ActivityResolver<'a, R> {
    pub fn new(
        ctx: &'a UserContext,
        catalogs: &'a Catalogs,
        free: &'a FreeHours,
        want_hydration: bool,
        rng: &'a mut R,
    ) -> Self {
        Self {
            ctx,
            catalogs,
            free,
            want_hydration,
            used: Exclusions::new(),
            hydrated: BTreeSet::new(),
            rng,
        }
    }

    /// Catalog names picked so far.
    pub fn used(&self) -> &Exclusions {
        &self.used
    }

    /// Resolve a placed group into one (possibly composite) block.
    ///
    /// In a night hour the group's Sleep constituent is covered by the
    /// reserved sleep block; a group made only of Sleep yields `None`.
    pub fn resolve(&mut self, hour: Hour, group: &MergedPreference) -> Option<ActivityBlock> {
        let rest_instead_of_exercise = group.contains(&PreferenceLabel::PhysicalActivity)
            && group.contains(&PreferenceLabel::Relaxation)
            && self.ctx.needs_rest();

        let mut parts = Vec::with_capacity(group.len());
        for label in group.labels() {
            if hour.is_night() && *label == PreferenceLabel::Sleep {
                continue;
            }
            if let Some(part) = self.resolve_label(hour, label, rest_instead_of_exercise) {
                parts.push(part);
            }
        }

        let hydrate = parts.iter().any(|p| p.hydrate);
        let mut block = ActivityBlock::compose(parts.into_iter().map(|p| p.block).collect())?
            .with_source(group.clone());

        if self.want_hydration && hydrate && self.hydrated.insert(hour) {
            block.append_rationale(HYDRATION_NOTE);
        }
        debug!(hour = %hour, group = %group, main_type = %block.main_type, "resolved block");
        Some(block)
    }

    /// Auto-selected block for a free hour no preference was placed in.
    pub fn default_fill(&mut self, hour: Hour) -> ActivityBlock {
        if hour.is_night() {
            return night_sleep();
        }
        match self.ctx.energy {
            EnergyLevel::VeryLow | EnergyLevel::Low => {
                let ex = self.mindfulness_pick();
                ActivityBlock::new(
                    format!("Mindfulness: {ex}"),
                    "10-20 min",
                    "Short mindfulness to restore energy.",
                    MainType::Mindfulness,
                )
            }
            EnergyLevel::Moderate if self.ctx.mood == Mood::Motivated => ActivityBlock::new(
                "Focused work session (25-45 min)",
                "25-45 min",
                "Good time for focused productive work.",
                MainType::Work,
            ),
            EnergyLevel::Moderate => {
                let (activity, rationale) = self.exercise_pick();
                ActivityBlock::new(activity, "20-30 min", rationale, MainType::Exercise)
            }
            EnergyLevel::High => {
                let (activity, rationale) = self.exercise_pick();
                ActivityBlock::new(activity, "30-45 min", rationale, MainType::Exercise)
            }
        }
    }

    fn resolve_label(
        &mut self,
        hour: Hour,
        label: &PreferenceLabel,
        rest_instead_of_exercise: bool,
    ) -> Option<Part> {
        let part = match label {
            PreferenceLabel::Relaxation => {
                let ex = self.mindfulness_pick();
                Part::hydrating(ActivityBlock::new(
                    format!("Mindfulness: {ex}"),
                    "10-20 min",
                    "Short yoga/breathing practice to restore calm and focus.",
                    MainType::Mindfulness,
                ))
            }
            PreferenceLabel::Sleep => Part::hydrating(self.sleep(hour)),
            PreferenceLabel::Meal => self.meal(hour),
            PreferenceLabel::PhysicalActivity if rest_instead_of_exercise => {
                debug!(hour = %hour, "exercise replaced by mindfulness");
                let ex = self.mindfulness_pick();
                Part::hydrating(ActivityBlock::new(
                    format!("Mindfulness: {ex}"),
                    "10-20 min",
                    "We prioritize light mindfulness when tired/stressed.",
                    MainType::Mindfulness,
                ))
            }
            PreferenceLabel::PhysicalActivity => Part::hydrating(self.exercise()),
            PreferenceLabel::SocialOutdoor => {
                let pick = self.pick_text(&OUTDOOR_OPTIONS);
                Part::hydrating(ActivityBlock::new(
                    pick,
                    "30-60 min",
                    "Social/outdoor time improves mood and energy.",
                    MainType::Outdoor,
                ))
            }
            PreferenceLabel::FocusedWork => Part::hydrating(ActivityBlock::new(
                "Focused work/session (use Pomodoro)",
                "45-90 min",
                "Good slot for concentrated productive work.",
                MainType::Work,
            )),
            PreferenceLabel::Custom(text) => Part::plain(ActivityBlock::new(
                text.as_str(),
                "20-30 min",
                "Suggested activity.",
                MainType::Other,
            )),
            PreferenceLabel::Hydration => return None,
        };
        Some(part)
    }

    fn sleep(&self, hour: Hour) -> ActivityBlock {
        if hour.is_night() {
            ActivityBlock::new(
                "Sleep (night)",
                "as night sleep",
                "Night period: recommended to sleep if possible.",
                MainType::Sleep,
            )
        } else if self.free.has_gap_of(NAP_GAP) {
            ActivityBlock::new("Nap", "20-30 min", "A short nap to restore energy.", MainType::Sleep)
        } else {
            ActivityBlock::new(
                "Short Rest",
                "10-15 min",
                "Short rest to recharge when long nap not possible.",
                MainType::Sleep,
            )
        }
    }

    fn meal(&mut self, hour: Hour) -> Part {
        let meal_type = match self.ctx.hunger {
            HungerLevel::NotHungry if !self.ctx.meal_override => return self.not_hungry(),
            HungerLevel::SlightlyHungry => MealType::Snack,
            _ => MealType::for_hour(hour),
        };

        let query = CatalogQuery::new()
            .goal(self.ctx.goal.filter())
            .tag(meal_type.as_str());
        let mut picks: Vec<String> = self
            .catalogs
            .foods
            .sample_many(&query, &self.used, 2, &mut *self.rng)
            .into_iter()
            .map(|e| e.name.clone())
            .collect();
        if picks.is_empty() {
            picks = self.fallback_meal();
        }
        self.used.extend(picks.iter().cloned());

        let text = picks.join(" + ");
        let rationale = format!(
            "Suggested {} aligned with your goal ({}). Example: {text}.",
            meal_type.as_str(),
            self.ctx.goal
        );
        Part::hydrating(ActivityBlock::new(text, "20-45 min", rationale, MainType::Meal))
    }

    fn fallback_meal(&self) -> Vec<String> {
        let choices: &[&str] = match self.ctx.goal {
            Goal::Gain => &["Oats + Peanut Butter", "Banana + Nuts"],
            Goal::Lose => &["Grilled Veg Salad", "Quinoa & Chickpeas"],
            Goal::Maintain => &["Mixed Grain Bowl", "Yogurt + Fruit"],
        };
        let fresh: Vec<String> = choices
            .iter()
            .filter(|c| !self.used.contains(**c))
            .take(2)
            .map(|c| c.to_string())
            .collect();
        if fresh.is_empty() {
            choices.iter().take(1).map(|c| c.to_string()).collect()
        } else {
            fresh
        }
    }

    fn not_hungry(&mut self) -> Part {
        let (activity, main_type) = NOT_HUNGRY_OPTIONS
            .choose(&mut *self.rng)
            .copied()
            .unwrap_or(NOT_HUNGRY_OPTIONS[0]);
        Part::plain(ActivityBlock::new(
            activity,
            "15-30 min",
            "You're not hungry, so use this time for self-growth or relaxation.",
            main_type,
        ))
    }

    fn exercise(&mut self) -> ActivityBlock {
        let (ex, rationale) = self.exercise_pick();
        if self.ctx.energy.is_low() {
            return ActivityBlock::new(
                format!("Light Exercise: {ex}"),
                "10-20 min",
                "Energy low, keep exercise light and focused on movement.",
                MainType::Exercise,
            );
        }
        let duration = match self.ctx.goal {
            Goal::Lose => "30-45 min (cardio/hiit)",
            Goal::Gain => "30-45 min (strength focus)",
            Goal::Maintain => "30-45 min",
        };
        ActivityBlock::new(ex, duration, rationale, MainType::Exercise)
    }

    /// Goal-appropriate exercise text and its rationale.
    fn exercise_pick(&mut self) -> (String, String) {
        let goal = self.ctx.goal;
        let query = match goal {
            Goal::Lose => CatalogQuery::new()
                .categories(&["Cardio", "HIIT", "Circuit", "Strength"])
                .intensities(&[Intensity::High, Intensity::Moderate]),
            Goal::Gain => CatalogQuery::new()
                .categories(&["Strength", "Resistance"])
                .intensities(&[Intensity::Low, Intensity::Moderate]),
            Goal::Maintain => {
                CatalogQuery::new().categories(&["Cardio", "Strength", "Yoga", "Flexibility", "Circuit"])
            }
        }
        .goal(goal.filter());

        if self.catalogs.exercises.is_empty() {
            let (options, rationale): (&[&str], &str) = match goal {
                Goal::Lose => (
                    &["Burpees - 10 min", "HIIT circuit - 20 min", "Brisk run - 20 min"],
                    "High-intensity cardio like burpees is great for burning calories.",
                ),
                Goal::Gain => (
                    &["Dumbbell full-body - 30 min", "Resistance band routine - 20 min"],
                    "Strength training focusing on progressive overload helps muscle gain.",
                ),
                Goal::Maintain => (
                    &["Mixed circuit - 25 min", "Moderate jog + bodyweight - 25 min"],
                    "Balanced mix to maintain fitness.",
                ),
            };
            return (self.pick_text(options).to_string(), rationale.to_string());
        }

        if goal == Goal::Gain {
            if let Some(name) = self.sample_exercise_filtered(&query) {
                return (
                    name,
                    "Focus on strength with controlled moderate intensity.".to_string(),
                );
            }
            let support = CatalogQuery::new().categories(&["Yoga", "Flexibility"]);
            if let Some(name) = self.sample_exercise_filtered(&support) {
                return (name, "Include flexibility/yoga for recovery.".to_string());
            }
        }

        let Some(name) = self.sample_exercise(&query) else {
            let pick = self.pick_text(&GENERIC_EXERCISE);
            return (pick.to_string(), "Try a short mixed session.".to_string());
        };
        match goal {
            Goal::Lose => (
                format!("{name} (high/mod intensity)"),
                format!("Try cardio or strength work like {name}."),
            ),
            Goal::Gain => (
                name,
                "Focus on strength with controlled moderate intensity. Include flexibility/yoga for recovery."
                    .to_string(),
            ),
            Goal::Maintain => (
                name,
                "A balanced mix across cardio, strength and flexibility keeps you fit.".to_string(),
            ),
        }
    }

    fn mindfulness_pick(&mut self) -> String {
        let query = CatalogQuery::new()
            .categories(&["Yoga", "Breath", "Meditat", "Flex"])
            .intensities(&[Intensity::Low, Intensity::Moderate]);
        match self.sample_exercise(&query) {
            Some(name) => name,
            None => self.pick_text(&MINDFULNESS_FALLBACK).to_string(),
        }
    }

    fn sample_exercise(&mut self, query: &CatalogQuery) -> Option<String> {
        let name = self
            .catalogs
            .exercises
            .sample(query, &self.used, &mut *self.rng)?
            .name
            .clone();
        self.used.insert(name.clone());
        Some(name)
    }

    fn sample_exercise_filtered(&mut self, query: &CatalogQuery) -> Option<String> {
        let name = self
            .catalogs
            .exercises
            .sample_filtered(query, &self.used, &mut *self.rng)?
            .name
            .clone();
        self.used.insert(name.clone());
        Some(name)
    }

    fn pick_text(&mut self, options: &[&'static str]) -> &'static str {
        options.choose(&mut *self.rng).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ActivityCatalog, CatalogEntry};
    use crate::time::parse_free_hours;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use PreferenceLabel::*;

    fn h(v: u8) -> Hour {
        Hour::new(v).unwrap()
    }

    fn group(labels: &[PreferenceLabel]) -> MergedPreference {
        labels
            .iter()
            .cloned()
            .map(MergedPreference::single)
            .reduce(MergedPreference::join)
            .unwrap()
    }

    fn catalogs() -> Catalogs {
        let foods = ActivityCatalog::new(vec![
            CatalogEntry::new("Oatmeal", "Grain").with_goal(Goal::Lose).with_tag("Breakfast"),
            CatalogEntry::new("Lentil Soup", "Legume").with_goal(Goal::Lose).with_tag("Dinner"),
            CatalogEntry::new("Greek Yogurt", "Dairy").with_tag("Snack"),
        ]);
        let exercises = ActivityCatalog::new(vec![
            CatalogEntry::new("Jump Rope", "Cardio").with_intensity(Intensity::High),
            CatalogEntry::new("Deadlift", "Strength").with_intensity(Intensity::Moderate),
            CatalogEntry::new("Box Breathing", "Breathing").with_intensity(Intensity::Low),
        ]);
        Catalogs::new(foods, exercises)
    }

    fn ctx(energy: EnergyLevel, hunger: HungerLevel, mood: Mood) -> UserContext {
        UserContext::new(Goal::Lose, energy, hunger, mood)
    }

    #[test]
    fn test_safety_override_yields_mindfulness() {
        let free = parse_free_hours("9,16").unwrap();
        let cats = catalogs();
        let c = ctx(EnergyLevel::High, HungerLevel::Hungry, Mood::Stressed);
        let mut rng = StdRng::seed_from_u64(11);
        let mut r = ActivityResolver::new(&c, &cats, &free, false, &mut rng);
        let b = r.resolve(h(16), &group(&[PhysicalActivity, Relaxation])).unwrap();
        assert_eq!(b.main_type, MainType::Mindfulness);
        assert!(b.rationale.contains("tired/stressed"));
    }

    #[test]
    fn test_low_energy_alone_triggers_safety_override() {
        let free = parse_free_hours("16").unwrap();
        let cats = catalogs();
        for mood in [Mood::Motivated, Mood::Relaxed] {
            for energy in [EnergyLevel::Low, EnergyLevel::VeryLow] {
                let c = ctx(energy, HungerLevel::Hungry, mood);
                let mut rng = StdRng::seed_from_u64(21);
                let mut r = ActivityResolver::new(&c, &cats, &free, false, &mut rng);
                let b = r.resolve(h(16), &group(&[PhysicalActivity, Relaxation])).unwrap();
                assert_eq!(b.main_type, MainType::Mindfulness, "{energy} / {mood}");
                assert!(!b.activity.contains("Light Exercise"));
            }
        }
    }

    #[test]
    fn test_gain_falls_back_to_flexibility_before_anything_else() {
        let free = parse_free_hours("17").unwrap();
        let exercises = ActivityCatalog::new(vec![
            CatalogEntry::new("Jump Rope", "Cardio").with_intensity(Intensity::High),
            CatalogEntry::new("Hamstring Stretch", "Flexibility").with_intensity(Intensity::Low),
        ]);
        let cats = Catalogs::new(ActivityCatalog::empty(), exercises);
        let c = UserContext::new(Goal::Gain, EnergyLevel::High, HungerLevel::Hungry, Mood::Motivated);
        for seed in 0..8 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut r = ActivityResolver::new(&c, &cats, &free, false, &mut rng);
            let b = r.resolve(h(17), &group(&[PhysicalActivity])).unwrap();
            assert_eq!(b.activity, "Hamstring Stretch");
            assert_eq!(b.rationale, "Include flexibility/yoga for recovery.");
        }
    }

    #[test]
    fn test_exercise_respects_low_energy() {
        let free = parse_free_hours("16").unwrap();
        let cats = catalogs();
        let c = ctx(EnergyLevel::Low, HungerLevel::Hungry, Mood::Relaxed);
        let mut rng = StdRng::seed_from_u64(2);
        let mut r = ActivityResolver::new(&c, &cats, &free, false, &mut rng);
        let b = r.resolve(h(16), &group(&[PhysicalActivity])).unwrap();
        assert_eq!(b.main_type, MainType::Exercise);
        assert!(b.activity.starts_with("Light Exercise: "));
        assert_eq!(b.duration, "10-20 min");
    }

    #[test]
    fn test_meal_uses_goal_and_meal_type() {
        let free = parse_free_hours("9").unwrap();
        let cats = catalogs();
        let c = ctx(EnergyLevel::Moderate, HungerLevel::VeryHungry, Mood::Relaxed);
        let mut rng = StdRng::seed_from_u64(4);
        let mut r = ActivityResolver::new(&c, &cats, &free, false, &mut rng);
        let b = r.resolve(h(9), &group(&[Meal])).unwrap();
        assert_eq!(b.main_type, MainType::Meal);
        assert_eq!(b.activity, "Oatmeal");
        assert!(b.rationale.starts_with("Suggested Breakfast aligned with your goal (lose)"));
        assert!(r.used().contains("Oatmeal"));
    }

    #[test]
    fn test_not_hungry_skips_food_unless_overridden() {
        let free = parse_free_hours("10").unwrap();
        let cats = catalogs();
        let c = ctx(EnergyLevel::Moderate, HungerLevel::NotHungry, Mood::Relaxed);
        let mut rng = StdRng::seed_from_u64(8);
        let mut r = ActivityResolver::new(&c, &cats, &free, true, &mut rng);
        let b = r.resolve(h(10), &group(&[Meal])).unwrap();
        assert_ne!(b.main_type, MainType::Meal);
        assert!(!b.rationale.contains(HYDRATION_NOTE));

        let c = c.with_meal_override(true);
        let mut rng = StdRng::seed_from_u64(8);
        let mut r = ActivityResolver::new(&c, &cats, &free, false, &mut rng);
        let b = r.resolve(h(10), &group(&[Meal])).unwrap();
        assert_eq!(b.main_type, MainType::Meal);
    }

    #[test]
    fn test_sleep_variants() {
        let cats = Catalogs::default();
        let c = UserContext::default();
        let mut rng = StdRng::seed_from_u64(0);

        let wide = parse_free_hours("8,15").unwrap();
        let mut r = ActivityResolver::new(&c, &cats, &wide, false, &mut rng);
        assert_eq!(r.resolve(h(15), &group(&[Sleep])).unwrap().activity, "Nap");

        let tight = parse_free_hours("14,15").unwrap();
        let mut r = ActivityResolver::new(&c, &cats, &tight, false, &mut rng);
        assert_eq!(r.resolve(h(15), &group(&[Sleep])).unwrap().activity, "Short Rest");
    }

    #[test]
    fn test_night_sleep_is_absorbed() {
        let free = parse_free_hours("2,10").unwrap();
        let cats = Catalogs::default();
        let c = UserContext::default();
        let mut rng = StdRng::seed_from_u64(0);
        let mut r = ActivityResolver::new(&c, &cats, &free, false, &mut rng);
        assert!(r.resolve(h(2), &group(&[Sleep])).is_none());
        let b = r.resolve(h(2), &group(&[Relaxation, Sleep])).unwrap();
        assert_eq!(b.main_type, MainType::Mindfulness);
    }

    #[test]
    fn test_hydration_note_once_per_hour() {
        let free = parse_free_hours("12").unwrap();
        let cats = Catalogs::default();
        let c = UserContext::default();
        let mut rng = StdRng::seed_from_u64(6);
        let mut r = ActivityResolver::new(&c, &cats, &free, true, &mut rng);
        let a = r.resolve(h(12), &group(&[FocusedWork])).unwrap();
        let b = r.resolve(h(12), &group(&[SocialOutdoor])).unwrap();
        assert!(a.rationale.ends_with(HYDRATION_NOTE));
        assert!(!b.rationale.contains(HYDRATION_NOTE));
    }

    #[test]
    fn test_custom_label_placeholder() {
        let free = parse_free_hours("11").unwrap();
        let cats = Catalogs::default();
        let c = UserContext::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut r = ActivityResolver::new(&c, &cats, &free, true, &mut rng);
        let b = r.resolve(h(11), &group(&[Custom("Piano practice".into())])).unwrap();
        assert_eq!(b.activity, "Piano practice");
        assert_eq!(b.duration, "20-30 min");
        assert_eq!(b.main_type, MainType::Other);
        assert!(!b.rationale.contains(HYDRATION_NOTE));
    }

    #[test]
    fn test_empty_catalogs_fall_back_to_text() {
        let free = parse_free_hours("8,17").unwrap();
        let cats = Catalogs::default();
        let c = ctx(EnergyLevel::High, HungerLevel::Hungry, Mood::Motivated);
        let mut rng = StdRng::seed_from_u64(3);
        let mut r = ActivityResolver::new(&c, &cats, &free, false, &mut rng);
        let meal = r.resolve(h(8), &group(&[Meal])).unwrap();
        assert_eq!(meal.activity, "Grilled Veg Salad + Quinoa & Chickpeas");
        let ex = r.resolve(h(17), &group(&[PhysicalActivity])).unwrap();
        assert_eq!(ex.main_type, MainType::Exercise);
        assert!(!ex.activity.is_empty());
    }

    #[test]
    fn test_default_fill_by_energy_and_mood() {
        let free = parse_free_hours("3,12").unwrap();
        let cats = catalogs();
        let mut rng = StdRng::seed_from_u64(10);

        let c = ctx(EnergyLevel::Moderate, HungerLevel::Hungry, Mood::Motivated);
        let mut r = ActivityResolver::new(&c, &cats, &free, false, &mut rng);
        assert_eq!(r.default_fill(h(3)), night_sleep());
        assert_eq!(r.default_fill(h(12)).main_type, MainType::Work);

        let c = ctx(EnergyLevel::VeryLow, HungerLevel::Hungry, Mood::Relaxed);
        let mut r = ActivityResolver::new(&c, &cats, &free, false, &mut rng);
        assert_eq!(r.default_fill(h(12)).main_type, MainType::Mindfulness);

        let c = ctx(EnergyLevel::High, HungerLevel::Hungry, Mood::Relaxed);
        let mut r = ActivityResolver::new(&c, &cats, &free, false, &mut rng);
        assert_eq!(r.default_fill(h(12)).main_type, MainType::Exercise);
    }
}
