//! Schedule generation: compress -> place -> resolve -> default-fill -> normalize.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::block::{ActivityBlock, MainType};
use crate::catalog::Catalogs;
use crate::compress::compress;
use crate::context::{EnergyLevel, Mood, UserContext};
use crate::normalize::normalize;
use crate::placement::{needs_night_placement, place};
use crate::preference::{CompatibilityRelation, PreferenceLabel};
use crate::resolver::{ActivityResolver, night_sleep};
use crate::time::{FreeHours, Hour};

/// Hour -> ordered, non-empty list of blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule(BTreeMap<Hour, Vec<ActivityBlock>>);

impl Schedule {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, hour: Hour) -> Option<&[ActivityBlock]> {
        self.0.get(&hour).map(Vec::as_slice)
    }

    pub fn hours(&self) -> impl Iterator<Item = Hour> + '_ {
        self.0.keys().copied()
    }

    /// Ascending by hour.
    pub fn iter(&self) -> impl Iterator<Item = (Hour, &[ActivityBlock])> + '_ {
        self.0.iter().map(|(h, bs)| (*h, bs.as_slice()))
    }

    pub fn blocks(&self) -> impl Iterator<Item = &ActivityBlock> + '_ {
        self.0.values().flatten()
    }

    pub fn count_type(&self, main_type: MainType) -> usize {
        self.blocks().filter(|b| b.main_type == main_type).count()
    }

    pub fn into_inner(self) -> BTreeMap<Hour, Vec<ActivityBlock>> {
        self.0
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlannerOptions {
    /// Append energy/mood defaults after the declared preferences.
    pub baseline_fill: bool,
    pub relation: CompatibilityRelation,
}

impl PlannerOptions {
    pub fn with_baseline_fill(mut self, on: bool) -> Self {
        self.baseline_fill = on;
        self
    }

    pub fn with_relation(mut self, relation: CompatibilityRelation) -> Self {
        self.relation = relation;
        self
    }
}

/// Energy pattern adjusted by mood.
pub fn baseline_preferences(ctx: &UserContext) -> Vec<PreferenceLabel> {
    use PreferenceLabel::*;

    let mut base = match ctx.energy {
        EnergyLevel::VeryLow | EnergyLevel::Low => vec![Relaxation, Meal, Sleep],
        EnergyLevel::Moderate => vec![Relaxation, Meal, Sleep, FocusedWork, PhysicalActivity],
        EnergyLevel::High => vec![FocusedWork, PhysicalActivity, Meal],
    };

    let front = match ctx.mood {
        Mood::Tired | Mood::Stressed => vec![Sleep, Relaxation],
        Mood::Motivated => vec![FocusedWork, PhysicalActivity],
        Mood::Relaxed => {
            if !base.contains(&Relaxation) {
                base.push(Relaxation);
            }
            Vec::new()
        }
    };
    if front.is_empty() {
        return base;
    }
    let rest = base.into_iter().filter(|p| !front.contains(p));
    front.iter().cloned().chain(rest).collect()
}

pub fn generate_schedule<R: Rng + ?Sized>(
    ctx: &UserContext,
    free: &FreeHours,
    declared: &[PreferenceLabel],
    catalogs: &Catalogs,
    options: &PlannerOptions,
    rng: &mut R,
) -> Schedule {
    if free.is_empty() {
        debug!("no free hours; empty schedule");
        return Schedule::default();
    }

    let mut ordered: Vec<PreferenceLabel> = Vec::with_capacity(declared.len());
    for p in declared {
        if !ordered.contains(p) {
            ordered.push(p.clone());
        }
    }

    // Only declared preferences can push work into the night.
    let required = ordered.iter().filter(|p| !p.is_hydration()).count();
    let force_night = needs_night_placement(required, free);

    // Baseline entries never displace the reserved night sleep.
    let has_daytime = free.daytime().next().is_some();
    if options.baseline_fill && (force_night || has_daytime) {
        for p in baseline_preferences(ctx) {
            if !ordered.contains(&p) {
                ordered.push(p);
            }
        }
    } else if options.baseline_fill {
        debug!("only night hours free; baseline fill skipped");
    }

    let want_hydration = ordered.iter().any(PreferenceLabel::is_hydration);
    ordered.retain(|p| !p.is_hydration());

    let merged = compress(&ordered, free.len(), &options.relation);
    let placement = place(&merged, free, force_night);
    debug!(groups = merged.len(), force_night, want_hydration, "placement done");

    let mut resolver = ActivityResolver::new(ctx, catalogs, free, want_hydration, rng);
    let mut day: BTreeMap<Hour, Vec<ActivityBlock>> = BTreeMap::new();
    for hour in free.iter() {
        let mut blocks = Vec::new();
        if hour.is_night() {
            blocks.push(night_sleep());
        }
        for group in placement.get(&hour).into_iter().flatten() {
            blocks.extend(resolver.resolve(hour, group));
        }
        if blocks.is_empty() {
            blocks.push(resolver.default_fill(hour));
        }
        day.insert(hour, blocks);
    }

    let schedule = Schedule(normalize(day));
    info!(hours = schedule.len(), blocks = schedule.blocks().count(), "schedule generated");
    schedule
}

/// Generation with no declared preferences.
pub fn auto_schedule<R: Rng + ?Sized>(
    ctx: &UserContext,
    free: &FreeHours,
    catalogs: &Catalogs,
    options: &PlannerOptions,
    rng: &mut R,
) -> Schedule {
    generate_schedule(ctx, free, &[], catalogs, options, rng)
}
