//! Window placement: assign each merged preference to a concrete free hour.
//!
//! Night hours (00-05) hold a reserved sleep block. Preferences only land there
//! when capacity forces it, or when no daytime hour is left.

use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

use crate::preference::{MergedPreference, PreferenceLabel};
use crate::time::{FreeHours, Hour};
use crate::window::NaturalWindow;

/// Hour -> merged preferences placed there, in placement order.
pub type Placement = BTreeMap<Hour, Vec<MergedPreference>>;

/// Night placement is forced when the declared (non-hydration) preferences
/// cannot fit in the daytime hours even at two per hour.
pub fn needs_night_placement(required_prefs: usize, free: &FreeHours) -> bool {
    required_prefs > 2 * free.daytime().count()
}

pub fn place(merged: &[MergedPreference], free: &FreeHours, force_night: bool) -> Placement {
    let mut out = Placement::new();
    if free.is_empty() {
        return out;
    }

    // Daytime hours are tried before night hours.
    let order: Vec<Hour> = free.daytime().chain(free.night()).collect();
    let mut used: BTreeSet<Hour> = BTreeSet::new();

    for group in merged {
        let mut chosen = select_hour(group, &order, &used, force_night);

        if chosen.is_night() && !force_night && !is_sleep_only(group) {
            let mut daytime = order.iter().copied().filter(|h| !h.is_night());
            let alt = daytime
                .clone()
                .find(|h| !used.contains(h))
                .or_else(|| daytime.next());
            if let Some(alt) = alt {
                debug!(group = %group, from = %chosen, to = %alt, "moved off reserved night hour");
                chosen = alt;
            }
        }

        debug!(group = %group, hour = %chosen, "placed preference");
        used.insert(chosen);
        out.entry(chosen).or_default().push(group.clone());
    }

    out
}

fn is_sleep_only(group: &MergedPreference) -> bool {
    group.labels().iter().all(|l| *l == PreferenceLabel::Sleep)
}

fn select_hour(
    group: &MergedPreference,
    order: &[Hour],
    used: &BTreeSet<Hour>,
    force_night: bool,
) -> Hour {
    let windows: Vec<NaturalWindow> = group.labels().iter().map(NaturalWindow::for_label).collect();
    let unused = |h: &&Hour| !used.contains(*h);

    order
        .iter()
        .filter(unused)
        .find(|h| windows.iter().any(|w| w.prefers(**h)))
        .or_else(|| {
            order
                .iter()
                .filter(unused)
                .find(|h| windows.iter().any(|w| w.falls_back_to(**h, force_night)))
        })
        .or_else(|| order.iter().find(|h| !used.contains(*h)))
        .copied()
        .unwrap_or(order[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::parse_free_hours;
    use PreferenceLabel::*;

    fn groups(labels: &[PreferenceLabel]) -> Vec<MergedPreference> {
        labels.iter().cloned().map(MergedPreference::single).collect()
    }

    fn hour_of(p: &Placement, label: &PreferenceLabel) -> Option<u8> {
        p.iter()
            .find(|(_, gs)| gs.iter().any(|g| g.contains(label)))
            .map(|(h, _)| h.value())
    }

    #[test]
    fn test_natural_windows_win() {
        let free = parse_free_hours("7,12,16,20").unwrap();
        let p = place(&groups(&[PhysicalActivity, Meal, Relaxation]), &free, false);
        assert_eq!(hour_of(&p, &PhysicalActivity), Some(16));
        assert_eq!(hour_of(&p, &Meal), Some(20));
        assert_eq!(hour_of(&p, &Relaxation), Some(7));
        assert!(!p.contains_key(&Hour::new(12).unwrap()));
    }

    #[test]
    fn test_fallback_window_used_when_preferred_taken() {
        let free = parse_free_hours("9,17").unwrap();
        let p = place(&groups(&[PhysicalActivity, PhysicalActivity]), &free, false);
        let hours: Vec<u8> = p.keys().map(|h| h.value()).collect();
        assert_eq!(hours, vec![9, 17]);
    }

    #[test]
    fn test_every_group_placed_once_with_reuse() {
        let free = parse_free_hours("10").unwrap();
        let gs = groups(&[Meal, FocusedWork, SocialOutdoor]);
        let p = place(&gs, &free, false);
        let total: usize = p.values().map(Vec::len).sum();
        assert_eq!(total, 3);
        assert_eq!(p.len(), 1);
    }

    #[test]
    fn test_relaxation_avoids_reserved_night_hour() {
        // Relaxation falls back to night, but a free daytime hour exists.
        let free = parse_free_hours("3,14").unwrap();
        let p = place(&groups(&[Relaxation]), &free, false);
        assert_eq!(hour_of(&p, &Relaxation), Some(14));
    }

    #[test]
    fn test_unforced_night_reuses_daytime_hour() {
        let free = parse_free_hours("4,9").unwrap();
        let relax_sleep = MergedPreference::single(Relaxation).join(MergedPreference::single(Sleep));
        let gs = vec![MergedPreference::single(FocusedWork), relax_sleep];
        let p = place(&gs, &free, false);
        assert!(!p.contains_key(&Hour::new(4).unwrap()));
        assert_eq!(p[&Hour::new(9).unwrap()].len(), 2);
    }

    #[test]
    fn test_forced_night_placement() {
        let free = parse_free_hours("1,2,3,10").unwrap();
        assert!(needs_night_placement(3, &free));
        assert!(!needs_night_placement(2, &free));

        let p = place(&groups(&[FocusedWork, Meal, Relaxation]), &free, true);
        let night_groups: usize = p
            .iter()
            .filter(|(h, _)| h.is_night())
            .map(|(_, gs)| gs.len())
            .sum();
        assert!(night_groups >= 1);
    }

    #[test]
    fn test_sleep_takes_afternoon_slot() {
        let free = parse_free_hours("2,9,15").unwrap();
        let p = place(&groups(&[Sleep]), &free, false);
        assert_eq!(hour_of(&p, &Sleep), Some(15));
    }
}
