//! Preference compression: merge preferences until they fit the free slots.
//!
//! Algorithm (deterministic):
//! 1) if the list already fits, wrap each label as a singleton group
//! 2) scan left-to-right for the first compatible pair (i, j), i < j;
//!    append group j onto group i and remove j
//! 3) if a full scan finds nothing, force-merge the last two groups
//! 4) repeat until the list fits or one group remains

use tracing::debug;

use crate::preference::{CompatibilityRelation, MergedPreference, PreferenceLabel};

pub fn compress(
    ordered: &[PreferenceLabel],
    available_slots: usize,
    relation: &CompatibilityRelation,
) -> Vec<MergedPreference> {
    if available_slots == 0 {
        return Vec::new();
    }

    let mut out: Vec<MergedPreference> = ordered
        .iter()
        .cloned()
        .map(MergedPreference::single)
        .collect();

    while out.len() > available_slots && out.len() > 1 {
        match first_compatible_pair(&out, relation) {
            Some((i, j)) => {
                let b = out.remove(j);
                let a = out.remove(i);
                out.insert(i, a.join(b));
                debug!(group = %out[i], "merged compatible preferences");
            }
            None => {
                let (Some(last), Some(prev)) = (out.pop(), out.pop()) else {
                    break;
                };
                let forced = prev.join(last);
                debug!(group = %forced, "forced merge of trailing preferences");
                out.push(forced);
            }
        }
    }

    debug_assert!(out.len() <= available_slots.max(1));
    out
}

fn first_compatible_pair(
    groups: &[MergedPreference],
    relation: &CompatibilityRelation,
) -> Option<(usize, usize)> {
    for i in 0..groups.len() {
        for j in (i + 1)..groups.len() {
            if relation.groups_compatible(&groups[i], &groups[j]) {
                return Some((i, j));
            }
        }
    }
    None
}
