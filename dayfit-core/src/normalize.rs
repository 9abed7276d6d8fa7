//! Final pass: keep each heavy main type to one block per day.
//!
//! Blocks are scanned in ascending hour order. The first block of a heavy
//! type is kept; later meals become a light snack, later workouts become a
//! movement break, and other heavy repeats are dropped. Night sleep may
//! repeat but still counts as the day's sleep.

use std::collections::{BTreeMap, HashSet};
use tracing::debug;

use crate::block::{ActivityBlock, MainType};
use crate::time::Hour;

pub fn normalize(schedule: BTreeMap<Hour, Vec<ActivityBlock>>) -> BTreeMap<Hour, Vec<ActivityBlock>> {
    let mut seen: HashSet<MainType> = HashSet::new();
    let mut out = BTreeMap::new();

    for (hour, blocks) in schedule {
        let mut kept = Vec::with_capacity(blocks.len());
        for mut block in blocks {
            let m = block.main_type;
            if m.is_repeatable() {
                kept.push(block);
                continue;
            }
            if m == MainType::Sleep && hour.is_night() {
                seen.insert(m);
                kept.push(block);
                continue;
            }
            if seen.insert(m) {
                kept.push(block);
                continue;
            }

            match m {
                MainType::Meal => {
                    debug!(hour = %hour, activity = %block.activity, "repeated meal downgraded");
                    block.downgrade(
                        "Healthy Snack",
                        "10-15 min",
                        "Converted to a light snack to avoid repeating full meals.",
                        MainType::Other,
                    );
                    kept.push(block);
                }
                MainType::Exercise => {
                    debug!(hour = %hour, activity = %block.activity, "repeated workout downgraded");
                    block.downgrade(
                        "Light walk or stretching",
                        "10-15 min",
                        "Short movement break instead of repeating a full workout.",
                        MainType::Other,
                    );
                    kept.push(block);
                }
                _ => {
                    debug!(hour = %hour, activity = %block.activity, main_type = %m, "repeated block dropped");
                }
            }
        }

        if kept.is_empty() {
            kept.push(mindful_pause());
        }
        out.insert(hour, kept);
    }

    out
}

/// Stand-in for an hour whose only block was a dropped repeat.
fn mindful_pause() -> ActivityBlock {
    ActivityBlock::new(
        "Mindful pause",
        "5-10 min",
        "A short pause to reset between the day's main activities.",
        MainType::Mindfulness,
    )
}
