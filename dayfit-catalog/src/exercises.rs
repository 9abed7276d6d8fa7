//! Exercise/activity catalog loader.

use anyhow::{Context, Result, bail};
use dayfit_core::{ActivityCatalog, CatalogEntry, Intensity};
use std::io;
use std::path::Path;
use tracing::{info, warn};

use crate::columns::{cell, find_column, goals_from_text, split_list};

pub fn load_exercises(path: impl AsRef<Path>) -> Result<ActivityCatalog> {
    let path = path.as_ref();
    let rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let catalog = read_exercises(rdr).with_context(|| format!("reading {}", path.display()))?;
    info!(path = %path.display(), rows = catalog.len(), "loaded exercise catalog");
    Ok(catalog)
}

pub fn read_exercises<R: io::Read>(mut rdr: csv::Reader<R>) -> Result<ActivityCatalog> {
    let headers = rdr.headers()?.clone();
    let Some(name_col) = find_column(&headers, &["name", "exercise"]) else {
        bail!("no exercise name column in header {:?}", headers);
    };
    let category_col = find_column(&headers, &["category", "type"]);
    let intensity_col = find_column(&headers, &["intensity"]);
    let goal_col = find_column(&headers, &["goal"]);
    let equipment_col = find_column(&headers, &["equipment"]);
    let focus_col = find_column(&headers, &["body", "focus", "muscle"]);

    let mut entries = Vec::new();
    let mut skipped = 0usize;
    for result in rdr.records() {
        let record = result?;
        let Some(name) = cell(&record, Some(name_col)) else {
            skipped += 1;
            continue;
        };

        let mut entry = CatalogEntry::new(name, cell(&record, category_col).unwrap_or(""));
        if let Some(level) = cell(&record, intensity_col) {
            match level.parse::<Intensity>() {
                Ok(i) => entry = entry.with_intensity(i),
                Err(e) => warn!(exercise = name, error = %e, "ignoring intensity"),
            }
        }
        for goal in cell(&record, goal_col).map(goals_from_text).unwrap_or_default() {
            entry = entry.with_goal(goal);
        }
        for col in [equipment_col, focus_col] {
            if let Some(v) = cell(&record, col) {
                for tag in split_list(v) {
                    entry = entry.with_tag(tag);
                }
            }
        }
        entries.push(entry);
    }

    if skipped > 0 {
        warn!(skipped, "skipped exercise rows without a name");
    }
    Ok(ActivityCatalog::new(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dayfit_core::Goal;

    fn reader(data: &str) -> csv::Reader<&[u8]> {
        csv::ReaderBuilder::new().flexible(true).from_reader(data.as_bytes())
    }

    #[test]
    fn test_reads_attributes() {
        let data = "Exercise Name,Category,Intensity,Equipment,Body Focus,Goal\n\
                    Burpees,HIIT,High,None,Full Body,Weight Loss\n\
                    Child's Pose,Yoga,Low,Mat,Back,Flexibility\n";
        let cat = read_exercises(reader(data)).unwrap();
        assert_eq!(cat.len(), 2);
        let burpees = &cat.entries()[0];
        assert_eq!(burpees.category, "HIIT");
        assert_eq!(burpees.intensity, Some(Intensity::High));
        assert_eq!(burpees.goals, vec![Goal::Lose]);
        assert!(burpees.tags.iter().any(|t| t == "Full Body"));
    }

    #[test]
    fn test_tolerates_missing_optional_columns_and_blank_names() {
        let data = "name,intensity\nPlank,medium\n,High\nSquat,unknown\n";
        let cat = read_exercises(reader(data)).unwrap();
        assert_eq!(cat.len(), 2);
        assert_eq!(cat.entries()[0].intensity, Some(Intensity::Moderate));
        assert_eq!(cat.entries()[1].intensity, None);
        assert_eq!(cat.entries()[1].category, "");
    }

    #[test]
    fn test_missing_name_column_is_error() {
        assert!(read_exercises(reader("category,intensity\nYoga,Low\n")).is_err());
    }
}
