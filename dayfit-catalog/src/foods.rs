//! Food catalog loader. Junk rows never reach the planner.

use anyhow::{Context, Result, bail};
use dayfit_core::{ActivityCatalog, CatalogEntry};
use std::io;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::columns::{cell, find_column, goals_from_text, split_list};

pub fn load_foods(path: impl AsRef<Path>) -> Result<ActivityCatalog> {
    let path = path.as_ref();
    let rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let catalog = read_foods(rdr).with_context(|| format!("reading {}", path.display()))?;
    info!(path = %path.display(), rows = catalog.len(), "loaded food catalog");
    Ok(catalog)
}

pub fn read_foods<R: io::Read>(mut rdr: csv::Reader<R>) -> Result<ActivityCatalog> {
    let headers = rdr.headers()?.clone();
    let Some(name_col) = find_column(&headers, &["food", "name"]) else {
        bail!("no food name column in header {:?}", headers);
    };
    let category_col = find_column(&headers, &["category"]);
    let meal_col = find_column(&headers, &["meal"]);
    let health_col = find_column(&headers, &["healthy", "junk"]);
    let weight_col = find_column(&headers, &["weight", "goal"]);

    let mut entries = Vec::new();
    let (mut skipped, mut junk) = (0usize, 0usize);
    for result in rdr.records() {
        let record = result?;
        let Some(name) = cell(&record, Some(name_col)) else {
            skipped += 1;
            continue;
        };
        if cell(&record, health_col).is_some_and(|v| v.to_lowercase().contains("junk")) {
            junk += 1;
            continue;
        }

        let mut entry = CatalogEntry::new(name, cell(&record, category_col).unwrap_or(""));
        if let Some(meals) = cell(&record, meal_col) {
            for tag in split_list(meals) {
                entry = entry.with_tag(tag);
            }
        }
        for goal in cell(&record, weight_col).map(goals_from_text).unwrap_or_default() {
            entry = entry.with_goal(goal);
        }
        entries.push(entry);
    }

    if skipped > 0 {
        warn!(skipped, "skipped food rows without a name");
    }
    debug!(junk, "excluded junk food rows");
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
    fn test_junk_rows_excluded() {
        let data = "Food Item,Category,Meal,Junk/Healthy,Weight Goal\n\
                    Lentil Soup,Legume,Dinner,Healthy,Weight Loss\n\
                    French Fries,Fast Food,Snack,Junk,Weight Gain\n";
        let cat = read_foods(reader(data)).unwrap();
        assert_eq!(cat.len(), 1);
        assert_eq!(cat.entries()[0].name, "Lentil Soup");
    }

    #[test]
    fn test_meal_tags_and_goals() {
        let data = "Food Item,Meal,Weight Goal\nFruit Salad,Snack/Breakfast,Maintain\nMixed Nuts,Snack,Weight Gain\n";
        let cat = read_foods(reader(data)).unwrap();
        assert_eq!(cat.entries()[0].tags, vec!["Snack".to_string(), "Breakfast".to_string()]);
        assert_eq!(cat.entries()[0].goals, vec![Goal::Maintain]);
        assert_eq!(cat.entries()[1].goals, vec![Goal::Gain]);
    }

    #[test]
    fn test_missing_name_column_is_error() {
        assert!(read_foods(reader("Calories,Meal\n100,Lunch\n")).is_err());
    }
}
