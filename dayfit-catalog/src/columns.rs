//! Header detection for loosely formatted catalog CSVs.
//!
//! Column names are matched by case-insensitive substring, first match wins,
//! so exports with slightly different headers still load.

use csv::StringRecord;
use dayfit_core::Goal;

pub fn find_column(headers: &StringRecord, needles: &[&str]) -> Option<usize> {
    headers.iter().position(|h| {
        let h = h.to_lowercase();
        needles.iter().any(|n| h.contains(n))
    })
}

/// Trimmed cell value; empty cells read as `None`.
pub fn cell<'r>(record: &'r StringRecord, col: Option<usize>) -> Option<&'r str> {
    col.and_then(|i| record.get(i))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Split a multi-valued cell like `"Breakfast/Snack"` or `"Peanut;Gluten"`.
pub fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(['/', ';', ',', '|'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Map free-text goal words onto planner goals.
pub fn goals_from_text(value: &str) -> Vec<Goal> {
    let mut out = Vec::new();
    for part in split_list(value) {
        let p = part.to_lowercase();
        let goal = if ["loss", "lose", "fat", "burn"].iter().any(|w| p.contains(w)) {
            Some(Goal::Lose)
        } else if ["gain", "muscle", "mass", "strength", "bulk"].iter().any(|w| p.contains(w)) {
            Some(Goal::Gain)
        } else if ["maint", "fitness", "endurance", "mobility", "flexibility"]
            .iter()
            .any(|w| p.contains(w))
        {
            Some(Goal::Maintain)
        } else {
            None
        };
        if let Some(g) = goal {
            if !out.contains(&g) {
                out.push(g);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_column_by_substring() {
        let headers = StringRecord::from(vec!["Exercise Name", "Category", "Intensity", "Body Focus"]);
        assert_eq!(find_column(&headers, &["name", "exercise"]), Some(0));
        assert_eq!(find_column(&headers, &["body"]), Some(3));
        assert_eq!(find_column(&headers, &["equipment"]), None);
    }

    #[test]
    fn test_goal_words() {
        assert_eq!(goals_from_text("Weight Loss;Endurance"), vec![Goal::Lose, Goal::Maintain]);
        assert_eq!(goals_from_text("Muscle Gain"), vec![Goal::Gain]);
        assert!(goals_from_text("Relaxation").is_empty());
    }

    #[test]
    fn test_cell_and_split() {
        let rec = StringRecord::from(vec!["  Oats ", "", "Breakfast/Snack"]);
        assert_eq!(cell(&rec, Some(0)), Some("Oats"));
        assert_eq!(cell(&rec, Some(1)), None);
        assert_eq!(cell(&rec, None), None);
        assert_eq!(split_list("Breakfast/Snack").collect::<Vec<_>>(), vec!["Breakfast", "Snack"]);
    }
}
