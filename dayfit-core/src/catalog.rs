//! Read-only activity/food catalogs and graceful filter-and-sample lookups.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::context::Goal;
use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Intensity {
    Low,
    Moderate,
    High,
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Intensity::Low => "Low",
            Intensity::Moderate => "Moderate",
            Intensity::High => "High",
        })
    }
}

impl FromStr for Intensity {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let l = s.trim().to_lowercase();
        if l.contains("low") || l.contains("light") {
            Ok(Intensity::Low)
        } else if l.contains("moderate") || l.contains("medium") {
            Ok(Intensity::Moderate)
        } else if l.contains("high") || l.contains("vigorous") {
            Ok(Intensity::High)
        } else {
            Err(ParseError::Intensity(s.to_string()))
        }
    }
}

/// One catalog row. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub category: String,
    pub intensity: Option<Intensity>,
    #[serde(default)]
    pub goals: Vec<Goal>,
    /// Meal types, equipment or body focus.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            intensity: None,
            goals: Vec::new(),
            tags: Vec::new(),
        }
    }

    pub fn with_intensity(mut self, intensity: Intensity) -> Self {
        self.intensity = Some(intensity);
        self
    }

    pub fn with_goal(mut self, goal: Goal) -> Self {
        if !self.goals.contains(&goal) {
            self.goals.push(goal);
        }
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }
}

/// Filter over catalog rows. Empty lists mean "any".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    pub categories: Vec<String>,
    pub intensities: Vec<Intensity>,
    pub goal: Option<Goal>,
    pub tag: Option<String>,
}

impl CatalogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn categories(mut self, cats: &[&str]) -> Self {
        self.categories = cats.iter().map(|c| c.to_lowercase()).collect();
        self
    }

    pub fn intensities(mut self, levels: &[Intensity]) -> Self {
        self.intensities = levels.to_vec();
        self
    }

    pub fn goal(mut self, goal: Option<Goal>) -> Self {
        self.goal = goal;
        self
    }

    pub fn tag(mut self, tag: &str) -> Self {
        self.tag = Some(tag.to_lowercase());
        self
    }

    pub fn matches(&self, e: &CatalogEntry) -> bool {
        if !self.categories.is_empty() {
            let cat = e.category.to_lowercase();
            if !self.categories.iter().any(|c| cat.contains(c.as_str())) {
                return false;
            }
        }
        if !self.intensities.is_empty() {
            match e.intensity {
                Some(i) if self.intensities.contains(&i) => {}
                _ => return false,
            }
        }
        if let Some(g) = self.goal {
            if !e.goals.contains(&g) {
                return false;
            }
        }
        if let Some(tag) = &self.tag {
            if !e.tags.iter().any(|t| t.to_lowercase().contains(tag.as_str())) {
                return false;
            }
        }
        true
    }

    /// The relaxation ladder: full query, then drop goal, intensity,
    /// category/tag in turn, ending unfiltered.
    pub fn ladder(&self) -> Vec<CatalogQuery> {
        let full = self.clone();
        let no_goal = CatalogQuery {
            goal: None,
            ..full.clone()
        };
        let no_intensity = CatalogQuery {
            intensities: Vec::new(),
            ..no_goal.clone()
        };
        let unfiltered = CatalogQuery::default();

        let mut rungs = vec![full, no_goal, no_intensity, unfiltered];
        rungs.dedup();
        rungs
    }
}

/// Names already used in the day's plan.
pub type Exclusions = HashSet<String>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityCatalog {
    entries: Vec<CatalogEntry>,
}

impl ActivityCatalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Uniformly sample one entry from the first non-empty rung of the ladder.
    ///
    /// `None` only when every rung is empty after exclusions.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        query: &CatalogQuery,
        exclude: &Exclusions,
        rng: &mut R,
    ) -> Option<&CatalogEntry> {
        self.sample_many(query, exclude, 1, rng).into_iter().next()
    }

    /// Up to `n` distinct entries from the first non-empty rung.
    pub fn sample_many<R: Rng + ?Sized>(
        &self,
        query: &CatalogQuery,
        exclude: &Exclusions,
        n: usize,
        rng: &mut R,
    ) -> Vec<&CatalogEntry> {
        for rung in query.ladder() {
            let pool: Vec<&CatalogEntry> = self
                .entries
                .iter()
                .filter(|e| !exclude.contains(&e.name) && rung.matches(e))
                .collect();
            if !pool.is_empty() {
                return pool.choose_multiple(rng, n).copied().collect();
            }
        }
        Vec::new()
    }

    /// Like `sample`, but never falls through to the unfiltered rung.
    pub fn sample_filtered<R: Rng + ?Sized>(
        &self,
        query: &CatalogQuery,
        exclude: &Exclusions,
        rng: &mut R,
    ) -> Option<&CatalogEntry> {
        let unfiltered = CatalogQuery::default();
        query
            .ladder()
            .into_iter()
            .filter(|rung| *rung != unfiltered)
            .find_map(|rung| {
                let pool: Vec<&CatalogEntry> = self
                    .entries
                    .iter()
                    .filter(|e| !exclude.contains(&e.name) && rung.matches(e))
                    .collect();
                pool.choose(&mut *rng).copied()
            })
    }
}

/// The two catalog snapshots a planning call reads from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalogs {
    pub foods: ActivityCatalog,
    pub exercises: ActivityCatalog,
}

impl Catalogs {
    pub fn new(foods: ActivityCatalog, exercises: ActivityCatalog) -> Self {
        Self { foods, exercises }
    }
}
