//! dayfit-catalog: CSV food/exercise catalogs and the feedback log

pub mod columns;
pub mod exercises;
pub mod feedback_log;
pub mod foods;

pub use exercises::{load_exercises, read_exercises};
pub use feedback_log::{CsvFeedbackLog, FEEDBACK_FILE};
pub use foods::{load_foods, read_foods};

use anyhow::Result;
use dayfit_core::{ActivityCatalog, Catalogs};
use std::path::Path;
use tracing::warn;

/// Load both catalogs. A missing file yields an empty catalog so planning
/// falls back to text suggestions; a malformed file is an error.
pub fn load_catalogs(foods: &Path, exercises: &Path) -> Result<Catalogs> {
    Ok(Catalogs::new(
        load_if_present(foods, |p| load_foods(p))?,
        load_if_present(exercises, |p| load_exercises(p))?,
    ))
}

fn load_if_present<F>(path: &Path, load: F) -> Result<ActivityCatalog>
where
    F: FnOnce(&Path) -> Result<ActivityCatalog>,
{
    if !path.exists() {
        warn!(path = %path.display(), "catalog file missing; using text fallbacks");
        return Ok(ActivityCatalog::empty());
    }
    load(path)
}
