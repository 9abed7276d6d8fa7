//! dayfit-core: routine optimizer for a single day of free hours

pub mod error;
pub mod context;
pub mod time;
pub mod preference;
pub mod compress;
pub mod window;
pub mod placement;
pub mod catalog;
pub mod block;
pub mod resolver;
pub mod normalize;
pub mod schedule;
pub mod feedback;

pub use error::ParseError;
pub use context::{EnergyLevel, Goal, HungerLevel, Mood, UserContext};
pub use time::{FreeHours, Hour, parse_free_hours};
pub use preference::{CompatibilityRelation, MergedPreference, PreferenceLabel};
pub use compress::compress;
pub use window::{HourRange, MealType, NaturalWindow};
pub use placement::{Placement, needs_night_placement, place};
pub use catalog::{ActivityCatalog, CatalogEntry, CatalogQuery, Catalogs, Exclusions, Intensity};
pub use block::{ActivityBlock, MainType};
pub use resolver::{ActivityResolver, HYDRATION_NOTE};
pub use normalize::normalize;
pub use schedule::{PlannerOptions, Schedule, auto_schedule, baseline_preferences, generate_schedule};
pub use feedback::{FeedbackRecord, FeedbackSink, MemoryFeedback, Verdict};
