//! Append-only CSV log of schedule feedback.
//!
//! Columns: user_id,date,hour,activity,feedback. The header is written only
//! when the file is created.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use dayfit_core::{FeedbackRecord, FeedbackSink, Hour, Verdict};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const FEEDBACK_FILE: &str = "routine_feedback.csv";
const HEADER: [&str; 5] = ["user_id", "date", "hour", "activity", "feedback"];

#[derive(Debug, Serialize, Deserialize)]
struct FeedbackRow {
    user_id: String,
    date: String,
    hour: String,
    activity: String,
    feedback: String,
}

impl From<&FeedbackRecord> for FeedbackRow {
    fn from(r: &FeedbackRecord) -> Self {
        Self {
            user_id: r.user_id.clone(),
            date: r.date.format("%Y-%m-%d").to_string(),
            hour: r.hour.to_string(),
            activity: r.activity.clone(),
            feedback: r.verdict.to_string(),
        }
    }
}

impl TryFrom<FeedbackRow> for FeedbackRecord {
    type Error = anyhow::Error;

    fn try_from(row: FeedbackRow) -> Result<Self> {
        Ok(FeedbackRecord {
            date: NaiveDate::parse_from_str(&row.date, "%Y-%m-%d")
                .with_context(|| format!("bad date '{}'", row.date))?,
            hour: row.hour.parse::<Hour>()?,
            verdict: row.feedback.parse::<Verdict>()?,
            user_id: row.user_id,
            activity: row.activity,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CsvFeedbackLog {
    path: PathBuf,
}

impl CsvFeedbackLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `routine_feedback.csv` inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(FEEDBACK_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, record: &FeedbackRecord) -> Result<()> {
        let is_new = fs::metadata(&self.path).map(|m| m.len() == 0).unwrap_or(true);
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("opening {}", self.path.display()))?;

        let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(file);
        if is_new {
            wtr.write_record(HEADER)?;
        }
        wtr.serialize(FeedbackRow::from(record))?;
        wtr.flush()?;
        debug!(hour = %record.hour, verdict = %record.verdict, "feedback recorded");
        Ok(())
    }

    /// All records in file order; a missing file reads as empty.
    pub fn read_all(&self) -> Result<Vec<FeedbackRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let mut rdr = csv::Reader::from_path(&self.path)
            .with_context(|| format!("opening {}", self.path.display()))?;
        rdr.deserialize::<FeedbackRow>()
            .map(|row| FeedbackRecord::try_from(row?))
            .collect()
    }

    /// Remove the log file. Returns whether a file was removed.
    pub fn reset(&self) -> Result<bool> {
        if !self.path.exists() {
            return Ok(false);
        }
        fs::remove_file(&self.path).with_context(|| format!("removing {}", self.path.display()))?;
        info!(path = %self.path.display(), "feedback log reset");
        Ok(true)
    }
}

impl FeedbackSink for CsvFeedbackLog {
    fn record_feedback(&mut self, record: &FeedbackRecord) -> Result<()> {
        self.append(record)
    }
}
