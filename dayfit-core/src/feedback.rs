//! Like/dislike feedback on scheduled blocks. Recorded only; nothing learns from it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::context::key;
use crate::error::ParseError;
use crate::time::Hour;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Like,
    Dislike,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Verdict::Like => "Like",
            Verdict::Dislike => "Dislike",
        })
    }
}

impl FromStr for Verdict {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match key(s).as_str() {
            "like" | "liked" | "up" | "yes" => Ok(Verdict::Like),
            "dislike" | "disliked" | "down" | "no" => Ok(Verdict::Dislike),
            _ => Err(ParseError::Verdict(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub user_id: String,
    pub date: NaiveDate,
    pub hour: Hour,
    pub activity: String,
    pub verdict: Verdict,
}

/// Fire-and-forget sink for feedback on a generated schedule.
pub trait FeedbackSink {
    fn record_feedback(&mut self, record: &FeedbackRecord) -> anyhow::Result<()>;
}

/// In-memory sink, handy for callers that batch feedback before writing.
#[derive(Debug, Default)]
pub struct MemoryFeedback {
    pub records: Vec<FeedbackRecord>,
}

impl FeedbackSink for MemoryFeedback {
    fn record_feedback(&mut self, record: &FeedbackRecord) -> anyhow::Result<()> {
        self.records.push(record.clone());
        Ok(())
    }
}
