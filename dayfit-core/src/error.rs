//! Parse errors for user-supplied planner inputs.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid hour '{0}' (expected 0-23, '8' or '08:00')")]
    Hour(String),

    #[error("invalid hour range '{0}'")]
    HourRange(String),

    #[error("unknown goal '{0}' (expected lose, gain or maintain)")]
    Goal(String),

    #[error("unknown energy level '{0}'")]
    Energy(String),

    #[error("unknown hunger level '{0}'")]
    Hunger(String),

    #[error("unknown mood '{0}'")]
    Mood(String),

    #[error("unknown preference '{0}'")]
    Preference(String),

    #[error("unknown intensity '{0}'")]
    Intensity(String),

    #[error("unknown verdict '{0}' (expected like or dislike)")]
    Verdict(String),
}
