//! Hour-of-day slots and the user's free-hour set.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::ParseError;

static HOUR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<h>\d{1,2})(?::(?P<m>\d{2}))?$").expect("hour regex"));

/// Night window: hours 00:00 through 05:59 are reserved for sleep.
pub const NIGHT_END: u8 = 6;

/// An hour of the day in `0..=23`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Hour(u8);

impl Hour {
    pub fn new(h: u8) -> Option<Self> {
        (h <= 23).then_some(Self(h))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_night(self) -> bool {
        self.0 < NIGHT_END
    }
}

impl TryFrom<u8> for Hour {
    type Error = ParseError;

    fn try_from(h: u8) -> Result<Self, Self::Error> {
        Hour::new(h).ok_or_else(|| ParseError::Hour(h.to_string()))
    }
}

impl From<Hour> for u8 {
    fn from(h: Hour) -> u8 {
        h.0
    }
}

impl fmt::Display for Hour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}

impl FromStr for Hour {
    type Err = ParseError;

    /// Accepts `8`, `08` and `08:00`; minutes are truncated to the hour.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let caps = HOUR_RE
            .captures(s)
            .ok_or_else(|| ParseError::Hour(s.to_string()))?;
        let h: u8 = caps["h"].parse().map_err(|_| ParseError::Hour(s.to_string()))?;
        if let Some(m) = caps.name("m") {
            let m: u8 = m.as_str().parse().map_err(|_| ParseError::Hour(s.to_string()))?;
            if m > 59 {
                return Err(ParseError::Hour(s.to_string()));
            }
        }
        Hour::new(h).ok_or_else(|| ParseError::Hour(s.to_string()))
    }
}

/// Deduplicated, ascending set of hours the user is free.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeHours(BTreeSet<Hour>);

impl FreeHours {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, h: Hour) -> bool {
        self.0.insert(h)
    }

    pub fn contains(&self, h: Hour) -> bool {
        self.0.contains(&h)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Ascending iteration.
    pub fn iter(&self) -> impl Iterator<Item = Hour> + '_ {
        self.0.iter().copied()
    }

    pub fn night(&self) -> impl Iterator<Item = Hour> + '_ {
        self.iter().filter(|h| h.is_night())
    }

    pub fn daytime(&self) -> impl Iterator<Item = Hour> + '_ {
        self.iter().filter(|h| !h.is_night())
    }

    /// True if two consecutive free hours are at least `hours` apart.
    pub fn has_gap_of(&self, hours: u8) -> bool {
        let v: Vec<u8> = self.iter().map(Hour::value).collect();
        v.windows(2).any(|w| w[1] - w[0] >= hours)
    }
}

impl FromIterator<Hour> for FreeHours {
    fn from_iter<I: IntoIterator<Item = Hour>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Parse a free-hour list like `"7,12,16-18"` or `"22-2"`.
///
/// Ranges are inclusive and may wrap past midnight.
pub fn parse_free_hours(s: &str) -> Result<FreeHours, ParseError> {
    let mut out = FreeHours::new();
    for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        match part.split_once('-') {
            Some((a, b)) => {
                let start: Hour = a.parse().map_err(|_| ParseError::HourRange(part.to_string()))?;
                let end: Hour = b.parse().map_err(|_| ParseError::HourRange(part.to_string()))?;
                let mut h = start.value();
                loop {
                    out.insert(Hour(h));
                    if h == end.value() {
                        break;
                    }
                    h = (h + 1) % 24;
                }
            }
            None => {
                out.insert(part.parse()?);
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hour_forms() {
        assert_eq!("8".parse::<Hour>().unwrap().value(), 8);
        assert_eq!("08".parse::<Hour>().unwrap().value(), 8);
        assert_eq!("08:00".parse::<Hour>().unwrap().value(), 8);
        assert_eq!("23:30".parse::<Hour>().unwrap().value(), 23);
        assert!("24".parse::<Hour>().is_err());
        assert!("8pm".parse::<Hour>().is_err());
        assert!("08:75".parse::<Hour>().is_err());
    }

    #[test]
    fn test_parse_free_hours_dedupes_and_sorts() {
        let fh = parse_free_hours("20, 7,12,7,16").unwrap();
        let v: Vec<u8> = fh.iter().map(Hour::value).collect();
        assert_eq!(v, vec![7, 12, 16, 20]);
    }

    #[test]
    fn test_parse_free_hours_ranges() {
        let fh = parse_free_hours("16-18,22-1").unwrap();
        let v: Vec<u8> = fh.iter().map(Hour::value).collect();
        assert_eq!(v, vec![0, 1, 16, 17, 18, 22, 23]);
    }

    #[test]
    fn test_night_split() {
        let fh = parse_free_hours("2,5,6,14").unwrap();
        assert_eq!(fh.night().count(), 2);
        assert_eq!(fh.daytime().count(), 2);
        assert_eq!(Hour::new(6).unwrap().to_string(), "06:00");
    }

    #[test]
    fn test_gap_detection() {
        assert!(parse_free_hours("8,13").unwrap().has_gap_of(5));
        assert!(!parse_free_hours("8,10,12,14").unwrap().has_gap_of(5));
    }
}
