//! ISO-8601 date/time values as used by the IOF standard.
//!
//! `xsd:dateTime` and `xsd:time` carry an optional UTC offset. A chrono
//! `DateTime<FixedOffset>` cannot express "no offset", so both are kept as
//! a naive value plus `Option<FixedOffset>` and written back exactly.

use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::IofError;

const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const TIME_FORMAT: &str = "%H:%M:%S%.f";

/// A point in time, optionally with its UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateTime {
    local: NaiveDateTime,
    offset: Option<FixedOffset>,
}

impl DateTime {
    pub fn new(local: NaiveDateTime, offset: Option<FixedOffset>) -> Self {
        Self { local, offset }
    }

    /// A date/time without offset (local time of the event).
    pub fn naive(local: NaiveDateTime) -> Self {
        Self::new(local, None)
    }

    pub fn local(&self) -> NaiveDateTime {
        self.local
    }

    pub fn offset(&self) -> Option<FixedOffset> {
        self.offset
    }

    pub fn date(&self) -> NaiveDate {
        self.local.date()
    }

    /// The offset-aware value, if an offset is known.
    pub fn to_fixed(&self) -> Option<chrono::DateTime<FixedOffset>> {
        self.offset
            .and_then(|o| self.local.and_local_timezone(o).single())
    }
}

impl From<chrono::DateTime<FixedOffset>> for DateTime {
    fn from(value: chrono::DateTime<FixedOffset>) -> Self {
        Self::new(value.naive_local(), Some(*value.offset()))
    }
}

impl std::fmt::Display for DateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.local.format(DATE_TIME_FORMAT))?;
        write_offset(f, self.offset)
    }
}

impl std::str::FromStr for DateTime {
    type Err = IofError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (body, offset) = split_offset(s).ok_or_else(|| invalid("date/time", s))?;
        let local = NaiveDateTime::parse_from_str(body, DATE_TIME_FORMAT)
            .map_err(|_| invalid("date/time", s))?;
        Ok(Self::new(local, offset))
    }
}

/// A time of day, optionally with its UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Time {
    local: NaiveTime,
    offset: Option<FixedOffset>,
}

impl Time {
    pub fn new(local: NaiveTime, offset: Option<FixedOffset>) -> Self {
        Self { local, offset }
    }

    pub fn naive(local: NaiveTime) -> Self {
        Self::new(local, None)
    }

    pub fn local(&self) -> NaiveTime {
        self.local
    }

    pub fn offset(&self) -> Option<FixedOffset> {
        self.offset
    }
}

impl std::fmt::Display for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.local.format(TIME_FORMAT))?;
        write_offset(f, self.offset)
    }
}

impl std::str::FromStr for Time {
    type Err = IofError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (body, offset) = split_offset(s).ok_or_else(|| invalid("time", s))?;
        let local =
            NaiveTime::parse_from_str(body, TIME_FORMAT).map_err(|_| invalid("time", s))?;
        Ok(Self::new(local, offset))
    }
}

/// A point in time known either by date and time, or just by date, e.g.
/// an event date decided before the first start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateAndOptionalTime {
    pub date: NaiveDate,
    pub time: Option<Time>,
}

impl DateAndOptionalTime {
    pub fn date(date: NaiveDate) -> Self {
        Self { date, time: None }
    }

    pub fn with_time(date: NaiveDate, time: Time) -> Self {
        Self {
            date,
            time: Some(time),
        }
    }
}

/// Parse an `xsd:date`. A trailing zone designator is accepted and dropped,
/// since a calendar date never carries a time component.
pub fn parse_date(s: &str) -> Result<NaiveDate, IofError> {
    let (body, _) = split_offset(s).ok_or_else(|| invalid("date", s))?;
    NaiveDate::parse_from_str(body, "%Y-%m-%d").map_err(|_| invalid("date", s))
}

fn invalid(kind: &'static str, value: &str) -> IofError {
    IofError::InvalidToken {
        vocabulary: kind,
        value: value.to_string(),
    }
}

fn write_offset(f: &mut std::fmt::Formatter<'_>, offset: Option<FixedOffset>) -> std::fmt::Result {
    match offset {
        Some(o) if o.local_minus_utc() == 0 => f.write_str("Z"),
        Some(o) => write!(f, "{o}"),
        None => Ok(()),
    }
}

/// Split a trailing `Z` or `±HH:MM` designator off a lexical date/time.
/// Returns `None` when the designator is present but out of range.
fn split_offset(s: &str) -> Option<(&str, Option<FixedOffset>)> {
    if let Some(body) = s.strip_suffix('Z') {
        return Some((body, FixedOffset::east_opt(0)));
    }
    let bytes = s.as_bytes();
    let n = bytes.len();
    if n > 6 && matches!(bytes[n - 6], b'+' | b'-') && bytes[n - 3] == b':' {
        let hours: i32 = s[n - 5..n - 3].parse().ok()?;
        let minutes: i32 = s[n - 2..].parse().ok()?;
        let seconds = (hours * 3600 + minutes * 60) * if bytes[n - 6] == b'-' { -1 } else { 1 };
        return Some((&s[..n - 6], Some(FixedOffset::east_opt(seconds)?)));
    }
    Some((s, None))
}

macro_rules! string_serde {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

string_serde!(DateTime);
string_serde!(Time);
