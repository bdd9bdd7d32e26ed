//! Date, time-of-day and duration text formats

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use chrono::NaiveTime;
use chrono::Timelike;
use chrono::Utc;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

/// The service's date-time text format, always in UTC.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The service's time-of-day text format.
pub const TIME_FORMAT: &str = "%H:%M:%S";

pub const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// A UTC timestamp rendered as `YYYY-MM-DD HH:MM:SS`.
///
/// # Example
///
/// ```
/// use servicenow_soap::model::types::DateTime;
///
/// let dt: DateTime = "2024-03-01 13:45:00".parse().unwrap();
/// assert_eq!(dt.to_string(), "2024-03-01 13:45:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime(chrono::DateTime<Utc>);

impl DateTime {
    pub fn new(value: chrono::DateTime<Utc>) -> Self {
        Self(value)
    }

    pub fn now() -> Self {
        Self(Utc::now())
    }

    pub fn inner(&self) -> chrono::DateTime<Utc> {
        self.0
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_TIME_FORMAT))
    }
}

impl FromStr for DateTime {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDateTime::parse_from_str(s, DATE_TIME_FORMAT).map(|dt| Self(dt.and_utc()))
    }
}

impl From<chrono::DateTime<Utc>> for DateTime {
    fn from(v: chrono::DateTime<Utc>) -> Self {
        Self(v)
    }
}

impl Serialize for DateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Formats a time of day as `HH:MM:SS`.
pub fn format_time_of_day(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Formats a duration in seconds as `<days> <HH:MM:SS>`.
///
/// ```
/// use servicenow_soap::model::types::format_duration;
///
/// assert_eq!(format_duration(90061), "1 01:01:01");
/// assert_eq!(format_duration(59), "0 00:00:59");
/// ```
pub fn format_duration(seconds: u64) -> String {
    let days = seconds / SECONDS_PER_DAY;
    // remainder is below 86400, always a valid time of day
    let remainder = (seconds % SECONDS_PER_DAY) as u32;
    let time = NaiveTime::from_num_seconds_from_midnight_opt(remainder, 0).unwrap_or_default();
    format!("{} {}", days, format_time_of_day(time))
}

/// Parses `<days> <HH:MM:SS>` back into seconds.
///
/// Returns `None` for malformed text or a total that does not fit in `u64`.
pub fn parse_duration(s: &str) -> Option<u64> {
    let (days, time) = s.trim().split_once(' ')?;
    let days: u64 = days.parse().ok()?;
    let time = NaiveTime::parse_from_str(time.trim(), TIME_FORMAT).ok()?;
    days.checked_mul(SECONDS_PER_DAY)?
        .checked_add(u64::from(time.num_seconds_from_midnight()))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_date_time_format() {
        let dt = DateTime::new(Utc.with_ymd_and_hms(2023, 1, 9, 4, 5, 6).unwrap());
        assert_eq!(dt.to_string(), "2023-01-09 04:05:06");
        assert_eq!("2023-01-09 04:05:06".parse::<DateTime>().unwrap(), dt);
        assert!("2023-01-09T04:05:06Z".parse::<DateTime>().is_err());
    }

    #[test]
    fn test_durations() {
        assert_eq!(format_duration(0), "0 00:00:00");
        assert_eq!(format_duration(86_400), "1 00:00:00");
        assert_eq!(format_duration(86_399), "0 23:59:59");
        assert_eq!(format_duration(10 * 86_400 + 3_600), "10 01:00:00");
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("1 01:01:01"), Some(90_061));
        assert_eq!(parse_duration("0 00:00:00"), Some(0));
        assert_eq!(parse_duration("01:01:01"), None);
        assert_eq!(parse_duration("x 01:01:01"), None);
        assert_eq!(parse_duration("999999999999999 00:00:00"), None);
        assert_eq!(parse_duration("213503982334601 07:00:15"), Some(u64::MAX));
        assert_eq!(parse_duration("213503982334601 07:00:16"), None);
    }

    #[test]
    fn test_serde_as_text() {
        let dt: DateTime = "2024-03-01 13:45:00".parse().unwrap();
        let json = serde_json::to_string(&dt).unwrap();
        assert_eq!(json, "\"2024-03-01 13:45:00\"");
        assert_eq!(serde_json::from_str::<DateTime>(&json).unwrap(), dt);
    }
}
