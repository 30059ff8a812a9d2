//! Time of day for the simulation clock (`HH:MM:SS`).
//!
//! A time is either unset or an hour/minute/second of the simulated day.
//! Midnight (`00:00:00`) is a set time and stays distinct from unset.
//!
//! Malformed time strings do not fail decoding: they become [`Time::Unset`].
//! Only a non-string JSON payload is an error.

use std::fmt;
use std::ops::Add;
use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use log::debug;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::error::ParseError;

const TIME_FORMAT: &str = "%H:%M:%S";
const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Exactly `DD:DD:DD`. chrono alone also takes one-digit fields and blanks.
fn has_clock_layout(data: &str) -> bool {
    let b = data.as_bytes();
    b.len() == 8
        && b[2] == b':'
        && b[5] == b':'
        && [0, 1, 3, 4, 6, 7].iter().all(|&i| b[i].is_ascii_digit())
}

/// Day every set time is anchored on when converted to a datetime.
pub fn reference_date() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(0, 1, 2)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Time {
    /// No time given. Orders before every set time.
    #[default]
    Unset,
    At(NaiveTime),
}

impl Time {
    /// Parses `HH:MM:SS`, zero-padded, 24-hour. Anything else yields [`Time::Unset`].
    pub fn parse(data: &str) -> Self {
        if !has_clock_layout(data) {
            debug!("Unparsable time {:?}, treating as unset", data);
            return Time::Unset;
        }
        match NaiveTime::parse_from_str(data, TIME_FORMAT) {
            // chrono reads second 60 as a leap second
            Ok(t) if t.nanosecond() >= 1_000_000_000 => {
                debug!("Leap second in time {:?}, treating as unset", data);
                Time::Unset
            }
            Ok(t) => Time::At(t),
            Err(err) => {
                debug!("Unparsable time {:?} ({}), treating as unset", data, err);
                Time::Unset
            }
        }
    }

    pub fn from_hms(hour: u32, min: u32, sec: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, min, sec).map(Time::At)
    }

    pub fn from_value(value: &Value) -> Result<Self, ParseError> {
        match value {
            Value::String(s) => Ok(Self::parse(s)),
            other => Err(ParseError::Time {
                raw: other.to_string(),
            }),
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Time::At(_))
    }

    pub fn time_of_day(&self) -> Option<NaiveTime> {
        match self {
            Time::Unset => None,
            Time::At(t) => Some(*t),
        }
    }

    /// Datetime on the reference day, for code that needs full datetime arithmetic.
    pub fn to_datetime(&self) -> Option<NaiveDateTime> {
        let t = self.time_of_day()?;
        Some(reference_date()?.and_time(t))
    }
}

/// Advances a set time, wrapping past midnight. Unset stays unset.
impl Add<Duration> for Time {
    type Output = Time;

    fn add(self, rhs: Duration) -> Time {
        match self {
            Time::Unset => Time::Unset,
            Time::At(t) => {
                let secs = (rhs.as_secs() % SECONDS_PER_DAY) as i64;
                let delta = TimeDelta::seconds(secs)
                    + TimeDelta::nanoseconds(i64::from(rhs.subsec_nanos()));
                Time::At(t.overflowing_add_signed(delta).0)
            }
        }
    }
}

/// `HH:MM:SS`, or an empty string when unset.
impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Time::Unset => Ok(()),
            Time::At(t) => write!(f, "{}", t.format(TIME_FORMAT)),
        }
    }
}

impl Serialize for Time {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Time {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value).map_err(de::Error::custom)
    }
}
