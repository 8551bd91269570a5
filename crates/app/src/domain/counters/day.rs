//! Calendar day key for daily counters.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use jiff::{Timestamp, civil::Date, tz::TimeZone};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};
use thiserror::Error;

const ISO_DAY_LEN: usize = "YYYY-MM-DD".len();

#[derive(Debug, Error)]
pub enum CounterDayError {
    #[error("expected a calendar day formatted as YYYY-MM-DD")]
    Format,

    #[error("invalid calendar day: {0}")]
    Date(#[from] jiff::Error),
}

/// A calendar day chosen by the caller, so the caller owns time-zone
/// semantics. Exchanged as ISO `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CounterDay(Date);

impl CounterDay {
    #[must_use]
    pub const fn from_date(date: Date) -> Self {
        Self(date)
    }

    #[must_use]
    pub const fn into_date(self) -> Date {
        self.0
    }

    /// The current day as observed in `tz`.
    #[must_use]
    pub fn today_in(tz: &TimeZone) -> Self {
        Self(Timestamp::now().to_zoned(tz.clone()).date())
    }
}

impl FromStr for CounterDay {
    type Err = CounterDayError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let bytes = value.as_bytes();

        if bytes.len() != ISO_DAY_LEN || bytes.get(4) != Some(&b'-') || bytes.get(7) != Some(&b'-')
        {
            return Err(CounterDayError::Format);
        }

        Ok(Self(value.parse::<Date>()?))
    }
}

impl Display for CounterDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0.strftime("%Y-%m-%d"))
    }
}

impl Serialize for CounterDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CounterDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn parses_and_displays_iso_day() {
        let day: CounterDay = "2026-03-09".parse().expect("day should parse");

        assert_eq!(day.into_date(), date(2026, 3, 9));
        assert_eq!(day.to_string(), "2026-03-09");
    }

    #[test]
    fn rejects_other_layouts() {
        for raw in ["20260309", "2026-3-9", "09-03-2026", "2026-03-09T00:00", ""] {
            assert!(
                matches!(raw.parse::<CounterDay>(), Err(CounterDayError::Format)),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!(matches!(
            "2026-02-30".parse::<CounterDay>(),
            Err(CounterDayError::Date(_))
        ));
    }

    #[test]
    fn today_depends_on_time_zone() {
        let utc = CounterDay::today_in(&TimeZone::UTC);
        let kiritimati = CounterDay::today_in(&TimeZone::fixed(jiff::tz::offset(14)));

        assert!(kiritimati >= utc, "UTC+14 is never behind UTC");
    }

    #[test]
    fn serde_uses_iso_string() {
        let day: CounterDay = serde_json::from_str("\"2025-12-31\"").expect("day should parse");

        assert_eq!(serde_json::to_string(&day).expect("serialize"), "\"2025-12-31\"");
    }
}
