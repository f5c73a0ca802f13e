use std::{fmt, str::FromStr, sync::LazyLock};

use chrono::{NaiveTime, Timelike};
use regex::Regex;

static HH_MM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,2}):([0-9]{1,2})$").expect("HH:MM pattern is valid")
});

/// Time of day with minute precision, written as `HH:MM` in 24-hour format.
///
/// Hours and minutes may be given with or without a leading zero, so `9:05`
/// and `09:05` parse to the same value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DepartureTime(NaiveTime);

impl DepartureTime {
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }
}

impl FromStr for DepartureTime {
    type Err = TimeFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TimeFormatError {
            input: s.to_string(),
        };

        let captures = HH_MM.captures(s).ok_or_else(invalid)?;
        let hour: u32 = captures[1].parse().map_err(|_| invalid())?;
        let minute: u32 = captures[2].parse().map_err(|_| invalid())?;

        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(DepartureTime)
            .ok_or_else(invalid)
    }
}

impl fmt::Display for DepartureTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid time format: {input:?}")]
pub struct TimeFormatError {
    pub input: String,
}
