//! `DateTime`: the canonical date-time every raw input is normalized into.

use crate::date::Date;
use chrono::{Datelike, Timelike};
use wd_core::ensure;
use wd_core::errors::{Error, Result};

/// A validated Gregorian civil date-time with second resolution.
///
/// Ordering is chronological.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime {
    date: Date,
    hour: u8,
    minute: u8,
    second: u8,
}

impl DateTime {
    /// Combine a date with a time of day.
    pub fn new(date: Date, hour: u8, minute: u8, second: u8) -> Result<Self> {
        ensure!(hour < 24, "hour {hour} out of range [0, 23]");
        ensure!(minute < 60, "minute {minute} out of range [0, 59]");
        ensure!(second < 60, "second {second} out of range [0, 59]");
        Ok(Self {
            date,
            hour,
            minute,
            second,
        })
    }

    /// Build from individual civil fields.
    pub fn from_ymd_hms(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self> {
        Self::new(Date::from_ymd(year, month, day)?, hour, minute, second)
    }

    /// Midnight at the start of `date`.
    pub fn at_midnight(date: Date) -> Self {
        Self {
            date,
            hour: 0,
            minute: 0,
            second: 0,
        }
    }

    /// Convert milliseconds since the Unix epoch to a UTC date-time.
    ///
    /// Sub-second precision is truncated toward the earlier second.
    pub fn from_epoch_millis(millis: i64) -> Result<Self> {
        let utc = chrono::DateTime::<chrono::Utc>::from_timestamp_millis(millis)
            .ok_or_else(|| Error::Date(format!("epoch {millis} ms is not representable")))?
            .naive_utc();
        let year = u16::try_from(utc.year())
            .map_err(|_| Error::Date(format!("epoch {millis} ms falls in year {}", utc.year())))?;
        Self::from_ymd_hms(
            year,
            utc.month() as u8,
            utc.day() as u8,
            utc.hour() as u8,
            utc.minute() as u8,
            utc.second() as u8,
        )
    }

    /// Strict parser: exactly 8 (`YYYYMMDD`) or 14 (`YYYYMMDDHHMMSS`) ASCII
    /// digits, nothing else.
    pub fn parse_basic(s: &str) -> Result<Self> {
        ensure!(
            (s.len() == 8 || s.len() == 14) && s.bytes().all(|b| b.is_ascii_digit()),
            "{s:?} is not YYYYMMDD or YYYYMMDDHHMMSS"
        );
        let number = |from: usize, to: usize| -> Result<u16> {
            s.get(from..to)
                .and_then(|f| f.parse::<u16>().ok())
                .ok_or_else(|| Error::Precondition(format!("{s:?}: no digits at {from}..{to}")))
        };
        let narrow = |from: usize, to: usize| -> Result<u8> {
            let value = number(from, to)?;
            u8::try_from(value)
                .map_err(|_| Error::Precondition(format!("{s:?}: field {value} out of range")))
        };
        // The time of day is absent from the 8-digit form.
        let time = |from: usize, to: usize| -> Result<u8> {
            if s.len() == 14 {
                narrow(from, to)
            } else {
                Ok(0)
            }
        };
        Self::from_ymd_hms(
            number(0, 4)?,
            narrow(4, 6)?,
            narrow(6, 8)?,
            time(8, 10)?,
            time(10, 12)?,
            time(12, 14)?,
        )
    }

    /// The calendar date, time of day discarded.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Year (1–9999).
    pub fn year(&self) -> u16 {
        self.date.year()
    }

    /// Month (1–12).
    pub fn month(&self) -> u8 {
        self.date.month()
    }

    /// Day of month (1–31).
    pub fn day(&self) -> u8 {
        self.date.day_of_month()
    }

    /// Hour (0–23).
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute (0–59).
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Second (0–59).
    pub fn second(&self) -> u8 {
        self.second
    }

    /// Format as `YYYYMMDDHHMMSS`.
    pub fn format_basic(&self) -> String {
        format!(
            "{}{:02}{:02}{:02}",
            self.date.format_basic(),
            self.hour,
            self.minute,
            self.second
        )
    }
}

impl From<DateTime> for Date {
    fn from(dt: DateTime) -> Date {
        dt.date
    }
}

impl std::fmt::Display for DateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {:02}:{:02}:{:02}",
            self.date, self.hour, self.minute, self.second
        )
    }
}

impl std::fmt::Debug for DateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DateTime({self})")
    }
}
