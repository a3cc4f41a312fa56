//! `Date` type.
//!
//! Dates are stored as a serial number of days relative to the Unix epoch
//! (serial 0 = 1970-01-01), which keeps day arithmetic a plain integer add
//! and makes epoch conversion trivial.
//!
//! # Range
//! * The valid date range is 0001-01-01 to 9999-12-31 (proleptic Gregorian).
//! * Arithmetic that leaves the range fails with [`Error::Date`].

use crate::month::Month;
use crate::weekday::Weekday;
use wd_core::errors::{Error, Result};

/// A calendar date represented as a serial day number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, 0001.
    pub const MIN: Date = Date(days_from_civil(1, 1, 1));

    /// Maximum valid date: December 31, 9999.
    pub const MAX: Date = Date(days_from_civil(9999, 12, 31));

    /// The Unix epoch, January 1, 1970.
    pub const UNIX_EPOCH: Date = Date(0);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number (days since 1970-01-01).
    pub fn from_serial(serial: i32) -> Result<Self> {
        let d = Date(serial);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::Date(format!(
                "serial {serial} outside [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(d)
    }

    /// Create a date from year (1–9999), month (1–12), and day-of-month.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1..=9999).contains(&year) {
            return Err(Error::Date(format!("year {year} out of range [1, 9999]")));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year:04}-{month:02}"
            )));
        }
        Ok(Date(days_from_civil(
            i32::from(year),
            u32::from(month),
            u32::from(day),
        )))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number (days since 1970-01-01).
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1–9999).
    pub fn year(&self) -> u16 {
        civil_from_days(self.0).0
    }

    /// Return the month number (1–12).
    pub fn month(&self) -> u8 {
        civil_from_days(self.0).1
    }

    /// Return the month as a [`Month`].
    pub fn month_of_year(&self) -> Month {
        let (_, m, _) = civil_from_days(self.0);
        Month::ALL[usize::from(m - 1)]
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        civil_from_days(self.0).2
    }

    /// Return `(year, month, day)` in one decomposition.
    pub fn ymd(&self) -> (u16, u8, u8) {
        civil_from_days(self.0)
    }

    /// Return the ISO weekday.
    pub fn weekday(&self) -> Weekday {
        // 1970-01-01 was a Thursday (ISO 4).
        let w = (self.0 + 3).rem_euclid(7) as usize;
        Weekday::ALL[w]
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days (negative `n` goes back).
    ///
    /// Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self.0.checked_add(n).ok_or_else(|| {
            Error::Date(format!("date arithmetic: {self} + {n} days overflows"))
        })?;
        Date::from_serial(serial)
            .map_err(|_| Error::Date(format!("date arithmetic: {self} + {n} days out of range")))
    }

    /// Step one day forward.
    pub fn succ(self) -> Result<Self> {
        self.add_days(1)
    }

    /// Step one day backward.
    pub fn pred(self) -> Result<Self> {
        self.add_days(-1)
    }

    /// Replace the day of the month, keeping year and month.
    pub fn with_day(self, day: u8) -> Result<Self> {
        let (y, m, _) = self.ymd();
        Date::from_ymd(y, m, day)
    }

    /// Replace the month, keeping year and day.
    pub fn with_month(self, month: u8) -> Result<Self> {
        let (y, _, d) = self.ymd();
        Date::from_ymd(y, month, d)
    }

    /// Replace the year, keeping month and day.
    pub fn with_year(self, year: u16) -> Result<Self> {
        let (_, m, d) = self.ymd();
        Date::from_ymd(year, m, d)
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = self.ymd();
        Date(days_from_civil(
            i32::from(y),
            u32::from(m),
            u32::from(days_in_month(y, m)),
        ))
    }

    // ── Formatting ────────────────────────────────────────────────────────────

    /// Format as `YYYYMMDD`.
    pub fn format_basic(&self) -> String {
        let (y, m, d) = self.ymd();
        format!("{y:04}{m:02}{d:02}")
    }

    /// Format as `YYYY-MM-DD`.
    pub fn format_extended(&self) -> String {
        let (y, m, d) = self.ymd();
        format!("{y:04}-{m:02}-{d:02}")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_extended())
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({})", self.format_extended())
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

/// Days since 1970-01-01 for a proleptic Gregorian civil date.
///
/// Years are shifted to start in March so the leap day is the last day of
/// the shifted year; eras are 400-year blocks of 146 097 days.
const fn days_from_civil(year: i32, month: u32, day: u32) -> i32 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = ((month + 9) % 12) as i32;
    let doy = (153 * mp + 2) / 5 + day as i32 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of [`days_from_civil`] for serials within `[MIN, MAX]`.
fn civil_from_days(serial: i32) -> (u16, u8, u8) {
    let z = serial + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i32::from(month <= 2);
    (year as u16, month as u8, day as u8)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
