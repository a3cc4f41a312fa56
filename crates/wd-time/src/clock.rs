//! Wall-clock access, always in UTC.

use crate::date::Date;
use crate::datetime::DateTime;
use chrono::{Datelike, Timelike, Utc};
use wd_core::errors::{Error, Result};

/// The current UTC date-time, truncated to whole seconds.
pub fn now_utc() -> Result<DateTime> {
    let now = Utc::now().naive_utc();
    let year = u16::try_from(now.year())
        .map_err(|_| Error::Date(format!("system clock reports year {}", now.year())))?;
    DateTime::from_ymd_hms(
        year,
        now.month() as u8,
        now.day() as u8,
        now.hour() as u8,
        now.minute() as u8,
        now.second() as u8,
    )
}

/// The current UTC calendar date.
pub fn today_utc() -> Result<Date> {
    now_utc().map(|now| now.date())
}
