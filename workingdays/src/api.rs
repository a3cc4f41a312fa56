//! Raw-input operations.
//!
//! Every date argument goes through the loose normalizer (epoch flag off)
//! and only its calendar date is used.  Dates come back as `YYYYMMDD`,
//! bucket bounds as `YYYY-MM-DD`.  Holiday lists are raw inputs too; an
//! empty slice means no holidays.

use wd_calendar::{
    business_days_between, date_buckets, last_workday_of_quarter, HolidaySet, QuarterConfig,
    QuarterDefinition,
};
use wd_core::Result;
use wd_time::{clock, Date, DateInput, DateTime};

fn date_of(raw: impl Into<DateInput>) -> Result<Date> {
    Ok(wd_time::normalize(&raw.into(), false)?.date())
}

fn holiday_set(holidays: &[DateInput]) -> Result<HolidaySet> {
    HolidaySet::from_inputs(holidays)
}

/// Normalize a raw value; with `epoch` set, an integer is read as
/// milliseconds since the Unix epoch (UTC).
pub fn normalize(raw: impl Into<DateInput>, epoch: bool) -> Result<DateTime> {
    wd_time::normalize(&raw.into(), epoch)
}

/// `offset` business days after `start`.
pub fn workday(start: impl Into<DateInput>, offset: u32, holidays: &[DateInput]) -> Result<String> {
    let date = wd_calendar::workday(date_of(start)?, offset, &holiday_set(holidays)?)?;
    Ok(date.format_basic())
}

/// `offset` business days before `start`.
pub fn workday_start(
    start: impl Into<DateInput>,
    offset: u32,
    holidays: &[DateInput],
) -> Result<String> {
    let date = wd_calendar::workday_start(date_of(start)?, offset, &holiday_set(holidays)?)?;
    Ok(date.format_basic())
}

/// `offset` calendar days after `start`; offsets of zero or less return
/// `start` itself.
pub fn calendar_day(start: impl Into<DateInput>, offset: i32) -> Result<String> {
    Ok(wd_calendar::calendar_day(date_of(start)?, offset)?.format_basic())
}

/// Business days in `[start, end)`.
pub fn compare_working_days(
    start: impl Into<DateInput>,
    end: impl Into<DateInput>,
    holidays: &[DateInput],
) -> Result<u32> {
    Ok(business_days_between(
        date_of(start)?,
        date_of(end)?,
        &holiday_set(holidays)?,
    ))
}

/// Last business day of the month containing `date`.
pub fn last_workday_of_month(date: impl Into<DateInput>, holidays: &[DateInput]) -> Result<String> {
    let date = wd_calendar::last_workday_of_month(date_of(date)?, &holiday_set(holidays)?)?;
    Ok(date.format_basic())
}

/// Last business day of the quarter containing `date`.
///
/// `quarters` overrides the calendar quarters group by group; see
/// [`QuarterConfig`].
pub fn last_workday_of_qtr(
    date: impl Into<DateInput>,
    holidays: &[DateInput],
    quarters: Option<&QuarterConfig>,
) -> Result<String> {
    let definition = quarters
        .map(QuarterDefinition::from_config)
        .unwrap_or_default();
    let date = last_workday_of_quarter(date_of(date)?, &holiday_set(holidays)?, &definition)?;
    Ok(date.format_basic())
}

/// Last calendar day of the month containing `date`.
pub fn last_day_of_month(date: impl Into<DateInput>) -> Result<String> {
    Ok(wd_calendar::last_day_of_month(date_of(date)?)?.format_basic())
}

/// Split `start..=end` into windows of `interval_days`; `end` defaults to
/// today (UTC).
pub fn date_bucketing(
    start: impl Into<DateInput>,
    interval_days: u32,
    end: Option<DateInput>,
) -> Result<Vec<(String, String)>> {
    let start = date_of(start)?;
    let today = clock::today_utc()?;
    let end = match end {
        Some(raw) => date_of(raw)?,
        None => today,
    };
    Ok(date_buckets(start, interval_days, end, today)
        .map(|bucket| bucket.to_strings())
        .collect())
}
