//! Business days between two dates.

use wd_time::Date;

use crate::holidays::HolidaySet;

/// Count the business days in `[start, end)`.
///
/// A day counts when it is Monday to Friday and not a holiday.  Returns 0
/// when `start >= end`.
pub fn business_days_between(start: Date, end: Date, holidays: &HolidaySet) -> u32 {
    let mut count = 0;
    let mut current = start;
    while current < end {
        if !holidays.contains(current) && !current.weekday().is_weekend() {
            count += 1;
        }
        // `current < end <= Date::MAX`, so the successor always exists.
        match current.succ() {
            Ok(next) => current = next,
            Err(_) => break,
        }
    }
    count
}
