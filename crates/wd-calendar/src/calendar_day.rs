//! Plain calendar-day offsetting, no holiday or weekend logic.

use wd_core::errors::Result;
use wd_time::Date;

/// The date `offset` calendar days after `start`.
///
/// Offsets of zero or less leave `start` unchanged.
pub fn calendar_day(start: Date, offset: i32) -> Result<Date> {
    if offset <= 0 {
        return Ok(start);
    }
    start.add_days(offset)
}
