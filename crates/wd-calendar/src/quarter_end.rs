//! Quarter-end resolution: the last business day of the quarter containing
//! a date, for calendar or custom (fiscal) quarters.

use tracing::debug;
use wd_core::errors::Result;
use wd_time::{Date, Month};

use crate::holidays::HolidaySet;
use crate::month_end::{last_day_of_month, roll_back_month_end};
use crate::quarter::{Quarter, QuarterDefinition};

/// The last business day of the quarter containing `date`.
///
/// The closing month is the third entry of the matching group.  A Q1 that
/// starts in November or December closes in the following year.  If no
/// group lists `date`'s month, the month of `date` itself is used.  The
/// month end is then corrected exactly like
/// [`last_workday_of_month`](crate::month_end::last_workday_of_month).
pub fn last_workday_of_quarter(
    date: Date,
    holidays: &HolidaySet,
    quarters: &QuarterDefinition,
) -> Result<Date> {
    let anchor = date.with_day(28)?;
    let month = anchor.month_of_year();
    let closing = match quarters.quarter_of(month) {
        Some(quarter) => {
            let closing_month = quarters.group(quarter).closing_month()?;
            let year = if quarter == Quarter::Q1 && matches!(month, Month::November | Month::December)
            {
                anchor.year() + 1
            } else {
                anchor.year()
            };
            debug!(%quarter, %closing_month, year, "quarter closing month");
            Date::from_ymd(year, closing_month.number(), 28)?
        }
        None => {
            debug!(%month, "month not in any quarter group");
            anchor
        }
    };
    roll_back_month_end(last_day_of_month(closing)?, holidays)
}
