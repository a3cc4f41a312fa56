//! Month-end resolution: the last calendar day and the last business day
//! of a month.

use wd_core::errors::Result;
use wd_time::{Date, Weekday};

use crate::holidays::HolidaySet;

/// The last calendar day of the month containing `date`.
///
/// Day 28 exists in every month and day 28 + 4 always lands in the next
/// month; stepping back by that day-of-month gives the month end.
pub fn last_day_of_month(date: Date) -> Result<Date> {
    let next_month = date.with_day(28)?.add_days(4)?;
    next_month.add_days(-i32::from(next_month.day_of_month()))
}

/// The last business day of the month containing `date`.
///
/// See [`roll_back_month_end`] for how a non-business month end moves.
pub fn last_workday_of_month(date: Date, holidays: &HolidaySet) -> Result<Date> {
    roll_back_month_end(last_day_of_month(date)?, holidays)
}

/// Move a month end off a holiday or weekend.
///
/// Exactly one correction applies:
/// * a holiday steps back past consecutive holidays only (weekends reached
///   this way stay);
/// * otherwise Saturday moves to Friday and Sunday to Friday.
pub fn roll_back_month_end(month_end: Date, holidays: &HolidaySet) -> Result<Date> {
    if holidays.contains(month_end) {
        let mut day = month_end;
        while holidays.contains(day) {
            day = day.pred()?;
        }
        return Ok(day);
    }
    match month_end.weekday() {
        Weekday::Saturday => month_end.add_days(-1),
        Weekday::Sunday => month_end.add_days(-2),
        _ => Ok(month_end),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn last_day_matches_calendar() {
        assert_eq!(last_day_of_month(date(2020, 2, 13)).unwrap(), date(2020, 2, 29));
        assert_eq!(last_day_of_month(date(2019, 2, 1)).unwrap(), date(2019, 2, 28));
        assert_eq!(last_day_of_month(date(2020, 3, 31)).unwrap(), date(2020, 3, 31));
        assert_eq!(last_day_of_month(date(2020, 4, 13)).unwrap(), date(2020, 4, 30));
        assert_eq!(last_day_of_month(date(2020, 12, 1)).unwrap(), date(2020, 12, 31));
    }

    #[test]
    fn every_month_agrees_with_end_of_month() {
        for year in [1900, 2000, 2023, 2024] {
            for month in 1..=12 {
                let d = date(year, month, 15);
                assert_eq!(last_day_of_month(d).unwrap(), d.end_of_month());
            }
        }
    }

    #[test]
    fn weekend_month_end_moves_to_friday() {
        let none = HolidaySet::new();
        // 2020-02-29 is a Saturday
        assert_eq!(last_workday_of_month(date(2020, 2, 13), &none).unwrap(), date(2020, 2, 28));
        // 2020-05-31 is a Sunday
        assert_eq!(last_workday_of_month(date(2020, 5, 13), &none).unwrap(), date(2020, 5, 29));
        // 2020-04-30 is a Thursday
        assert_eq!(last_workday_of_month(date(2020, 4, 13), &none).unwrap(), date(2020, 4, 30));
    }

    #[test]
    fn holiday_month_end_skips_holidays_only() {
        // 2020-08-31 is a Monday; making it a holiday lands on Sunday the 30th
        let holidays = HolidaySet::from_dates([date(2020, 8, 31)]);
        let got = last_workday_of_month(date(2020, 8, 3), &holidays).unwrap();
        assert_eq!(got, date(2020, 8, 30));
    }

    #[test]
    fn consecutive_holidays() {
        // 2020-12-31 Thursday, 30 Wednesday
        let holidays = HolidaySet::from_dates([date(2020, 12, 31), date(2020, 12, 30)]);
        let got = last_workday_of_month(date(2020, 12, 1), &holidays).unwrap();
        assert_eq!(got, date(2020, 12, 29));
    }
}
