//! Business-day offsets and counts against a realistic holiday list.

use proptest::prelude::*;
use wd_calendar::{
    business_days_between, calendar_day, last_workday_of_month, workday, workday_start,
    HolidaySet,
};
use wd_time::{Date, Weekday};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

/// UK bank holidays, 2020.
fn uk_2020() -> HolidaySet {
    HolidaySet::from_inputs([
        "2020-01-01",
        "10.04.2020",
        "13.04.2020",
        "2020-05-08",
        "2020-05-25",
        "2020-08-31",
        "2020-12-25",
        "2020-12-28",
    ])
    .unwrap()
}

// ─── Offsets ──────────────────────────────────────────────────────────────────

#[test]
fn forward_without_holidays() {
    let none = HolidaySet::new();
    assert_eq!(workday(date(2020, 4, 8), 3, &none).unwrap(), date(2020, 4, 13));
    assert_eq!(workday(date(2020, 4, 8), 2, &none).unwrap(), date(2020, 4, 10));
    assert_eq!(workday(date(2020, 4, 10), 3, &none).unwrap(), date(2020, 4, 15));
}

#[test]
fn forward_from_a_saturday() {
    // Stepping off Saturday onto Sunday does not count.
    let got = workday(date(2020, 4, 11), 3, &HolidaySet::new()).unwrap();
    assert_eq!(got, date(2020, 4, 15));
}

#[test]
fn forward_over_easter() {
    // Thu 9 Apr + 1: Good Friday and Easter Monday are skipped.
    let got = workday(date(2020, 4, 9), 1, &uk_2020()).unwrap();
    assert_eq!(got, date(2020, 4, 14));
}

#[test]
fn backward_over_easter() {
    let got = workday_start(date(2020, 4, 14), 1, &uk_2020()).unwrap();
    assert_eq!(got, date(2020, 4, 9));
}

#[test]
fn christmas_week() {
    // Thu 24 Dec + 1 lands on Tue 29 Dec.
    let got = workday(date(2020, 12, 24), 1, &uk_2020()).unwrap();
    assert_eq!(got, date(2020, 12, 29));
}

#[test]
fn calendar_offsets_ignore_holidays() {
    assert_eq!(calendar_day(date(2020, 4, 9), 1).unwrap(), date(2020, 4, 10));
}

// ─── Counting ─────────────────────────────────────────────────────────────────

#[test]
fn counts_match_offsets() {
    assert_eq!(
        business_days_between(date(2020, 4, 8), date(2020, 4, 13), &HolidaySet::new()),
        3
    );
    assert_eq!(
        business_days_between(date(2020, 4, 8), date(2020, 4, 10), &HolidaySet::new()),
        2
    );
}

#[test]
fn full_year_count() {
    // 262 weekdays in 2020, 8 of them bank holidays.
    let n = business_days_between(date(2020, 1, 1), date(2021, 1, 1), &uk_2020());
    assert_eq!(n, 254);
}

// ─── Month ends ───────────────────────────────────────────────────────────────

#[test]
fn bank_holiday_month_end() {
    // Mon 31 Aug 2020 is a holiday; the walk back lands on Sunday 30 Aug.
    let got = last_workday_of_month(date(2020, 8, 3), &uk_2020()).unwrap();
    assert_eq!(got, date(2020, 8, 30));
}

// ─── Properties ───────────────────────────────────────────────────────────────

fn weekday_date() -> impl Strategy<Value = Date> {
    (0i32..60_000)
        .prop_map(|serial| Date::from_serial(serial).unwrap())
        .prop_filter("Mon-Fri", |d| !d.weekday().is_weekend())
}

proptest! {
    #[test]
    fn forward_then_backward_returns(start in weekday_date(), n in 0u32..400) {
        let none = HolidaySet::new();
        let there = workday(start, n, &none).unwrap();
        prop_assert_eq!(workday_start(there, n, &none).unwrap(), start);
    }

    #[test]
    fn offset_and_count_agree(start in weekday_date(), n in 0u32..400) {
        let none = HolidaySet::new();
        let there = workday(start, n, &none).unwrap();
        prop_assert_eq!(business_days_between(start, there, &none), n);
    }

    #[test]
    fn count_matches_weekdays_in_range(a in 0i32..60_000, len in 1i32..800) {
        let start = Date::from_serial(a).unwrap();
        let end = Date::from_serial(a + len).unwrap();
        // 1970-01-01 (serial 0) was a Thursday, so Monday..Friday are
        // (serial + 3) mod 7 in 0..5.
        let weekdays = (a..a + len).filter(|s| (s + 3).rem_euclid(7) < 5).count();
        prop_assert_eq!(
            business_days_between(start, end, &HolidaySet::new()) as usize,
            weekdays
        );
    }

    #[test]
    fn holiday_free_month_end_is_a_weekday(serial in 0i32..60_000) {
        let day = Date::from_serial(serial).unwrap();
        let got = last_workday_of_month(day, &HolidaySet::new()).unwrap();
        prop_assert!(!got.weekday().is_weekend(), "{got} is a weekend");
        prop_assert_eq!((got.year(), got.month()), (day.year(), day.month()));
        prop_assert!(got.end_of_month() - got <= 2);
    }

    #[test]
    fn result_is_never_a_weekend(start in weekday_date(), n in 1u32..400) {
        let there = workday(start, n, &HolidaySet::new()).unwrap();
        prop_assert!(!matches!(there.weekday(), Weekday::Saturday | Weekday::Sunday));
    }
}
