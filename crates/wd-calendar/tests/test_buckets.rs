//! Date-range bucketing.

use proptest::prelude::*;
use wd_calendar::{date_buckets, DateBucket};
use wd_time::Date;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn august_in_weeks() {
    let end = date(2021, 8, 31);
    let got: Vec<_> = date_buckets(date(2021, 8, 1), 6, end, date(2021, 9, 15))
        .map(|b| b.to_strings())
        .collect();
    let want: Vec<(String, String)> = [
        ("2021-08-01", "2021-08-07"),
        ("2021-08-08", "2021-08-14"),
        ("2021-08-15", "2021-08-21"),
        ("2021-08-22", "2021-08-28"),
        ("2021-08-29", "2021-08-31"),
    ]
    .iter()
    .map(|(a, b)| ((*a).to_owned(), (*b).to_owned()))
    .collect();
    assert_eq!(got, want);
}

#[test]
fn across_a_leap_day() {
    let got: Vec<_> =
        date_buckets(date(2020, 2, 25), 2, date(2020, 3, 3), date(2021, 1, 1)).collect();
    assert_eq!(
        got,
        [
            DateBucket { start: date(2020, 2, 25), end: date(2020, 2, 27) },
            DateBucket { start: date(2020, 2, 28), end: date(2020, 3, 1) },
            DateBucket { start: date(2020, 3, 2), end: date(2020, 3, 3) },
        ]
    );
}

#[test]
fn display_is_an_interval() {
    let b = DateBucket { start: date(2021, 8, 1), end: date(2021, 8, 7) };
    assert_eq!(b.to_string(), "2021-08-01/2021-08-07");
}

proptest! {
    #[test]
    fn buckets_tile_the_range(
        start in 0i32..20_000,
        len in 0i32..400,
        interval in 0u32..30,
    ) {
        let start = Date::from_serial(start).unwrap();
        let end = start.add_days(len).unwrap();
        let today = Date::from_serial(-1).unwrap();
        let buckets: Vec<_> = date_buckets(start, interval, end, today).collect();

        prop_assert_eq!(buckets.first().map(|b| b.start), Some(start));
        prop_assert_eq!(buckets.last().map(|b| b.end), Some(end));
        for b in &buckets {
            prop_assert!(b.start <= b.end);
            prop_assert!(b.end - b.start <= interval as i32);
        }
        for pair in buckets.windows(2) {
            prop_assert_eq!(pair[0].end.succ().unwrap(), pair[1].start);
        }
    }
}
