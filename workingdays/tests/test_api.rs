//! End-to-end checks through the raw-input entry points.

use workingdays::api;
use workingdays::calendar::QuarterConfig;
use workingdays::time::DateInput;

fn fiscal() -> QuarterConfig {
    serde_json::from_str(
        r#"{
            "Q1": ["Nov", "Dec", "Jan"],
            "Q2": ["Feb", "Mar", "Apr"],
            "Q3": ["May", "Jun", "Jul"],
            "Q4": ["Aug", "Sep", "Oct"]
        }"#,
    )
    .unwrap()
}

// ─── normalize ────────────────────────────────────────────────────────────────

#[test]
fn normalize_shapes() {
    let cases = [
        ("2015-03-26T10:58:51Z", "20150326105851"),
        ("07.04.2020", "20200407000000"),
        ("07.04.2020 12:12:12", "20200407121212"),
        ("march 25, 2020", "20200325000000"),
        ("MAR 25 2020", "20200325000000"),
        ("2020-02-28 12:30:00", "20200228123000"),
        ("2020-02-2812:30:00", "20200228123000"),
        ("2020:02:2812:30:00", "20200228123000"),
        ("2020-02-05", "20200205000000"),
        ("20200205000000", "20200205000000"),
    ];
    for (raw, want) in cases {
        assert_eq!(api::normalize(raw, false).unwrap().format_basic(), want, "{raw}");
    }
}

#[test]
fn normalize_epoch() {
    let dt = api::normalize(1_571_824_800_000_i64, true).unwrap();
    assert_eq!(dt.format_basic(), "20191023100000");
}

#[test]
fn normalize_integer_without_epoch_is_digits() {
    let dt = api::normalize(20_200_408_i64, false).unwrap();
    assert_eq!(dt.format_basic(), "20200408000000");
}

#[test]
fn normalize_rejects_impossible_dates() {
    let err = api::normalize("2019-02-29", false).unwrap_err();
    assert!(err.is_invalid_date());
}

// ─── workday / workday_start ──────────────────────────────────────────────────

#[test]
fn workday_scenarios() {
    assert_eq!(api::workday("08.04.2020", 3, &[]).unwrap(), "20200413");
    assert_eq!(api::workday("20200408", 2, &[]).unwrap(), "20200410");
    assert_eq!(api::workday("10.04.2020", 3, &[]).unwrap(), "20200415");
    assert_eq!(api::workday("11.04.2020", 3, &[]).unwrap(), "20200415");
}

#[test]
fn workday_with_holidays() {
    let holidays = [DateInput::from("10.04.2020"), DateInput::from(20_200_413_i64)];
    assert_eq!(api::workday("20200409", 1, &holidays).unwrap(), "20200414");
    assert_eq!(api::workday_start("20200414", 1, &holidays).unwrap(), "20200409");
}

#[test]
fn workday_start_inverts_workday() {
    let there = api::workday("2021-06-02", 17, &[]).unwrap();
    assert_eq!(api::workday_start(there, 17, &[]).unwrap(), "20210602");
}

#[test]
fn bad_holiday_is_reported() {
    let holidays = [DateInput::from("someday")];
    assert!(api::workday("20200409", 1, &holidays).is_err());
}

// ─── calendar_day / compare_working_days ──────────────────────────────────────

#[test]
fn calendar_day_offsets() {
    assert_eq!(api::calendar_day("20200227", 3).unwrap(), "20200301");
    // Non-positive offsets leave the start date as it is.
    assert_eq!(api::calendar_day("20200408", -1).unwrap(), "20200408");
    assert_eq!(api::calendar_day("08.04.2020", 0).unwrap(), "20200408");
}

#[test]
fn compare_scenarios() {
    assert_eq!(api::compare_working_days("08.04.2020", "20200413", &[]).unwrap(), 3);
    assert_eq!(api::compare_working_days("20200408", "20200410", &[]).unwrap(), 2);
    assert_eq!(api::compare_working_days("20200413", "20200408", &[]).unwrap(), 0);
}

// ─── Month and quarter ends ───────────────────────────────────────────────────

#[test]
fn last_workday_of_month_scenarios() {
    assert_eq!(api::last_workday_of_month("20200213", &[]).unwrap(), "20200228");
    assert_eq!(api::last_workday_of_month("20200413", &[]).unwrap(), "20200430");
    assert_eq!(api::last_workday_of_month("20200513", &[]).unwrap(), "20200529");
}

#[test]
fn last_day_of_month_scenarios() {
    assert_eq!(api::last_day_of_month("20200213").unwrap(), "20200229");
    assert_eq!(api::last_day_of_month("20200313").unwrap(), "20200331");
    assert_eq!(api::last_day_of_month("20200413").unwrap(), "20200430");
}

#[test]
fn last_workday_of_qtr_scenarios() {
    assert_eq!(api::last_workday_of_qtr("20200213", &[], None).unwrap(), "20200331");
    let fiscal = fiscal();
    assert_eq!(
        api::last_workday_of_qtr("20200213", &[], Some(&fiscal)).unwrap(),
        "20200430"
    );
    assert_eq!(
        api::last_workday_of_qtr("20200913", &[], Some(&fiscal)).unwrap(),
        "20201030"
    );
}

#[test]
fn last_workday_of_qtr_with_partial_config() {
    let partial = QuarterConfig::new()
        .group("Q1", ["Nov", "Dec", "Jan"])
        .group("Q2", ["Feb", "Mar", "Apr"]);
    assert_eq!(
        api::last_workday_of_qtr("20200213", &[], Some(&partial)).unwrap(),
        "20200430"
    );
}

// ─── date_bucketing ───────────────────────────────────────────────────────────

#[test]
fn bucketing_with_explicit_end() {
    let got = api::date_bucketing("20210801", 6, Some(DateInput::from("2021-08-31"))).unwrap();
    let starts: Vec<_> = got.iter().map(|(s, _)| s.as_str()).collect();
    assert_eq!(
        starts,
        ["2021-08-01", "2021-08-08", "2021-08-15", "2021-08-22", "2021-08-29"]
    );
    assert_eq!(got.last().unwrap().1, "2021-08-31");
}

#[test]
fn bucketing_up_to_today() {
    let got = api::date_bucketing("20210801", 30, None).unwrap();
    let today = workingdays::time::clock::today_utc().unwrap().format_extended();
    assert_eq!(got.first().unwrap().0, "2021-08-01");
    assert_eq!(got.last().unwrap().1, today);
}
