//! # wd-calendar
//!
//! Business-calendar arithmetic over [`wd_time::Date`]: holiday sets,
//! business-day offsets and counts, month and quarter ends, date-range
//! bucketing, and keyed record sorting.
//!
//! Weekends are fixed to Saturday and Sunday.  Every operation takes its
//! holidays explicitly; nothing is read from global state.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Date-range bucketing.
pub mod bucket;

/// Plain calendar-day offsets.
pub mod calendar_day;

/// `HolidaySet`.
pub mod holidays;

/// Last day and last business day of a month.
pub mod month_end;

/// Quarter groupings and their configuration.
pub mod quarter;

/// Last business day of a quarter.
pub mod quarter_end;

/// Sorting records by a key field.
pub mod sort;

/// Counting business days between two dates.
pub mod span;

/// Business-day offsets.
pub mod workday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use bucket::{date_buckets, DateBucket, DateBuckets};
pub use calendar_day::calendar_day;
pub use holidays::HolidaySet;
pub use month_end::{last_day_of_month, last_workday_of_month};
pub use quarter::{Quarter, QuarterConfig, QuarterDefinition, QuarterGroup};
pub use quarter_end::last_workday_of_quarter;
pub use sort::SortKey;
pub use span::business_days_between;
pub use workday::{workday, workday_start, Direction};
