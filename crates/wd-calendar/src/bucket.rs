//! Splitting a date range into consecutive fixed-length windows.
//!
//! Each window covers `interval + 1` calendar days, both ends inclusive,
//! and the next window starts the day after the previous one ends.  The
//! last window is cut at the range end.

use std::fmt;
use std::iter::FusedIterator;

use tracing::info;
use wd_time::Date;

/// One window, `start..=end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateBucket {
    /// First day of the window.
    pub start: Date,
    /// Last day of the window.
    pub end: Date,
}

impl DateBucket {
    /// Both ends as `YYYY-MM-DD`.
    pub fn to_strings(&self) -> (String, String) {
        (self.start.format_extended(), self.end.format_extended())
    }
}

impl fmt::Display for DateBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.start, self.end)
    }
}

/// Iterator over the windows of a range; see [`date_buckets`].
///
/// Cloning before iteration gives an independent restart.
#[derive(Debug, Clone)]
pub struct DateBuckets {
    today_bucket: Option<DateBucket>,
    current: Option<Date>,
    end: Date,
    interval: u32,
}

/// Split `start..=end` into windows of `interval_days`.
///
/// If `start` is `today` the range is not walked; a single
/// `(start, today)` window is produced instead.  A `start` after `end`
/// yields nothing.
pub fn date_buckets(start: Date, interval_days: u32, end: Date, today: Date) -> DateBuckets {
    if start == today {
        info!(%start, "start date is today; no bucketing needed");
        return DateBuckets {
            today_bucket: Some(DateBucket { start, end: today }),
            current: None,
            end,
            interval: interval_days,
        };
    }
    DateBuckets {
        today_bucket: None,
        current: Some(start),
        end,
        interval: interval_days,
    }
}

impl Iterator for DateBuckets {
    type Item = DateBucket;

    fn next(&mut self) -> Option<DateBucket> {
        if let Some(bucket) = self.today_bucket.take() {
            return Some(bucket);
        }
        let start = self.current.filter(|c| *c <= self.end)?;
        // Past the representable range means past `end` as well.
        let window_end = i32::try_from(self.interval)
            .ok()
            .and_then(|n| start.add_days(n).ok())
            .filter(|d| *d < self.end);
        let bucket = match window_end {
            Some(end) => {
                self.current = end.succ().ok();
                DateBucket { start, end }
            }
            None => {
                self.current = None;
                DateBucket { start, end: self.end }
            }
        };
        info!(%bucket, "date bucket");
        Some(bucket)
    }
}

impl FusedIterator for DateBuckets {}
