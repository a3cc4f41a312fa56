//! Holiday set: the calendar dates excluded from business-day counting.

use std::collections::HashSet;

use wd_core::errors::Result;
use wd_time::{normalize, Date, DateInput};

/// A read-only set of holiday dates (time of day discarded).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet {
    dates: HashSet<Date>,
}

impl HolidaySet {
    /// An empty set: no holidays.
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize every raw input and keep its calendar date.
    ///
    /// Fails on the first input that does not normalize.
    pub fn from_inputs<I>(inputs: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<DateInput>,
    {
        inputs
            .into_iter()
            .map(|raw| normalize(&raw.into(), false).map(|dt| dt.date()))
            .collect()
    }

    /// Build from already-typed dates.
    pub fn from_dates(dates: impl IntoIterator<Item = Date>) -> Self {
        dates.into_iter().collect()
    }

    /// Add a holiday.
    pub fn insert(&mut self, date: Date) -> bool {
        self.dates.insert(date)
    }

    /// Return `true` if `date` is a holiday.
    pub fn contains(&self, date: Date) -> bool {
        self.dates.contains(&date)
    }

    /// Number of distinct holiday dates.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Return `true` if there are no holidays.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl FromIterator<Date> for HolidaySet {
    fn from_iter<T: IntoIterator<Item = Date>>(iter: T) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}
