//! Sorting keyed records by one named field.

use std::collections::HashMap;

use tracing::warn;
use wd_time::{normalize_str, DateTime};

/// The field records are ordered by.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortKey {
    field: String,
}

impl SortKey {
    /// Sort on `field`.
    pub fn new(field: impl Into<String>) -> Self {
        Self { field: field.into() }
    }

    /// The field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The value of the sort field in `record`, or `None` (with a warning)
    /// when the record lacks it.
    pub fn extract<'r, V>(&self, record: &'r HashMap<String, V>) -> Option<&'r V> {
        let value = record.get(&self.field);
        if value.is_none() {
            warn!(field = %self.field, "sort key missing from record");
        }
        value
    }

    /// Stable sort by the raw field value; records without it come first.
    pub fn sort_records<V: Ord>(&self, records: &mut [HashMap<String, V>]) {
        records.sort_by(|a, b| self.extract(a).cmp(&self.extract(b)));
    }

    /// Stable sort by the field normalized as a date.  Records whose field
    /// is missing or does not normalize come first.
    pub fn sort_records_by_date<V: AsRef<str>>(&self, records: &mut [HashMap<String, V>]) {
        records.sort_by_cached_key(|record| self.date_of(record));
    }

    fn date_of<V: AsRef<str>>(&self, record: &HashMap<String, V>) -> Option<DateTime> {
        let raw = self.extract(record)?.as_ref();
        match normalize_str(raw) {
            Ok(dt) => Some(dt),
            Err(err) => {
                warn!(field = %self.field, %err, "sort value is not a date");
                None
            }
        }
    }
}
