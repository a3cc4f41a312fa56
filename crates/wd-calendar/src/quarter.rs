//! Quarter definitions: which three months make up each quarter.
//!
//! The default is the calendar-year grouping.  Custom (fiscal) groupings are
//! validated one quarter at a time; a group that fails validation is
//! dropped and the calendar group for that quarter stays in place.

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::warn;
use wd_core::errors::{Error, Result};
use wd_time::Month;

/// One of the four quarters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Quarter {
    /// First quarter.
    Q1,
    /// Second quarter.
    Q2,
    /// Third quarter.
    Q3,
    /// Fourth quarter.
    Q4,
}

impl Quarter {
    /// All quarters in order.
    pub const ALL: [Quarter; 4] = [Quarter::Q1, Quarter::Q2, Quarter::Q3, Quarter::Q4];

    /// `"Q1"` … `"Q4"`.
    pub fn name(self) -> &'static str {
        match self {
            Quarter::Q1 => "Q1",
            Quarter::Q2 => "Q2",
            Quarter::Q3 => "Q3",
            Quarter::Q4 => "Q4",
        }
    }

    /// Parse `"Q1"` … `"Q4"` (exact spelling).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|q| q.name() == name)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Quarter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Three month abbreviations; the third closes the quarter.
///
/// Membership compares exact spellings (`"Mar"`, not `"mar"`).  Only the
/// first two entries are checked on construction; the closing entry is
/// resolved when it is needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuarterGroup {
    months: [String; 3],
}

impl QuarterGroup {
    /// Accept `months` if it has exactly three entries and the first two are
    /// capitalized English month abbreviations.
    pub fn validate<S: AsRef<str>>(months: &[S]) -> Option<Self> {
        let [a, b, c] = months else {
            return None;
        };
        let known = |s: &S| Month::from_exact_abbreviation(s.as_ref()).is_some();
        (known(a) && known(b)).then(|| Self {
            months: [a.as_ref().to_owned(), b.as_ref().to_owned(), c.as_ref().to_owned()],
        })
    }

    /// The calendar-year group for `quarter`.
    pub fn calendar(quarter: Quarter) -> Self {
        let first = quarter.index() * 3;
        Self {
            months: [0, 1, 2].map(|i| Month::ALL[first + i].short_name().to_owned()),
        }
    }

    /// The three entries as given.
    pub fn months(&self) -> &[String; 3] {
        &self.months
    }

    /// Return `true` if `month`'s abbreviation is one of the entries.
    pub fn contains(&self, month: Month) -> bool {
        self.months.iter().any(|m| m == month.short_name())
    }

    /// Resolve the closing (third) month, ignoring case.
    pub fn closing_month(&self) -> Result<Month> {
        let closing = &self.months[2];
        Month::from_abbreviation(closing).ok_or_else(|| {
            Error::InvalidQuarter(format!(
                "closing month {closing:?} of {:?} is not a month abbreviation",
                self.months
            ))
        })
    }
}

/// Four quarter groups, Q1 to Q4.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuarterDefinition {
    groups: [QuarterGroup; 4],
}

impl Default for QuarterDefinition {
    fn default() -> Self {
        Self::calendar()
    }
}

impl QuarterDefinition {
    /// Jan–Mar, Apr–Jun, Jul–Sep, Oct–Dec.
    pub fn calendar() -> Self {
        Self {
            groups: Quarter::ALL.map(QuarterGroup::calendar),
        }
    }

    /// Replace one quarter's group if `months` validates; otherwise log and
    /// keep the current group.
    pub fn with_group<S: AsRef<str> + std::fmt::Debug>(mut self, quarter: Quarter, months: &[S]) -> Self {
        match QuarterGroup::validate(months) {
            Some(group) => self.groups[quarter.index()] = group,
            None => warn!(%quarter, ?months, "invalid quarter group discarded"),
        }
        self
    }

    /// Apply every group found in `config` over the calendar default.
    pub fn from_config(config: &QuarterConfig) -> Self {
        let mut definition = Self::calendar();
        for (name, entry) in config.groups() {
            let Some(quarter) = Quarter::from_name(name) else {
                continue;
            };
            definition = match entry {
                ConfigEntry::Months(months) => definition.with_group(quarter, months.as_slice()),
                _ => {
                    warn!(%quarter, "quarter group is not a list of month names; discarded");
                    definition
                }
            };
        }
        definition
    }

    /// The group for `quarter`.
    pub fn group(&self, quarter: Quarter) -> &QuarterGroup {
        &self.groups[quarter.index()]
    }

    /// The first quarter, in Q1..Q4 order, whose group lists `month`.
    pub fn quarter_of(&self, month: Month) -> Option<Quarter> {
        Quarter::ALL
            .into_iter()
            .find(|q| self.group(*q).contains(month))
    }
}

// ── Configuration ─────────────────────────────────────────────────────────────

/// A value inside a [`QuarterConfig`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ConfigEntry {
    /// A list of month names.
    Months(Vec<String>),
    /// A nested mapping of quarter names to lists.
    Mapping(BTreeMap<String, ConfigEntry>),
    /// Anything else; always discarded.
    Other(serde::de::IgnoredAny),
}

/// User-supplied quarter groups, either flat (`{"Q1": [...], ...}`) or
/// nested inside one mapping (`{"fiscal": {"Q1": [...], ...}}`).
///
/// The last entry in key order decides where the groups are read from: if
/// it is a mapping, the groups come from inside it; otherwise from the top
/// level.  Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct QuarterConfig {
    entries: BTreeMap<String, ConfigEntry>,
}

impl QuarterConfig {
    /// An empty configuration (calendar quarters).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a top-level group.
    pub fn group<S: Into<String>>(mut self, name: &str, months: impl IntoIterator<Item = S>) -> Self {
        self.entries.insert(
            name.to_owned(),
            ConfigEntry::Months(months.into_iter().map(Into::into).collect()),
        );
        self
    }

    /// Wrap `inner` under `key`.
    pub fn nested(key: &str, inner: QuarterConfig) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(key.to_owned(), ConfigEntry::Mapping(inner.entries));
        Self { entries }
    }

    /// The entries that hold the quarter groups.
    fn groups(&self) -> &BTreeMap<String, ConfigEntry> {
        match self.entries.values().next_back() {
            Some(ConfigEntry::Mapping(inner)) => inner,
            _ => &self.entries,
        }
    }
}
