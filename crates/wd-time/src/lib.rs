//! # wd-time
//!
//! Date and date-time types plus the loose normalizer that turns raw date
//! values (assorted regional strings, epoch milliseconds) into them.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// UTC wall clock.
pub mod clock;

/// `Date` type.
pub mod date;

/// `DateTime`: the canonical normalized value.
pub mod datetime;

/// `DateInput`: a raw value before normalization.
pub mod input;

/// `Month` and English month abbreviations.
pub mod month;

/// Loose date normalization.
pub mod normalize;

/// `Weekday`: ISO day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use datetime::DateTime;
pub use input::DateInput;
pub use month::Month;
pub use normalize::{normalize, normalize_str};
pub use weekday::Weekday;
