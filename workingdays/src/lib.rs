//! # workingdays
//!
//! Loose date normalization and business-calendar arithmetic.
//!
//! This crate is a **façade** that re-exports the workspace crates and adds
//! [`api`], the raw-input entry points that return formatted strings.
//! Application code should depend on this crate rather than the individual
//! `wd-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! workingdays = "0.1"
//! ```
//!
//! ```rust
//! use workingdays::api;
//!
//! // Wednesday + 3 business days spans the weekend.
//! assert_eq!(api::workday("20200408", 3, &[]).unwrap(), "20200413");
//! assert_eq!(api::last_day_of_month("2020-02-13").unwrap(), "20200229");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error type, `Result` alias, and the `ensure!` macro.
pub use wd_core as core;

/// Dates, date-times, and the normalizer.
pub use wd_time as time;

/// Holidays, workday offsets, month and quarter ends, bucketing.
pub use wd_calendar as calendar;

pub mod api;

#[cfg(feature = "logging")]
pub mod logging;

pub use wd_core::{Error, Result};
