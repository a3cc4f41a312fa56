//! Error types for workingdays-rs.
//!
//! Every fallible operation in the workspace reports through the single
//! `thiserror`-derived [`Error`] enum.  Argument checks on typed
//! constructors go through the [`ensure!`](crate::ensure) macro.

use thiserror::Error;

/// Date fields resolved so far by the normalizer when it gave up.
///
/// Date fields that were never seen stay `None`; time fields default to 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolvedFields {
    /// Year, if a year token was found.
    pub year: Option<i64>,
    /// Month, if a month token was found.
    pub month: Option<i64>,
    /// Day of month, if a day token was found.
    pub day: Option<i64>,
    /// Hour (0 when absent).
    pub hour: i64,
    /// Minute (0 when absent).
    pub minute: i64,
    /// Second (0 when absent).
    pub second: i64,
}

impl std::fmt::Display for ResolvedFields {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn opt(v: Option<i64>) -> String {
            v.map_or_else(|| "unset".to_string(), |v| v.to_string())
        }
        write!(
            f,
            "y = {}, m = {}, d = {}, {:02}:{:02}:{:02}",
            opt(self.year),
            opt(self.month),
            opt(self.day),
            self.hour,
            self.minute,
            self.second
        )
    }
}

/// The top-level error type used throughout workingdays-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A raw date value could not be turned into a valid calendar date-time.
    #[error("invalid date {raw:?}: {reason} ({fields})")]
    InvalidDate {
        /// The raw input exactly as supplied.
        raw: String,
        /// Whatever the normalizer managed to resolve.
        fields: ResolvedFields,
        /// Why the value was rejected.
        reason: String,
    },

    /// Calendar arithmetic left the supported date range.
    #[error("date error: {0}")]
    Date(String),

    /// Precondition violated (see [`ensure!`](crate::ensure)).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// A custom quarter group names a closing month that is not a month.
    #[error("invalid quarter definition: {0}")]
    InvalidQuarter(String),
}

impl Error {
    /// Return `true` if this is an [`Error::InvalidDate`].
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, Error::InvalidDate { .. })
    }
}

/// Shorthand `Result` type used throughout workingdays-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use wd_core::{ensure, errors::Error};
/// fn hour(h: u8) -> wd_core::errors::Result<u8> {
///     ensure!(h < 24, "hour {h} out of range [0, 23]");
///     Ok(h)
/// }
/// assert!(hour(23).is_ok());
/// assert!(matches!(hour(24), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
