//! # wd-core
//!
//! Error definitions shared across all crates in the workingdays-rs
//! workspace.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the `ensure!` macro.
pub mod errors;

pub use errors::{Error, ResolvedFields, Result};
